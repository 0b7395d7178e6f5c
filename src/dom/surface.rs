//! Page surface backed by the live DOM.

use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use paged_scroll_core::{IndicatorView, Motion, PageSurface};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Window};

use super::indicator::IndicatorElements;
use super::{Pager, with_pager};

/// The scroll container, its panes and the indicator.
pub(crate) struct DomSurface {
    window: Window,
    container: HtmlElement,
    panes: Vec<HtmlElement>,
    indicator: IndicatorElements,
    pager: Weak<RefCell<Pager>>,
}

impl DomSurface {
    pub fn new(
        window: Window,
        container: HtmlElement,
        panes: Vec<HtmlElement>,
        indicator: IndicatorElements,
    ) -> Self {
        Self {
            window,
            container,
            panes,
            indicator,
            pager: Weak::new(),
        }
    }

    /// Give timer and frame callbacks a way back to the pager.
    pub fn bind(&mut self, pager: Weak<RefCell<Pager>>) {
        self.pager = pager;
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.container.style().set_property(property, value) {
            log::warn!("Failed to set {} on container: {:?}", property, e);
        }
    }

    fn set_translate(&self, y: f64) {
        self.set_style("transform", &format!("translateY({}px)", y));
    }
}

impl PageSurface for DomSurface {
    fn section_count(&self) -> usize {
        self.panes.len()
    }

    fn reset_transform(&mut self) {
        self.set_translate(0.0);
    }

    fn measure_offsets(&self) -> Vec<f64> {
        self.panes
            .iter()
            .map(|pane| f64::from(pane.offset_top()))
            .collect()
    }

    fn apply_offset(&mut self, y: f64, motion: Motion) {
        match motion {
            Motion::Animated => self.set_translate(y),
            Motion::Instant => {
                // The forced reflow commits the jump while the transition is off.
                let previous = self
                    .container
                    .style()
                    .get_property_value("transition")
                    .unwrap_or_default();
                self.set_style("transition", "none");
                self.set_translate(y);
                let _ = self.container.get_bounding_client_rect();
                self.set_style("transition", &previous);
            }
        }
    }

    fn schedule_settle(&mut self, after: Duration) -> bool {
        let millis = i32::try_from(after.as_millis()).unwrap_or(i32::MAX);
        match set_settle_timer(&self.window, self.pager.clone(), millis) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to schedule settle timer: {:?}", e);
                false
            }
        }
    }

    fn request_frame(&mut self) {
        let pager = self.pager.clone();
        let callback = Closure::once_into_js(move |_timestamp: f64| {
            with_pager(&pager, |pager| pager.on_frame());
        });
        if let Err(e) = self.window.request_animation_frame(callback.unchecked_ref()) {
            log::error!("Failed to request animation frame: {:?}", e);
        }
    }

    fn render_indicator(&mut self, view: &IndicatorView) {
        self.indicator.render(view);
    }
}

/// Call `settle` after `millis`. A busy pager gets the timer again on the
/// next turn of the event loop.
fn set_settle_timer(
    window: &Window,
    pager: Weak<RefCell<Pager>>,
    millis: i32,
) -> Result<(), JsValue> {
    let retry_window = window.clone();
    let callback = Closure::once_into_js(move || {
        if with_pager(&pager, |pager| pager.settle()) == Some(false) {
            if let Err(e) = set_settle_timer(&retry_window, pager, 0) {
                log::error!("Failed to retry settle timer: {:?}", e);
            }
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        .map(|_| ())
}
