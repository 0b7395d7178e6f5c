use paged_scroll_core::PagerError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, PageTransitionEvent};

use crate::dom::{self, ListenOptions, js_err, listen};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = register_page_hooks() {
        web_sys::console::error_1(&format!("paged_scroll: {}", e).into());
    }
}

/// Reload on back/forward-cache restores, then bootstrap once the DOM is
/// parsed. The module may finish loading after `DOMContentLoaded` has already
/// fired, in which case bootstrap runs right away.
fn register_page_hooks() -> Result<(), PagerError> {
    let window = web_sys::window().ok_or_else(|| PagerError::dom("No global window exists"))?;
    let document = window
        .document()
        .ok_or_else(|| PagerError::dom("No document in window"))?;

    let reload_target = window.clone();
    listen(&window, "pageshow", ListenOptions::default(), move |event: Event| {
        let restored = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        if restored {
            if let Err(e) = reload_target.location().reload().map_err(js_err("reload")) {
                log::error!("{}", e);
            }
        }
    })?;

    if document.ready_state() == "loading" {
        listen(
            &document,
            "DOMContentLoaded",
            ListenOptions::once(),
            |_: Event| dom::start(),
        )?;
    } else {
        dom::start();
    }
    Ok(())
}
