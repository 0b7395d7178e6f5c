//! Wiring browser events to pager input.

use paged_scroll_core::{
    InputEvent, Key, LayoutTrigger, PagerConfig, PagerError, parse_nav_target,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Event, HtmlElement, HtmlImageElement, KeyboardEvent, MutationObserver,
    MutationObserverInit, Node, TouchEvent, TouchList, WheelEvent, Window,
};

use super::indicator::IndicatorElements;
use super::{ListenOptions, SharedPager, dispatch, js_err, listen};

/// Attach every input and layout listener.
pub(crate) fn attach(
    pager: &SharedPager,
    window: &Window,
    document: &Document,
    container: &HtmlElement,
    indicator: &IndicatorElements,
    config: &PagerConfig,
) -> Result<(), PagerError> {
    attach_devices(pager, window)?;
    attach_indicator(pager, document, indicator)?;
    attach_nav_buttons(pager, document, &config.nav_target_attribute)?;
    attach_layout_triggers(pager, window, document, container)?;
    Ok(())
}

fn first_touch_y(touches: TouchList) -> Option<f64> {
    touches.get(0).map(|touch| f64::from(touch.client_y()))
}

fn attach_devices(pager: &SharedPager, window: &Window) -> Result<(), PagerError> {
    let p = pager.clone();
    listen(window, "wheel", ListenOptions::passive(), move |event: Event| {
        if let Some(event) = event.dyn_ref::<WheelEvent>() {
            dispatch(&p, InputEvent::Wheel {
                delta_y: event.delta_y(),
            });
        }
    })?;

    let p = pager.clone();
    listen(window, "keydown", ListenOptions::default(), move |event: Event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            let key = Key::from_dom_key(&event.key());
            if key != Key::Other {
                dispatch(&p, InputEvent::Key(key));
            }
        }
    })?;

    let p = pager.clone();
    listen(window, "touchstart", ListenOptions::passive(), move |event: Event| {
        let y = event
            .dyn_ref::<TouchEvent>()
            .and_then(|event| first_touch_y(event.touches()));
        if let Some(y) = y {
            dispatch(&p, InputEvent::TouchStart { y });
        }
    })?;

    let p = pager.clone();
    listen(window, "touchend", ListenOptions::default(), move |event: Event| {
        let y = event
            .dyn_ref::<TouchEvent>()
            .and_then(|event| first_touch_y(event.changed_touches()));
        if let Some(y) = y {
            dispatch(&p, InputEvent::TouchEnd { y });
        }
    })?;

    Ok(())
}

fn attach_indicator(
    pager: &SharedPager,
    document: &Document,
    indicator: &IndicatorElements,
) -> Result<(), PagerError> {
    let p = pager.clone();
    listen(
        indicator.toggle_button(),
        "click",
        ListenOptions::default(),
        move |_: Event| {
            dispatch(&p, InputEvent::DropdownToggle);
        },
    )?;

    for (index, item) in indicator.items().iter().enumerate() {
        let p = pager.clone();
        listen(item, "click", ListenOptions::default(), move |_: Event| {
            dispatch(&p, InputEvent::DropdownSelect(index));
        })?;
    }

    let p = pager.clone();
    let widget = indicator.clone();
    listen(document, "click", ListenOptions::default(), move |event: Event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        if !widget.contains(target.as_ref()) {
            dispatch(&p, InputEvent::OutsideClick);
        }
    })?;

    Ok(())
}

fn attach_nav_buttons(
    pager: &SharedPager,
    document: &Document,
    attribute: &str,
) -> Result<(), PagerError> {
    let buttons = document
        .query_selector_all(&format!("[{}]", attribute))
        .map_err(js_err("querySelectorAll"))?;

    for button in (0..buttons.length()).filter_map(|i| buttons.item(i)) {
        let p = pager.clone();
        let attribute = attribute.to_string();
        listen(&button, "click", ListenOptions::default(), move |event: Event| {
            let raw = event
                .current_target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|element| element.get_attribute(&attribute));
            match raw.as_deref().and_then(parse_nav_target) {
                Some(target) => {
                    dispatch(&p, InputEvent::NavButton { target });
                }
                None => {
                    log::warn!("Navigation button with unusable {}: {:?}", attribute, raw);
                }
            }
        })?;
    }
    log::debug!("Bound {} navigation buttons", buttons.length());
    Ok(())
}

fn attach_layout_triggers(
    pager: &SharedPager,
    window: &Window,
    document: &Document,
    container: &HtmlElement,
) -> Result<(), PagerError> {
    for kind in ["resize", "orientationchange"] {
        let p = pager.clone();
        listen(window, kind, ListenOptions::default(), move |_: Event| {
            dispatch(&p, InputEvent::Layout(LayoutTrigger::Resize));
        })?;
    }

    let p = pager.clone();
    listen(window, "load", ListenOptions::once(), move |_: Event| {
        dispatch(&p, InputEvent::Layout(LayoutTrigger::WindowLoad));
    })?;

    match document.fonts().ready() {
        Ok(ready) => {
            let p = pager.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match JsFuture::from(ready).await {
                    Ok(_) => {
                        dispatch(&p, InputEvent::Layout(LayoutTrigger::FontsReady));
                    }
                    Err(e) => log::warn!("Font loading failed: {:?}", e),
                }
            });
        }
        Err(e) => log::warn!("document.fonts.ready unavailable: {:?}", e),
    }

    let images = document
        .query_selector_all("img")
        .map_err(js_err("querySelectorAll"))?;
    let mut pending = 0;
    for image in (0..images.length()).filter_map(|i| images.item(i)) {
        let Some(image) = image.dyn_ref::<HtmlImageElement>() else {
            continue;
        };
        if image.complete() {
            continue;
        }
        pending += 1;
        for (kind, trigger) in [
            ("load", LayoutTrigger::ImageLoaded),
            ("error", LayoutTrigger::ImageFailed),
        ] {
            let p = pager.clone();
            listen(image, kind, ListenOptions::once(), move |_: Event| {
                dispatch(&p, InputEvent::Layout(trigger));
            })?;
        }
    }
    log::debug!("Waiting on {} images", pending);

    let p = pager.clone();
    let on_mutation = Closure::wrap(Box::new(move |_records: JsValue, _observer: JsValue| {
        dispatch(&p, InputEvent::Layout(LayoutTrigger::ContentMutation));
    }) as Box<dyn FnMut(JsValue, JsValue)>);
    let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())
        .map_err(js_err("MutationObserver"))?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    options.set_character_data(true);
    observer
        .observe_with_options(container, &options)
        .map_err(js_err("MutationObserver.observe"))?;
    on_mutation.forget(); // Leak the closure to keep it alive

    Ok(())
}
