//! Stamping static asset URLs so every visit fetches fresh copies.

use paged_scroll_core::cache_bust::bust_url;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement, HtmlLinkElement, HtmlScriptElement, Window};

const ASSET_SELECTOR: &str = "link[rel='stylesheet'], script[src], img[src]";

/// Rewrite the URL of every stylesheet, script and image in the document.
///
/// Failures are logged per element and never abort the page setup.
pub(crate) fn apply(window: &Window, document: &Document) {
    let origin = match window.location().origin() {
        Ok(origin) => origin,
        Err(e) => {
            log::warn!("Cache busting skipped, no origin: {:?}", e);
            return;
        }
    };
    let nodes = match document.query_selector_all(ASSET_SELECTOR) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("Cache busting skipped: {:?}", e);
            return;
        }
    };

    let stamp = js_sys::Date::now() as u64;
    let rewrite = |current: String, set: &dyn Fn(&str)| match bust_url(&current, &origin, stamp) {
        Ok(busted) => {
            set(&busted);
            true
        }
        Err(e) => {
            log::warn!("Cache busting skipped for asset: {}", e);
            false
        }
    };

    let mut rewritten = 0usize;
    for node in (0..nodes.length()).filter_map(|i| nodes.item(i)) {
        let done = if let Some(link) = node.dyn_ref::<HtmlLinkElement>() {
            rewrite(link.href(), &|url| link.set_href(url))
        } else if let Some(script) = node.dyn_ref::<HtmlScriptElement>() {
            rewrite(script.src(), &|url| script.set_src(url))
        } else if let Some(image) = node.dyn_ref::<HtmlImageElement>() {
            rewrite(image.src(), &|url| image.set_src(url))
        } else {
            false
        };
        if done {
            rewritten += 1;
        }
    }
    log::debug!("Cache-busted {} asset URLs", rewritten);
}
