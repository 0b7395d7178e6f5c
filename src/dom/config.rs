//! Reading the pager configuration from the page.

use paged_scroll_core::constants::dom::CONFIG_ELEMENT_ID;
use paged_scroll_core::{PagerConfig, PagerError};
use web_sys::Document;

/// Parse the inline JSON config element, or fall back to defaults when the
/// page has none.
pub(crate) fn load(document: &Document) -> Result<PagerConfig, PagerError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    {
        Some(json) if !json.trim().is_empty() => PagerConfig::from_json(&json),
        _ => Ok(PagerConfig::default()),
    }
}
