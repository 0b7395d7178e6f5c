//! DOM rendering of the floating section indicator.

use paged_scroll_core::IndicatorView;
use paged_scroll_core::PagerError;
use paged_scroll_core::constants::indicator::{
    ACTIVE_CLASS, DROPDOWN_CLASS, LABEL_CLASS, OPEN_CLASS, ROOT_CLASS, TOGGLE_CLASS,
};
use web_sys::{Document, Element, Node};

use super::js_err;

/// `div.page-indicator > span.page-label + button.page-toggle + ul.page-dropdown > li*`
#[derive(Clone)]
pub(crate) struct IndicatorElements {
    root: Element,
    label: Element,
    toggle: Element,
    dropdown: Element,
    items: Vec<Element>,
}

impl IndicatorElements {
    /// Build the indicator, one dropdown entry per section, and append it to
    /// `body`.
    pub fn create(document: &Document, view: &IndicatorView) -> Result<Self, PagerError> {
        let create = |tag: &str, class: &str| -> Result<Element, PagerError> {
            let element = document
                .create_element(tag)
                .map_err(js_err("createElement"))?;
            element.set_class_name(class);
            Ok(element)
        };

        let root = create("div", ROOT_CLASS)?;
        let label = create("span", LABEL_CLASS)?;
        let toggle = create("button", TOGGLE_CLASS)?;
        toggle
            .set_attribute("type", "button")
            .map_err(js_err("setAttribute"))?;
        let dropdown = create("ul", DROPDOWN_CLASS)?;

        let mut items = Vec::with_capacity(view.entries.len());
        for entry in &view.entries {
            let item = document
                .create_element("li")
                .map_err(js_err("createElement"))?;
            item.set_text_content(Some(&entry.label));
            dropdown
                .append_child(&item)
                .map_err(js_err("appendChild"))?;
            items.push(item);
        }

        for child in [&label, &toggle, &dropdown] {
            root.append_child(child).map_err(js_err("appendChild"))?;
        }
        document
            .body()
            .ok_or_else(|| PagerError::dom("No body in document"))?
            .append_child(&root)
            .map_err(js_err("appendChild"))?;

        let elements = Self {
            root,
            label,
            toggle,
            dropdown,
            items,
        };
        elements.render(view);
        Ok(elements)
    }

    pub fn render(&self, view: &IndicatorView) {
        self.label.set_text_content(Some(&view.label));
        self.toggle.set_text_content(Some(view.toggle_glyph));

        let mut result = self
            .dropdown
            .class_list()
            .toggle_with_force(OPEN_CLASS, view.open)
            .map(|_| ());
        for (item, entry) in self.items.iter().zip(&view.entries) {
            result = result.and(
                item.class_list()
                    .toggle_with_force(ACTIVE_CLASS, entry.active)
                    .map(|_| ()),
            );
        }
        if let Err(e) = result {
            log::warn!("Failed to update indicator classes: {:?}", e);
        }
    }

    /// Whether `node` is the indicator or inside it.
    pub fn contains(&self, node: Option<&Node>) -> bool {
        node.is_some_and(|node| self.root.contains(Some(node)))
    }

    pub fn toggle_button(&self) -> &Element {
        &self.toggle
    }

    /// Dropdown entries, in section order.
    pub fn items(&self) -> &[Element] {
        &self.items
    }
}
