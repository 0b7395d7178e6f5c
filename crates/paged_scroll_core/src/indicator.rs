//! Floating section indicator with its jump dropdown.
//!
//! The indicator holds only the dropdown's open flag and the section names.
//! Everything it displays is derived from the scroll state on each render.

use crate::constants::indicator::{GLYPH_CLOSED, GLYPH_OPEN};
use crate::section::SectionNames;

/// One jump target in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownEntry {
    pub index: usize,
    pub label: String,
    /// Entry for the section currently shown
    pub active: bool,
}

/// Everything a surface needs to draw the indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorView {
    /// "<name> (<position>/<total>)"
    pub label: String,
    pub toggle_glyph: &'static str,
    pub open: bool,
    pub entries: Vec<DropdownEntry>,
}

/// Indicator state: names and dropdown visibility.
#[derive(Debug, Clone, Default)]
pub struct SectionIndicator {
    names: SectionNames,
    open: bool,
}

impl SectionIndicator {
    pub fn new(names: SectionNames) -> Self {
        Self { names, open: false }
    }

    pub fn names(&self) -> &SectionNames {
        &self.names
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the dropdown. Returns the new open flag.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the dropdown. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Label text for the current section.
    pub fn label(&self, current: usize, total: usize) -> String {
        format!("{} ({}/{})", self.names.label(current), current + 1, total)
    }

    /// Derive the full view for `current` out of `total` sections.
    pub fn view(&self, current: usize, total: usize) -> IndicatorView {
        let entries = (0..total)
            .map(|index| DropdownEntry {
                index,
                label: self.names.label(index).into_owned(),
                active: index == current,
            })
            .collect();

        IndicatorView {
            label: self.label(current, total),
            toggle_glyph: if self.open { GLYPH_OPEN } else { GLYPH_CLOSED },
            open: self.open,
            entries,
        }
    }
}
