//! Section naming.

use std::borrow::Cow;

use crate::constants::FALLBACK_LABEL_PREFIX;

/// One pane of the paged sequence, as seen by the indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    /// 0-based position in document order
    pub index: usize,
    /// Display name, registered or generated
    pub name: Cow<'a, str>,
    /// Measured top offset in pixels, if layout has run
    pub offset: Option<f64>,
}

/// Ordered display names, parallel to the panes.
///
/// The list may be shorter than the number of panes; panes past its end get a
/// generated "Section N" label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionNames {
    names: Vec<String>,
}

impl SectionNames {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Display name for a pane.
    pub fn label(&self, index: usize) -> Cow<'_, str> {
        match self.names.get(index) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("{} {}", FALLBACK_LABEL_PREFIX, index + 1)),
        }
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether every one of `section_count` panes has a registered name.
    pub fn covers(&self, section_count: usize) -> bool {
        self.names.len() >= section_count
    }
}

impl From<Vec<String>> for SectionNames {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_name() {
        let names = SectionNames::new(vec!["Profile".into(), "Skills".into()]);
        assert_eq!(names.label(1), "Skills");
    }

    #[test]
    fn test_fallback_is_one_based() {
        let names = SectionNames::new(vec!["Profile".into()]);
        assert_eq!(names.label(1), "Section 2");
        assert_eq!(SectionNames::default().label(0), "Section 1");
    }

    #[test]
    fn test_covers() {
        let names = SectionNames::new(vec!["A".into(), "B".into()]);
        assert!(names.covers(2));
        assert!(!names.covers(3));
        assert!(!names.is_empty());
        assert!(SectionNames::default().is_empty());
        assert!(SectionNames::default().covers(0));
    }
}
