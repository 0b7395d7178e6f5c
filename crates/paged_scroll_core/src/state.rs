//! Scroll state owned by the controller.
//!
//! Fields are private and mutators are crate-visible only: everything outside
//! the crate observes the state through the controller and cannot break the
//! index or offset-table invariants.

/// Transition phase of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No animated transition running; navigation accepted
    #[default]
    Idle,
    /// An animated transition holds the lock until its settle timer fires
    Transitioning,
}

/// Measured top offsets of the panes, one per section.
///
/// Always replaced wholesale on layout changes, never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetTable {
    offsets: Vec<f64>,
}

impl OffsetTable {
    pub fn new(offsets: Vec<f64>) -> Self {
        Self { offsets }
    }

    /// Offset of a section, 0.0 if it has not been measured.
    pub fn offset(&self, index: usize) -> f64 {
        self.offsets.get(index).copied().unwrap_or(0.0)
    }

    /// Whether a section has a measured offset.
    pub fn is_measured(&self, index: usize) -> bool {
        index < self.offsets.len()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.offsets
    }
}

/// Current section, transition lock and offset table.
#[derive(Debug, Clone)]
pub struct ScrollState {
    current: usize,
    section_count: usize,
    phase: Phase,
    offsets: OffsetTable,
}

impl ScrollState {
    /// Create state for a page of `section_count` panes, at section 0.
    ///
    /// `section_count` is at least 1; the controller checks this before
    /// building the state.
    pub(crate) fn new(section_count: usize) -> Self {
        debug_assert!(section_count > 0);
        Self {
            current: 0,
            section_count,
            phase: Phase::Idle,
            offsets: OffsetTable::default(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn last_index(&self) -> usize {
        self.section_count.saturating_sub(1)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    pub fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    /// Clamp any requested index into the valid range.
    pub fn clamp(&self, target: i64) -> usize {
        let last = self.last_index() as i64;
        target.clamp(0, last) as usize
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        self.current = index.min(self.last_index());
    }

    pub(crate) fn begin_transition(&mut self) {
        self.phase = Phase::Transitioning;
    }

    pub(crate) fn end_transition(&mut self) {
        self.phase = Phase::Idle;
    }

    pub(crate) fn replace_offsets(&mut self, offsets: OffsetTable) {
        self.offsets = offsets;
    }
}
