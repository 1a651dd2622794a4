//! Caret and selection tracking across edit cycles.
//!
//! A host widget only reports where the selection ended up *after* a text
//! change. [`SelectionTracker`] keeps the selection from before the change so
//! the reconciler can tell an insert from a delete.

/// Selection bounds in character indices. `end` is exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Create a selection, normalizing reversed bounds.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A collapsed selection (plain caret).
    #[must_use]
    pub fn caret(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }
}

/// Previous and current selection of one editing session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    previous: SelectionRange,
    current: SelectionRange,
}

impl SelectionTracker {
    /// Tracker with the caret at `position`.
    #[must_use]
    pub fn new(position: usize) -> Self {
        let mut tracker = Self::default();
        tracker.update(position);
        tracker
    }

    /// Selection as it was at the end of the previous cycle.
    #[must_use]
    pub fn previous(&self) -> SelectionRange {
        self.previous
    }

    /// Selection as last reported by the host.
    #[must_use]
    pub fn current(&self) -> SelectionRange {
        self.current
    }

    /// Record the selection the host reports after a text change.
    pub fn set_current(&mut self, range: SelectionRange) {
        self.current = range;
    }

    /// Record a caret move or selection made without changing text.
    ///
    /// The range becomes the baseline the next edit is compared against.
    pub fn select(&mut self, range: SelectionRange) {
        self.previous = range;
        self.current = range;
    }

    /// Collapse to `position` and archive it for the next cycle.
    pub fn update(&mut self, position: usize) {
        let caret = SelectionRange::caret(position);
        self.previous = caret;
        self.current = caret;
    }
}
