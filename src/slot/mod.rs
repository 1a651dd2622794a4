//! Mask slots: one position in a masked input.
//!
//! A mask such as `(___) ___-____` becomes a row of [`Slot`]s. Literal
//! characters like `(` and `-` are *permanent*; the underscores are *mutable*
//! slots governed by a [`Pattern`] that decides which characters may fill
//! them.
//!
//! Key types:
//!
//! - [`Slot`]: a single position with its current value
//! - [`SlotKind`]: permanent literal or pattern-governed mutable slot
//! - [`NearMutable`]: cached indices of the nearest mutable neighbors
//! - [`Template`]: ready-made slot layout consumed by
//!   [`SlotSequence`](crate::SlotSequence)

mod pattern;
mod template;

pub use pattern::{CharClass, Pattern};
pub use template::{SlotSpec, Template};

/// Whether a slot is a literal or user-editable.
#[derive(Clone, Debug)]
pub enum SlotKind {
    /// Literal mask character. Its value never changes.
    Permanent,
    /// Editable position; holds the placeholder or a matching character.
    Mutable(Pattern),
}

/// One position in a [`SlotSequence`](crate::SlotSequence).
#[derive(Clone, Debug)]
pub struct Slot {
    value: char,
    kind: SlotKind,
    index: usize,
}

impl Slot {
    pub(crate) fn new(index: usize, value: char, kind: SlotKind) -> Self {
        Self { value, kind, index }
    }

    /// Current displayed character.
    #[must_use]
    pub fn value(&self) -> char {
        self.value
    }

    /// Position within the sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn kind(&self) -> &SlotKind {
        &self.kind
    }

    #[must_use]
    pub fn is_permanent(&self) -> bool {
        matches!(self.kind, SlotKind::Permanent)
    }

    #[must_use]
    pub fn is_mutable(&self) -> bool {
        !self.is_permanent()
    }

    /// Pattern of a mutable slot, `None` for literals.
    #[must_use]
    pub fn pattern(&self) -> Option<&Pattern> {
        match &self.kind {
            SlotKind::Permanent => None,
            SlotKind::Mutable(pattern) => Some(pattern),
        }
    }

    /// Whether `ch` may be placed here.
    ///
    /// Literals accept only their own character; mutable slots defer to
    /// their pattern.
    #[must_use]
    pub fn accepts(&self, ch: char) -> bool {
        match &self.kind {
            SlotKind::Permanent => ch == self.value,
            SlotKind::Mutable(pattern) => pattern.matches(ch),
        }
    }

    /// Overwrite the value of a mutable slot. Literals are left untouched.
    pub(crate) fn set_value(&mut self, value: char) {
        if self.is_mutable() {
            self.value = value;
        }
    }
}

/// Nearest mutable slots strictly to the left and right of a position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NearMutable {
    pub left: Option<usize>,
    pub right: Option<usize>,
}
