//! Edit classification and caret reconciliation.
//!
//! A host widget reports a text change as the new raw text plus the new
//! selection. [`EditKind::classify`] compares that selection with the one
//! archived before the change to recover what the user did, and
//! [`EditReconciler`] replays the edit onto a [`SlotSequence`] and picks the
//! caret position.
//!
//! # Examples
//!
//! ```
//! use slotmask::{EditKind, EditReconciler, SelectionRange, SlotSequence, Template};
//!
//! let mut seq = SlotSequence::new(Template::parse("__-__").unwrap(), '_').unwrap();
//! seq.insert_value("12", 0);
//!
//! // Caret sat before the '-', user typed '5'.
//! let previous = SelectionRange::caret(2);
//! let current = SelectionRange::caret(3);
//! let result = EditReconciler::default().reconcile(&mut seq, previous, current, "125-__");
//!
//! assert_eq!(result.kind, EditKind::ForwardInsert { from: 2, to: 3 });
//! assert_eq!(seq.stringify(), "12-5_");
//! assert_eq!(result.caret, 4);
//! ```

use crate::config::{BackspaceMode, MaskOptions, RejectPolicy};
use crate::event::{LogLevel, emit_log_with};
use crate::modifier;
use crate::selection::SelectionRange;
use crate::sequence::SlotSequence;

/// What the user did between two observations of the widget.
///
/// All ranges are half-open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// A selection existed and was replaced (or deleted). `end` is
    /// exclusive: the slot at `end` is left alone.
    RangeReplace { start: usize, end: usize },
    /// Forward delete with the caret unchanged.
    RightDelete { at: usize },
    /// Text was inserted at `from`; the caret moved to `to`.
    ForwardInsert { from: usize, to: usize },
    /// Backspace from `to` down to `from`.
    BackwardDelete { from: usize, to: usize },
}

impl EditKind {
    /// Classify an edit from the archived and the reported selection.
    #[must_use]
    pub fn classify(previous: SelectionRange, current: SelectionRange) -> Self {
        if !previous.is_collapsed() {
            return Self::RangeReplace {
                start: previous.start,
                end: previous.end,
            };
        }

        let before = previous.start;
        let after = current.start;
        if after == before {
            Self::RightDelete { at: after }
        } else if after > before {
            Self::ForwardInsert {
                from: before,
                to: after,
            }
        } else {
            Self::BackwardDelete {
                from: after,
                to: before,
            }
        }
    }
}

/// Result of one reconciled edit cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconciliation {
    pub kind: EditKind,
    /// Where the host should put the collapsed caret.
    pub caret: usize,
}

/// Replays classified edits onto a sequence.
///
/// The reconciler is stateless apart from its policies; the selection
/// history lives in [`SelectionTracker`](crate::SelectionTracker).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditReconciler {
    pub reject_policy: RejectPolicy,
    pub backspace: BackspaceMode,
}

impl EditReconciler {
    #[must_use]
    pub fn from_options(options: &MaskOptions) -> Self {
        Self {
            reject_policy: options.reject_policy,
            backspace: options.backspace,
        }
    }

    /// Classify and apply one edit cycle.
    ///
    /// The host must guarantee that the only change between `previous` and
    /// `raw` is the one described by the selection transition.
    pub fn reconcile(
        &self,
        seq: &mut SlotSequence,
        previous: SelectionRange,
        current: SelectionRange,
        raw: &str,
    ) -> Reconciliation {
        let kind = EditKind::classify(previous, current);
        let raw: Vec<char> = raw.chars().collect();
        let caret = self.apply(seq, kind, &raw);

        emit_log_with(LogLevel::Debug, || {
            format!("reconciled {kind:?}: caret {caret}, text {:?}", seq.stringify())
        });

        Reconciliation { kind, caret }
    }

    /// Apply an already classified edit and return the new caret.
    pub fn apply(&self, seq: &mut SlotSequence, kind: EditKind, raw: &[char]) -> usize {
        match kind {
            EditKind::RangeReplace { start, end } => self.replace_range(seq, start, end, raw),
            EditKind::RightDelete { at } => {
                modifier::delete_value(seq, at, at);
                delete_caret(seq, at)
            }
            EditKind::ForwardInsert { from, to } => {
                let typed = slice(raw, from, to);
                let last = modifier::insert_value(seq, typed, from, self.reject_policy);
                insert_caret(seq, from, last)
            }
            EditKind::BackwardDelete { from, to } => {
                if to.saturating_sub(from) == 1 && self.backspace == BackspaceMode::SkipSeparators {
                    return backspace_over_separators(seq, from);
                }
                if to > from {
                    modifier::delete_value(seq, from, to - 1);
                }
                delete_caret(seq, from)
            }
        }
    }

    fn replace_range(
        &self,
        seq: &mut SlotSequence,
        start: usize,
        end: usize,
        raw: &[char],
    ) -> usize {
        if end > start {
            modifier::delete_value(seq, start, end - 1);
        }

        // The replacement occupies the selected window, grown or shrunk by
        // however much the raw text length differs from the mask length.
        let window_end = if raw.len() >= seq.len() {
            end.saturating_add(raw.len() - seq.len())
        } else {
            end.saturating_sub(seq.len() - raw.len())
        };
        let replacement = slice(raw, start, window_end);

        if replacement.is_empty() {
            let has_left = seq
                .near_mutable(start)
                .is_some_and(|near| near.left.is_some());
            return if has_left {
                start
            } else {
                seq.first_mutable_index()
            };
        }

        let last = modifier::insert_value(seq, replacement, start, self.reject_policy);
        insert_caret(seq, start, last)
    }
}

/// Caret after inserting at `insert_index`, given the last slot written.
///
/// The caret lands on the next editable slot, or just past the last mutable
/// slot when nothing editable remains to the right.
#[must_use]
pub fn insert_caret(
    seq: &SlotSequence,
    insert_index: usize,
    last_written: Option<usize>,
) -> usize {
    if let Some(last) = last_written {
        return seq
            .near_mutable(last)
            .and_then(|near| near.right)
            .unwrap_or_else(|| seq.past_last_mutable());
    }

    match seq.char_at(insert_index) {
        None => seq.past_last_mutable(),
        Some(slot) if slot.is_mutable() => insert_index,
        Some(_) => seq
            .near_mutable(insert_index)
            .and_then(|near| near.right)
            .unwrap_or_else(|| seq.past_last_mutable()),
    }
}

/// Caret after deleting down to `index`.
///
/// A literal with nothing editable to its left would trap the caret, so it
/// snaps to the first mutable slot instead.
#[must_use]
pub fn delete_caret(seq: &SlotSequence, index: usize) -> usize {
    let Some(slot) = seq.char_at(index) else {
        return seq.first_mutable_index();
    };
    let has_left = seq
        .near_mutable(index)
        .is_some_and(|near| near.left.is_some());
    if slot.is_permanent() && !has_left {
        return seq.first_mutable_index();
    }
    index
}

fn backspace_over_separators(seq: &mut SlotSequence, index: usize) -> usize {
    let Some(slot) = seq.char_at(index) else {
        return seq.first_mutable_index();
    };
    let is_permanent = slot.is_permanent();
    let left = seq.near_mutable(index).and_then(|near| near.left);

    match (is_permanent, left) {
        (true, Some(left)) => {
            modifier::delete_value(seq, left, left);
            left
        }
        (_, None) => {
            modifier::delete_value(seq, index, index);
            seq.first_mutable_index()
        }
        (false, Some(left)) => {
            modifier::delete_value(seq, index, index);
            left + 1
        }
    }
}

fn slice(raw: &[char], from: usize, to: usize) -> &[char] {
    let to = to.min(raw.len());
    if from >= to { &[] } else { &raw[from..to] }
}
