//! Editing session for one masked input.
//!
//! [`MaskedInput`] ties a [`SlotSequence`] to a [`SelectionTracker`] and runs
//! the per-edit data flow: the host reports the raw text and selection it
//! observed, the session reconciles the edit, and the host writes back the
//! rendered text and caret.
//!
//! # Examples
//!
//! ```
//! use slotmask::{MaskOptions, MaskedInput, SelectionRange};
//!
//! let mut input = MaskedInput::from_mask("(___) ___-____", MaskOptions::default()).unwrap();
//! assert_eq!(input.text(), "(___) ___-____");
//! assert_eq!(input.caret(), 1);
//!
//! // The widget shows the typed digit inserted at the caret.
//! let outcome = input.change("(5___) ___-____", SelectionRange::caret(2));
//! assert_eq!(outcome.text, "(5__) ___-____");
//! assert_eq!(outcome.caret, 2);
//! assert_eq!(input.unmasked_value(), "5");
//! ```

use crate::config::MaskOptions;
use crate::error::Result;
use crate::event::{LogLevel, emit_log, emit_log_with};
use crate::modifier;
use crate::reconcile::{EditKind, EditReconciler};
use crate::selection::{SelectionRange, SelectionTracker};
use crate::sequence::SlotSequence;
use crate::slot::Template;

/// What the host should apply after an edit cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    /// Full display string, placeholders included.
    pub text: String,
    /// Collapsed caret position.
    pub caret: usize,
    /// How the edit was classified.
    pub kind: EditKind,
}

/// A masked input editing session.
///
/// The session exclusively owns its slots and selection history. Every
/// method runs to completion; hosts with several threads must serialize
/// calls.
#[derive(Clone, Debug)]
pub struct MaskedInput {
    sequence: SlotSequence,
    selection: SelectionTracker,
    reconciler: EditReconciler,
    options: MaskOptions,
}

impl MaskedInput {
    /// Create a session from a ready-made template.
    ///
    /// The caret starts on the first mutable slot.
    pub fn new(template: Template, options: MaskOptions) -> Result<Self> {
        let sequence = SlotSequence::new(template, options.placeholder)
            .inspect_err(|err| emit_log(LogLevel::Warn, &format!("rejected mask: {err}")))?;
        let selection = SelectionTracker::new(sequence.first_mutable_index());

        Ok(Self {
            sequence,
            selection,
            reconciler: EditReconciler::from_options(&options),
            options,
        })
    }

    /// Create a session by parsing a mask string.
    ///
    /// See [`Template::parse`] for the mask syntax.
    pub fn from_mask(mask: &str, options: MaskOptions) -> Result<Self> {
        let template = Template::parse(mask)
            .inspect_err(|err| emit_log(LogLevel::Warn, &format!("rejected mask: {err}")))?;
        Self::new(template, options)
    }

    /// Display string to write into the widget.
    #[must_use]
    pub fn text(&self) -> String {
        self.sequence.stringify()
    }

    /// The user-entered value without literals or placeholders.
    #[must_use]
    pub fn unmasked_value(&self) -> String {
        self.sequence.mutable_stringify()
    }

    /// Current caret position.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.selection.current().start
    }

    /// Whether every mutable slot is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sequence.is_complete()
    }

    #[must_use]
    pub fn sequence(&self) -> &SlotSequence {
        &self.sequence
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionTracker {
        &mut self.selection
    }

    #[must_use]
    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    /// Record a caret move or selection made without a text change.
    pub fn select(&mut self, range: SelectionRange) {
        self.selection.select(range);
    }

    /// Run one edit cycle.
    ///
    /// `raw` is the widget text after the user's edit and `current` the
    /// selection the widget reports for it.
    pub fn change(&mut self, raw: &str, current: SelectionRange) -> EditOutcome {
        self.selection.set_current(current);
        let result = self.reconciler.reconcile(
            &mut self.sequence,
            self.selection.previous(),
            current,
            raw,
        );
        self.selection.update(result.caret);

        EditOutcome {
            text: self.sequence.stringify(),
            caret: result.caret,
            kind: result.kind,
        }
    }

    /// Replace the whole display value positionally.
    ///
    /// Each mutable slot takes the character at its own index in `raw` when
    /// the pattern accepts it. The caret goes back to where the previous
    /// cycle left it.
    pub fn set_value(&mut self, raw: &str) {
        self.sequence.change_all_chars(raw);
        self.selection.update(self.selection.previous().start);

        emit_log_with(LogLevel::Debug, || {
            format!("set value {raw:?}: text {:?}", self.sequence.stringify())
        });
    }

    /// Replace the user-entered value.
    ///
    /// Clears the mask and cascades `value` in from the first mutable slot,
    /// so literals in `value` are optional.
    pub fn set_unmasked_value(&mut self, value: &str) {
        self.sequence.clear();
        let chars: Vec<char> = value.chars().collect();
        let start = self.sequence.first_mutable_index();
        modifier::insert_value(
            &mut self.sequence,
            &chars,
            start,
            self.reconciler.reject_policy,
        );
        self.selection.update(self.selection.previous().start);

        emit_log_with(LogLevel::Debug, || {
            format!(
                "set unmasked value {value:?}: text {:?}",
                self.sequence.stringify()
            )
        });
    }

    /// Reset every mutable slot and put the caret on the first one.
    pub fn clear(&mut self) {
        self.sequence.clear();
        self.selection.update(self.sequence.first_mutable_index());
    }
}
