//! Mask configuration.

use crate::error::{Error, Result};

/// Default character rendered in unfilled mutable slots.
pub const DEFAULT_PLACEHOLDER: char = '_';

/// What the insert cascade does when a mutable slot rejects a character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RejectPolicy {
    /// Stop the cascade; the slot stays unfilled and the rest of the input
    /// is dropped.
    #[default]
    Stop,
    /// Drop the rejected character and try the next input character against
    /// the same slot. Useful when pasting already-formatted text.
    SkipInvalid,
}

/// How a single-character backspace treats permanent slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackspaceMode {
    /// Clear the slot under the new caret and apply the delete-caret rule.
    #[default]
    Plain,
    /// Backspacing onto a literal clears the nearest mutable slot to its
    /// left instead, so separators never absorb a keystroke.
    SkipSeparators,
}

/// Options for a masked input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskOptions {
    /// Character shown in unfilled mutable slots.
    pub placeholder: char,
    /// Insert cascade behavior on rejected characters.
    pub reject_policy: RejectPolicy,
    /// Single-character backspace behavior.
    pub backspace: BackspaceMode,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
            reject_policy: RejectPolicy::Stop,
            backspace: BackspaceMode::Plain,
        }
    }
}

impl MaskOptions {
    /// Options with a custom placeholder.
    #[must_use]
    pub fn with_placeholder(placeholder: char) -> Self {
        Self {
            placeholder,
            ..Self::default()
        }
    }

    /// Set the reject policy.
    #[must_use]
    pub fn reject_policy(mut self, policy: RejectPolicy) -> Self {
        self.reject_policy = policy;
        self
    }

    /// Set the backspace mode.
    #[must_use]
    pub fn backspace(mut self, mode: BackspaceMode) -> Self {
        self.backspace = mode;
        self
    }

    /// Check that the options can drive a single-line input.
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_control() {
            return Err(Error::InvalidPlaceholder(self.placeholder));
        }
        Ok(())
    }
}
