//! `slotmask` - editing core for masked text inputs
//!
//! Keeps a fixed-length buffer of literal and editable slots (phone numbers,
//! dates, card numbers) consistent while a user types, pastes, deletes and
//! replaces selections through an ordinary caret/selection interface.
//!
//! The host widget owns events and rendering. Per edit it hands over the raw
//! text and selection it observed and gets back the display string and the
//! caret to restore:
//!
//! ```
//! use slotmask::{MaskOptions, MaskedInput, SelectionRange};
//!
//! let mut input = MaskedInput::from_mask("__/__/____", MaskOptions::default()).unwrap();
//!
//! // User pastes "24122026" at the first slot.
//! let outcome = input.change("24122026__/__/____", SelectionRange::caret(8));
//! assert_eq!(outcome.text, "24/12/2026");
//! assert_eq!(outcome.caret, 10);
//! assert_eq!(input.unmasked_value(), "24122026");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow SlotSequence in sequence etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Not every accessor needs it
#![allow(clippy::option_if_let_else)] // if-let-else is clearer than map_or_else
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod modifier;
pub mod reconcile;
pub mod selection;
pub mod sequence;
pub mod slot;

// Re-export core types at crate root
pub use config::{BackspaceMode, MaskOptions, RejectPolicy};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, emit_log_with, set_log_callback};
pub use input::{EditOutcome, MaskedInput};
pub use reconcile::{EditKind, EditReconciler, Reconciliation};
pub use selection::{SelectionRange, SelectionTracker};
pub use sequence::SlotSequence;
pub use slot::{CharClass, NearMutable, Pattern, Slot, SlotKind, SlotSpec, Template};
