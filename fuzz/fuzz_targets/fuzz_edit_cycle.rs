//! Fuzz target for edit reconciliation.
//!
//! Feeds arbitrary selection transitions and raw text into a session. The
//! session must never panic and must keep the caret inside the mask.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slotmask::{BackspaceMode, MaskOptions, MaskedInput, RejectPolicy, SelectionRange};

#[derive(Arbitrary, Debug)]
struct Cycle {
    select: Option<(u8, u8)>,
    caret: u8,
    raw: String,
}

#[derive(Arbitrary, Debug)]
struct Input {
    mask: String,
    skip_invalid: bool,
    skip_separators: bool,
    cycles: Vec<Cycle>,
}

fuzz_target!(|input: Input| {
    let mut options = MaskOptions::default();
    if input.skip_invalid {
        options = options.reject_policy(RejectPolicy::SkipInvalid);
    }
    if input.skip_separators {
        options = options.backspace(BackspaceMode::SkipSeparators);
    }
    let Ok(mut session) = MaskedInput::from_mask(&input.mask, options) else {
        return;
    };
    let len = session.sequence().len();

    for cycle in &input.cycles {
        if let Some((start, end)) = cycle.select {
            session.select(SelectionRange::new(start.into(), end.into()));
        }
        let outcome = session.change(&cycle.raw, SelectionRange::caret(cycle.caret.into()));
        assert!(outcome.caret <= len);
        assert_eq!(outcome.text.chars().count(), len);
    }
});
