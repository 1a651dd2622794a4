//! Fuzz target for mask parsing.
//!
//! Tests that Template::parse handles arbitrary strings without panicking
//! and that every template it accepts builds a consistent sequence.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slotmask::{SlotSequence, Template};

fuzz_target!(|data: &str| {
    let Ok(template) = Template::parse(data) else {
        return;
    };
    let len = template.len();
    let Ok(mut seq) = SlotSequence::new(template, '_') else {
        return;
    };

    assert_eq!(seq.stringify().chars().count(), len);
    seq.insert_value(data, 0);
    assert_eq!(seq.stringify().chars().count(), len);
    seq.change_all_chars(data);
    seq.clear();
    assert_eq!(seq.mutable_stringify(), "");
});
