//! Edit cycle performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use slotmask::{MaskOptions, MaskedInput, SelectionRange, SlotSequence, Template};
use std::hint::black_box;

const PHONE: &str = "(___) ___-____";

fn long_mask() -> String {
    "____-".repeat(200)
}

fn sequence_creation(c: &mut Criterion) {
    c.bench_function("template_parse_phone", |b| {
        b.iter(|| Template::parse(black_box(PHONE)))
    });

    let long = long_mask();
    c.bench_function("sequence_new_1k", |b| {
        b.iter(|| SlotSequence::new(Template::parse(black_box(&long)).unwrap(), '_'))
    });
}

fn sequence_ops(c: &mut Criterion) {
    let long = long_mask();
    let digits = "1234".repeat(200);
    let mut seq = SlotSequence::new(Template::parse(&long).unwrap(), '_').unwrap();

    c.bench_function("insert_value_800_digits", |b| {
        b.iter(|| {
            seq.clear();
            seq.insert_value(black_box(&digits), 0)
        })
    });

    c.bench_function("stringify_1k", |b| b.iter(|| black_box(&seq).stringify()));

    c.bench_function("delete_value_single", |b| {
        b.iter(|| seq.delete_value(black_box(500), black_box(500)))
    });

    c.bench_function("change_all_chars_1k", |b| {
        b.iter(|| seq.change_all_chars(black_box(&digits)))
    });
}

fn edit_cycles(c: &mut Criterion) {
    c.bench_function("type_phone_number", |b| {
        b.iter(|| {
            let mut input = MaskedInput::from_mask(PHONE, MaskOptions::default()).unwrap();
            for ch in "5551234567".chars() {
                let shown: Vec<char> = input.text().chars().collect();
                let caret = input.caret().min(shown.len());
                let mut raw: String = shown[..caret].iter().collect();
                raw.push(ch);
                raw.extend(&shown[caret..]);
                input.change(&raw, SelectionRange::caret(caret + 1));
            }
            input
        })
    });

    c.bench_function("paste_phone_number", |b| {
        b.iter(|| {
            let mut input = MaskedInput::from_mask(PHONE, MaskOptions::default()).unwrap();
            input.change(
                black_box("(5551234567___) ___-____"),
                SelectionRange::caret(11),
            )
        })
    });
}

criterion_group!(benches, sequence_creation, sequence_ops, edit_cycles);
criterion_main!(benches);
