//! Value mutation algorithms over a [`SlotSequence`].
//!
//! These functions hold no state. Each one runs to completion and leaves
//! every slot either a literal, a placeholder, or a character its pattern
//! accepts.

use crate::config::RejectPolicy;
use crate::sequence::SlotSequence;

/// Cascade `value` into the sequence starting at `insert_index`.
///
/// Characters are matched left to right against consecutive slots:
///
/// - a permanent slot consumes the character only when it equals the
///   literal; otherwise the slot is skipped and the same character is tried
///   on the next slot, so users can type through or past separators
/// - a mutable slot takes the character when its pattern accepts it; on a
///   rejection the cascade stops ([`RejectPolicy::Stop`]) or drops that
///   character and tries the next one on the same slot
///   ([`RejectPolicy::SkipInvalid`])
///
/// Returns the index of the last slot that consumed a character, or `None`
/// when nothing was consumed.
pub fn insert_value(
    seq: &mut SlotSequence,
    value: &[char],
    insert_index: usize,
    policy: RejectPolicy,
) -> Option<usize> {
    let mut last_written = None;
    let mut slot_index = insert_index;
    let mut pos = 0;

    while let Some(&ch) = value.get(pos) {
        let Some(slot) = seq.slot_mut(slot_index) else {
            break;
        };

        if slot.is_permanent() {
            if slot.accepts(ch) {
                pos += 1;
                last_written = Some(slot_index);
            }
            slot_index += 1;
            continue;
        }

        if slot.accepts(ch) {
            slot.set_value(ch);
            last_written = Some(slot_index);
            pos += 1;
            slot_index += 1;
            continue;
        }

        match policy {
            RejectPolicy::Stop => break,
            RejectPolicy::SkipInvalid => pos += 1,
        }
    }

    last_written
}

/// Reset every mutable slot in `from..=to` to the placeholder.
///
/// Permanent slots and indices past the end are skipped. Reversed bounds
/// are normalized.
pub fn delete_value(seq: &mut SlotSequence, from: usize, to: usize) {
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    let placeholder = seq.placeholder();
    let Some(last) = seq.len().checked_sub(1) else {
        return;
    };
    if lo > last {
        return;
    }

    for slot in &mut seq.slots_mut()[lo..=hi.min(last)] {
        slot.set_value(placeholder);
    }
}

/// Reset every mutable slot to the placeholder.
pub fn clear(seq: &mut SlotSequence) {
    let placeholder = seq.placeholder();
    for slot in seq.slots_mut() {
        slot.set_value(placeholder);
    }
}

/// Positional overwrite of the whole sequence.
///
/// The mutable slot at index `i` takes `value[i]` when its pattern accepts
/// it and is reset to the placeholder otherwise, including when `value` is
/// too short. Unlike [`insert_value`] nothing cascades: permanent slots are
/// skipped in place and `value[i]` at a permanent index is ignored.
pub fn change_all_chars(seq: &mut SlotSequence, value: &[char]) {
    let placeholder = seq.placeholder();
    for (index, slot) in seq.slots_mut().iter_mut().enumerate() {
        if slot.is_permanent() {
            continue;
        }
        match value.get(index) {
            Some(&ch) if slot.accepts(ch) => slot.set_value(ch),
            _ => slot.set_value(placeholder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::Template;

    fn seq(mask: &str) -> SlotSequence {
        SlotSequence::new(Template::parse(mask).unwrap(), '_').unwrap()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_insert_fills_phone() {
        let mut s = seq("(___) ___-____");
        let last = insert_value(&mut s, &chars("5551234567"), 1, RejectPolicy::Stop);
        assert_eq!(last, Some(13));
        assert_eq!(s.stringify(), "(555) 123-4567");
        assert_eq!(s.mutable_stringify(), "5551234567");
    }

    #[test]
    fn test_insert_types_through_matching_literal() {
        let mut s = seq("(___) ___-____");
        let last = insert_value(&mut s, &chars("(555) 1"), 0, RejectPolicy::Stop);
        assert_eq!(last, Some(6));
        assert_eq!(s.stringify(), "(555) 1__-____");
    }

    #[test]
    fn test_insert_skips_past_literal() {
        let mut s = seq("__-__");
        s.insert_value("12", 0);
        let last = insert_value(&mut s, &chars("5"), 2, RejectPolicy::Stop);
        assert_eq!(last, Some(3));
        assert_eq!(s.stringify(), "12-5_");
    }

    #[test]
    fn test_insert_stops_on_rejection() {
        let mut s = seq("____");
        let last = insert_value(&mut s, &chars("1x2"), 0, RejectPolicy::Stop);
        assert_eq!(last, Some(0));
        assert_eq!(s.stringify(), "1___");
    }

    #[test]
    fn test_insert_skip_invalid() {
        let mut s = seq("(___) ___-____");
        let last = insert_value(
            &mut s,
            &chars("555-123-4567"),
            1,
            RejectPolicy::SkipInvalid,
        );
        assert_eq!(last, Some(13));
        assert_eq!(s.stringify(), "(555) 123-4567");
    }

    #[test]
    fn test_insert_rejected_first_char_writes_nothing() {
        let mut s = seq("__");
        assert_eq!(insert_value(&mut s, &chars("x"), 0, RejectPolicy::Stop), None);
        assert_eq!(
            insert_value(&mut s, &chars("xy"), 0, RejectPolicy::SkipInvalid),
            None
        );
        assert_eq!(s.stringify(), "__");
    }

    #[test]
    fn test_insert_edge_cases() {
        let mut s = seq("__");
        assert_eq!(insert_value(&mut s, &[], 0, RejectPolicy::Stop), None);
        assert_eq!(insert_value(&mut s, &chars("1"), 2, RejectPolicy::Stop), None);
        assert_eq!(insert_value(&mut s, &chars("1"), 99, RejectPolicy::Stop), None);
        // overflow is dropped
        assert_eq!(
            insert_value(&mut s, &chars("1234"), 0, RejectPolicy::Stop),
            Some(1)
        );
        assert_eq!(s.stringify(), "12");
    }

    #[test]
    fn test_insert_overwrites_filled_slots() {
        let mut s = seq("___");
        s.insert_value("123", 0);
        insert_value(&mut s, &chars("9"), 1, RejectPolicy::Stop);
        assert_eq!(s.stringify(), "193");
    }

    #[test]
    fn test_delete_range_and_clear() {
        let mut s = seq("__-__");
        s.insert_value("1234", 0);
        assert_eq!(s.stringify(), "12-34");

        delete_value(&mut s, 0, 4);
        clear(&mut s);
        assert_eq!(s.stringify(), "__-__");
        assert_eq!(s.mutable_stringify(), "");
    }

    #[test]
    fn test_delete_partial_and_out_of_range() {
        let mut s = seq("__-__");
        s.insert_value("1234", 0);

        delete_value(&mut s, 2, 2);
        assert_eq!(s.stringify(), "12-34");

        delete_value(&mut s, 4, 1);
        assert_eq!(s.stringify(), "1_-__");

        delete_value(&mut s, 5, 50);
        assert_eq!(s.stringify(), "1_-__");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut s = seq("(___) ___-____");
        s.insert_value("5551234567", 1);
        clear(&mut s);
        let once = s.stringify();
        clear(&mut s);
        assert_eq!(s.stringify(), once);
        assert_eq!(once, "(___) ___-____");
    }

    #[test]
    fn test_change_all_chars_is_positional() {
        let mut s = seq("__-__");
        change_all_chars(&mut s, &chars("12-34"));
        assert_eq!(s.stringify(), "12-34");

        // No cascading: '3' lands on the literal index and is ignored.
        change_all_chars(&mut s, &chars("1234"));
        assert_eq!(s.stringify(), "12-4_");
    }

    #[test]
    fn test_change_all_chars_resets_rejected_and_missing() {
        let mut s = seq("____");
        s.insert_value("1234", 0);
        change_all_chars(&mut s, &chars("9x"));
        assert_eq!(s.stringify(), "9___");
    }
}
