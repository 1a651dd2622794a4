//! Slot storage for one mask instance.
//!
//! [`SlotSequence`] owns the ordered slots and a precomputed table of nearest
//! mutable neighbors. Length and slot kinds are fixed at construction; only
//! the values of mutable slots change afterwards.
//!
//! # Examples
//!
//! ```
//! use slotmask::{SlotSequence, Template};
//!
//! let mut seq = SlotSequence::new(Template::parse("__-__").unwrap(), '_').unwrap();
//! seq.insert_value("1234", 0);
//! assert_eq!(seq.stringify(), "12-34");
//! assert_eq!(seq.mutable_stringify(), "1234");
//!
//! seq.delete_value(3, 4);
//! assert_eq!(seq.stringify(), "12-__");
//! ```

use crate::config::{MaskOptions, RejectPolicy};
use crate::error::{Error, Result};
use crate::modifier;
use crate::slot::{NearMutable, Slot, SlotKind, SlotSpec, Template};

/// Ordered slots of one masked input.
#[derive(Clone, Debug)]
pub struct SlotSequence {
    slots: Vec<Slot>,
    /// Neighbor table, parallel to `slots`.
    near: Vec<NearMutable>,
    first_mutable: Option<usize>,
    last_mutable: Option<usize>,
    placeholder: char,
}

impl SlotSequence {
    /// Build a sequence from a template.
    ///
    /// Mutable slots start out holding `placeholder`. Fails on an empty
    /// template or a control-character placeholder.
    pub fn new(template: Template, placeholder: char) -> Result<Self> {
        if template.is_empty() {
            return Err(Error::EmptyTemplate);
        }
        MaskOptions::with_placeholder(placeholder).validate()?;

        let slots: Vec<Slot> = template
            .into_iter()
            .enumerate()
            .map(|(index, spec)| match spec {
                SlotSpec::Literal(ch) => Slot::new(index, ch, SlotKind::Permanent),
                SlotSpec::Mutable(pattern) => {
                    Slot::new(index, placeholder, SlotKind::Mutable(pattern))
                }
            })
            .collect();

        let near = compute_neighbors(&slots);
        let first_mutable = slots.iter().position(Slot::is_mutable);
        let last_mutable = slots.iter().rposition(Slot::is_mutable);

        Ok(Self {
            slots,
            near,
            first_mutable,
            last_mutable,
            placeholder,
        })
    }

    /// Number of slots. Never changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; construction rejects empty templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// All slot values in order, placeholders included.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.slots.iter().map(Slot::value).collect()
    }

    /// Values of mutable slots only, with placeholders dropped.
    ///
    /// This is the unmasked value the user has entered.
    #[must_use]
    pub fn mutable_stringify(&self) -> String {
        self.slots
            .iter()
            .filter(|slot| slot.is_mutable() && slot.value() != self.placeholder)
            .map(Slot::value)
            .collect()
    }

    /// Bounds-checked slot lookup.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Nearest mutable neighbors of the slot at `index`.
    #[must_use]
    pub fn near_mutable(&self, index: usize) -> Option<NearMutable> {
        self.near.get(index).copied()
    }

    /// Index of the first mutable slot, or [`len`](Self::len) when the mask
    /// has none (nothing can be inserted).
    #[must_use]
    pub fn first_mutable_index(&self) -> usize {
        self.first_mutable.unwrap_or(self.slots.len())
    }

    /// Index of the last mutable slot, if any.
    #[must_use]
    pub fn last_mutable_index(&self) -> Option<usize> {
        self.last_mutable
    }

    /// Caret position just past the last mutable slot.
    ///
    /// Equals [`len`](Self::len) when the mask has no mutable slots.
    #[must_use]
    pub fn past_last_mutable(&self) -> usize {
        self.last_mutable.map_or(self.slots.len(), |index| index + 1)
    }

    #[must_use]
    pub fn has_mutable(&self) -> bool {
        self.first_mutable.is_some()
    }

    /// Check whether every mutable slot holds a non-placeholder value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots
            .iter()
            .filter(|slot| slot.is_mutable())
            .all(|slot| slot.value() != self.placeholder)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }

    /// Cascade `value` into the slots starting at `index`.
    ///
    /// Returns the index of the last slot written. See
    /// [`modifier::insert_value`].
    pub fn insert_value(&mut self, value: &str, index: usize) -> Option<usize> {
        self.insert_value_with(value, index, RejectPolicy::Stop)
    }

    /// [`insert_value`](Self::insert_value) with an explicit reject policy.
    pub fn insert_value_with(
        &mut self,
        value: &str,
        index: usize,
        policy: RejectPolicy,
    ) -> Option<usize> {
        let chars: Vec<char> = value.chars().collect();
        modifier::insert_value(self, &chars, index, policy)
    }

    /// Reset mutable slots in `from..=to` to the placeholder.
    pub fn delete_value(&mut self, from: usize, to: usize) {
        modifier::delete_value(self, from, to);
    }

    /// Reset every mutable slot to the placeholder.
    pub fn clear(&mut self) {
        modifier::clear(self);
    }

    /// Positional overwrite of every mutable slot from `value`.
    pub fn change_all_chars(&mut self, value: &str) {
        let chars: Vec<char> = value.chars().collect();
        modifier::change_all_chars(self, &chars);
    }
}

fn compute_neighbors(slots: &[Slot]) -> Vec<NearMutable> {
    let mut near = vec![NearMutable::default(); slots.len()];

    let mut last_seen = None;
    for (index, slot) in slots.iter().enumerate() {
        near[index].left = last_seen;
        if slot.is_mutable() {
            last_seen = Some(index);
        }
    }

    let mut last_seen = None;
    for (index, slot) in slots.iter().enumerate().rev() {
        near[index].right = last_seen;
        if slot.is_mutable() {
            last_seen = Some(index);
        }
    }

    near
}
