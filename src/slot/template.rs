//! Slot templates and mask-string parsing.

use super::Pattern;
use crate::error::{Error, Result};

/// Escape character in mask strings: the next character is a literal.
pub const MASK_ESCAPE: char = '\\';

/// Specification for one slot of a template.
#[derive(Clone, Debug)]
pub enum SlotSpec {
    /// Permanent literal character.
    Literal(char),
    /// Mutable slot accepting characters that match the pattern.
    Mutable(Pattern),
}

impl SlotSpec {
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// Ordered slot layout for one mask.
///
/// Templates are usually built once from a mask definition and handed to
/// [`SlotSequence::new`](crate::SlotSequence::new). Layout never changes
/// afterwards.
#[derive(Clone, Debug, Default)]
pub struct Template {
    specs: Vec<SlotSpec>,
}

impl Template {
    /// Create an empty template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal slot.
    #[must_use]
    pub fn literal(mut self, ch: char) -> Self {
        self.specs.push(SlotSpec::Literal(ch));
        self
    }

    /// Append every character of `text` as a literal slot.
    #[must_use]
    pub fn literals(mut self, text: &str) -> Self {
        self.specs.extend(text.chars().map(SlotSpec::Literal));
        self
    }

    /// Append a mutable slot.
    #[must_use]
    pub fn mutable(mut self, pattern: Pattern) -> Self {
        self.specs.push(SlotSpec::Mutable(pattern));
        self
    }

    /// Append `count` mutable slots sharing one pattern.
    #[must_use]
    pub fn repeat(mut self, pattern: &Pattern, count: usize) -> Self {
        self.specs
            .extend(std::iter::repeat_n(pattern, count).cloned().map(SlotSpec::Mutable));
        self
    }

    /// Parse a mask string.
    ///
    /// Definition characters:
    ///
    /// | Char          | Slot                      |
    /// |---------------|---------------------------|
    /// | `_`, `9`, `0` | digit                     |
    /// | `a`           | letter                    |
    /// | `*`           | letter or digit           |
    /// | `\x`          | literal `x`               |
    /// | anything else | literal                   |
    ///
    /// ```
    /// use slotmask::Template;
    ///
    /// let template = Template::parse("(___) ___-____").unwrap();
    /// assert_eq!(template.len(), 14);
    /// assert_eq!(template.mutable_count(), 10);
    /// ```
    pub fn parse(mask: &str) -> Result<Self> {
        let mut specs = Vec::with_capacity(mask.len());
        let mut chars = mask.chars().enumerate();

        while let Some((position, ch)) = chars.next() {
            let spec = match ch {
                MASK_ESCAPE => match chars.next() {
                    Some((_, escaped)) => SlotSpec::Literal(escaped),
                    None => {
                        return Err(Error::InvalidMask {
                            position,
                            reason: "dangling escape",
                        });
                    }
                },
                '_' | '9' | '0' => SlotSpec::Mutable(Pattern::digit()),
                'a' => SlotSpec::Mutable(Pattern::alpha()),
                '*' => SlotSpec::Mutable(Pattern::alphanumeric()),
                other => SlotSpec::Literal(other),
            };
            specs.push(spec);
        }

        if specs.is_empty() {
            return Err(Error::EmptyTemplate);
        }
        Ok(Self { specs })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Number of mutable slots.
    #[must_use]
    pub fn mutable_count(&self) -> usize {
        self.specs.iter().filter(|spec| !spec.is_literal()).count()
    }

    #[must_use]
    pub fn specs(&self) -> &[SlotSpec] {
        &self.specs
    }
}

impl FromIterator<SlotSpec> for Template {
    fn from_iter<I: IntoIterator<Item = SlotSpec>>(iter: I) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Template {
    type Item = SlotSpec;
    type IntoIter = std::vec::IntoIter<SlotSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.into_iter()
    }
}
