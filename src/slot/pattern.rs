//! Character predicates for mutable slots.

use bitflags::bitflags;
use std::fmt;
use std::sync::Arc;

bitflags! {
    /// Character classes a mutable slot can accept.
    ///
    /// Every `char` falls into exactly one base class; [`CharClass::of`]
    /// reports which. Patterns combine classes with bitwise OR.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CharClass: u8 {
        /// ASCII digits `0-9`.
        const DIGIT        = 0x01;
        /// Lowercase letters.
        const LOWER        = 0x02;
        /// Uppercase letters.
        const UPPER        = 0x04;
        /// Letters without case (CJK, Arabic, ...).
        const OTHER_LETTER = 0x08;
        /// Whitespace.
        const WHITESPACE   = 0x10;
        /// ASCII punctuation.
        const PUNCT        = 0x20;
        /// Everything else.
        const OTHER        = 0x40;

        const ALPHA = Self::LOWER.bits() | Self::UPPER.bits() | Self::OTHER_LETTER.bits();
        const ALNUM = Self::ALPHA.bits() | Self::DIGIT.bits();
        const ANY   = 0x7F;
    }
}

impl CharClass {
    /// The base class of a character.
    #[must_use]
    pub fn of(ch: char) -> Self {
        if ch.is_ascii_digit() {
            Self::DIGIT
        } else if ch.is_lowercase() {
            Self::LOWER
        } else if ch.is_uppercase() {
            Self::UPPER
        } else if ch.is_alphabetic() {
            Self::OTHER_LETTER
        } else if ch.is_whitespace() {
            Self::WHITESPACE
        } else if ch.is_ascii_punctuation() {
            Self::PUNCT
        } else {
            Self::OTHER
        }
    }

    /// Check whether `ch` belongs to any class in this set.
    #[must_use]
    pub fn accepts(self, ch: char) -> bool {
        self.intersects(Self::of(ch))
    }
}

type Predicate = Arc<dyn Fn(char) -> bool + Send + Sync + 'static>;

/// Decides whether a candidate character may occupy a mutable slot.
#[derive(Clone)]
pub enum Pattern {
    /// Accept any character in the class set.
    Class(CharClass),
    /// Accept exactly these characters.
    OneOf(Vec<char>),
    /// Arbitrary predicate.
    Custom(Predicate),
}

impl Pattern {
    /// ASCII digits.
    #[must_use]
    pub fn digit() -> Self {
        Self::Class(CharClass::DIGIT)
    }

    /// Letters of any script.
    #[must_use]
    pub fn alpha() -> Self {
        Self::Class(CharClass::ALPHA)
    }

    /// Letters or digits.
    #[must_use]
    pub fn alphanumeric() -> Self {
        Self::Class(CharClass::ALNUM)
    }

    /// Any character at all.
    #[must_use]
    pub fn any() -> Self {
        Self::Class(CharClass::ANY)
    }

    /// A fixed set of characters.
    #[must_use]
    pub fn one_of(chars: &str) -> Self {
        Self::OneOf(chars.chars().collect())
    }

    /// A custom predicate.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// Test a candidate character.
    #[must_use]
    pub fn matches(&self, ch: char) -> bool {
        match self {
            Self::Class(class) => class.accepts(ch),
            Self::OneOf(chars) => chars.contains(&ch),
            Self::Custom(predicate) => predicate(ch),
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => f.debug_tuple("Class").field(class).finish(),
            Self::OneOf(chars) => f.debug_tuple("OneOf").field(chars).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_class_of() {
        assert_eq!(CharClass::of('7'), CharClass::DIGIT);
        assert_eq!(CharClass::of('a'), CharClass::LOWER);
        assert_eq!(CharClass::of('Q'), CharClass::UPPER);
        assert_eq!(CharClass::of('中'), CharClass::OTHER_LETTER);
        assert_eq!(CharClass::of(' '), CharClass::WHITESPACE);
        assert_eq!(CharClass::of('-'), CharClass::PUNCT);
        assert_eq!(CharClass::of('€'), CharClass::OTHER);
    }

    #[test]
    fn test_unions() {
        assert!(CharClass::ALPHA.accepts('x'));
        assert!(CharClass::ALPHA.accepts('X'));
        assert!(!CharClass::ALPHA.accepts('1'));
        assert!(CharClass::ALNUM.accepts('1'));
        assert!(CharClass::ANY.accepts('€'));
        assert!(CharClass::ANY.accepts(' '));
    }

    #[test]
    fn test_non_ascii_digits_are_not_digits() {
        // Arabic-Indic digit seven
        assert!(!Pattern::digit().matches('\u{0667}'));
    }

    #[test]
    fn test_pattern_variants() {
        assert!(Pattern::digit().matches('0'));
        assert!(!Pattern::digit().matches('o'));

        let hex = Pattern::one_of("0123456789abcdef");
        assert!(hex.matches('c'));
        assert!(!hex.matches('g'));

        let even = Pattern::custom(|c| c.to_digit(10).is_some_and(|d| d % 2 == 0));
        assert!(even.matches('4'));
        assert!(!even.matches('5'));
    }

    #[test]
    fn test_pattern_debug() {
        assert_eq!(format!("{:?}", Pattern::custom(|_| true)), "Custom(..)");
        assert!(format!("{:?}", Pattern::one_of("ab")).contains("'a'"));
    }
}
