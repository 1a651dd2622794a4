//! Error types for slotmask.

use std::fmt;

/// Result type alias for slotmask operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for slotmask operations.
///
/// Errors only surface while a mask is being built. Once a
/// [`SlotSequence`](crate::SlotSequence) exists, editing never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The template has no slots at all.
    EmptyTemplate,
    /// The mask string could not be turned into a template.
    InvalidMask { position: usize, reason: &'static str },
    /// The placeholder cannot be rendered inside a single-line input.
    InvalidPlaceholder(char),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTemplate => write!(f, "mask template has no slots"),
            Self::InvalidMask { position, reason } => {
                write!(f, "invalid mask at position {position}: {reason}")
            }
            Self::InvalidPlaceholder(c) => {
                write!(f, "invalid placeholder character: {c:?}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyTemplate;
        assert!(err.to_string().contains("no slots"));

        let err = Error::InvalidMask {
            position: 4,
            reason: "dangling escape",
        };
        assert_eq!(
            err.to_string(),
            "invalid mask at position 4: dangling escape"
        );

        let err = Error::InvalidPlaceholder('\n');
        assert!(err.to_string().contains("'\\n'"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::EmptyTemplate);
    }
}
