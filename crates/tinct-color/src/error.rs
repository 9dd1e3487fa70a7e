//! Error types for color operations.
//!
//! Conversion between registered spaces never fails: a malformed graph is a
//! programming error and panics at construction time. What can fail is
//! building new spaces from user supplied white points or primaries, and
//! parsing color strings.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Colorimetric domain error (degenerate white point, ...).
    #[error(transparent)]
    Core(#[from] tinct_core::Error),

    /// Primaries do not span a 3D space, so no RGB to XYZ matrix exists.
    #[error("primaries of '{0}' are linearly dependent")]
    SingularPrimaries(String),

    /// Parse error.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Failure to parse a CSS `color()` string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input does not match the `color(<id> <n> <n> <n>[ / <a>])` grammar.
    #[error("malformed color string: {0:?}")]
    Malformed(String),

    /// The color space id is not registered.
    #[error("unknown color space: {0:?}")]
    UnknownSpace(String),

    /// A component matched the grammar but is not a finite number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_core() {
        let err: ColorError = tinct_core::Error::TemperatureOutOfRange(1.0).into();
        assert!(matches!(err, ColorError::Core(_)));
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_parse_display() {
        let err = ParseError::UnknownSpace("foo".into());
        assert_eq!(err.to_string(), "unknown color space: \"foo\"");
    }
}
