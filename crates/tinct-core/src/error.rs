//! Error types for tinct-core operations.
//!
//! Colorimetric math in tinct is almost entirely infallible: out-of-range
//! inputs are clamped, not rejected. The exceptions are inputs that would
//! divide by zero or leave the domain of a formula, and those are reported
//! here.
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::{Chromaticity, Error};
//!
//! let err = Chromaticity::new(0.3, 0.0).unwrap_err();
//! assert!(matches!(err, Error::DegenerateChromaticity { .. }));
//! ```
//!
//! # Used By
//!
//! - `tinct-math` - chromatic adaptation with degenerate white points
//! - `tinct-color` - wrapped in `ColorError`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain errors raised by colorimetric computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The chromaticity cannot be turned into tristimulus values.
    ///
    /// Returned when `y <= 0` or either coordinate is not finite, since the
    /// XYZ derivation divides by `y`.
    #[error("degenerate chromaticity ({x}, {y}): y must be positive and finite")]
    DegenerateChromaticity {
        /// x chromaticity coordinate
        x: f64,
        /// y chromaticity coordinate
        y: f64,
    },

    /// A white point produced a zero or non-finite cone response.
    ///
    /// Chromatic adaptation divides by the source white's cone response, so
    /// such a white point cannot be adapted from.
    #[error("degenerate white point ({x}, {y}): cone response {cone:?} has a zero component")]
    DegenerateWhitePoint {
        /// x chromaticity coordinate
        x: f64,
        /// y chromaticity coordinate
        y: f64,
        /// The offending cone response
        cone: [f64; 3],
    },

    /// Correlated color temperature outside the range of the daylight locus.
    #[error("color temperature {0} K is not in range [4000, 25000]")]
    TemperatureOutOfRange(f64),
}
