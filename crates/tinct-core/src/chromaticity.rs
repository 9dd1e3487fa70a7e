//! CIE 1931 xy chromaticities and standard white points.
//!
//! A [`Chromaticity`] is the 2D projection of a color onto the xy plane. It is
//! used to describe white points: the neutral reference of a color space and
//! the input of every chromatic adaptation.
//!
//! # White points
//!
//! There are a dozen subtly different definitions of D65 and D50 in the wild.
//! The CSS Color 4 spaces use [`SRGB_D65`] and [`CSS_D50`], which are the CIE
//! values rounded to four digits. The full-precision CIE 15:2004 values are
//! provided as [`cie2004`] (2° observer) and [`cie2004_10deg`] (10° observer).
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::{Chromaticity, SRGB_D65};
//!
//! let xyz = SRGB_D65.xyz();
//! assert_eq!(xyz[1], 1.0);
//!
//! let warm = Chromaticity::daylight(5000.0).unwrap();
//! assert!(warm.x() > SRGB_D65.x());
//! ```

use crate::error::{Error, Result};

/// A color's chromaticity in the CIE 1931 xy color space.
///
/// The `y` coordinate is always positive and both coordinates are finite,
/// which makes [`Chromaticity::xyz`] total.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chromaticity {
    x: f64,
    y: f64,
}

impl Chromaticity {
    /// Creates a chromaticity, rejecting values that cannot be converted to
    /// tristimulus values.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateChromaticity`] when `y <= 0` or a coordinate is NaN
    /// or infinite.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !(x.is_finite() && y.is_finite() && y > 0.0) {
            return Err(Error::DegenerateChromaticity { x, y });
        }
        Ok(Self { x, y })
    }

    /// Constant constructor for the predefined tables. `y` must be positive.
    const fn from_const(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The x coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Tristimulus values with `Y = 1`.
    ///
    /// # Formula
    ///
    /// ```text
    /// X = x / y
    /// Y = 1
    /// Z = (1 - x - y) / y
    /// ```
    #[inline]
    pub fn xyz(&self) -> [f64; 3] {
        [self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y]
    }

    /// Computes a CIE daylight illuminant at a nominal correlated color
    /// temperature in Kelvin.
    ///
    /// The resulting illuminant's CCT is close to, but not exactly, the
    /// nominal value, and because of rounding in the CIE tables the result
    /// won't exactly match the predefined D-series white points.
    ///
    /// # Errors
    ///
    /// [`Error::TemperatureOutOfRange`] outside of [4000 K, 25000 K], where
    /// the daylight locus is not defined.
    pub fn daylight(temp: f64) -> Result<Self> {
        // CIE 15:2004 equations 3.2 to 3.4
        let x = if (4000.0..=7000.0).contains(&temp) {
            -4.6070e9 / temp.powi(3) + 2.9678e6 / temp.powi(2) + 0.09911e3 / temp + 0.244063
        } else if temp > 7000.0 && temp <= 25_000.0 {
            -2.0064e9 / temp.powi(3) + 1.9018e6 / temp.powi(2) + 0.24748e3 / temp + 0.237040
        } else {
            return Err(Error::TemperatureOutOfRange(temp));
        };
        let y = -3.0 * x * x + 2.870 * x - 0.275;
        Self::new(x, y)
    }
}

/// The D50 white point as defined in CSS Color 4 (CIE D50 rounded to 4 digits).
pub const CSS_D50: Chromaticity = Chromaticity::from_const(0.3457, 0.3585);

/// The D65 white point as specified by sRGB (CIE D65 rounded to 4 digits).
pub const SRGB_D65: Chromaticity = Chromaticity::from_const(0.3127, 0.3290);

/// Standard illuminants for the CIE 1931 2° standard observer, from tables
/// T.3 and T.8 in CIE 15:2004.
pub mod cie2004 {
    use super::Chromaticity;

    /// Illuminant A (tungsten, ~2856 K).
    pub const A: Chromaticity = Chromaticity::from_const(0.44758, 0.40745);
    /// Illuminant C (average daylight, deprecated).
    pub const C: Chromaticity = Chromaticity::from_const(0.31006, 0.31616);
    /// Illuminant D50.
    pub const D50: Chromaticity = Chromaticity::from_const(0.34567, 0.35851);
    /// Illuminant D55.
    pub const D55: Chromaticity = Chromaticity::from_const(0.33243, 0.34744);
    /// Illuminant D65.
    pub const D65: Chromaticity = Chromaticity::from_const(0.31272, 0.32903);
    /// Illuminant D75.
    pub const D75: Chromaticity = Chromaticity::from_const(0.29903, 0.31488);
    /// Fluorescent FL2 (cool white).
    pub const FL2: Chromaticity = Chromaticity::from_const(0.3721, 0.3751);
    /// Fluorescent FL7 (broadband daylight).
    pub const FL7: Chromaticity = Chromaticity::from_const(0.3129, 0.3292);
    /// Fluorescent FL11 (narrow tri-band).
    pub const FL11: Chromaticity = Chromaticity::from_const(0.3805, 0.3769);
    /// High pressure HP1 (standard sodium).
    pub const HP1: Chromaticity = Chromaticity::from_const(0.533, 0.415);
}

/// Standard illuminants for the CIE 1964 10° standard observer, from table
/// T.3 in CIE 15:2004.
pub mod cie2004_10deg {
    use super::Chromaticity;

    /// Illuminant A.
    pub const A: Chromaticity = Chromaticity::from_const(0.45117, 0.40594);
    /// Illuminant C.
    pub const C: Chromaticity = Chromaticity::from_const(0.31039, 0.31905);
    /// Illuminant D50.
    pub const D50: Chromaticity = Chromaticity::from_const(0.34773, 0.35952);
    /// Illuminant D55.
    pub const D55: Chromaticity = Chromaticity::from_const(0.33412, 0.34877);
    /// Illuminant D65.
    pub const D65: Chromaticity = Chromaticity::from_const(0.31381, 0.33098);
    /// Illuminant D75.
    pub const D75: Chromaticity = Chromaticity::from_const(0.29968, 0.31740);
}
