//! Coordinate metadata for 3-axis color spaces.
//!
//! Every color space has exactly three [`Coordinate`]s. They describe which
//! values are in gamut, how percentages are interpreted when parsing, and
//! whether the axis is an angle (hue).

use std::borrow::Cow;

/// A closed interval of coordinate values.
///
/// Unbounded axes (XYZ, Lab, Oklab) use [`Range::UNBOUNDED`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Range {
    /// Lower bound (may be `-inf`).
    pub min: f64,
    /// Upper bound (may be `+inf`).
    pub max: f64,
}

impl Range {
    /// `[-inf, +inf]`.
    pub const UNBOUNDED: Self = Self::new(f64::NEG_INFINITY, f64::INFINITY);

    /// `[0, 1]`.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// Creates a range.
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True if both ends are infinite.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.min == f64::NEG_INFINITY && self.max == f64::INFINITY
    }

    /// True if `v` lies in `[min - tolerance, max + tolerance]`.
    #[inline]
    pub fn contains(&self, v: f64, tolerance: f64) -> bool {
        v >= self.min - tolerance && v <= self.max + tolerance
    }

    /// Clamps `v` into the range.
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }

    /// Maps a fraction in `[0, 1]` onto the range.
    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        self.min * (1.0 - t) + self.max * t
    }
}

/// Metadata describing one axis of a color space.
///
/// # Example
///
/// ```rust
/// use tinct_core::{Coordinate, Range};
///
/// let hue = Coordinate::angle("Hue").with_ref_range(Range::new(0.0, 360.0));
/// assert!(hue.is_angle);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    /// Human readable name.
    pub name: Cow<'static, str>,
    /// Values that are in gamut.
    pub range: Range,
    /// Values mapping to 0% and 100% when parsing. Defaults to `range` when
    /// the owning color space is built.
    pub ref_range: Option<Range>,
    /// Angle coordinates (hue) are exempt from gamut checks.
    pub is_angle: bool,
}

impl Coordinate {
    /// A bounded or unbounded linear coordinate.
    pub const fn new(name: &'static str, range: Range) -> Self {
        Self {
            name: Cow::Borrowed(name),
            range,
            ref_range: None,
            is_angle: false,
        }
    }

    /// An unbounded coordinate.
    pub const fn unbounded(name: &'static str) -> Self {
        Self::new(name, Range::UNBOUNDED)
    }

    /// An unbounded angle coordinate, in degrees.
    pub const fn angle(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            range: Range::UNBOUNDED,
            ref_range: None,
            is_angle: true,
        }
    }

    /// Sets the reference range used for percentages.
    pub const fn with_ref_range(mut self, ref_range: Range) -> Self {
        self.ref_range = Some(ref_range);
        self
    }

    /// The reference range, falling back to the gamut range.
    #[inline]
    pub fn ref_range(&self) -> Range {
        self.ref_range.unwrap_or(self.range)
    }
}

/// Coordinates shared by all RGB spaces: three `[0, 1]` channels.
pub const RGB_COORDINATES: [Coordinate; 3] = [
    Coordinate::new("Red", Range::UNIT),
    Coordinate::new("Green", Range::UNIT),
    Coordinate::new("Blue", Range::UNIT),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded() {
        assert!(Range::UNBOUNDED.is_unbounded());
        assert!(!Range::UNIT.is_unbounded());
        assert!(!Range::new(0.0, f64::INFINITY).is_unbounded());
    }

    #[test]
    fn test_contains_tolerance() {
        assert!(Range::UNIT.contains(1.00005, 7.5e-5));
        assert!(!Range::UNIT.contains(1.0001, 7.5e-5));
        assert!(!Range::UNIT.contains(f64::NAN, 7.5e-5));
        assert!(Range::UNBOUNDED.contains(1e300, 0.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Range::UNIT.clamp(1.5), 1.0);
        assert_eq!(Range::UNIT.clamp(-0.5), 0.0);
        assert_eq!(Range::UNIT.clamp(0.25), 0.25);
    }

    #[test]
    fn test_ref_range_fallback() {
        let c = Coordinate::new("Red", Range::UNIT);
        assert_eq!(c.ref_range(), Range::UNIT);
        let c = c.with_ref_range(Range::new(0.0, 255.0));
        assert_eq!(c.ref_range(), Range::new(0.0, 255.0));
    }
}
