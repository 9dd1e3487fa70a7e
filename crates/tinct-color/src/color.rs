//! Colors: three coordinates tagged with their space, plus alpha.

use std::fmt;
use std::sync::Arc;

use tinct_math::{lerp, lerp3};

use crate::gamut::GamutMapper;
use crate::space::Space;

/// Spaces that CSS Color 4 predefines. Other ids are written with a `--`
/// prefix when serializing.
const CSS_PREDEFINED: [&str; 8] = [
    "srgb",
    "srgb-linear",
    "display-p3",
    "a98-rgb",
    "prophoto-rgb",
    "rec2020",
    "xyz-d50",
    "xyz-d65",
];

/// A color in a specific color space.
///
/// Colors are immutable values. Alpha is clamped to `[0, 1]` on
/// construction and carried unchanged through conversions.
///
/// # Example
///
/// ```rust
/// use tinct_color::{spaces, Color};
///
/// let pink = Color::new(&spaces::oklch(), 0.65, 0.29, 0.0);
/// let srgb = pink.convert(&spaces::srgb());
/// assert!(!srgb.in_gamut());
/// assert!(pink.map_to_gamut(&spaces::srgb()).in_gamut());
/// ```
#[derive(Clone)]
pub struct Color {
    values: [f64; 3],
    space: Space,
    alpha: f64,
}

impl Color {
    /// Creates an opaque color.
    pub fn new(space: &Space, v0: f64, v1: f64, v2: f64) -> Self {
        Self::with_alpha(space, v0, v1, v2, 1.0)
    }

    /// Creates a color with the given alpha, clamped to `[0, 1]`.
    pub fn with_alpha(space: &Space, v0: f64, v1: f64, v2: f64, alpha: f64) -> Self {
        Self::from_values(space, [v0, v1, v2], alpha)
    }

    /// Creates a color from a coordinate array.
    pub fn from_values(space: &Space, values: [f64; 3], alpha: f64) -> Self {
        Self {
            values,
            space: Arc::clone(space),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// The coordinates.
    #[inline]
    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    /// The color space.
    #[inline]
    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Alpha in `[0, 1]`.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Same space and alpha, new coordinates.
    pub fn with_values(&self, values: [f64; 3]) -> Self {
        Self {
            values,
            space: Arc::clone(&self.space),
            alpha: self.alpha,
        }
    }

    /// Converts to another space without gamut mapping.
    pub fn convert(&self, to: &Space) -> Self {
        if Arc::ptr_eq(&self.space, to) {
            return self.clone();
        }
        Self {
            values: self.space.convert(to, self.values),
            space: Arc::clone(to),
            alpha: self.alpha,
        }
    }

    /// True if the color is within the gamut of its own space.
    pub fn in_gamut(&self) -> bool {
        self.space.in_gamut(self.values)
    }

    /// True if the color would be in gamut after converting to `space`.
    pub fn in_gamut_of(&self, space: &Space) -> bool {
        if space.is_unbounded() {
            return true;
        }
        space.in_gamut(self.space.convert(space, self.values))
    }

    /// Converts to `to` and maps the result into its gamut, using the CSS
    /// Color 4 algorithm with default settings.
    pub fn map_to_gamut(&self, to: &Space) -> Self {
        GamutMapper::default().map(self, to)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.space, &other.space) && self.values == other.values && self.alpha == other.alpha
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("space", &self.space.id())
            .field("values", &self.values)
            .field("alpha", &self.alpha)
            .finish()
    }
}

/// Serializes as CSS `color()`, e.g. `color(srgb 1.000000 0.000000 0.000000)`.
///
/// Alpha is written only when below 1.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.space.id();
        let prefix = if CSS_PREDEFINED.contains(&id) { "" } else { "--" };
        let [a, b, c] = self.values;
        write!(f, "color({prefix}{id} {a:.6} {b:.6} {c:.6}")?;
        if self.alpha < 1.0 {
            write!(f, " / {:.6}", self.alpha)?;
        }
        f.write_str(")")
    }
}

/// Interpolates `num` colors from `c1` to `c2`.
///
/// Coordinates and alpha are interpolated linearly in the `interp` space
/// and the results converted to `out`. The first and last colors are
/// exactly the endpoints (as converted). `num == 1` yields only the start,
/// `num == 0` yields nothing.
///
/// # Example
///
/// ```rust
/// use tinct_color::{spaces, step, Color};
///
/// let black = Color::new(&spaces::srgb(), 0.0, 0.0, 0.0);
/// let white = Color::new(&spaces::srgb(), 1.0, 1.0, 1.0);
/// let ramp: Vec<_> = step(&black, &white, &spaces::oklab(), &spaces::srgb(), 5).collect();
/// assert_eq!(ramp.len(), 5);
/// ```
pub fn step(c1: &Color, c2: &Color, interp: &Space, out: &Space, num: usize) -> impl Iterator<Item = Color> + use<> {
    let start = c1.convert(interp);
    let end = c2.convert(interp);
    let out = Arc::clone(out);
    let last = num.saturating_sub(1).max(1) as f64;

    (0..num).map(move |i| {
        let t = i as f64 / last;
        let values = lerp3(start.values, end.values, t);
        let alpha = lerp(start.alpha, end.alpha, t);
        Color::from_values(&start.space, values, alpha).convert(&out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::*;

    #[test]
    fn test_alpha_clamped() {
        assert_eq!(Color::with_alpha(&srgb(), 0.0, 0.0, 0.0, 2.0).alpha(), 1.0);
        assert_eq!(Color::with_alpha(&srgb(), 0.0, 0.0, 0.0, -1.0).alpha(), 0.0);
    }

    #[test]
    fn test_display() {
        let c = Color::new(&srgb(), 1.0, 0.0, 0.0);
        assert_eq!(c.to_string(), "color(srgb 1.000000 0.000000 0.000000)");

        let c = Color::with_alpha(&oklch(), 0.65, 0.29, 0.0, 0.5);
        assert_eq!(c.to_string(), "color(--oklch 0.650000 0.290000 0.000000 / 0.500000)");

        let c = Color::new(&xyz_d65(), 0.5, 0.5, 0.5);
        assert_eq!(c.to_string(), "color(xyz-d65 0.500000 0.500000 0.500000)");
    }

    #[test]
    fn test_convert_same_space_is_clone() {
        let c = Color::with_alpha(&lab(), 50.0, 20.0, -30.0, 0.25);
        assert_eq!(c.convert(&lab()), c);
    }

    #[test]
    fn test_convert_keeps_alpha() {
        let c = Color::with_alpha(&srgb(), 0.2, 0.4, 0.6, 0.3);
        assert_eq!(c.convert(&oklch()).alpha(), 0.3);
    }

    #[test]
    fn test_eq_requires_same_node() {
        let a = Color::new(&srgb(), 0.5, 0.5, 0.5);
        let b = Color::new(&display_p3(), 0.5, 0.5, 0.5);
        assert_ne!(a, b);
    }

    #[test]
    fn test_in_gamut_of() {
        let c = Color::new(&oklch(), 0.65, 0.29, 0.0);
        assert!(c.in_gamut());
        assert!(!c.in_gamut_of(&srgb()));
        assert!(c.in_gamut_of(&xyz_d65()));
    }

    #[test]
    fn test_step_counts() {
        let a = Color::new(&srgb(), 0.0, 0.0, 0.0);
        let b = Color::new(&srgb(), 1.0, 1.0, 1.0);
        assert_eq!(step(&a, &b, &srgb(), &srgb(), 0).count(), 0);
        let one: Vec<_> = step(&a, &b, &srgb(), &srgb(), 1).collect();
        assert_eq!(one, [a.clone()]);
    }

    #[test]
    fn test_step_alpha() {
        let a = Color::with_alpha(&srgb(), 0.0, 0.0, 0.0, 0.0);
        let b = Color::new(&srgb(), 1.0, 1.0, 1.0);
        let alphas: Vec<_> = step(&a, &b, &srgb(), &srgb(), 3).map(|c| c.alpha()).collect();
        assert_eq!(alphas, [0.0, 0.5, 1.0]);
    }
}
