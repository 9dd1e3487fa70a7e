//! Color difference metrics.
//!
//! All metrics are Euclidean distances in some space; they differ only in
//! which space and how the axes are weighted.

use crate::color::Color;
use crate::space::Space;
use crate::spaces;

/// Euclidean distance between two colors in `space`.
pub fn distance(reference: &Color, sample: &Color, space: &Space) -> f64 {
    let r = reference.convert(space).values();
    let s = sample.convert(space).values();
    (r[0] - s[0]).hypot(r[1] - s[1]).hypot(r[2] - s[2])
}

/// CIE 1976 color difference: distance in CIE Lab.
pub fn delta_e76(reference: &Color, sample: &Color) -> f64 {
    distance(reference, sample, &spaces::lab())
}

/// Distance in Oklab.
///
/// A difference of about 0.02 is just noticeable.
pub fn delta_e_ok(reference: &Color, sample: &Color) -> f64 {
    distance(reference, sample, &spaces::oklab())
}

/// Distance in Oklab with the a and b axes scaled by 2, which is more
/// uniform with respect to lightness differences.
pub fn delta_e_ok2(reference: &Color, sample: &Color) -> f64 {
    let oklab = spaces::oklab();
    let r = reference.convert(&oklab).values();
    let s = sample.convert(&oklab).values();
    (r[0] - s[0]).hypot(2.0 * (r[1] - s[1])).hypot(2.0 * (r[2] - s[2]))
}

/// Selectable color difference metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaE {
    /// [`delta_e_ok`]
    #[default]
    Ok,
    /// [`delta_e_ok2`]
    Ok2,
    /// [`delta_e76`]
    E76,
}

impl DeltaE {
    /// Computes the difference between two colors.
    pub fn compute(self, reference: &Color, sample: &Color) -> f64 {
        match self {
            Self::Ok => delta_e_ok(reference, sample),
            Self::Ok2 => delta_e_ok2(reference, sample),
            Self::E76 => delta_e76(reference, sample),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_same_color_is_zero() {
        let c = Color::new(&srgb(), 0.3, 0.6, 0.9);
        assert_eq!(delta_e_ok(&c, &c), 0.0);
        assert_eq!(delta_e76(&c, &c), 0.0);
        assert_eq!(delta_e_ok2(&c, &c), 0.0);
    }

    #[test]
    fn test_black_white() {
        let black = Color::new(&srgb(), 0.0, 0.0, 0.0);
        let white = Color::new(&srgb(), 1.0, 1.0, 1.0);
        assert_abs_diff_eq!(delta_e_ok(&black, &white), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(delta_e76(&black, &white), 100.0, epsilon = 1e-2);
    }

    #[test]
    fn test_ok2_weights_chroma() {
        let a = Color::new(&oklab(), 0.5, 0.0, 0.0);
        let b = Color::new(&oklab(), 0.5, 0.1, 0.0);
        assert_abs_diff_eq!(delta_e_ok(&a, &b), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(delta_e_ok2(&a, &b), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(DeltaE::Ok2.compute(&a, &b), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let a = Color::new(&display_p3(), 0.9, 0.2, 0.1);
        let b = Color::new(&lch(), 60.0, 40.0, 200.0);
        assert_abs_diff_eq!(delta_e76(&a, &b), delta_e76(&b, &a), epsilon = 1e-12);
    }
}
