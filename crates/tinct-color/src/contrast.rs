//! Luminance contrast metrics.
//!
//! Both metrics use relative luminance (Y of XYZ D65), with negative values
//! treated as zero. They are symmetric in their arguments.

use crate::color::Color;
use crate::spaces;

/// Returned by [`contrast_weber`] when the darker color is black. The
/// darkest non-black 8-bit sRGB color gives about 45647.
pub const WEBER_MAX: f64 = 50_000.0;

fn luminance(c: &Color) -> f64 {
    c.convert(&spaces::xyz_d65()).values()[1].max(0.0)
}

// (brighter, darker)
fn luminances(c1: &Color, c2: &Color) -> (f64, f64) {
    let (y1, y2) = (luminance(c1), luminance(c2));
    if y2 > y1 { (y2, y1) } else { (y1, y2) }
}

/// Weber contrast `(Y1 - Y2) / Y2`, where `Y1` is the brighter luminance.
pub fn contrast_weber(c1: &Color, c2: &Color) -> f64 {
    let (y1, y2) = luminances(c1, c2);
    if y2 == 0.0 { WEBER_MAX } else { (y1 - y2) / y2 }
}

/// Michelson contrast `(Y1 - Y2) / (Y1 + Y2)`, in `[0, 1]`.
pub fn contrast_michelson(c1: &Color, c2: &Color) -> f64 {
    let (y1, y2) = luminances(c1, c2);
    if y1 + y2 == 0.0 { 0.0 } else { (y1 - y2) / (y1 + y2) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::srgb;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_weber() {
        let black = Color::new(&srgb(), 0.0, 0.0, 0.0);
        let white = Color::new(&srgb(), 1.0, 1.0, 1.0);
        let grey = Color::new(&srgb(), 0.5, 0.5, 0.5);
        assert_eq!(contrast_weber(&white, &black), WEBER_MAX);
        assert_eq!(contrast_weber(&black, &black), WEBER_MAX);
        assert_abs_diff_eq!(contrast_weber(&white, &grey), contrast_weber(&grey, &white), epsilon = 1e-15);
        assert!(contrast_weber(&white, &grey) > 0.0);
    }

    #[test]
    fn test_michelson() {
        let black = Color::new(&srgb(), 0.0, 0.0, 0.0);
        let white = Color::new(&srgb(), 1.0, 1.0, 1.0);
        assert_eq!(contrast_michelson(&black, &black), 0.0);
        assert_abs_diff_eq!(contrast_michelson(&black, &white), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(contrast_michelson(&white, &white), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_luminance_is_black() {
        let below_black = Color::new(&srgb(), -0.5, -0.5, -0.5);
        let black = Color::new(&srgb(), 0.0, 0.0, 0.0);
        assert_eq!(contrast_michelson(&below_black, &black), 0.0);
    }
}
