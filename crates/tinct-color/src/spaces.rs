//! Built-in color spaces.
//!
//! Each function returns a shared handle to a lazily built, process-wide
//! node, so repeated calls yield pointer-identical spaces.
//!
//! | Id | Base | Transform |
//! |----|------|-----------|
//! | `xyz-d65` | (root) | |
//! | `xyz-d50` | `xyz-d65` | Bradford D50 to D65 |
//! | `srgb-linear` | `xyz-d65` | sRGB primaries |
//! | `srgb` | `srgb-linear` | sRGB curve |
//! | `display-p3-linear` | `xyz-d65` | P3 primaries |
//! | `display-p3` | `display-p3-linear` | sRGB curve |
//! | `a98-rgb-linear` | `xyz-d65` | Adobe RGB primaries |
//! | `a98-rgb` | `a98-rgb-linear` | gamma 563/256 |
//! | `prophoto-rgb-linear` | `xyz-d50` | ProPhoto primaries |
//! | `prophoto-rgb` | `prophoto-rgb-linear` | gamma 1.8 with toe |
//! | `rec2020-linear` | `xyz-d65` | Rec. 2020 primaries |
//! | `rec2020` | `rec2020-linear` | Rec. 2020 curve |
//! | `oklab` | `xyz-d65` | Oklab |
//! | `oklch` | `oklab` | polar |
//! | `lab` | `xyz-d50` | CIE Lab (D50) |
//! | `lch` | `lab` | polar |

use std::sync::OnceLock;

use tinct_core::{Coordinate, Range, CSS_D50, SRGB_D65};
use tinct_primaries::{Primaries, ADOBE_RGB, DISPLAY_P3, PROPHOTO_RGB, REC2020, SRGB};
use tinct_transfer::gamma::A98_GAMMA;

use crate::space::{ColorSpace, Space};
use crate::transform::Transform;

const XYZ_COORDINATES: [Coordinate; 3] = [
    Coordinate::unbounded("X").with_ref_range(Range::UNIT),
    Coordinate::unbounded("Y").with_ref_range(Range::UNIT),
    Coordinate::unbounded("Z").with_ref_range(Range::UNIT),
];

macro_rules! builtin {
    ($(#[$meta:meta])* $name:ident => $init:expr) => {
        $(#[$meta])*
        pub fn $name() -> Space {
            static SPACE: OnceLock<Space> = OnceLock::new();
            SPACE.get_or_init(|| $init).clone()
        }
    };
}

builtin! {
    /// CIE XYZ relative to D65. The root of the conversion graph.
    xyz_d65 => ColorSpace::root("xyz-d65", "XYZ D65", SRGB_D65, XYZ_COORDINATES)
}

builtin! {
    /// CIE XYZ relative to the CSS D50 white.
    xyz_d50 => ColorSpace::builder("xyz-d50", "XYZ D50")
        .base(&xyz_d65())
        .white(CSS_D50)
        .transform(adaptation_to_d65(&CSS_D50))
        .build()
}

builtin! {
    /// Linear-light sRGB.
    srgb_linear => linear_rgb("srgb-linear", "Linear sRGB", &SRGB, &xyz_d65())
}

builtin! {
    /// sRGB.
    srgb => encoded("srgb", "sRGB", &srgb_linear(), Transform::Srgb)
}

builtin! {
    /// Linear-light Display P3.
    display_p3_linear => linear_rgb("display-p3-linear", "Linear Display P3", &DISPLAY_P3, &xyz_d65())
}

builtin! {
    /// Display P3.
    display_p3 => encoded("display-p3", "Display P3", &display_p3_linear(), Transform::Srgb)
}

builtin! {
    /// Linear-light A98 RGB.
    a98_rgb_linear => linear_rgb("a98-rgb-linear", "Linear A98 RGB", &ADOBE_RGB, &xyz_d65())
}

builtin! {
    /// A98 RGB (compatible with Adobe RGB 1998).
    a98_rgb => encoded("a98-rgb", "A98 RGB", &a98_rgb_linear(), Transform::Power(A98_GAMMA))
}

builtin! {
    /// Linear-light ProPhoto RGB. Based on XYZ D50.
    prophoto_rgb_linear => linear_rgb("prophoto-rgb-linear", "Linear ProPhoto RGB", &PROPHOTO_RGB, &xyz_d50())
}

builtin! {
    /// ProPhoto RGB.
    prophoto_rgb => encoded("prophoto-rgb", "ProPhoto RGB", &prophoto_rgb_linear(), Transform::ProPhoto)
}

builtin! {
    /// Linear-light Rec. 2020.
    rec2020_linear => linear_rgb("rec2020-linear", "Linear Rec. 2020", &REC2020, &xyz_d65())
}

builtin! {
    /// Rec. 2020.
    rec2020 => encoded("rec2020", "Rec. 2020", &rec2020_linear(), Transform::Rec2020)
}

builtin! {
    /// Oklab.
    oklab => ColorSpace::builder("oklab", "Oklab")
        .base(&xyz_d65())
        .coords([
            Coordinate::unbounded("Lightness").with_ref_range(Range::UNIT),
            Coordinate::unbounded("a").with_ref_range(Range::new(-0.4, 0.4)),
            Coordinate::unbounded("b").with_ref_range(Range::new(-0.4, 0.4)),
        ])
        .transform(Transform::Oklab)
        .build()
}

builtin! {
    /// Oklch, the cylindrical form of Oklab.
    oklch => ColorSpace::builder("oklch", "Oklch")
        .base(&oklab())
        .coords([
            Coordinate::unbounded("Lightness").with_ref_range(Range::UNIT),
            Coordinate::unbounded("Chroma").with_ref_range(Range::new(0.0, 0.4)),
            Coordinate::angle("Hue").with_ref_range(Range::new(0.0, 360.0)),
        ])
        .transform(Transform::Polar { achromatic: 0.8 / 1e5 })
        .build()
}

builtin! {
    /// CIE Lab relative to the CSS D50 white.
    lab => ColorSpace::builder("lab", "Lab")
        .base(&xyz_d50())
        .coords([
            Coordinate::unbounded("Lightness").with_ref_range(Range::new(0.0, 100.0)),
            Coordinate::unbounded("a").with_ref_range(Range::new(-125.0, 125.0)),
            Coordinate::unbounded("b").with_ref_range(Range::new(-125.0, 125.0)),
        ])
        .transform(Transform::Lab { white: CSS_D50 })
        .build()
}

builtin! {
    /// CIE LCh, the cylindrical form of Lab.
    lch => ColorSpace::builder("lch", "LCh")
        .base(&lab())
        .coords([
            Coordinate::unbounded("Lightness").with_ref_range(Range::new(0.0, 100.0)),
            Coordinate::unbounded("Chroma").with_ref_range(Range::new(0.0, 150.0)),
            Coordinate::angle("Hue").with_ref_range(Range::new(0.0, 360.0)),
        ])
        .transform(Transform::Polar { achromatic: 250.0 / 1e5 })
        .build()
}

/// All built-in spaces, roots first.
pub fn all() -> Vec<Space> {
    vec![
        xyz_d65(),
        xyz_d50(),
        srgb_linear(),
        srgb(),
        display_p3_linear(),
        display_p3(),
        a98_rgb_linear(),
        a98_rgb(),
        prophoto_rgb_linear(),
        prophoto_rgb(),
        rec2020_linear(),
        rec2020(),
        oklab(),
        oklch(),
        lab(),
        lch(),
    ]
}

// Built-in constants are known-good, so failures here are bugs.

fn adaptation_to_d65(white: &tinct_core::Chromaticity) -> Transform {
    match Transform::adaptation(&tinct_math::BRADFORD, white, &SRGB_D65) {
        Ok(t) => t,
        Err(e) => panic!("built-in white point cannot be adapted: {e}"),
    }
}

fn linear_rgb(id: &'static str, name: &'static str, primaries: &Primaries, base: &Space) -> Space {
    match ColorSpace::linear_rgb(id, name, primaries, base) {
        Ok(s) => s,
        Err(e) => panic!("built-in space '{id}': {e}"),
    }
}

fn encoded(id: &'static str, name: &'static str, linear: &Space, transform: Transform) -> Space {
    ColorSpace::builder(id, name).base(linear).transform(transform).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_singletons() {
        assert!(Arc::ptr_eq(&srgb(), &srgb()));
        assert!(Arc::ptr_eq(srgb().base().unwrap(), &srgb_linear()));
        assert!(Arc::ptr_eq(&lch().ancestors()[0], &xyz_d65()));
    }

    #[test]
    fn test_unique_ids() {
        let mut ids: Vec<_> = all().iter().map(|s| s.id().to_string()).collect();
        let n = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), n);
    }

    #[test]
    fn test_prophoto_under_d50() {
        assert_eq!(prophoto_rgb().ancestors()[1].id(), "xyz-d50");
    }

    #[test]
    fn test_encoded_inherits_rgb_coords() {
        for s in [srgb(), display_p3(), a98_rgb(), prophoto_rgb(), rec2020()] {
            assert!(s.coords().iter().all(|c| c.range == Range::UNIT), "{}", s.id());
        }
    }
}
