//! # tinct-primaries
//!
//! RGB primaries and RGB-XYZ matrix generation.
//!
//! Every linear RGB space in the conversion graph is defined by the xy
//! chromaticities of its three primaries and its white point. This crate
//! derives the 3x3 matrix between such a space and CIE XYZ relative to the
//! same white.
//!
//! # Included Primaries
//!
//! | Primaries | Gamut Size | White |
//! |-----------|------------|-------|
//! | [`SRGB`] | Small | D65 |
//! | [`DISPLAY_P3`] | Medium | D65 |
//! | [`ADOBE_RGB`] | Medium | D65 |
//! | [`REC2020`] | Large | D65 |
//! | [`PROPHOTO_RGB`] | Very large | D50 |
//!
//! # Usage
//!
//! ```rust
//! use tinct_primaries::{SRGB, rgb_to_xyz_matrix};
//! use tinct_math::Vec3;
//!
//! let matrix = rgb_to_xyz_matrix(&SRGB).unwrap();
//! let white = matrix * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `tinct-color` - linear RGB nodes of the conversion graph

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use tinct_core::{Chromaticity, CSS_D50, SRGB_D65};
use tinct_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// # Example
///
/// ```rust
/// use tinct_primaries::Primaries;
/// use tinct_core::SRGB_D65;
///
/// let my_space = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
///     w: SRGB_D65,
///     name: "Custom",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point
    pub w: Chromaticity,
    /// Primaries name
    pub name: &'static str,
}

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: SRGB_D65,
    name: "sRGB",
};

/// Display P3 primaries (DCI-P3 primaries, D65 white point).
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: SRGB_D65,
    name: "Display P3",
};

/// Adobe RGB (1998) primaries (D65 white point).
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.2100, 0.7100),
    b: (0.1500, 0.0600),
    w: SRGB_D65,
    name: "Adobe RGB",
};

/// Rec.2020 primaries (D65 white point).
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: SRGB_D65,
    name: "Rec.2020",
};

/// ProPhoto RGB primaries (D50 white point, as used by CSS).
pub const PROPHOTO_RGB: Primaries = Primaries {
    r: (0.734699, 0.265301),
    g: (0.159597, 0.840403),
    b: (0.036598, 0.000105),
    w: CSS_D50,
    name: "ProPhoto RGB",
};

/// Converts xy chromaticity to XYZ (with Y=1).
///
/// Primaries may lie outside the spectral locus, so unlike white points they
/// are not validated; `y = 0` yields zero.
fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y == 0.0 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve for scaling factors so RGB (1, 1, 1) maps to the white point
/// 3. Scale each primary column by its factor
///
/// Returns `None` if the primaries are collinear.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Option<Mat3> {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = Vec3::from(primaries.w.xyz());

    // S = M^-1 * W
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let s = m.inverse()? * w_xyz;

    Some(Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z))
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Option<Mat3> {
    rgb_to_xyz_matrix(primaries)?.inverse()
}
