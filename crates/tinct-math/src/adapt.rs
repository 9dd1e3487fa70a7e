//! Chromatic Adaptation Transforms (CAT).
//!
//! This module provides matrices and functions for adapting XYZ tristimulus
//! values between different reference white points.
//!
//! # What is Chromatic Adaptation?
//!
//! When viewing a white object under tungsten light (warm) vs daylight (cool),
//! our visual system adapts so that both appear "white". Chromatic adaptation
//! transforms simulate this effect: map XYZ into a cone response space, scale
//! each cone channel by the ratio of the two whites, and map back.
//!
//! # Supported Methods
//!
//! - [`BRADFORD`] - Best overall accuracy (default choice)
//! - [`CAT16`] - From the CAM16 color appearance model
//! - [`CAT02_CONE`], [`VON_KRIES_CONE`], [`XYZ_SCALING_CONE`] - via [`Cat::from_cone_matrix`]
//!
//! # Usage
//!
//! ```rust
//! use tinct_core::{CSS_D50, SRGB_D65};
//! use tinct_math::{adapt, BRADFORD};
//!
//! let d65_to_d50 = BRADFORD.matrix(&SRGB_D65, &CSS_D50).unwrap();
//! let white = adapt(SRGB_D65.xyz(), &d65_to_d50);
//! assert!((white[0] - CSS_D50.xyz()[0]).abs() < 1e-12);
//! ```

use crate::{Mat3, Vec3};
use tinct_core::{Chromaticity, Error, Result};

/// A chromatic adaptation transform.
///
/// Consists of two matrices, one for converting from XYZ to cone responses
/// and one for converting back. Any CAT of this "von Kries-like" form can be
/// expressed with this type.
///
/// Colors can be adapted either with [`Cat::adapt`] for one-offs, or by
/// combining [`Cat::matrix`] and [`adapt`], which reuses the matrix computed
/// for a pair of white points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cat {
    /// XYZ to cone response.
    pub to_cone: Mat3,
    /// Cone response to XYZ.
    pub from_cone: Mat3,
}

impl Cat {
    /// Creates a CAT from a pair of mutually inverse matrices.
    pub const fn new(to_cone: Mat3, from_cone: Mat3) -> Self {
        Self { to_cone, from_cone }
    }

    /// Creates a CAT from its cone response matrix, deriving the inverse.
    ///
    /// Returns `None` if the matrix is singular.
    pub fn from_cone_matrix(to_cone: Mat3) -> Option<Self> {
        to_cone.inverse().map(|from_cone| Self::new(to_cone, from_cone))
    }

    /// Computes the matrix adapting XYZ values from `src` to `dst` white.
    ///
    /// ```text
    /// M = FromCone * diag(cone(dst) / cone(src)) * ToCone
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateWhitePoint`] if `src` has a zero cone response
    /// component, which would divide by zero.
    pub fn matrix(&self, src: &Chromaticity, dst: &Chromaticity) -> Result<Mat3> {
        let cone_src = self.to_cone * Vec3::from(src.xyz());
        let cone_dst = self.to_cone * Vec3::from(dst.xyz());

        if cone_src.to_array().iter().any(|&c| c == 0.0 || !c.is_finite()) {
            return Err(Error::DegenerateWhitePoint {
                x: src.x(),
                y: src.y(),
                cone: cone_src.to_array(),
            });
        }

        let ratio = cone_dst.div_elem(cone_src);
        let scale = Mat3::diagonal(ratio.x, ratio.y, ratio.z);
        Ok(self.from_cone * scale * self.to_cone)
    }

    /// Adapts a single XYZ triple from `src` to `dst` white.
    ///
    /// # Errors
    ///
    /// See [`Cat::matrix`].
    pub fn adapt(&self, xyz: [f64; 3], src: &Chromaticity, dst: &Chromaticity) -> Result<[f64; 3]> {
        let m = self.matrix(src, dst)?;
        Ok(adapt(xyz, &m))
    }
}

/// Applies a precomputed adaptation matrix to an XYZ triple.
#[inline]
pub fn adapt(xyz: [f64; 3], m: &Mat3) -> [f64; 3] {
    m.transform_array(xyz)
}

/// Bradford chromatic adaptation.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Cat = Cat::new(
    Mat3::from_rows([
        [0.8951, 0.2664, -0.1614],
        [-0.7502, 1.7135, 0.0367],
        [0.0389, -0.0685, 1.0296],
    ]),
    Mat3::from_rows([
        [0.9869929054667121, -0.14705425642099013, 0.15996265166373122],
        [0.4323052697233945, 0.5183602715367774, 0.049291228212855594],
        [-0.00852866457517732, 0.04004282165408486, 0.96848669578755],
    ]),
);

/// CAT16 chromatic adaptation, from the CAM16 color appearance model.
pub const CAT16: Cat = Cat::new(
    Mat3::from_rows([
        [0.401288, 0.650173, -0.051461],
        [-0.250268, 1.204414, 0.045854],
        [-0.002079, 0.048952, 0.953127],
    ]),
    Mat3::from_rows([
        [1.862067855087233, -1.0112546305316845, 0.14918677544445172],
        [0.3875265432361372, 0.6214474419314753, -0.008973985167612521],
        [-0.01584149884933386, -0.03412293802851557, 1.0499644368778496],
    ]),
);

/// CAT02 cone response matrix, from CIECAM02.
pub const CAT02_CONE: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Von Kries cone response matrix (Hunt-Pointer-Estevez).
pub const VON_KRIES_CONE: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// XYZ scaling: adaptation directly on the tristimulus values.
pub const XYZ_SCALING_CONE: Mat3 = Mat3::IDENTITY;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tinct_core::{cie2004, CSS_D50, SRGB_D65};

    fn assert_identity(m: &Mat3, epsilon: f64) {
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(m.m[i][j], expected, epsilon = epsilon);
            }
        }
    }

    #[test]
    fn test_bradford_d65_to_d50() {
        // CSS Color 4 reference matrix
        let expected = Mat3::from_rows([
            [1.0479298208405488, 0.022946793341019088, -0.05019222954313557],
            [0.029627815688159344, 0.990434484573249, -0.01707382502938514],
            [-0.009243058152591178, 0.015055144896577895, 0.7518742899580008],
        ]);
        let m = BRADFORD.matrix(&SRGB_D65, &CSS_D50).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(m.m[i][j], expected.m[i][j], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_white_maps_to_white() {
        for cat in [BRADFORD, CAT16] {
            let out = cat.adapt(SRGB_D65.xyz(), &SRGB_D65, &cie2004::A).unwrap();
            let want = cie2004::A.xyz();
            for i in 0..3 {
                assert_abs_diff_eq!(out[i], want[i], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_roundtrip() {
        let there = BRADFORD.matrix(&SRGB_D65, &CSS_D50).unwrap();
        let back = BRADFORD.matrix(&CSS_D50, &SRGB_D65).unwrap();
        assert_identity(&(back * there), 1e-12);
    }

    #[test]
    fn test_same_white_is_identity() {
        let m = CAT16.matrix(&SRGB_D65, &SRGB_D65).unwrap();
        assert_identity(&m, 1e-12);
    }

    #[test]
    fn test_from_cone_matrix() {
        for cone in [CAT02_CONE, VON_KRIES_CONE, XYZ_SCALING_CONE] {
            let cat = Cat::from_cone_matrix(cone).unwrap();
            assert_identity(&(cat.from_cone * cat.to_cone), 1e-12);
            let out = cat.adapt(CSS_D50.xyz(), &CSS_D50, &SRGB_D65).unwrap();
            assert_abs_diff_eq!(out[1], 1.0, epsilon = 1e-9);
        }
        assert!(Cat::from_cone_matrix(Mat3::ZERO).is_none());
    }

    #[test]
    fn test_degenerate_white() {
        // x = y = 0.5 gives Z = 0; with XYZ scaling that is a zero cone response
        let cat = Cat::from_cone_matrix(XYZ_SCALING_CONE).unwrap();
        let white = Chromaticity::new(0.5, 0.5).unwrap();
        let err = cat.matrix(&white, &SRGB_D65).unwrap_err();
        assert!(matches!(err, Error::DegenerateWhitePoint { .. }));
    }
}
