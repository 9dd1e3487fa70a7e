//! Per-edge transforms of the conversion graph.
//!
//! Every non-root color space knows how to move coordinates one hop towards
//! the root ([`BaseTransform::to_base`]) and one hop away from it
//! ([`BaseTransform::from_base`]). The two must be inverses of each other up
//! to floating point error.
//!
//! The built-in spaces use the closed set of [`Transform`] variants. User
//! spaces can plug in anything via [`Transform::Custom`].

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use tinct_core::Chromaticity;
use tinct_math::{Cat, Mat3};
use tinct_transfer::{power_eotf, power_oetf, prophoto_eotf, prophoto_oetf, rec2020_eotf, rec2020_oetf, srgb_eotf, srgb_oetf};

use crate::error::{ColorError, ColorResult};

/// A pair of mutually inverse functions between a space and its base.
pub trait BaseTransform: Send + Sync {
    /// Maps coordinates of this space to coordinates of the base space.
    fn to_base(&self, c: [f64; 3]) -> [f64; 3];

    /// Maps coordinates of the base space to coordinates of this space.
    fn from_base(&self, c: [f64; 3]) -> [f64; 3];
}

/// Edge transform between a color space and its base.
#[derive(Clone)]
pub enum Transform {
    /// Coordinates are passed through unchanged.
    Identity,

    /// Linear map, e.g. linear RGB to XYZ or a white point adaptation.
    Matrix {
        /// This space to base.
        to_base: Mat3,
        /// Base to this space.
        from_base: Mat3,
    },

    /// sRGB piecewise curve applied per channel (also Display P3).
    Srgb,

    /// ProPhoto RGB curve (gamma 1.8 with linear toe).
    ProPhoto,

    /// Pure power curve with the given gamma (A98 RGB).
    Power(f64),

    /// Rec. 2020 curve.
    Rec2020,

    /// XYZ D65 to Oklab.
    Oklab,

    /// XYZ to CIE Lab relative to a white point.
    Lab {
        /// Reference white. Base XYZ is divided by it before the Lab formula.
        white: Chromaticity,
    },

    /// Rectangular (L, a, b) to cylindrical (L, C, h).
    ///
    /// When both `|a|` and `|b|` fall below `achromatic`, chroma and hue are
    /// reported as zero.
    Polar {
        /// Achromatic threshold.
        achromatic: f64,
    },

    /// User supplied transform.
    Custom(Arc<dyn BaseTransform>),
}

impl Transform {
    /// Linear transform from a matrix mapping this space to its base.
    ///
    /// Returns `None` if the matrix is singular.
    pub fn matrix(to_base: Mat3) -> Option<Self> {
        let from_base = to_base.inverse()?;
        Some(Self::Matrix { to_base, from_base })
    }

    /// Linear transform between linear RGB with the given primaries and XYZ
    /// relative to the primaries' white.
    pub fn linear_rgb(primaries: &tinct_primaries::Primaries) -> ColorResult<Self> {
        tinct_primaries::rgb_to_xyz_matrix(primaries)
            .and_then(Self::matrix)
            .ok_or_else(|| ColorError::SingularPrimaries(primaries.name.to_string()))
    }

    /// White point adaptation from XYZ relative to `white` to XYZ relative to
    /// `base_white`.
    pub fn adaptation(cat: &Cat, white: &Chromaticity, base_white: &Chromaticity) -> ColorResult<Self> {
        Ok(Self::Matrix {
            to_base: cat.matrix(white, base_white)?,
            from_base: cat.matrix(base_white, white)?,
        })
    }

    /// Wraps a pair of closures as a [`Transform::Custom`].
    ///
    /// ```rust
    /// use tinct_color::Transform;
    ///
    /// let half = Transform::custom(|c| c.map(|v| v * 2.0), |c| c.map(|v| v / 2.0));
    /// # let _ = half;
    /// ```
    pub fn custom<T, F>(to_base: T, from_base: F) -> Self
    where
        T: Fn([f64; 3]) -> [f64; 3] + Send + Sync + 'static,
        F: Fn([f64; 3]) -> [f64; 3] + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(FnTransform { to_base, from_base }))
    }
}

impl BaseTransform for Transform {
    fn to_base(&self, c: [f64; 3]) -> [f64; 3] {
        match self {
            Self::Identity => c,
            Self::Matrix { to_base, .. } => to_base.transform_array(c),
            Self::Srgb => c.map(srgb_eotf),
            Self::ProPhoto => c.map(prophoto_eotf),
            Self::Power(gamma) => c.map(|v| power_eotf(v, *gamma)),
            Self::Rec2020 => c.map(rec2020_eotf),
            Self::Oklab => oklab_to_xyz(c),
            Self::Lab { white } => lab_to_xyz(c, white),
            Self::Polar { .. } => lch_to_lab(c),
            Self::Custom(t) => t.to_base(c),
        }
    }

    fn from_base(&self, c: [f64; 3]) -> [f64; 3] {
        match self {
            Self::Identity => c,
            Self::Matrix { from_base, .. } => from_base.transform_array(c),
            Self::Srgb => c.map(srgb_oetf),
            Self::ProPhoto => c.map(prophoto_oetf),
            Self::Power(gamma) => c.map(|v| power_oetf(v, *gamma)),
            Self::Rec2020 => c.map(rec2020_oetf),
            Self::Oklab => xyz_to_oklab(c),
            Self::Lab { white } => xyz_to_lab(c, white),
            Self::Polar { achromatic } => lab_to_lch(c, *achromatic),
            Self::Custom(t) => t.from_base(c),
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "Identity"),
            Self::Matrix { to_base, .. } => f.debug_struct("Matrix").field("to_base", to_base).finish(),
            Self::Srgb => write!(f, "Srgb"),
            Self::ProPhoto => write!(f, "ProPhoto"),
            Self::Power(gamma) => f.debug_tuple("Power").field(gamma).finish(),
            Self::Rec2020 => write!(f, "Rec2020"),
            Self::Oklab => write!(f, "Oklab"),
            Self::Lab { white } => f.debug_struct("Lab").field("white", white).finish(),
            Self::Polar { achromatic } => f.debug_struct("Polar").field("achromatic", achromatic).finish(),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

struct FnTransform<T, F> {
    to_base: T,
    from_base: F,
}

impl<T, F> BaseTransform for FnTransform<T, F>
where
    T: Fn([f64; 3]) -> [f64; 3] + Send + Sync,
    F: Fn([f64; 3]) -> [f64; 3] + Send + Sync,
{
    fn to_base(&self, c: [f64; 3]) -> [f64; 3] {
        (self.to_base)(c)
    }

    fn from_base(&self, c: [f64; 3]) -> [f64; 3] {
        (self.from_base)(c)
    }
}

// Oklab matrices recalculated for the CSS D65 white (0.3127, 0.3290).
const OKLAB_XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
]);

const OKLAB_LMS_TO_LAB: Mat3 = Mat3::from_rows([
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
]);

const OKLAB_LAB_TO_LMS: Mat3 = Mat3::from_rows([
    [1.0000000000000000, 0.3963377773761749, 0.2158037573099136],
    [1.0000000000000000, -0.1055613458156586, -0.0638541728258133],
    [1.0000000000000000, -0.0894841775298119, -1.2914855480194092],
]);

const OKLAB_LMS_TO_XYZ: Mat3 = Mat3::from_rows([
    [1.2268798758459243, -0.5578149944602171, 0.2813910456659647],
    [-0.0405757452148008, 1.1122868032803170, -0.0717110580655164],
    [-0.0763729366746601, -0.4214933324022432, 1.5869240198367816],
]);

fn xyz_to_oklab(xyz: [f64; 3]) -> [f64; 3] {
    let lms = OKLAB_XYZ_TO_LMS.transform_array(xyz).map(f64::cbrt);
    OKLAB_LMS_TO_LAB.transform_array(lms)
}

fn oklab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    let lms = OKLAB_LAB_TO_LMS.transform_array(lab).map(|v| v * v * v);
    OKLAB_LMS_TO_XYZ.transform_array(lms)
}

const LAB_EPSILON: f64 = 216.0 / 24389.0;
const LAB_EPSILON3: f64 = 24.0 / 116.0;
const LAB_KAPPA: f64 = 24389.0 / 27.0;

fn xyz_to_lab(xyz: [f64; 3], white: &Chromaticity) -> [f64; 3] {
    let w = white.xyz();
    let f = |v: f64| {
        if v > LAB_EPSILON {
            v.cbrt()
        } else {
            (LAB_KAPPA * v + 16.0) / 116.0
        }
    };
    let fx = f(xyz[0] / w[0]);
    let fy = f(xyz[1] / w[1]);
    let fz = f(xyz[2] / w[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

fn lab_to_xyz(lab: [f64; 3], white: &Chromaticity) -> [f64; 3] {
    let [l, a, b] = lab;
    let f1 = (l + 16.0) / 116.0;
    let f0 = a / 500.0 + f1;
    let f2 = f1 - b / 200.0;

    let inv = |f: f64| {
        if f > LAB_EPSILON3 {
            f * f * f
        } else {
            (116.0 * f - 16.0) / LAB_KAPPA
        }
    };
    let x = inv(f0);
    // kappa * epsilon = 8
    let y = if l > 8.0 { f1 * f1 * f1 } else { l / LAB_KAPPA };
    let z = inv(f2);

    let w = white.xyz();
    [x * w[0], y * w[1], z * w[2]]
}

fn lab_to_lch(lab: [f64; 3], achromatic: f64) -> [f64; 3] {
    let [l, a, b] = lab;
    if a.abs() < achromatic && b.abs() < achromatic {
        return [l, 0.0, 0.0];
    }
    let c = a.hypot(b);
    let h = (b.atan2(a) * 180.0 / PI + 360.0) % 360.0;
    [l, c, h]
}

fn lch_to_lab(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;
    let c = c.max(0.0);
    let (sin, cos) = (h * PI / 180.0).sin_cos();
    [l, c * cos, c * sin]
}
