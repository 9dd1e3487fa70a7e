//! Power-law transfer functions.
//!
//! - [`power_eotf`] / [`power_oetf`] - pure gamma, used by A98 RGB
//!   (gamma 563/256 ≈ 2.2)
//! - [`prophoto_eotf`] / [`prophoto_oetf`] - gamma 1.8 with a linear toe,
//!   used by ProPhoto RGB (ROMM RGB)

use crate::mirrored;

/// A98 RGB (Adobe RGB 1998) gamma.
pub const A98_GAMMA: f64 = 563.0 / 256.0;

/// ProPhoto RGB gamma.
pub const PROPHOTO_GAMMA: f64 = 1.8;

/// Encoded value below which ProPhoto decoding is linear.
const PROPHOTO_ET2: f64 = 16.0 / 512.0;

/// Linear value below which ProPhoto encoding is linear.
const PROPHOTO_ET: f64 = 1.0 / 512.0;

/// Pure power decode: `L = sign(V) * |V|^gamma`.
///
/// # Example
///
/// ```rust
/// use tinct_transfer::gamma::{power_eotf, A98_GAMMA};
///
/// assert_eq!(power_eotf(1.0, A98_GAMMA), 1.0);
/// ```
#[inline]
pub fn power_eotf(v: f64, gamma: f64) -> f64 {
    mirrored(v, |v| v.powf(gamma))
}

/// Pure power encode: `V = sign(L) * |L|^(1/gamma)`.
#[inline]
pub fn power_oetf(l: f64, gamma: f64) -> f64 {
    mirrored(l, |l| l.powf(1.0 / gamma))
}

/// ProPhoto decode.
///
/// ```text
/// if |V| < 16/512:  L = V / 16
/// else:             L = sign(V) * |V|^1.8
/// ```
#[inline]
pub fn prophoto_eotf(v: f64) -> f64 {
    mirrored(v, |v| {
        if v < PROPHOTO_ET2 {
            v / 16.0
        } else {
            v.powf(PROPHOTO_GAMMA)
        }
    })
}

/// ProPhoto encode.
///
/// ```text
/// if |L| >= 1/512:  V = sign(L) * |L|^(1/1.8)
/// else:             V = 16 * L
/// ```
#[inline]
pub fn prophoto_oetf(l: f64) -> f64 {
    mirrored(l, |l| {
        if l >= PROPHOTO_ET {
            l.powf(1.0 / PROPHOTO_GAMMA)
        } else {
            16.0 * l
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_power_roundtrip() {
        for i in -50..=150 {
            let v = i as f64 / 100.0;
            assert_abs_diff_eq!(power_oetf(power_eotf(v, A98_GAMMA), A98_GAMMA), v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_prophoto_roundtrip() {
        for i in -50..=150 {
            let v = i as f64 / 100.0;
            assert_abs_diff_eq!(prophoto_oetf(prophoto_eotf(v)), v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_prophoto_toe_is_continuous() {
        // Both segments meet at linear 1/512, encoded 16/512
        assert_abs_diff_eq!(prophoto_eotf(PROPHOTO_ET2), PROPHOTO_ET2.powf(1.8), epsilon = 1e-12);
        assert_abs_diff_eq!(prophoto_oetf(PROPHOTO_ET), 16.0 * PROPHOTO_ET, epsilon = 1e-3);
    }
}
