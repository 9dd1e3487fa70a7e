//! ITU-R BT.2020 transfer function.
//!
//! Same shape as BT.709 but with higher-precision constants for 12-bit
//! encoding. Applied as a pure function pair, without a display EOTF
//! (BT.1886) on top, as CSS Color 4 does.
//!
//! # Reference
//!
//! ITU-R BT.2020-2, Table 4

use crate::mirrored;

const ALPHA: f64 = 1.09929682680944;
const BETA: f64 = 0.018053968510807;

/// Rec. 2020 decode: encoded to linear.
///
/// ```text
/// if |V| < 4.5 * beta:  L = V / 4.5
/// else:                 L = sign(V) * ((|V| + alpha - 1) / alpha)^(1/0.45)
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    mirrored(v, |v| {
        if v < BETA * 4.5 {
            v / 4.5
        } else {
            ((v + ALPHA - 1.0) / ALPHA).powf(1.0 / 0.45)
        }
    })
}

/// Rec. 2020 encode: linear to encoded.
///
/// ```text
/// if |L| >= beta:  V = sign(L) * (alpha * |L|^0.45 - (alpha - 1))
/// else:            V = 4.5 * L
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    mirrored(l, |l| {
        if l >= BETA {
            ALPHA * l.powf(0.45) - (ALPHA - 1.0)
        } else {
            4.5 * l
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in -100..=150 {
            let v = i as f64 / 100.0;
            assert_abs_diff_eq!(oetf(eotf(v)), v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
    }
}
