//! Interpolation utilities.

/// Linear interpolation between two values.
///
/// Exact at both ends: returns `a` when `t = 0.0` and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a * (1 - t) + b * t`
///
/// # Example
///
/// ```rust
/// use tinct_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.3, 0.7, 1.0), 0.7);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Linear interpolation of coordinate triples.
#[inline]
pub fn lerp3(a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        for (a, b) in [(0.1, 0.7), (-3.25, 1e-3), (1e9, -1e-9)] {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
    }

    #[test]
    fn test_lerp3() {
        assert_eq!(lerp3([0.0, 2.0, 4.0], [2.0, 4.0, 8.0], 0.5), [1.0, 3.0, 6.0]);
    }
}
