//! Gamut mapping.
//!
//! Implements the CSS Color 4 gamut mapping algorithm: a binary search for
//! the largest Oklch chroma, at constant lightness and hue, whose clipped
//! counterpart is within a just-noticeable difference of the unclipped
//! color. This preserves lightness and hue while giving up as little chroma
//! as possible.
//!
//! # Example
//!
//! ```rust
//! use tinct_color::{gamut_map_css, spaces, Color};
//!
//! let pink = Color::new(&spaces::oklch(), 0.65, 0.29, 0.0);
//! let mapped = gamut_map_css(&pink, &spaces::srgb());
//! assert!(mapped.in_gamut());
//! ```

use tracing::{debug, trace};

use crate::color::Color;
use crate::delta::DeltaE;
use crate::space::Space;
use crate::spaces;

/// Tunables of [`GamutMapper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutMapConfig {
    /// Just-noticeable difference. Clipped colors closer than this to the
    /// unclipped color are accepted.
    pub jnd: f64,
    /// Resolution of the chroma search.
    pub epsilon: f64,
    /// Metric used to compare clipped and unclipped colors.
    pub metric: DeltaE,
}

impl Default for GamutMapConfig {
    fn default() -> Self {
        Self {
            jnd: 0.02,
            epsilon: 1e-4,
            metric: DeltaE::Ok,
        }
    }
}

/// Relative colorimetric gamut mapper.
#[derive(Debug, Clone, Default)]
pub struct GamutMapper {
    config: GamutMapConfig,
}

impl GamutMapper {
    /// Creates a mapper with custom settings.
    pub fn new(config: GamutMapConfig) -> Self {
        Self { config }
    }

    /// The settings in use.
    pub fn config(&self) -> &GamutMapConfig {
        &self.config
    }

    /// Converts `color` to `to`, reducing chroma as needed to land in gamut.
    ///
    /// Colors at or beyond the lightness extremes map to the destination's
    /// white or black. Alpha is preserved.
    pub fn map(&self, color: &Color, to: &Space) -> Color {
        if to.is_unbounded() {
            return color.convert(to);
        }

        let oklch = spaces::oklch();
        let origin = color.convert(&oklch);
        let [lightness, chroma, _] = origin.values();

        if lightness >= 1.0 {
            trace!(to = to.id(), "lightness at or above white");
            return Color::with_alpha(&spaces::oklab(), 1.0, 0.0, 0.0, color.alpha()).convert(to);
        }
        if lightness <= 0.0 {
            trace!(to = to.id(), "lightness at or below black");
            return Color::with_alpha(&spaces::oklab(), 0.0, 0.0, 0.0, color.alpha()).convert(to);
        }

        let direct = color.convert(to);
        if direct.in_gamut() {
            return direct;
        }

        let GamutMapConfig { jnd, epsilon, metric } = self.config;

        let mut clipped = clip(&origin, to);
        let e = metric.compute(&clipped, &origin);
        if e < jnd || !chroma.is_finite() {
            debug!(to = to.id(), delta_e = e, "clipped without chroma reduction");
            return clipped;
        }

        let mut min = 0.0;
        let mut max = chroma;
        let mut min_in_gamut = true;
        let mut iterations = 0u32;

        while max - min > epsilon {
            iterations += 1;
            let mid = (min + max) / 2.0;
            let mut current = origin.values();
            current[1] = mid;
            let current = origin.with_values(current);

            if min_in_gamut && current.in_gamut_of(to) {
                min = mid;
                trace!(chroma = mid, "in gamut");
                continue;
            }

            clipped = clip(&current, to);
            let e = metric.compute(&clipped, &current);
            trace!(chroma = mid, delta_e = e, "clipped");
            if e < jnd {
                if jnd - e < epsilon {
                    break;
                }
                min_in_gamut = false;
                min = mid;
            } else {
                max = mid;
            }
        }

        debug!(to = to.id(), original_chroma = chroma, iterations, "gamut mapped");
        clipped
    }
}

/// Maps `color` into the gamut of `to` with the default CSS settings.
pub fn gamut_map_css(color: &Color, to: &Space) -> Color {
    GamutMapper::default().map(color, to)
}

// Converts to `to` and clamps each non-angle coordinate to its range.
fn clip(color: &Color, to: &Space) -> Color {
    let mut values = color.convert(to).values();
    for (v, coord) in values.iter_mut().zip(to.coords()) {
        if !coord.is_angle {
            *v = coord.range.clamp(*v);
        }
    }
    Color::from_values(to, values, color.alpha())
}
