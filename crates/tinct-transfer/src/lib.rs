//! # tinct-transfer
//!
//! Transfer functions for the RGB color spaces of the conversion graph.
//!
//! Transfer functions convert between linear light values and gamma-encoded
//! values.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! # Negative values
//!
//! Colors are never clamped to gamut during conversion, so linear values
//! below zero are common (wide-gamut colors expressed in sRGB). Every function
//! here is extended to negative inputs by odd symmetry, `f(-v) = -f(v)`, which
//! keeps encode/decode mutually inverse over the whole real line.
//!
//! | Module | Used by |
//! |--------|---------|
//! | [`srgb`] | sRGB, Display P3 |
//! | [`gamma`] | A98 RGB (pure power), ProPhoto RGB |
//! | [`rec2020`] | Rec. 2020 |
//!
//! # Usage
//!
//! ```rust
//! use tinct_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod rec2020;
pub mod srgb;

pub use gamma::{power_eotf, power_oetf, prophoto_eotf, prophoto_oetf};
pub use rec2020::{eotf as rec2020_eotf, oetf as rec2020_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};

/// Applies `f` to `|v|` and restores the sign.
#[inline]
pub(crate) fn mirrored(v: f64, f: impl Fn(f64) -> f64) -> f64 {
    if v < 0.0 { -f(-v) } else { f(v) }
}
