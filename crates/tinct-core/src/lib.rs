//! # tinct-core
//!
//! Core value types for the tinct color conversion engine.
//!
//! This crate provides the constant data every other crate builds on:
//!
//! - [`Chromaticity`] - xy chromaticities, white points, daylight illuminants
//! - [`Coordinate`], [`Range`] - axis metadata for 3-coordinate color spaces
//! - [`Error`] - domain errors for degenerate inputs
//!
//! ## Crate Structure
//!
//! ```text
//! tinct-core (this crate)
//!    ^
//!    |
//!    +-- tinct-math (matrices, chromatic adaptation)
//!    +-- tinct-primaries (RGB primaries)
//!    +-- tinct-color (conversion graph, gamut mapping)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize` for chromaticities and coordinates

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chromaticity;
pub mod coordinate;
pub mod error;

pub use chromaticity::{cie2004, cie2004_10deg, Chromaticity, CSS_D50, SRGB_D65};
pub use coordinate::{Coordinate, Range, RGB_COORDINATES};
pub use error::{Error, Result};
