//! # tinct-math
//!
//! Math utilities for color conversion.
//!
//! This crate provides the mathematical primitives used on every hop through
//! the conversion graph:
//!
//! - [`Mat3`] - 3x3 `f64` matrices for linear color transforms
//! - [`Vec3`] - 3D `f64` vectors for XYZ/RGB triplets
//! - [`Cat`] - chromatic adaptation transforms (Bradford, CAT16, ...)
//! - [`lerp`] - interpolation
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Values are `f64` throughout so that round trips through several spaces stay
//! within ~1e-12. [`glam`] `DMat3`/`DVec3` conversions are provided for
//! interop.
//!
//! # Usage
//!
//! ```rust
//! use tinct_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4123907992659595, 0.357584339383878, 0.1804807884018343],
//!     [0.21263900587151036, 0.715168678767756, 0.07219231536073371],
//!     [0.01933081871559185, 0.11919477979462599, 0.9505321522496606],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! assert!(xyz.y > 0.0);
//! ```
//!
//! # Used By
//!
//! - `tinct-primaries` - RGB/XYZ matrix generation
//! - `tinct-color` - conversion graph, XYZ white point spaces

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod interp;
mod mat3;
mod vec3;

pub use adapt::*;
pub use interp::*;
pub use mat3::*;
pub use vec3::*;
