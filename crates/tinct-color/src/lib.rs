//! # tinct-color
//!
//! Color space conversion graph with gamut mapping and CSS `color()` support.
//!
//! # Architecture
//!
//! ```text
//!                   tinct-color
//!                        |
//!     +------------------+------------------+
//!     |                  |                  |
//! tinct-transfer   tinct-primaries          |
//!     |                  |                  |
//!     |             tinct-math -------------+
//!     |                  |
//!     +--------+---------+
//!              |
//!         tinct-core
//! ```
//!
//! Every color space is a node in a tree rooted at CIE XYZ (D65). A node
//! only knows how to convert to and from its parent; converting between any
//! two spaces goes through their lowest common ancestor. Spaces with other
//! white points hang off the root through a Bradford adaptation, so
//! chromatic adaptation happens as part of ordinary conversion.
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_color::{spaces, Color, SpaceRegistry};
//!
//! let registry = SpaceRegistry::with_builtins();
//! let p3_red = registry.parse("color(display-p3 1 0 0)").unwrap();
//!
//! // Out of gamut for sRGB
//! assert!(!p3_red.in_gamut_of(&spaces::srgb()));
//!
//! // Reduce chroma until it fits
//! let red = p3_red.map_to_gamut(&spaces::srgb());
//! assert!(red.in_gamut());
//! println!("{red}");
//! ```
//!
//! # Color Spaces
//!
//! | Id | Coordinates | White |
//! |----|-------------|-------|
//! | `xyz-d65`, `xyz-d50` | X, Y, Z (unbounded) | D65, D50 |
//! | `srgb`, `srgb-linear` | R, G, B in [0, 1] | D65 |
//! | `display-p3`, `display-p3-linear` | R, G, B in [0, 1] | D65 |
//! | `a98-rgb`, `a98-rgb-linear` | R, G, B in [0, 1] | D65 |
//! | `prophoto-rgb`, `prophoto-rgb-linear` | R, G, B in [0, 1] | D50 |
//! | `rec2020`, `rec2020-linear` | R, G, B in [0, 1] | D65 |
//! | `oklab`, `oklch` | L, a, b / L, C, h (unbounded) | D65 |
//! | `lab`, `lch` | L, a, b / L, C, h (unbounded) | D50 |
//!
//! # Custom Spaces
//!
//! New spaces are built with [`ColorSpace::builder`] on top of any existing
//! node and registered with [`SpaceRegistry::register`] to make them
//! parseable.
//!
//! # Thread Safety
//!
//! [`Space`] and [`Color`] are immutable and `Send + Sync`. The registry
//! uses a reader/writer lock.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod contrast;
mod delta;
mod error;
mod gamut;
mod parse;
mod registry;
mod space;
pub mod spaces;
mod transform;

pub use color::{step, Color};
pub use contrast::{contrast_michelson, contrast_weber, WEBER_MAX};
pub use delta::{delta_e76, delta_e_ok, delta_e_ok2, distance, DeltaE};
pub use error::{ColorError, ColorResult, ParseError};
pub use gamut::{gamut_map_css, GamutMapConfig, GamutMapper};
pub use parse::parse;
pub use registry::SpaceRegistry;
pub use space::{ColorSpace, ColorSpaceBuilder, Space, GAMUT_EPSILON};
pub use transform::{BaseTransform, Transform};

// Re-export dependencies for convenience
pub use tinct_math as math;
pub use tinct_primaries as primaries;
pub use tinct_transfer as transfer;

pub use tinct_core::{Chromaticity, Coordinate, Range};
