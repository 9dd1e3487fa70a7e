//! Color space nodes and the conversion engine.
//!
//! Color spaces form a tree rooted at CIE XYZ with a D65 white. Each node
//! stores its base (parent), a [`Transform`] to and from that base, and a
//! cached list of all its ancestors, root first.
//!
//! Converting between two spaces walks up from the source to the lowest
//! common ancestor, then down to the target:
//!
//! ```text
//!                 xyz-d65
//!               /         \
//!        srgb-linear     xyz-d50
//!            |              |
//!          srgb            lab
//!                           |
//!                          lch
//!
//! srgb -> lch:  to_base(srgb), to_base(srgb-linear),
//!               from_base(xyz-d50), from_base(lab), from_base(lch)
//! ```
//!
//! Nodes are immutable once built and shared through [`Space`] (an `Arc`),
//! so conversion is lock-free and safe from any thread. Identity of spaces
//! is pointer identity.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tinct_core::{Chromaticity, Coordinate};
use tinct_math::BRADFORD;
use tracing::trace;

use crate::error::ColorResult;
use crate::spaces;
use crate::transform::{BaseTransform, Transform};

/// Shared handle to a color space node.
pub type Space = Arc<ColorSpace>;

/// Tolerance of [`ColorSpace::in_gamut`].
pub const GAMUT_EPSILON: f64 = 7.5e-5;

/// A node of the conversion graph.
pub struct ColorSpace {
    id: Cow<'static, str>,
    name: Cow<'static, str>,
    white: Option<Chromaticity>,
    coords: [Coordinate; 3],
    base: Option<Space>,
    transform: Transform,
    // Root first, parent last. Empty for the root.
    ancestors: Vec<Space>,
}

impl ColorSpace {
    /// Starts building a color space.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::{spaces, ColorSpace, Transform};
    ///
    /// // Linear sRGB scaled by 100
    /// let srgb100 = ColorSpace::builder("srgb-100", "sRGB x100")
    ///     .base(&spaces::srgb_linear())
    ///     .transform(Transform::custom(|c| c.map(|v| v / 100.0), |c| c.map(|v| v * 100.0)))
    ///     .build();
    ///
    /// assert_eq!(srgb100.base().unwrap().id(), "srgb-linear");
    /// ```
    pub fn builder(id: impl Into<Cow<'static, str>>, name: impl Into<Cow<'static, str>>) -> ColorSpaceBuilder {
        ColorSpaceBuilder {
            id: id.into(),
            name: name.into(),
            white: None,
            coords: None,
            base: None,
            transform: Transform::Identity,
        }
    }

    /// The canonical root. Only [`spaces::xyz_d65`] may call this.
    pub(crate) fn root(id: &'static str, name: &'static str, white: Chromaticity, coords: [Coordinate; 3]) -> Space {
        Arc::new(Self {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            white: Some(white),
            coords: with_default_ref_ranges(coords),
            base: None,
            transform: Transform::Identity,
            ancestors: Vec::new(),
        })
    }

    /// Identifier used in `color()` syntax, e.g. `display-p3`.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human readable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference white, if the space has one.
    #[inline]
    pub fn white(&self) -> Option<&Chromaticity> {
        self.white.as_ref()
    }

    /// The three coordinates.
    #[inline]
    pub fn coords(&self) -> &[Coordinate; 3] {
        &self.coords
    }

    /// Parent node. `None` only for the root.
    #[inline]
    pub fn base(&self) -> Option<&Space> {
        self.base.as_ref()
    }

    /// Edge transform to the base.
    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Ancestors from the root down to the parent.
    #[inline]
    pub fn ancestors(&self) -> &[Space] {
        &self.ancestors
    }

    /// Number of hops to the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// True if this is the root of the graph.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.base.is_none()
    }

    /// True if no coordinate has a finite range, so nothing is ever out of
    /// gamut.
    pub fn is_unbounded(&self) -> bool {
        self.coords.iter().all(|c| c.range.is_unbounded())
    }

    // Node `i` of the root path, where `depth()` is `self`.
    #[inline]
    fn path_node(&self, i: usize) -> &ColorSpace {
        if i == self.ancestors.len() {
            self
        } else {
            &self.ancestors[i]
        }
    }

    /// Converts coordinates of this space into coordinates of `to`.
    ///
    /// Returns the input unchanged if `to` is this space. Otherwise applies
    /// `to_base` from this space up to the lowest common ancestor, then
    /// `from_base` from below the ancestor down to `to`.
    ///
    /// # Panics
    ///
    /// If the two spaces share no ancestor, which cannot happen for spaces
    /// built through [`ColorSpaceBuilder`].
    pub fn convert(&self, to: &ColorSpace, coords: [f64; 3]) -> [f64; 3] {
        if std::ptr::eq(self, to) {
            return coords;
        }

        let ours = self.depth() + 1;
        let theirs = to.depth() + 1;

        let mut common = None;
        for i in 0..ours.min(theirs) {
            if !std::ptr::eq(self.path_node(i), to.path_node(i)) {
                break;
            }
            common = Some(i);
        }
        let Some(common) = common else {
            panic!("color spaces '{}' and '{}' share no ancestor", self.id, to.id);
        };

        let mut c = coords;
        for i in (common + 1..ours).rev() {
            c = self.path_node(i).transform.to_base(c);
        }
        for i in common + 1..theirs {
            c = to.path_node(i).transform.from_base(c);
        }
        c
    }

    /// True if every non-angle coordinate lies within its range, widened by
    /// [`GAMUT_EPSILON`] on both sides.
    pub fn in_gamut(&self, coords: [f64; 3]) -> bool {
        self.coords
            .iter()
            .zip(coords)
            .all(|(coord, v)| coord.is_angle || coord.range.contains(v, GAMUT_EPSILON))
    }

    /// Builds an XYZ space with the given white point, adapted to and from
    /// XYZ D65 with the Bradford transform.
    ///
    /// Colors converted between two such spaces are chromatically adapted
    /// automatically.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct_color::ColorSpace;
    /// use tinct_core::cie2004;
    ///
    /// let xyz_a = ColorSpace::xyz("xyz-a", "XYZ (A)", cie2004::A).unwrap();
    /// assert!(xyz_a.is_unbounded());
    /// ```
    pub fn xyz(
        id: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        white: Chromaticity,
    ) -> ColorResult<Space> {
        let root = spaces::xyz_d65();
        let root_white = root.white.unwrap_or(tinct_core::SRGB_D65);
        let transform = Transform::adaptation(&BRADFORD, &white, &root_white)?;
        Ok(Self::builder(id, name).base(&root).white(white).transform(transform).build())
    }

    /// Builds a linear RGB space from primaries, based on XYZ with the
    /// primaries' white point.
    ///
    /// `base` must be an XYZ space whose white matches `primaries.w`.
    pub fn linear_rgb(
        id: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        primaries: &tinct_primaries::Primaries,
        base: &Space,
    ) -> ColorResult<Space> {
        Ok(Self::builder(id, name)
            .base(base)
            .white(primaries.w)
            .coords(tinct_core::RGB_COORDINATES)
            .transform(Transform::linear_rgb(primaries)?)
            .build())
    }
}

impl fmt::Debug for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSpace")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("base", &self.base.as_ref().map(|b| b.id()))
            .field("transform", &self.transform)
            .finish()
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Builder for non-root [`ColorSpace`]s.
///
/// Coordinates and white point default to the base's. The transform
/// defaults to [`Transform::Identity`].
#[derive(Debug)]
#[must_use]
pub struct ColorSpaceBuilder {
    id: Cow<'static, str>,
    name: Cow<'static, str>,
    white: Option<Chromaticity>,
    coords: Option<[Coordinate; 3]>,
    base: Option<Space>,
    transform: Transform,
}

impl ColorSpaceBuilder {
    /// Sets the parent node. Required.
    pub fn base(mut self, base: &Space) -> Self {
        self.base = Some(Arc::clone(base));
        self
    }

    /// Sets the reference white.
    pub fn white(mut self, white: Chromaticity) -> Self {
        self.white = Some(white);
        self
    }

    /// Sets the coordinates.
    pub fn coords(mut self, coords: [Coordinate; 3]) -> Self {
        self.coords = Some(coords);
        self
    }

    /// Sets the edge transform to the base.
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Finalizes the node, caching its path to the root.
    ///
    /// # Panics
    ///
    /// If no base was set, or the base chain does not end at
    /// [`spaces::xyz_d65`]. Both are programming errors.
    pub fn build(self) -> Space {
        let Some(base) = self.base else {
            panic!("color space '{}' has no base; only xyz-d65 may be a root", self.id);
        };

        let mut ancestors = Vec::with_capacity(base.ancestors.len() + 1);
        ancestors.extend(base.ancestors.iter().cloned());
        ancestors.push(Arc::clone(&base));
        assert!(
            Arc::ptr_eq(&ancestors[0], &spaces::xyz_d65()),
            "color space '{}' is not connected to xyz-d65",
            self.id
        );

        let coords = with_default_ref_ranges(self.coords.unwrap_or_else(|| base.coords.clone()));
        let white = self.white.or(base.white);

        trace!(id = %self.id, base = %base.id, depth = ancestors.len(), "built color space");

        Arc::new(ColorSpace {
            id: self.id,
            name: self.name,
            white,
            coords,
            base: Some(base),
            transform: self.transform,
            ancestors,
        })
    }
}

fn with_default_ref_ranges(mut coords: [Coordinate; 3]) -> [Coordinate; 3] {
    for c in &mut coords {
        c.ref_range.get_or_insert(c.range);
    }
    coords
}
