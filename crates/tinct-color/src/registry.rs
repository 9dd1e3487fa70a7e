//! Id to color space lookup.
//!
//! The registry is only needed to resolve ids found in strings; conversion
//! itself works on [`Space`] handles directly. Registration is thread-safe
//! and can happen at any time, concurrently with lookups.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::color::Color;
use crate::error::ParseError;
use crate::space::Space;
use crate::spaces;

/// Map from color space id to node.
///
/// # Example
///
/// ```rust
/// use tinct_color::SpaceRegistry;
///
/// let registry = SpaceRegistry::with_builtins();
/// assert_eq!(registry.lookup("--oklch").unwrap().id(), "oklch");
/// assert_eq!(registry.lookup("xyz").unwrap().id(), "xyz-d65");
/// ```
#[derive(Debug, Default)]
pub struct SpaceRegistry {
    spaces: RwLock<HashMap<String, Space>>,
}

impl SpaceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in space.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for space in spaces::all() {
            registry.register(&space);
        }
        registry
    }

    /// Registers a space and, transitively, its bases.
    ///
    /// A space whose id is already taken is skipped, along with its bases.
    pub fn register(&self, space: &Space) {
        let mut map = self.spaces.write();
        let mut next = Some(space);
        while let Some(space) = next {
            if map.contains_key(space.id()) {
                trace!(id = space.id(), "color space already registered");
                return;
            }
            map.insert(space.id().to_string(), Space::clone(space));
            debug!(id = space.id(), name = space.name(), "registered color space");
            next = space.base();
        }
    }

    /// Looks up a space by id.
    ///
    /// A leading `--` (custom property style) is ignored and `xyz` is an
    /// alias of `xyz-d65`.
    pub fn lookup(&self, id: &str) -> Option<Space> {
        let id = id.strip_prefix("--").unwrap_or(id);
        let id = if id == "xyz" { "xyz-d65" } else { id };
        self.spaces.read().get(id).cloned()
    }

    /// True if a space with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// All registered spaces, sorted by id.
    pub fn spaces(&self) -> Vec<Space> {
        let mut all: Vec<_> = self.spaces.read().values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }

    /// Number of registered spaces.
    pub fn len(&self) -> usize {
        self.spaces.read().len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.spaces.read().is_empty()
    }

    /// Parses a CSS `color()` string against this registry.
    ///
    /// See [`crate::parse`].
    pub fn parse(&self, s: &str) -> Result<Color, ParseError> {
        crate::parse::parse(s, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::ColorSpace;
    use std::sync::Arc;

    #[test]
    fn test_builtins() {
        let r = SpaceRegistry::with_builtins();
        assert_eq!(r.len(), spaces::all().len());
        assert!(Arc::ptr_eq(&r.lookup("srgb").unwrap(), &spaces::srgb()));
        assert!(r.lookup("nope").is_none());
    }

    #[test]
    fn test_registers_bases() {
        let r = SpaceRegistry::new();
        r.register(&spaces::lch());
        let mut ids: Vec<_> = r.spaces().iter().map(|s| s.id().to_string()).collect();
        ids.sort();
        assert_eq!(ids, ["lab", "lch", "xyz-d50", "xyz-d65"]);
    }

    #[test]
    fn test_duplicate_is_noop() {
        let r = SpaceRegistry::with_builtins();
        let impostor = ColorSpace::builder("srgb", "Not sRGB").base(&spaces::xyz_d65()).build();
        r.register(&impostor);
        assert!(Arc::ptr_eq(&r.lookup("srgb").unwrap(), &spaces::srgb()));
    }

    #[test]
    fn test_prefix_and_alias() {
        let r = SpaceRegistry::with_builtins();
        assert_eq!(r.lookup("--display-p3").unwrap().id(), "display-p3");
        assert_eq!(r.lookup("--xyz").unwrap().id(), "xyz-d65");
        assert!(r.contains("xyz-d50"));
        assert!(!SpaceRegistry::new().contains("srgb"));
        assert!(SpaceRegistry::new().is_empty());
    }
}
