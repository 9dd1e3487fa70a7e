//! CSS `color()` parsing.
//!
//! Accepts `color(<id> <c1> <c2> <c3>[ / <alpha>])` with an optional trailing
//! `;`. Components are plain numbers or percentages. Percentages are
//! clamped to `[0%, 100%]` and mapped onto the coordinate's reference range
//! (alpha onto `[0, 1]`); plain alpha is clamped to `[0, 1]`.
//!
//! The `--` prefix CSS requires for non-predefined spaces is optional.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::Color;
use crate::error::ParseError;
use crate::registry::SpaceRegistry;

const NUMBER: &str = r"(?:[+-]?[0-9]+|[+-]?[0-9]*\.[0-9]+(?:[eE][+-]?[0-9]+)?)%?";

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^color\(([a-zA-Z0-9-]+) ({NUMBER}) ({NUMBER}) ({NUMBER})(?: / ({NUMBER}))?\);?$");
    Regex::new(&pattern).unwrap_or_else(|e| panic!("color() pattern is invalid: {e}"))
});

/// Parses a CSS `color()` string, resolving the space id in `registry`.
///
/// # Example
///
/// ```rust
/// use tinct_color::{parse, SpaceRegistry};
///
/// let registry = SpaceRegistry::with_builtins();
/// let c = parse("color(display-p3 100% 0 0 / 50%)", &registry).unwrap();
/// assert_eq!(c.values(), [1.0, 0.0, 0.0]);
/// assert_eq!(c.alpha(), 0.5);
/// ```
pub fn parse(s: &str, registry: &SpaceRegistry) -> Result<Color, ParseError> {
    let caps = COLOR_RE.captures(s).ok_or_else(|| ParseError::Malformed(s.to_string()))?;

    let id = &caps[1];
    let space = registry
        .lookup(id)
        .ok_or_else(|| ParseError::UnknownSpace(id.to_string()))?;

    let mut values = [0.0; 3];
    for (i, (v, coord)) in values.iter_mut().zip(space.coords()).enumerate() {
        *v = match component(&caps[i + 2])? {
            Component::Number(n) => n,
            Component::Percent(p) => coord.ref_range().lerp(p),
        };
    }

    let alpha = match caps.get(5) {
        None => 1.0,
        Some(m) => match component(m.as_str())? {
            Component::Number(n) => n.clamp(0.0, 1.0),
            Component::Percent(p) => p,
        },
    };

    Ok(Color::from_values(&space, values, alpha))
}

enum Component {
    Number(f64),
    // Fraction in [0, 1].
    Percent(f64),
}

fn component(s: &str) -> Result<Component, ParseError> {
    let (digits, percent) = match s.strip_suffix('%') {
        Some(d) => (d, true),
        None => (s, false),
    };
    let n: f64 = digits.parse().map_err(|_| ParseError::InvalidNumber(s.to_string()))?;
    // Overflowing literals parse as infinity
    if !n.is_finite() {
        return Err(ParseError::InvalidNumber(s.to_string()));
    }
    Ok(if percent {
        Component::Percent(n.clamp(0.0, 100.0) / 100.0)
    } else {
        Component::Number(n)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::*;
    use approx::assert_abs_diff_eq;

    fn registry() -> SpaceRegistry {
        SpaceRegistry::with_builtins()
    }

    #[test]
    fn test_plain() {
        let c = parse("color(srgb 1 0 0)", &registry()).unwrap();
        assert_eq!(c, Color::new(&srgb(), 1.0, 0.0, 0.0));
        assert_eq!(c.to_string(), "color(srgb 1.000000 0.000000 0.000000)");
    }

    #[test]
    fn test_number_forms() {
        let c = parse("color(xyz-d50 .5 -0.25 +1.5e-1);", &registry()).unwrap();
        assert_eq!(c.values(), [0.5, -0.25, 0.15]);
    }

    #[test]
    fn test_percent_ref_range() {
        let c = parse("color(--lab 50% 100% 0%)", &registry()).unwrap();
        assert_abs_diff_eq!(c.values()[0], 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.values()[1], 125.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.values()[2], -125.0, epsilon = 1e-12);
    }

    #[test]
    fn test_percent_clamped() {
        let c = parse("color(srgb 150% -20% 50%)", &registry()).unwrap();
        assert_eq!(c.values(), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_alpha() {
        let r = registry();
        assert_eq!(parse("color(srgb 0 0 0 / 0.25)", &r).unwrap().alpha(), 0.25);
        assert_eq!(parse("color(srgb 0 0 0 / 2)", &r).unwrap().alpha(), 1.0);
        assert_eq!(parse("color(srgb 0 0 0 / 40%)", &r).unwrap().alpha(), 0.4);
        assert_eq!(parse("color(srgb 0 0 0)", &r).unwrap().alpha(), 1.0);
    }

    #[test]
    fn test_xyz_alias() {
        let c = parse("color(xyz 0.1 0.2 0.3)", &registry()).unwrap();
        assert_eq!(c.space().id(), "xyz-d65");
    }

    #[test]
    fn test_errors() {
        let r = registry();
        assert!(matches!(parse("rgb(1 0 0)", &r), Err(ParseError::Malformed(_))));
        assert!(matches!(parse("color(srgb 1 0)", &r), Err(ParseError::Malformed(_))));
        assert!(matches!(parse("color(srgb  1 0 0)", &r), Err(ParseError::Malformed(_))));
        assert!(matches!(parse("color(nope 1 0 0)", &r), Err(ParseError::UnknownSpace(id)) if id == "nope"));
        let huge = format!("color(srgb 1{} 0 0)", "0".repeat(400));
        assert!(matches!(parse(&huge, &r), Err(ParseError::InvalidNumber(_))));
    }

    #[test]
    fn test_empty_registry() {
        let r = SpaceRegistry::new();
        assert!(matches!(parse("color(srgb 1 0 0)", &r), Err(ParseError::UnknownSpace(_))));
    }
}
