//! CLI command implementations

pub mod contrast;
pub mod convert;
pub mod delta;
pub mod spaces;
pub mod step;

use anyhow::{Context, Result};
use serde::Serialize;
use tinct_color::{Color, Space, SpaceRegistry};

/// Output settings shared by all commands.
#[derive(Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Prints a value as pretty JSON, or its plain text form.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value).context("Failed to serialize output")?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

/// JSON form of a color.
#[derive(Debug, Serialize)]
pub struct ColorJson {
    pub space: String,
    pub values: [f64; 3],
    pub alpha: f64,
    pub css: String,
    pub in_gamut: bool,
}

impl From<&Color> for ColorJson {
    fn from(c: &Color) -> Self {
        Self {
            space: c.space().id().to_string(),
            values: c.values(),
            alpha: c.alpha(),
            css: c.to_string(),
            in_gamut: c.in_gamut(),
        }
    }
}

/// Parses a `color()` argument.
pub fn parse_color(registry: &SpaceRegistry, s: &str) -> Result<Color> {
    registry.parse(s).with_context(|| format!("Invalid color: {s}"))
}

/// Resolves a color space id.
pub fn lookup_space(registry: &SpaceRegistry, id: &str) -> Result<Space> {
    registry.lookup(id).with_context(|| {
        let known: Vec<_> = registry.spaces().iter().map(|s| s.id().to_string()).collect();
        format!("Unknown color space '{id}' (known: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_json() {
        let registry = SpaceRegistry::with_builtins();
        let c = parse_color(&registry, "color(srgb 1 0 0 / 0.5)").unwrap();
        let json = serde_json::to_value(ColorJson::from(&c)).unwrap();
        assert_eq!(json["space"], "srgb");
        assert_eq!(json["alpha"], 0.5);
        assert_eq!(json["values"][0], 1.0);
        assert_eq!(json["css"], "color(srgb 1.000000 0.000000 0.000000 / 0.500000)");
        assert_eq!(json["in_gamut"], true);
    }

    #[test]
    fn test_errors_have_context() {
        let registry = SpaceRegistry::with_builtins();
        let err = parse_color(&registry, "red").unwrap_err();
        assert!(err.to_string().contains("Invalid color: red"));

        let err = lookup_space(&registry, "hsl").unwrap_err();
        assert!(err.to_string().contains("Unknown color space 'hsl'"));
        assert!(err.to_string().contains("oklch"));
    }
}
