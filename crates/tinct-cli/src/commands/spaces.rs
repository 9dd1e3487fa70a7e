//! Lists registered color spaces.

use anyhow::Result;
use serde::Serialize;
use tinct_color::SpaceRegistry;
use tinct_core::Coordinate;

use super::Output;

#[derive(Serialize)]
struct SpaceJson {
    id: String,
    name: String,
    base: Option<String>,
    coords: Vec<Coordinate>,
}

pub fn run(registry: &SpaceRegistry, out: Output) -> Result<()> {
    let spaces = registry.spaces();

    let json: Vec<_> = spaces
        .iter()
        .map(|s| SpaceJson {
            id: s.id().to_string(),
            name: s.name().to_string(),
            base: s.base().map(|b| b.id().to_string()),
            coords: s.coords().to_vec(),
        })
        .collect();

    out.emit(&json, || {
        let mut lines = Vec::with_capacity(spaces.len());
        for s in &spaces {
            let coords: Vec<_> = s.coords().iter().map(|c| c.name.as_ref()).collect();
            let base = s.base().map(|b| b.id()).unwrap_or("(root)");
            lines.push(format!("{:<20} {:<22} {:<20} {}", s.id(), s.name(), base, coords.join(", ")));
        }
        lines.join("\n")
    })
}
