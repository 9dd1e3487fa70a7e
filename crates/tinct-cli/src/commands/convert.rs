//! Color conversion command.
//!
//! Converts a color to another space, optionally mapping it into the
//! destination gamut.

use crate::ConvertArgs;
use anyhow::Result;
use tinct_color::{gamut_map_css, SpaceRegistry};
use tracing::{debug, info};

use super::{lookup_space, parse_color, ColorJson, Output};

pub fn run(args: ConvertArgs, registry: &SpaceRegistry, out: Output) -> Result<()> {
    let color = parse_color(registry, &args.color)?;
    let to = lookup_space(registry, &args.to)?;

    info!(from = color.space().id(), to = to.id(), gamut_map = args.gamut_map, "Converting color");

    let result = if args.gamut_map {
        gamut_map_css(&color, &to)
    } else {
        color.convert(&to)
    };

    if !result.in_gamut() {
        debug!(color = %result, "result is out of gamut");
    }

    out.emit(&ColorJson::from(&result), || {
        if result.in_gamut() {
            result.to_string()
        } else {
            format!("{result} (out of gamut)")
        }
    })
}
