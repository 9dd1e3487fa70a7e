//! Gradient command.

use crate::StepArgs;
use anyhow::{bail, Result};
use tinct_color::{step, SpaceRegistry};
use tracing::debug;

use super::{lookup_space, parse_color, ColorJson, Output};

pub fn run(args: StepArgs, registry: &SpaceRegistry, out: Output) -> Result<()> {
    if args.steps < 2 {
        bail!("--steps must be at least 2, got {}", args.steps);
    }

    let start = parse_color(registry, &args.start)?;
    let end = parse_color(registry, &args.end)?;
    let interp = lookup_space(registry, &args.interp)?;
    let target = match &args.out {
        Some(id) => lookup_space(registry, id)?,
        None => start.space().clone(),
    };

    debug!(interp = interp.id(), out = target.id(), steps = args.steps, "Interpolating");

    let colors: Vec<_> = step(&start, &end, &interp, &target, args.steps).collect();
    let json: Vec<_> = colors.iter().map(ColorJson::from).collect();

    out.emit(&json, || colors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))
}
