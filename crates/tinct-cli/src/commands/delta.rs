//! Color difference command.

use crate::{DeltaArgs, Metric};
use anyhow::Result;
use serde::Serialize;
use tinct_color::{delta_e76, delta_e_ok, delta_e_ok2, distance, SpaceRegistry};
use tracing::trace;

use super::{lookup_space, parse_color, Output};

#[derive(Serialize)]
struct DeltaJson {
    metric: &'static str,
    delta: f64,
}

pub fn run(args: DeltaArgs, registry: &SpaceRegistry, out: Output) -> Result<()> {
    let reference = parse_color(registry, &args.reference)?;
    let sample = parse_color(registry, &args.sample)?;

    let (metric, delta) = match args.metric {
        Metric::Ok => ("deltaEOK", delta_e_ok(&reference, &sample)),
        Metric::Ok2 => ("deltaEOK2", delta_e_ok2(&reference, &sample)),
        Metric::E76 => ("deltaE76", delta_e76(&reference, &sample)),
        Metric::Euclid => {
            let space = lookup_space(registry, &args.space)?;
            ("euclidean", distance(&reference, &sample, &space))
        }
    };
    trace!(metric, delta, "computed color difference");

    out.emit(&DeltaJson { metric, delta }, || format!("{delta:.6}"))
}
