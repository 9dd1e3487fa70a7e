//! Luminance contrast command.

use crate::{ContrastArgs, ContrastMethod};
use anyhow::Result;
use serde::Serialize;
use tinct_color::{contrast_michelson, contrast_weber, SpaceRegistry};

use super::{parse_color, Output};

#[derive(Serialize)]
struct ContrastJson {
    method: &'static str,
    contrast: f64,
}

pub fn run(args: ContrastArgs, registry: &SpaceRegistry, out: Output) -> Result<()> {
    let a = parse_color(registry, &args.a)?;
    let b = parse_color(registry, &args.b)?;

    let (method, contrast) = match args.method {
        ContrastMethod::Weber => ("weber", contrast_weber(&a, &b)),
        ContrastMethod::Michelson => ("michelson", contrast_michelson(&a, &b)),
    };

    out.emit(&ContrastJson { method, contrast }, || format!("{contrast:.6}"))
}
