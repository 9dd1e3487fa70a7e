//! tinct - color conversion, gamut mapping and color metrics
//!
//! All colors are given in CSS `color()` syntax.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "Color space conversion and gamut mapping")]
#[command(long_about = "
Converts colors between color spaces, maps them into RGB gamuts and computes
color differences and contrast.

Examples:
  tinct convert 'color(display-p3 1 0 0)' --to srgb
  tinct convert 'color(--oklch 0.65 0.29 0)' --to srgb --gamut-map
  tinct delta 'color(srgb 1 0 0)' 'color(srgb 0.9 0 0)' --metric e76
  tinct contrast 'color(srgb 1 1 1)' 'color(srgb 0.2 0.2 0.2)'
  tinct step 'color(srgb 0 0 0)' 'color(srgb 1 1 1)' --steps 5 --in oklab
  tinct spaces
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color to another space
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Color difference between two colors
    #[command(visible_alias = "d")]
    Delta(DeltaArgs),

    /// Luminance contrast between two colors
    Contrast(ContrastArgs),

    /// Interpolate a gradient between two colors
    Step(StepArgs),

    /// List known color spaces
    #[command(visible_alias = "ls")]
    Spaces,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input color, e.g. 'color(srgb 1 0.5 0)'
    color: String,

    /// Destination color space id
    #[arg(short, long)]
    to: String,

    /// Map into the destination gamut (CSS Color 4 algorithm)
    #[arg(short, long)]
    gamut_map: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Metric {
    /// Oklab distance
    Ok,
    /// Oklab distance with a/b doubled
    Ok2,
    /// CIE 1976 (Lab distance)
    E76,
    /// Euclidean distance in --space
    Euclid,
}

#[derive(Args)]
struct DeltaArgs {
    /// Reference color
    reference: String,

    /// Sample color
    sample: String,

    /// Difference metric
    #[arg(short, long, value_enum, default_value = "ok")]
    metric: Metric,

    /// Space for the euclid metric
    #[arg(short, long, default_value = "oklab")]
    space: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum ContrastMethod {
    Weber,
    Michelson,
}

#[derive(Args)]
struct ContrastArgs {
    /// First color
    a: String,

    /// Second color
    b: String,

    /// Contrast formula
    #[arg(short, long, value_enum, default_value = "weber")]
    method: ContrastMethod,
}

#[derive(Args)]
struct StepArgs {
    /// Start color
    start: String,

    /// End color
    end: String,

    /// Number of colors, including both ends
    #[arg(short = 'n', long, default_value = "5")]
    steps: usize,

    /// Interpolation space
    #[arg(long = "in", default_value = "oklab")]
    interp: String,

    /// Output space (defaults to the start color's space)
    #[arg(long)]
    out: Option<String>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = tinct_color::SpaceRegistry::with_builtins();
    let out = commands::Output { json: cli.json };

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, &registry, out),
        Commands::Delta(args) => commands::delta::run(args, &registry, out),
        Commands::Contrast(args) => commands::contrast::run(args, &registry, out),
        Commands::Step(args) => commands::step::run(args, &registry, out),
        Commands::Spaces => commands::spaces::run(&registry, out),
    }
}
