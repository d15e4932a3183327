//! hatchling - clip lines, hatch polygons and intersect circles
//!
//! Usage:
//!   hatchling fill <input.svg|json> [options]   Fill polygons with parallel lines
//!   hatchling clip <input.json> [options]       Clip lines against a polygon
//!   hatchling circles cx1 cy1 r1 cx2 cy2 r2     Intersect two circles
//!   hatchling benchmark [options]               Time clip and fill

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cli::benchmark::BenchmarkArgs;
use cli::circles::CirclesArgs;
use cli::clip::ClipArgs;
use cli::fill::FillArgs;

#[derive(Parser)]
#[command(name = "hatchling", version)]
#[command(about = "Polygon line clipping, hatch fills and circle intersections")]
struct Cmd {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Fill every polygon in an SVG or JSON file with hatch lines
    Fill(FillArgs),
    /// Clip lines from a JSON file against a polygon
    Clip(ClipArgs),
    /// Print the intersection points of two circles as JSON
    Circles(CirclesArgs),
    /// Benchmark clipping and fill on a random star polygon
    Benchmark(BenchmarkArgs),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose);

    match cmd.action {
        Action::Fill(args) => cli::fill::run(args),
        Action::Clip(args) => cli::clip::run(args),
        Action::Circles(args) => cli::circles::run(args),
        Action::Benchmark(args) => cli::benchmark::run(args),
    }
}
