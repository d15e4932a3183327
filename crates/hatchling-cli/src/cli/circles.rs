//! Circles command implementation.

use anyhow::Result;
use clap::Args;
use hatchling::circle_intersections;
use serde::Serialize;

use super::common::{json_point, write_output};

/// Default tolerance for tangency and coincidence.
pub const DEFAULT_TOL: f64 = 1e-9;

#[derive(Args, Debug)]
pub struct CirclesArgs {
    #[arg(allow_negative_numbers = true)]
    pub cx1: f64,
    #[arg(allow_negative_numbers = true)]
    pub cy1: f64,
    pub r1: f64,
    #[arg(allow_negative_numbers = true)]
    pub cx2: f64,
    #[arg(allow_negative_numbers = true)]
    pub cy2: f64,
    pub r2: f64,

    /// Tolerance for tangency and coincidence
    #[arg(long, default_value_t = DEFAULT_TOL)]
    pub tol: f64,
}

#[derive(Serialize)]
struct JsonOutput {
    points: Vec<[f64; 2]>,
}

/// Execute the circles command.
pub fn run(args: CirclesArgs) -> Result<()> {
    let points = circle_intersections(args.cx1, args.cy1, args.r1, args.cx2, args.cy2, args.r2, args.tol);
    tracing::debug!(count = points.len(), "circle intersections");

    let output = JsonOutput {
        points: points.into_iter().map(json_point).collect(),
    };
    write_output(None, &serde_json::to_string(&output)?)
}
