//! Clip command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use hatchling::{DEFAULT_EPS, Segment, clip_lines};
use serde::Serialize;
use serde_json::Value;

use super::common::{JsonSegment, json_segment, read_input, write_output};
use super::input::coords_field;

#[derive(Args, Debug)]
pub struct ClipArgs {
    /// JSON file with "polygon", "line_starts" and "line_ends" arrays ("-" reads stdin)
    pub input: PathBuf,

    /// Tolerance for parallel edges and crossing parameters
    #[arg(long, default_value_t = DEFAULT_EPS)]
    pub eps: f64,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonOutput {
    segments: Vec<JsonSegment>,
}

/// Clip the lines in a JSON request document.
pub fn clip_request(doc: &Value, eps: f64) -> Result<Vec<Segment>> {
    let polygon = coords_field(doc, "polygon")?;
    let starts = coords_field(doc, "line_starts")?;
    let ends = coords_field(doc, "line_ends")?;

    let segments = clip_lines(
        &polygon.buffer("polygon")?,
        &starts.buffer("line_starts")?,
        &ends.buffer("line_ends")?,
        eps,
    )?;
    Ok(segments)
}

/// Execute the clip command.
pub fn run(args: ClipArgs) -> Result<()> {
    let content = read_input(&args.input)?;
    let doc: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON from {}", args.input.display()))?;

    let segments = clip_request(&doc, args.eps)?;
    tracing::info!(segments = segments.len(), "clipped");

    let output = JsonOutput {
        segments: segments.iter().map(json_segment).collect(),
    };
    write_output(args.output.as_deref(), &serde_json::to_string(&output)?)
}
