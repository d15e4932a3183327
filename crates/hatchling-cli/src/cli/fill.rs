//! Fill command implementation.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use hatchling::{Point, point_like};
use serde::Serialize;

use super::common::{JsonSegment, OutputFormat, json_segment, read_input, segments_to_svg, write_output};
use super::config::{FillJob, FillOverrides, FillSettings};
use super::input::load_polygons;

#[derive(Args, Debug)]
pub struct FillArgs {
    /// Input polygons: an SVG document or a JSON point list ("-" reads stdin)
    pub input: PathBuf,

    /// Distance between fill lines
    #[arg(short, long)]
    pub spacing: Option<f64>,

    /// Line angle in degrees
    #[arg(short, long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Point the line family is centred on, as "x,y"
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub centroid: Option<Point>,

    /// Override the bounding-box diagonal used for line count and reach
    #[arg(long)]
    pub bbox_diag: Option<f64>,

    /// Line reach past the centroid, in bounding-box diagonals
    #[arg(long)]
    pub overshoot: Option<f64>,

    /// Add a second pass at angle + 90
    #[arg(long)]
    pub crosshatch: bool,

    /// YAML job file with default parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl FillArgs {
    fn overrides(&self) -> FillOverrides {
        FillOverrides {
            spacing: self.spacing,
            angle: self.angle,
            overshoot: self.overshoot,
            centroid: self.centroid,
            bbox_diag: self.bbox_diag,
            crosshatch: self.crosshatch,
        }
    }
}

/// Parse "x,y" into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate: {e}"))?;
    point_like("centroid", &values).map_err(|e| e.to_string())
}

/// One input polygon and its fill, for JSON output.
#[derive(Serialize)]
struct JsonShape {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    index: usize,
    segments: Vec<JsonSegment>,
}

#[derive(Serialize)]
struct JsonOutput {
    shapes: Vec<JsonShape>,
}

/// Execute the fill command.
pub fn run(args: FillArgs) -> Result<()> {
    let job = match &args.config {
        Some(path) => FillJob::load(path)?,
        None => FillJob::default(),
    };
    let settings = FillSettings::resolve(&args.overrides(), &job)?;

    let content = read_input(&args.input)?;
    let source = load_polygons(&args.input, &content)?;
    tracing::info!(
        polygons = source.polygons.len(),
        spacing = settings.spacing,
        angle = settings.angle,
        crosshatch = settings.crosshatch,
        "filling"
    );

    let start = Instant::now();
    let mut fills = Vec::with_capacity(source.polygons.len());
    for (index, polygon) in source.polygons.iter().enumerate() {
        let segments = settings.fill(polygon)?;
        tracing::debug!(index, id = polygon.id.as_deref(), segments = segments.len(), "filled polygon");
        fills.push(segments);
    }

    let total: usize = fills.iter().map(Vec::len).sum();
    tracing::info!(
        segments = total,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "fill complete"
    );

    let output = match args.format {
        OutputFormat::Svg => segments_to_svg(fills.iter().flatten(), &source.viewbox, &settings.stroke),
        OutputFormat::Json => {
            let shapes = source
                .polygons
                .iter()
                .zip(&fills)
                .enumerate()
                .map(|(index, (polygon, segments))| JsonShape {
                    id: polygon.id.clone(),
                    index,
                    segments: segments.iter().map(json_segment).collect(),
                })
                .collect();
            serde_json::to_string_pretty(&JsonOutput { shapes })?
        }
    };

    write_output(args.output.as_deref(), &output)
}
