//! Common utilities shared across CLI commands.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use hatchling::{Point, Polygon, Segment};

/// Output format for generated segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Stroke styling for SVG output.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            width: 0.5,
        }
    }
}

/// A segment as `[[x1, y1], [x2, y2]]` for JSON output.
pub type JsonSegment = [[f64; 2]; 2];

pub fn json_point(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

pub fn json_segment(s: &Segment) -> JsonSegment {
    [json_point(s.start), json_point(s.end)]
}

/// Convert segments to SVG output (individual <line> elements).
pub fn segments_to_svg<'a>(
    segments: impl IntoIterator<Item = &'a Segment>,
    viewbox: &str,
    stroke: &Stroke,
) -> String {
    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">
<g stroke="{}" stroke-width="{}" fill="none">
"#,
        viewbox, stroke.color, stroke.width
    );

    for seg in segments {
        let _ = writeln!(
            svg,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>",
            seg.start.x, seg.start.y, seg.end.x, seg.end.y
        );
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Extract viewBox from SVG content.
pub fn extract_viewbox(svg: &str) -> Option<String> {
    ["viewBox=\"", "viewbox=\""].iter().find_map(|attr| {
        let start = svg.find(attr)? + attr.len();
        let rest = &svg[start..];
        let end = rest.find('"')?;
        Some(rest[..end].to_string())
    })
}

/// A viewBox that covers every polygon, for inputs that carry none.
pub fn viewbox_for(polygons: &[Polygon]) -> String {
    let bounds = polygons
        .iter()
        .filter_map(Polygon::bounding_box)
        .reduce(|(a0, a1, a2, a3), (b0, b1, b2, b3)| (a0.min(b0), a1.min(b1), a2.max(b2), a3.max(b3)));

    match bounds {
        Some((min_x, min_y, max_x, max_y)) => {
            format!("{} {} {} {}", min_x, min_y, max_x - min_x, max_y - min_y)
        }
        None => "0 0 1000 1000".to_string(),
    }
}

/// Read a whole input file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).context("failed to read stdin")?;
        return Ok(content);
    }

    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Write output to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(content.as_bytes()).context("failed to write stdout")?;
            if !content.ends_with('\n') {
                out.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
