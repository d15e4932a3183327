//! The kernel's three external operations.
//!
//! These take validated [`PointBuffer`]s and scalars, run the kernel, and
//! hand back owned results. Anything a host binding exposes goes through
//! here.

use crate::buffer::PointBuffer;
use crate::circle::circle_circle_intersections;
use crate::clip::clip_lines_to_ring;
use crate::error::{GeometryError, Result};
use crate::geometry::{Point, Segment, effective_ring};
use crate::hatch::{FillOptions, generate_line_fill};

/// Clip each line `line_starts[i] -> line_ends[i]` to the polygon.
///
/// Output is a flat list of inside segments in input order. A degenerate
/// polygon or zero lines gives an empty result.
pub fn clip_lines(
    polygon: &PointBuffer<'_>,
    line_starts: &PointBuffer<'_>,
    line_ends: &PointBuffer<'_>,
    eps: f64,
) -> Result<Vec<Segment>> {
    if line_starts.rows() != line_ends.rows() {
        return Err(GeometryError::value(
            "line_ends",
            "must have the same number of rows as line_starts",
        ));
    }

    let points = polygon.to_points();
    let ring = effective_ring(&points);

    Ok(clip_lines_to_ring(line_starts.iter().zip(line_ends.iter()), ring, eps))
}

/// Fill the polygon with parallel lines `spacing` apart at `angle` degrees.
pub fn line_fill(
    polygon: &PointBuffer<'_>,
    spacing: f64,
    angle: f64,
    options: &FillOptions,
) -> Result<Vec<Segment>> {
    generate_line_fill(&polygon.to_polygon(), spacing, angle, options)
}

/// Intersection points of two circles.
pub fn circle_intersections(cx1: f64, cy1: f64, r1: f64, cx2: f64, cy2: f64, r2: f64, tol: f64) -> Vec<Point> {
    circle_circle_intersections(cx1, cy1, r1, cx2, cy2, r2, tol)
}
