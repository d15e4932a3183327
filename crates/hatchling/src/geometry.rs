//! Core geometry types for hatchling.
//!
//! ## Rust Lesson #1: Copy types
//!
//! `Point` and `Segment` are a handful of `f64`s, so they derive `Copy`.
//! Passing one by value is as cheap as passing a reference, and the
//! borrow checker never gets involved.

use std::f64::consts::PI;

/// Degrees-to-radians factor used by every angle parameter.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// A trailing vertex this close to the first one (per axis) closes the ring.
pub const CLOSING_EPS: f64 = 1e-9;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment. Direction only matters for the crossing parameter `t`,
/// which runs from 0 at `start` to 1 at `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// A simple polygon: a single closed ring of vertices.
///
/// The vertex list may or may not repeat the first vertex at the end.
/// [`Polygon::ring`] hides the repeat, so index arithmetic never sees it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// Vertices as supplied, possibly with a closing duplicate.
    pub outer: Vec<Point>,
    /// Optional ID from the source document
    pub id: Option<String>,
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between this point and another.
    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    /// The point as a (real, imaginary) pair, the compact encoding some
    /// callers use for circle intersections.
    #[inline]
    pub fn to_complex_parts(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// True if both coordinates are within `eps` of the other point's.
    #[inline]
    pub fn approx_eq(&self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl Segment {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Build a segment from raw endpoint coordinates.
    #[inline]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Same segment traversed the other way.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}

/// Strip a redundant closing vertex from a vertex list.
///
/// The returned slice is the ring the kernel works on; its length is the
/// polygon's effective length.
#[inline]
pub fn effective_ring(points: &[Point]) -> &[Point] {
    match points {
        [first, .., last] if first.approx_eq(*last, CLOSING_EPS) => &points[..points.len() - 1],
        _ => points,
    }
}

impl Polygon {
    /// Create a polygon from its vertices.
    pub fn new(outer: Vec<Point>) -> Self {
        Self { outer, id: None }
    }

    /// Create a polygon carrying the ID of the element it came from.
    pub fn with_id(outer: Vec<Point>, id: Option<String>) -> Self {
        Self { outer, id }
    }

    /// Vertices with any closing duplicate removed.
    #[inline]
    pub fn ring(&self) -> &[Point] {
        effective_ring(&self.outer)
    }

    /// Number of distinct ring vertices.
    #[inline]
    pub fn effective_len(&self) -> usize {
        self.ring().len()
    }

    /// Fewer than three ring vertices: nothing can be inside.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.effective_len() < 3
    }

    /// Get the bounding box of the ring as (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let ring = self.ring();
        let first = ring.first()?;

        Some(ring[1..].iter().fold(
            (first.x, first.y, first.x, first.y),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        ))
    }

    /// Arithmetic mean of the ring vertices.
    pub fn centroid(&self) -> Option<Point> {
        let ring = self.ring();
        if ring.is_empty() {
            return None;
        }

        let (sx, sy) = ring.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let n = ring.len() as f64;
        Some(Point::new(sx / n, sy / n))
    }

    /// Get the diagonal length of the bounding box.
    #[inline]
    pub fn diagonal(&self) -> Option<f64> {
        self.bounding_box()
            .map(|(min_x, min_y, max_x, max_y)| (max_x - min_x).hypot(max_y - min_y))
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(outer: Vec<Point>) -> Self {
        Self::new(outer)
    }
}

// ============================================================================
// TESTS
// ============================================================================
