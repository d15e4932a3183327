//! Line clipping against a polygon.
//!
//! This is the HOT PATH - the code that runs once per hatch line per
//! polygon edge. Everything here works on borrowed slices and reuses one
//! scratch vector per call.

use crate::geometry::{Point, Polygon, Segment};

/// Default tolerance for the segment/segment solve.
pub const DEFAULT_EPS: f64 = 1e-10;

/// Crossings closer than this along the query line are the same crossing.
pub const DEDUP_EPS: f64 = 1e-9;

/// Added to the ray-cast denominator so horizontal edges never divide by zero.
pub const RAY_GUARD: f64 = 1e-300;

// ============================================================================
// POINT IN POLYGON (Ray Casting Algorithm)
// ============================================================================

/// Test if a point is inside a ring using the even-odd rule.
///
/// Casts a ray to the right and counts edge crossings. Points exactly on
/// the boundary land on whichever side floating-point rounding puts them.
#[inline]
pub fn point_in_polygon(px: f64, py: f64, ring: &[Point]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (ring[i].x, ring[i].y);
        let (xj, yj) = (ring[j].x, ring[j].y);

        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi + RAY_GUARD) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

// ============================================================================
// SEGMENT-SEGMENT INTERSECTION
// ============================================================================

/// Where a query segment crosses a polygon edge.
///
/// `t` is the position along the query segment, not along the edge, so
/// sorting by `t` puts crossings in traversal order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub t: f64,
    pub point: Point,
}

/// Intersect segment `p1 -> p2` with segment `p3 -> p4`.
///
/// Near-parallel pairs (`|denom| < eps`) never intersect. Both parameters
/// get `eps` of slack at the endpoints. The point is always evaluated on
/// the first segment, so repeated calls on one query line agree exactly.
#[inline]
pub fn segment_intersection(p1: Point, p2: Point, p3: Point, p4: Point, eps: f64) -> Option<Crossing> {
    let Point { x: x1, y: y1 } = p1;
    let Point { x: x2, y: y2 } = p2;
    let Point { x: x3, y: y3 } = p3;
    let Point { x: x4, y: y4 } = p4;

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < eps {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

    if t < -eps || t > 1.0 + eps || u < -eps || u > 1.0 + eps {
        return None;
    }

    Some(Crossing {
        t,
        point: Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)),
    })
}

// ============================================================================
// LINE-POLYGON CLIPPING
// ============================================================================

/// Collect every crossing of `start -> end` with the ring, in `t` order,
/// with near-duplicates collapsed.
///
/// `crossings` is cleared first; pass the same vector for every line of a
/// batch so it is allocated once.
pub fn collect_crossings(start: Point, end: Point, ring: &[Point], eps: f64, crossings: &mut Vec<Crossing>) {
    crossings.clear();

    let n = ring.len();
    for j in 0..n {
        let a = ring[j];
        let b = ring[(j + 1) % n];
        if let Some(crossing) = segment_intersection(start, end, a, b, eps) {
            crossings.push(crossing);
        }
    }

    if crossings.len() < 2 {
        return;
    }

    // total_cmp: NaN sorts instead of panicking.
    crossings.sort_by(|a, b| a.t.total_cmp(&b.t));

    // ## Rust Lesson #2: dedup_by
    //
    // The closure gets (candidate, last kept). Returning true drops the
    // candidate, which is exactly "compare against the previous survivor".
    crossings.dedup_by(|next, kept| (next.t - kept.t).abs() < DEDUP_EPS);
}

/// Clip one line into `out`, reusing `crossings` as scratch.
///
/// Crossings are paired (0,1), (2,3), ... and a pair survives only if its
/// midpoint is inside the ring. A lone tangent touch or an odd leftover
/// crossing produces nothing.
#[inline]
pub fn clip_line_into(
    start: Point,
    end: Point,
    ring: &[Point],
    eps: f64,
    crossings: &mut Vec<Crossing>,
    out: &mut Vec<Segment>,
) {
    collect_crossings(start, end, ring, eps, crossings);
    if crossings.len() < 2 {
        return;
    }

    for pair in crossings.chunks_exact(2) {
        let (a, b) = (pair[0].point, pair[1].point);
        let mid = a.midpoint(b);
        if point_in_polygon(mid.x, mid.y, ring) {
            out.push(Segment::new(a, b));
        }
    }
}

/// Clip a single segment to a polygon.
pub fn clip_segment_to_polygon(line: Segment, polygon: &Polygon, eps: f64) -> Vec<Segment> {
    clip_lines_to_polygon(std::slice::from_ref(&line), polygon, eps)
}

// ============================================================================
// BATCH OPERATIONS
// ============================================================================

/// Clip many segments to a polygon.
///
/// Output keeps input order, and within one input line the pieces come in
/// crossing order. A degenerate polygon clips everything away.
pub fn clip_lines_to_polygon(lines: &[Segment], polygon: &Polygon, eps: f64) -> Vec<Segment> {
    let ring = polygon.ring();
    clip_lines_to_ring(lines.iter().map(|l| (l.start, l.end)), ring, eps)
}

/// Clip `(start, end)` pairs against a bare ring.
///
/// The ring must already have its closing vertex stripped.
pub fn clip_lines_to_ring<I>(lines: I, ring: &[Point], eps: f64) -> Vec<Segment>
where
    I: IntoIterator<Item = (Point, Point)>,
{
    if ring.len() < 3 {
        return Vec::new();
    }

    let mut crossings = Vec::with_capacity(ring.len());
    let mut out = Vec::new();

    for (start, end) in lines {
        clip_line_into(start, end, ring, eps, &mut crossings, &mut out);
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================
