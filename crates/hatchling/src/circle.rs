//! Circle-circle intersection.
//!
//! Closed-form and independent of the polygon machinery.

use crate::geometry::Point;

/// A circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Intersection points with another circle.
    ///
    /// Returns no points when the circles are too far apart, when one
    /// contains the other, or when they are concentric (center distance
    /// below `tol`). Returns one point when the half-chord is at most `tol`
    /// (tangency) and two otherwise. The first point lies to the left of
    /// the line from this center to the other.
    pub fn intersections(&self, other: &Circle, tol: f64) -> Vec<Point> {
        let (r1, r2) = (self.radius, other.radius);
        let dx = other.center.x - self.center.x;
        let dy = other.center.y - self.center.y;
        let d = dx.hypot(dy);

        if d > r1 + r2 + tol {
            return Vec::new(); // Too far apart
        }
        if d < (r1 - r2).abs() - tol {
            return Vec::new(); // One inside the other
        }
        if d < tol || d == 0.0 {
            return Vec::new(); // Concentric
        }

        // Distance from our center to the radical line, and the half-chord.
        let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
        let h_sq = r1 * r1 - a * a;
        if h_sq < -tol {
            return Vec::new();
        }
        let h = h_sq.max(0.0).sqrt();

        let mid = Point::new(self.center.x + a * dx / d, self.center.y + a * dy / d);
        let (rx, ry) = (-dy / d, dx / d);

        let first = Point::new(mid.x + h * rx, mid.y + h * ry);
        if h <= tol {
            return vec![first];
        }

        vec![first, Point::new(mid.x - h * rx, mid.y - h * ry)]
    }
}

/// Intersection points of two circles given as raw scalars.
///
/// See [`Circle::intersections`] for the tolerance rules.
pub fn circle_circle_intersections(
    cx1: f64,
    cy1: f64,
    r1: f64,
    cx2: f64,
    cy2: f64,
    r2: f64,
    tol: f64,
) -> Vec<Point> {
    Circle::new(Point::new(cx1, cy1), r1).intersections(&Circle::new(Point::new(cx2, cy2), r2), tol)
}
