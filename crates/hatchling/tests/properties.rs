//! Property tests for the clipper and fill generator.

use std::f64::consts::PI;

use hatchling::clip::clip_lines_to_ring;
use hatchling::{
    DEFAULT_EPS, FillOptions, Point, Polygon, Segment, clip_lines_to_polygon, generate_line_fill,
    point_in_polygon,
};
use proptest::prelude::*;

fn regular_polygon(center: Point, radius: f64, sides: usize, phase: f64) -> Polygon {
    let outer = (0..sides)
        .map(|i| {
            let a = phase + 2.0 * PI * i as f64 / sides as f64;
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect();
    Polygon::new(outer)
}

/// Star-shaped polygon with one random radius per vertex.
fn star_polygon(radii: &[f64]) -> Polygon {
    let n = radii.len();
    let outer = radii
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let a = 2.0 * PI * i as f64 / n as f64;
            Point::new(r * a.cos(), r * a.sin())
        })
        .collect();
    Polygon::new(outer)
}

proptest! {
    #[test]
    fn chord_through_convex_polygon_is_one_segment(
        sides in 3usize..16,
        radius in 1.0f64..100.0,
        cx in -50.0f64..50.0,
        cy in -50.0f64..50.0,
        phase in 0.0f64..(2.0 * PI),
        angle in 0.0f64..PI,
    ) {
        let center = Point::new(cx, cy);
        let poly = regular_polygon(center, radius, sides, phase);

        let (s, c) = angle.sin_cos();
        let reach = 3.0 * radius;
        let line = Segment::new(
            Point::new(cx - reach * c, cy - reach * s),
            Point::new(cx + reach * c, cy + reach * s),
        );

        let out = clip_lines_to_polygon(&[line], &poly, DEFAULT_EPS);
        prop_assert_eq!(out.len(), 1);

        let seg = out[0];
        let apothem = radius * (PI / sides as f64).cos();
        for p in [seg.start, seg.end] {
            let d = p.distance(center);
            prop_assert!(d <= radius + 1e-6, "endpoint {:?} outside circumcircle", p);
            prop_assert!(d >= apothem - 1e-6, "endpoint {:?} inside incircle", p);
        }

        let mid = seg.midpoint();
        prop_assert!(point_in_polygon(mid.x, mid.y, poly.ring()));
    }

    #[test]
    fn containment_ignores_ring_rotation(
        radii in prop::collection::vec(1.0f64..10.0, 3..20),
        shift in 0usize..20,
        px in -12.0f64..12.0,
        py in -12.0f64..12.0,
    ) {
        let poly = star_polygon(&radii);
        let mut rotated = poly.outer.clone();
        let k = shift % rotated.len();
        rotated.rotate_left(k);

        prop_assert_eq!(
            point_in_polygon(px, py, &poly.outer),
            point_in_polygon(px, py, &rotated)
        );
    }

    #[test]
    fn degenerate_polygon_clips_everything(
        pts in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 0..3),
        lines in prop::collection::vec((-20.0f64..20.0, -20.0f64..20.0, -20.0f64..20.0, -20.0f64..20.0), 0..10),
    ) {
        let ring: Vec<Point> = pts.into_iter().map(Point::from).collect();
        let lines = lines
            .into_iter()
            .map(|(x1, y1, x2, y2)| (Point::new(x1, y1), Point::new(x2, y2)));

        prop_assert!(clip_lines_to_ring(lines, &ring, DEFAULT_EPS).is_empty());
    }

    #[test]
    fn clipped_pieces_have_inside_midpoints(
        radii in prop::collection::vec(1.0f64..10.0, 3..20),
        x1 in -15.0f64..15.0,
        y1 in -15.0f64..15.0,
        x2 in -15.0f64..15.0,
        y2 in -15.0f64..15.0,
    ) {
        let poly = star_polygon(&radii);
        let line = Segment::from_coords(x1, y1, x2, y2);

        for seg in clip_lines_to_polygon(&[line], &poly, DEFAULT_EPS) {
            let mid = seg.midpoint();
            prop_assert!(point_in_polygon(mid.x, mid.y, poly.ring()));
        }
    }

    #[test]
    fn fill_stays_inside_bounding_box(
        w in 1.0f64..50.0,
        h in 1.0f64..50.0,
        spacing in 0.5f64..5.0,
        angle in 0.0f64..180.0,
    ) {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
        ]);

        let segs = generate_line_fill(&poly, spacing, angle, &FillOptions::default()).unwrap();
        for seg in segs {
            for p in [seg.start, seg.end] {
                prop_assert!(p.x >= -1e-6 && p.x <= w + 1e-6);
                prop_assert!(p.y >= -1e-6 && p.y <= h + 1e-6);
            }
        }
    }
}
