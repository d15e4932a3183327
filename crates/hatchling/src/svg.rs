//! SVG input - extract fillable polygons from an SVG document.
//!
//! Uses usvg to resolve the document (CSS, shapes to paths, nested
//! transforms), then walks the tree and turns every path into one polygon
//! per subpath, in document coordinates.
//!
//! ## Curve Flattening
//!
//! Paths contain quadratic and cubic Béziers. The kernel only knows
//! straight edges, so curves are flattened with lyon_geom at
//! [`CURVE_TOLERANCE`].

use crate::geometry::{Point, Polygon};
use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};
use thiserror::Error;
use usvg::tiny_skia_path::PathSegment;

/// Maximum distance between a curve and its flattened polyline.
pub const CURVE_TOLERANCE: f32 = 0.1;

/// Consecutive points closer than this on both axes are merged.
const DUPLICATE_EPS: f64 = 1e-6;

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("SVG parse error: {0}")]
    Parse(#[from] usvg::Error),

    #[error("no polygons found in SVG")]
    NoPolygons,
}

/// Extract every closed-able shape in the document as a polygon.
///
/// Each subpath becomes its own polygon and keeps the element's id. Holes
/// are not modelled: an inner subpath is filled as a separate shape.
pub fn extract_polygons_from_svg(svg_content: &str) -> Result<Vec<Polygon>, SvgError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)?;

    let mut polygons = Vec::new();
    collect_group(tree.root(), &mut polygons);

    if polygons.is_empty() {
        return Err(SvgError::NoPolygons);
    }

    tracing::debug!(count = polygons.len(), "extracted polygons from SVG");
    Ok(polygons)
}

fn collect_group(group: &usvg::Group, polygons: &mut Vec<Polygon>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => collect_group(group, polygons),
            usvg::Node::Path(path) => collect_path(path, polygons),
            usvg::Node::Image(_) | usvg::Node::Text(_) => {
                tracing::debug!(id = child.id(), "skipping non-path node");
            }
        }
    }
}

/// Accumulates one subpath at a time and emits it as a polygon.
struct SubpathBuilder<'a> {
    id: Option<&'a str>,
    points: Vec<Point>,
    cursor: Option<lyon_geom::Point<f32>>,
}

impl<'a> SubpathBuilder<'a> {
    fn new(id: &'a str) -> Self {
        Self {
            id: (!id.is_empty()).then_some(id),
            points: Vec::new(),
            cursor: None,
        }
    }

    fn push(&mut self, p: lyon_geom::Point<f32>) {
        self.points.push(Point::new(p.x as f64, p.y as f64));
        self.cursor = Some(p);
    }

    fn move_to(&mut self, p: lyon_geom::Point<f32>, out: &mut Vec<Polygon>) {
        self.finish(out);
        self.push(p);
    }

    fn quad_to(&mut self, ctrl: lyon_geom::Point<f32>, to: lyon_geom::Point<f32>) {
        let Some(from) = self.cursor else {
            self.push(to);
            return;
        };

        let curve = QuadraticBezierSegment { from, ctrl, to };
        curve.for_each_flattened(CURVE_TOLERANCE, &mut |seg| self.push(seg.to));
        self.cursor = Some(to);
    }

    fn cubic_to(&mut self, ctrl1: lyon_geom::Point<f32>, ctrl2: lyon_geom::Point<f32>, to: lyon_geom::Point<f32>) {
        let Some(from) = self.cursor else {
            self.push(to);
            return;
        };

        let curve = CubicBezierSegment { from, ctrl1, ctrl2, to };
        curve.for_each_flattened(CURVE_TOLERANCE, &mut |seg| self.push(seg.to));
        self.cursor = Some(to);
    }

    /// Emit the current subpath if it still spans an area after cleanup.
    fn finish(&mut self, out: &mut Vec<Polygon>) {
        self.cursor = None;
        let mut points = std::mem::take(&mut self.points);

        points.dedup_by(|a, b| a.approx_eq(*b, DUPLICATE_EPS));

        let polygon = Polygon::with_id(points, self.id.map(str::to_owned));
        if polygon.is_degenerate() {
            if !polygon.outer.is_empty() {
                tracing::debug!(id = self.id, vertices = polygon.outer.len(), "dropping degenerate subpath");
            }
            return;
        }
        out.push(polygon);
    }
}

fn collect_path(path: &usvg::Path, polygons: &mut Vec<Polygon>) {
    let Some(data) = path.data().clone().transform(path.abs_transform()) else {
        tracing::debug!(id = path.id(), "skipping path with non-invertible transform");
        return;
    };

    let mut builder = SubpathBuilder::new(path.id());
    for segment in data.segments() {
        match segment {
            PathSegment::MoveTo(p) => builder.move_to(point(p.x, p.y), polygons),
            PathSegment::LineTo(p) => builder.push(point(p.x, p.y)),
            PathSegment::QuadTo(c, p) => builder.quad_to(point(c.x, c.y), point(p.x, p.y)),
            PathSegment::CubicTo(c1, c2, p) => {
                builder.cubic_to(point(c1.x, c1.y), point(c2.x, c2.y), point(p.x, p.y));
            }
            PathSegment::Close => builder.finish(polygons),
        }
    }
    builder.finish(polygons);
}

// ============================================================================
// TESTS
// ============================================================================
