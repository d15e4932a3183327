//! Hatch line generation for fill patterns.
//!
//! Generates a family of evenly spaced parallel lines through a polygon and
//! clips each one to the interior as it is generated. Thousands of
//! candidate lines per polygon are normal, so the fill never materializes
//! the unclipped family: one scratch vector serves every line.

use crate::clip::{DEFAULT_EPS, clip_line_into};
use crate::error::{GeometryError, Result};
use crate::geometry::{DEG_TO_RAD, Point, Polygon, Segment};

/// Spacing below this is clamped when counting lines.
pub const MIN_SPACING: f64 = 1e-6;

/// Default reach of each line past the centroid, in bounding-box diagonals.
pub const DEFAULT_OVERSHOOT: f64 = 2.0;

/// Lines added on each side beyond what the diagonal strictly needs.
const EXTRA_LINES: i64 = 3;

/// Upper bound on lines per side of the centroid.
pub const MAX_LINES_PER_SIDE: i64 = 1_000_000;

/// Optional overrides for line fill placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillOptions {
    /// Point the family is centred on. Defaults to the mean of the ring vertices.
    pub centroid: Option<Point>,
    /// Length used for line count and line reach. Non-positive values mean
    /// "measure the polygon's bounding box".
    pub bbox_diag: Option<f64>,
    /// How far each line extends past the centroid, in multiples of
    /// `bbox_diag`. Non-positive values fall back to 2.0.
    pub overshoot: f64,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            centroid: None,
            bbox_diag: None,
            overshoot: DEFAULT_OVERSHOOT,
        }
    }
}

impl FillOptions {
    pub fn with_centroid(mut self, centroid: Point) -> Self {
        self.centroid = Some(centroid);
        self
    }

    pub fn with_bbox_diag(mut self, bbox_diag: f64) -> Self {
        self.bbox_diag = Some(bbox_diag);
        self
    }

    pub fn with_overshoot(mut self, overshoot: f64) -> Self {
        self.overshoot = overshoot;
        self
    }
}

/// Direction vectors for parallel line generation.
#[derive(Debug, Clone, Copy)]
struct LineDirection {
    /// Direction along the lines (unit vector)
    dx: f64,
    dy: f64,
    /// Direction perpendicular to lines (for spacing), rotated +90°
    px: f64,
    py: f64,
}

impl LineDirection {
    fn from_degrees(angle_degrees: f64) -> Self {
        let (sin_a, cos_a) = (angle_degrees * DEG_TO_RAD).sin_cos();
        Self {
            dx: cos_a,
            dy: sin_a,
            px: -sin_a,
            py: cos_a,
        }
    }
}

/// Everything needed to emit the `k`-th line of a family.
#[derive(Debug, Clone, Copy)]
struct HatchLayout {
    start_base: Point,
    end_base: Point,
    dir: LineDirection,
    spacing: f64,
    count: i64,
}

impl HatchLayout {
    /// Resolve defaults against the polygon. `Ok(None)` means there is
    /// nothing to fill; a line family past [`MAX_LINES_PER_SIDE`] is an error.
    fn new(polygon: &Polygon, spacing: f64, angle_degrees: f64, options: &FillOptions) -> Result<Option<Self>> {
        if polygon.is_degenerate() {
            return Ok(None);
        }

        let Some(centroid) = options.centroid.or_else(|| polygon.centroid()) else {
            return Ok(None);
        };

        let bbox_diag = match options.bbox_diag {
            Some(d) if d > 0.0 && d.is_finite() => Some(d),
            _ => polygon.diagonal(),
        };
        let Some(bbox_diag) = bbox_diag.filter(|d| *d > 0.0 && d.is_finite()) else {
            return Ok(None);
        };

        // Counted in f64 so the cap is checked before any integer conversion.
        let lines = (bbox_diag / spacing.max(MIN_SPACING)).floor() + EXTRA_LINES as f64;
        if lines > MAX_LINES_PER_SIDE as f64 {
            return Err(GeometryError::value("bbox_diag", "is too large for the given spacing"));
        }
        let count = lines as i64;

        let overshoot = if options.overshoot > 0.0 {
            options.overshoot
        } else {
            DEFAULT_OVERSHOOT
        };

        let dir = LineDirection::from_degrees(angle_degrees);

        let reach = bbox_diag * overshoot;
        let (span_x, span_y) = (dir.dx * reach, dir.dy * reach);

        Ok(Some(Self {
            start_base: Point::new(centroid.x - span_x, centroid.y - span_y),
            end_base: Point::new(centroid.x + span_x, centroid.y + span_y),
            dir,
            spacing,
            count,
        }))
    }

    fn offsets(&self) -> std::ops::RangeInclusive<i64> {
        -self.count..=self.count
    }

    #[inline]
    fn line(&self, k: i64) -> (Point, Point) {
        let offset = k as f64 * self.spacing;
        let (ox, oy) = (offset * self.dir.px, offset * self.dir.py);
        (
            Point::new(self.start_base.x + ox, self.start_base.y + oy),
            Point::new(self.end_base.x + ox, self.end_base.y + oy),
        )
    }
}

fn check_spacing(spacing: f64) -> Result<()> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::value("spacing", "must be positive"))
    }
}

/// Generate the unclipped family of parallel lines a fill would use.
///
/// Lines are ordered by offset, from the most negative perpendicular
/// offset to the most positive.
pub fn generate_hatch_lines(
    polygon: &Polygon,
    spacing: f64,
    angle_degrees: f64,
    options: &FillOptions,
) -> Result<Vec<Segment>> {
    check_spacing(spacing)?;

    let Some(layout) = HatchLayout::new(polygon, spacing, angle_degrees, options)? else {
        return Ok(Vec::new());
    };

    Ok(layout
        .offsets()
        .map(|k| {
            let (start, end) = layout.line(k);
            Segment::new(start, end)
        })
        .collect())
}

/// Generate hatch lines and clip them to a polygon.
///
/// Segments come out in generation order: by offset, then by position
/// along each line. Nothing is merged or re-sorted afterwards.
pub fn generate_line_fill(
    polygon: &Polygon,
    spacing: f64,
    angle_degrees: f64,
    options: &FillOptions,
) -> Result<Vec<Segment>> {
    check_spacing(spacing)?;

    let Some(layout) = HatchLayout::new(polygon, spacing, angle_degrees, options)? else {
        return Ok(Vec::new());
    };

    let ring = polygon.ring();
    let mut crossings = Vec::with_capacity(ring.len());
    let mut segments = Vec::new();

    for k in layout.offsets() {
        let (start, end) = layout.line(k);
        clip_line_into(start, end, ring, DEFAULT_EPS, &mut crossings, &mut segments);
    }

    Ok(segments)
}

/// Generate crosshatch pattern (two sets of perpendicular lines).
///
/// The fill at `angle_degrees` comes first, then the fill at
/// `angle_degrees + 90`.
pub fn generate_crosshatch_fill(
    polygon: &Polygon,
    spacing: f64,
    angle_degrees: f64,
    options: &FillOptions,
) -> Result<Vec<Segment>> {
    let mut lines = generate_line_fill(polygon, spacing, angle_degrees, options)?;
    let perpendicular = generate_line_fill(polygon, spacing, angle_degrees + 90.0, options)?;
    lines.extend(perpendicular);
    Ok(lines)
}

// ============================================================================
// TESTS
// ============================================================================
