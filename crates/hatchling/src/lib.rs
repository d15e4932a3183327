//! # hatchling
//!
//! Line clipping, hatch fill and circle intersection for plotter-style
//! rendering.
//!
//! Everything is built on three primitives: segment/segment intersection,
//! even-odd point containment and ring normalization. The kernel modules
//! are pure functions over borrowed slices; [`buffer`] and [`svg`] adapt
//! outside data into them.
//!
//! ## Rust Lesson #3: Re-exports
//!
//! `pub use` lifts the everyday types to the crate root, so callers write
//! `hatchling::Polygon` instead of `hatchling::geometry::Polygon`. The
//! modules stay public for anything more specialised.

pub mod buffer;
pub mod circle;
pub mod clip;
pub mod error;
pub mod geometry;
pub mod hatch;
pub mod ops;
pub mod svg;

pub use buffer::{PointBuffer, point_like};
pub use circle::{Circle, circle_circle_intersections};
pub use clip::{DEFAULT_EPS, clip_lines_to_polygon, clip_segment_to_polygon, point_in_polygon, segment_intersection};
pub use error::{ErrorKind, GeometryError, Result};
pub use geometry::{Point, Polygon, Segment};
pub use hatch::{FillOptions, generate_crosshatch_fill, generate_hatch_lines, generate_line_fill};
pub use ops::{circle_intersections, clip_lines, line_fill};
pub use svg::{SvgError, extract_polygons_from_svg};
