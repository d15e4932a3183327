//! CLI command implementations.
//!
//! - `fill` - Fill SVG or JSON polygons with parallel lines
//! - `clip` - Clip a batch of lines against a polygon
//! - `circles` - Intersect two circles
//! - `benchmark` - Time clipping and fill on a random polygon

pub mod benchmark;
pub mod circles;
pub mod clip;
pub mod common;
pub mod config;
pub mod fill;
pub mod input;
