//! Validated views over flat coordinate buffers.
//!
//! Callers hand the kernel row-major `f64` data plus a shape, the way a
//! host array library would. [`PointBuffer`] checks the shape once and then
//! reads rows as [`Point`]s without copying.

use crate::error::{GeometryError, Result};
use crate::geometry::{Point, Polygon};

/// A borrowed `(N, 2)` array of coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PointBuffer<'a> {
    data: &'a [f64],
}

impl<'a> PointBuffer<'a> {
    /// Validate `data` against `shape` and wrap it.
    ///
    /// `name` is the parameter name reported in errors. An empty `(0, 2)`
    /// buffer is accepted here; the operations treat it as degenerate.
    pub fn new(name: &str, data: &'a [f64], shape: &[usize]) -> Result<Self> {
        let &[rows, cols] = shape else {
            return Err(GeometryError::value(name, "must be a 2D array"));
        };
        if cols != 2 {
            return Err(GeometryError::value(name, "must have shape (N, 2)"));
        }
        if rows.checked_mul(2) != Some(data.len()) {
            return Err(GeometryError::value(name, "buffer length does not match its shape"));
        }

        Ok(Self { data })
    }

    /// Wrap interleaved `x, y` data whose row count is implied by its length.
    pub fn from_interleaved(name: &str, data: &'a [f64]) -> Result<Self> {
        if !data.len().is_multiple_of(2) {
            return Err(GeometryError::value(name, "must have shape (N, 2)"));
        }
        Self::new(name, data, &[data.len() / 2, 2])
    }

    /// Number of rows (points).
    #[inline]
    pub fn rows(&self) -> usize {
        self.data.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row `i` as a point, or `None` past the end.
    #[inline]
    pub fn point(&self, i: usize) -> Option<Point> {
        let row = self.data.get(2 * i..2 * i + 2)?;
        Some(Point::new(row[0], row[1]))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + 'a {
        self.data.chunks_exact(2).map(|row| Point::new(row[0], row[1]))
    }

    pub fn to_points(&self) -> Vec<Point> {
        self.iter().collect()
    }

    /// The rows as polygon vertices.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.to_points())
    }
}

/// Read a two-element sequence as a point.
pub fn point_like(name: &str, values: &[f64]) -> Result<Point> {
    match *values {
        [x, y] => Ok(Point::new(x, y)),
        _ => Err(GeometryError::value(name, "must have length 2")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn reads_rows_as_points() {
        let data = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
        let buf = PointBuffer::new("polygon", &data, &[3, 2]).unwrap();

        assert_eq!(buf.rows(), 3);
        assert!(!buf.is_empty());
        assert_eq!(buf.point(2), Some(Point::new(1.0, 1.0)));
        assert_eq!(buf.point(3), None);
        assert_eq!(buf.iter().len(), 3);
        assert_eq!(buf.to_points()[1], Point::new(1.0, 0.0));
    }

    #[test]
    fn empty_buffer_is_accepted() {
        let buf = PointBuffer::new("line_starts", &[], &[0, 2]).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.rows(), 0);
        assert!(buf.to_polygon().is_degenerate());
    }

    #[test]
    fn rejects_wrong_rank() {
        let err = PointBuffer::new("polygon", &[0.0, 1.0], &[2]).unwrap_err();
        assert_eq!(err.to_string(), "polygon must be a 2D array");
        assert_eq!(err.kind(), ErrorKind::Value);

        let err = PointBuffer::new("polygon", &[0.0; 4], &[1, 2, 2]).unwrap_err();
        assert_eq!(err.to_string(), "polygon must be a 2D array");
    }

    #[test]
    fn rejects_wrong_width() {
        let err = PointBuffer::new("line_starts", &[0.0; 6], &[2, 3]).unwrap_err();
        assert_eq!(err.to_string(), "line_starts must have shape (N, 2)");
        assert_eq!(err.param(), "line_starts");
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = PointBuffer::new("line_ends", &[0.0; 5], &[3, 2]).unwrap_err();
        assert_eq!(err.param(), "line_ends");
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn interleaved_needs_even_length() {
        assert_eq!(PointBuffer::from_interleaved("p", &[1.0, 2.0, 3.0, 4.0]).unwrap().rows(), 2);
        assert!(PointBuffer::from_interleaved("p", &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn point_like_requires_two_values() {
        assert_eq!(point_like("centroid", &[1.5, -2.0]).unwrap(), Point::new(1.5, -2.0));

        let err = point_like("centroid", &[1.0]).unwrap_err();
        assert_eq!(err.param(), "centroid");
        assert!(point_like("centroid", &[1.0, 2.0, 3.0]).is_err());
    }
}
