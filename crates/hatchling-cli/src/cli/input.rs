//! Input adapters: JSON coordinate arrays and polygon sources.
//!
//! JSON arrays are flattened into row-major buffers and validated with
//! [`PointBuffer`], so a malformed file produces the same errors a host
//! binding would.

use std::path::Path;

use anyhow::{Context, Result, bail};
use hatchling::{GeometryError, PointBuffer, Polygon, extract_polygons_from_svg};
use serde_json::Value;

use super::common::{extract_viewbox, viewbox_for};

/// Row-major coordinates pulled out of a JSON array, ready for validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Coords {
    pub data: Vec<f64>,
    pub shape: Vec<usize>,
}

impl Coords {
    /// Read a JSON array of `[x, y]` rows.
    pub fn from_json(name: &str, value: &Value) -> Result<Self, GeometryError> {
        let Value::Array(rows) = value else {
            return Err(GeometryError::type_mismatch(name, "must be a sequence"));
        };

        let mut data = Vec::with_capacity(rows.len() * 2);
        for row in rows {
            let Value::Array(row) = row else {
                return Err(GeometryError::value(name, "must have shape (N, 2)"));
            };
            if row.len() != 2 {
                return Err(GeometryError::value(name, "must have shape (N, 2)"));
            }
            for v in row {
                let x = v
                    .as_f64()
                    .ok_or_else(|| GeometryError::type_mismatch(name, "must have dtype float64"))?;
                data.push(x);
            }
        }

        Ok(Self { shape: vec![rows.len(), 2], data })
    }

    pub fn buffer<'a>(&'a self, name: &str) -> Result<PointBuffer<'a>, GeometryError> {
        PointBuffer::new(name, &self.data, &self.shape)
    }
}

/// Look up a required key in a JSON object and read it as coordinates.
pub fn coords_field(doc: &Value, key: &str) -> Result<Coords> {
    let value = doc.get(key).with_context(|| format!("missing field `{key}`"))?;
    Ok(Coords::from_json(key, value)?)
}

/// Polygons read from an input file, plus the viewBox to draw them in.
#[derive(Debug)]
pub struct PolygonSource {
    pub polygons: Vec<Polygon>,
    pub viewbox: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Svg,
    Json,
}

impl InputKind {
    /// By extension, falling back to sniffing the content.
    fn detect(path: &Path, content: &str) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ if content.trim_start().starts_with('<') => Self::Svg,
            _ => Self::Json,
        }
    }
}

/// Load polygons from SVG or JSON content.
///
/// JSON may be a bare `[[x, y], ...]` ring, `{"polygon": ring}` or
/// `{"polygons": [ring, ...]}`.
pub fn load_polygons(path: &Path, content: &str) -> Result<PolygonSource> {
    match InputKind::detect(path, content) {
        InputKind::Svg => {
            let polygons = extract_polygons_from_svg(content)
                .with_context(|| format!("failed to extract polygons from {}", path.display()))?;
            let viewbox = extract_viewbox(content).unwrap_or_else(|| viewbox_for(&polygons));
            Ok(PolygonSource { polygons, viewbox })
        }
        InputKind::Json => {
            let doc: Value = serde_json::from_str(content)
                .with_context(|| format!("failed to parse JSON from {}", path.display()))?;
            let polygons = polygons_from_json(&doc)?;
            let viewbox = viewbox_for(&polygons);
            Ok(PolygonSource { polygons, viewbox })
        }
    }
}

fn polygons_from_json(doc: &Value) -> Result<Vec<Polygon>> {
    if let Some(list) = doc.get("polygons") {
        let Value::Array(rings) = list else {
            return Err(GeometryError::type_mismatch("polygons", "must be a sequence").into());
        };
        return rings.iter().map(|ring| ring_to_polygon("polygons", ring)).collect();
    }

    let ring = doc.get("polygon").unwrap_or(doc);
    if ring.is_object() {
        bail!("JSON input needs a `polygon` or `polygons` field");
    }
    Ok(vec![ring_to_polygon("polygon", ring)?])
}

fn ring_to_polygon(name: &str, ring: &Value) -> Result<Polygon> {
    let coords = Coords::from_json(name, ring)?;
    Ok(coords.buffer(name)?.to_polygon())
}
