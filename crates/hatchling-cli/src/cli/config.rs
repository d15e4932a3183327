//! YAML fill jobs.
//!
//! A job file holds the fill parameters so a set of plots can be re-run
//! with the same settings:
//!
//! ```yaml
//! spacing: 2.0
//! angle: 30
//! crosshatch: true
//! centroid: [50, 50]
//! stroke: "#336699"
//! stroke_width: 0.35
//! ```
//!
//! Every field is optional. Command-line flags win over the file, and the
//! file wins over the built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hatchling::hatch::DEFAULT_OVERSHOOT;
use hatchling::{FillOptions, Point, Polygon, Segment, generate_crosshatch_fill, generate_line_fill, point_like};
use serde::{Deserialize, Serialize};

use super::common::Stroke;

pub const DEFAULT_SPACING: f64 = 2.5;
pub const DEFAULT_ANGLE: f64 = 45.0;

/// Fill parameters as written in a job file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FillJob {
    pub spacing: Option<f64>,
    pub angle: Option<f64>,
    pub overshoot: Option<f64>,
    pub centroid: Option<Vec<f64>>,
    pub bbox_diag: Option<f64>,
    pub crosshatch: Option<bool>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl FillJob {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("invalid fill job")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let job = Self::from_yaml(&yaml).with_context(|| format!("in {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?job, "loaded fill job");
        Ok(job)
    }
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillOverrides {
    pub spacing: Option<f64>,
    pub angle: Option<f64>,
    pub overshoot: Option<f64>,
    pub centroid: Option<Point>,
    pub bbox_diag: Option<f64>,
    pub crosshatch: bool,
}

/// Fully resolved fill parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FillSettings {
    pub spacing: f64,
    pub angle: f64,
    pub options: FillOptions,
    pub crosshatch: bool,
    pub stroke: Stroke,
}

impl FillSettings {
    /// Merge flags over the job file over the defaults.
    pub fn resolve(flags: &FillOverrides, job: &FillJob) -> Result<Self> {
        let job_centroid = job
            .centroid
            .as_deref()
            .map(|c| point_like("centroid", c))
            .transpose()?;

        let options = FillOptions {
            centroid: flags.centroid.or(job_centroid),
            bbox_diag: flags.bbox_diag.or(job.bbox_diag),
            overshoot: flags.overshoot.or(job.overshoot).unwrap_or(DEFAULT_OVERSHOOT),
        };

        let defaults = Stroke::default();
        Ok(Self {
            spacing: flags.spacing.or(job.spacing).unwrap_or(DEFAULT_SPACING),
            angle: flags.angle.or(job.angle).unwrap_or(DEFAULT_ANGLE),
            options,
            crosshatch: flags.crosshatch || job.crosshatch.unwrap_or(false),
            stroke: Stroke {
                color: job.stroke.clone().unwrap_or(defaults.color),
                width: job.stroke_width.unwrap_or(defaults.width),
            },
        })
    }

    /// Fill one polygon with these settings.
    pub fn fill(&self, polygon: &Polygon) -> hatchling::Result<Vec<Segment>> {
        if self.crosshatch {
            generate_crosshatch_fill(polygon, self.spacing, self.angle, &self.options)
        } else {
            generate_line_fill(polygon, self.spacing, self.angle, &self.options)
        }
    }
}
