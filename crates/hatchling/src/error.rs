//! Error types for the kernel's input contract.
//!
//! Degenerate geometry is never an error: a polygon with fewer than three
//! distinct vertices, parallel segments or circles that miss each other all
//! resolve to empty results. Errors are reserved for callers that hand over
//! malformed arguments.

use thiserror::Error;

/// Which side of the contract an argument violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The argument has the right type but an unacceptable value or shape.
    Value,
    /// The argument is not of the expected type at all.
    Type,
}

/// A rejected argument, naming the offending parameter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Bad value or shape, e.g. `spacing must be positive`.
    #[error("{param} {reason}")]
    Value { param: String, reason: String },

    /// Wrong type, e.g. `centroid must be a sequence`.
    #[error("{param} {reason}")]
    Type { param: String, reason: String },
}

impl GeometryError {
    pub fn value(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Value { param: param.into(), reason: reason.into() }
    }

    pub fn type_mismatch(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Type { param: param.into(), reason: reason.into() }
    }

    /// Name of the parameter that was rejected.
    pub fn param(&self) -> &str {
        match self {
            Self::Value { param, .. } | Self::Type { param, .. } => param,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Value { .. } => ErrorKind::Value,
            Self::Type { .. } => ErrorKind::Type,
        }
    }
}

/// Result type for kernel operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
