//! Error types for panel edits and engine configuration.
//!
//! Geometry operations never fail; degenerate input is skipped silently. These
//! errors only describe requests from outside the engine that were rejected
//! without touching state.

use thiserror::Error;

use crate::doc::ObjectId;
use crate::geom::ObjectKind;

/// A panel command that was rejected. State is unchanged when this is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// No object with this id is in the scene.
    #[error("object {0} not found")]
    NotFound(ObjectId),
    /// A width or height must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    /// The object's current extent on this axis is zero, so no scale factor exists.
    #[error("cannot rescale {field}: current extent is zero")]
    DegenerateAxis { field: &'static str },
    /// Only frames and sections carry an editable name.
    #[error("{} objects have no editable name", .0.display_name())]
    NotNamed(ObjectKind),
}

/// Engine configuration that failed to parse or validate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field {field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}
