//! Error types for the sketch core.

use thiserror::Error;

/// Errors produced by the sketch core.
#[derive(Debug, Error)]
pub enum SketchError {
    /// A coordinate conversion needed the rendering surface before the host mounted one.
    #[error("rendering surface is not mounted; cannot convert {0}")]
    SurfaceNotMounted(&'static str),
    #[error("'{0}' is not a valid tool")]
    UnknownTool(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sketch core operations.
pub type SketchResult<T> = Result<T, SketchError>;
