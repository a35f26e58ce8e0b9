//! Error types for forwarding spec parsing and validation.

use thiserror::Error;

/// Errors that can occur while reading a forwarding spec.
#[derive(Debug, Error)]
pub enum Error {
    /// A source category name that is not one of the known types.
    #[error("unknown log source type '{0}' (expected one of: logs.app, logs.infra, logs.audit)")]
    UnknownSourceType(String),

    /// The document parsed but its contents are inconsistent.
    #[error("validation error: {0}")]
    Validation(String),

    /// YAML deserialization error.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// JSON deserialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for forwarding spec operations.
pub type Result<T> = std::result::Result<T, Error>;
