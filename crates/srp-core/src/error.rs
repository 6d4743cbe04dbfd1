//! Error types for srp

use thiserror::Error;

/// Main error type for srp
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Structurally invalid plan/requirement relationship. Not recoverable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or degenerate input data.
    #[error("Input error: {0}")]
    Input(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for srp operations
pub type Result<T> = std::result::Result<T, PlannerError>;
