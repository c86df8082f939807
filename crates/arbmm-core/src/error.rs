//! Error types for arbmm-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid instrument parameters for {instrument}: {reason}")]
    InvalidParams { instrument: String, reason: String },

    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
