//! Error types for edge detection operations.

use thiserror::Error;

/// Error type for edge detection operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Input image or intermediate field is unusable for this operation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Requested option is not supported by this operation.
    #[error("unsupported option: {0}")]
    Unsupported(String),

    /// Error from the underlying buffer types.
    #[error(transparent)]
    Core(#[from] edgekit_core::Error),
}

/// Result type for edge detection operations.
pub type OpsResult<T> = Result<T, OpsError>;
