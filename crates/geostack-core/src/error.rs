//! Error types for the geostack core.

/// Core error type for configuration and endpoint handling.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Invalid AWS region identifier.
    #[error("invalid AWS region: {0} (expected lowercase letters, digits, and hyphens)")]
    InvalidRegion(String),

    /// Invalid endpoint URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
