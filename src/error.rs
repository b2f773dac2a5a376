use crate::services::providers::GenerationError;
use thiserror::Error;

/// Top-level error type for one request/response cycle.
///
/// Every variant is caught at the handler boundary and rendered as a
/// structured 500 response; nothing propagates to the platform as a fault.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}
