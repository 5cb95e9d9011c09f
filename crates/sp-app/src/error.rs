//! Error types for the sp-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Plan error: {0}")]
    Plan(String),

    #[error("Failed to read plan file: {path}")]
    PlanFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write plan file: {path}")]
    PlanFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Plan validation failed: {0}")]
    Validation(String),

    #[error("Metrics error: {0}")]
    Metrics(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sp-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<sp_plan::PlanError> for AppError {
    fn from(err: sp_plan::PlanError) -> Self {
        match err {
            sp_plan::PlanError::Validation(inner) => AppError::Validation(inner.to_string()),
            other => AppError::Plan(other.to_string()),
        }
    }
}

impl From<sp_plan::ValidationError> for AppError {
    fn from(err: sp_plan::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<sp_metrics::MetricsError> for AppError {
    fn from(err: sp_metrics::MetricsError) -> Self {
        AppError::Metrics(err.to_string())
    }
}
