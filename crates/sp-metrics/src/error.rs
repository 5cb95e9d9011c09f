//! Calculator errors.

use sp_core::SpError;
use sp_nozzles::NozzleError;
use thiserror::Error;

/// Result type for metric calculations.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Errors that can occur while computing spray metrics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Config references a nozzle the catalog does not carry.
    #[error("Nozzle lookup failed: {0}")]
    Nozzle(#[from] NozzleError),
}

impl From<MetricsError> for SpError {
    fn from(err: MetricsError) -> Self {
        match err {
            MetricsError::Nozzle(inner) => inner.into(),
        }
    }
}
