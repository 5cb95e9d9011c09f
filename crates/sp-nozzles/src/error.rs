//! Nozzle catalog errors.

use sp_core::SpError;
use thiserror::Error;

/// Result type for nozzle catalog operations.
pub type NozzleResult<T> = Result<T, NozzleError>;

/// Errors that can occur when resolving nozzle reference data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NozzleError {
    /// Identifier does not resolve in the active catalog.
    #[error("Unknown nozzle identifier: {id}")]
    UnknownNozzle { id: String },
}

impl From<NozzleError> for SpError {
    fn from(err: NozzleError) -> Self {
        match err {
            NozzleError::UnknownNozzle { .. } => SpError::UnknownReference {
                what: "nozzle identifier",
            },
        }
    }
}
