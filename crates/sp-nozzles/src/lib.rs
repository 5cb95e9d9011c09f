//! sp-nozzles: nozzle reference data for sprayflow.
//!
//! Provides:
//! - `NozzleSpec`: physical constants for one nozzle model (k-factor and
//!   operating pressure window)
//! - `NozzleCatalog`: an immutable, explicitly constructed lookup table,
//!   passed to the calculator rather than hidden behind a global
//! - the built-in turf catalog and query filtering for pickers
//!
//! The catalog is reference data, not logic, but its constants are part of
//! the calculator's observable contract: different nozzles yield different
//! pressures and statuses.

pub mod catalog;
pub mod error;

pub use catalog::{NozzleCatalog, NozzleSpec, builtin_nozzle_catalog, filter_builtin_catalog};
pub use error::{NozzleError, NozzleResult};
