//! sp-core: stable foundation for sprayflow.
//!
//! Contains:
//! - units (uom SI types + constructors for the agronomic unit set)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SpError, SpResult};
pub use numeric::*;
pub use units::*;
