//! sp-metrics: spray metrics calculation engine for sprayflow.
//!
//! Provides:
//! - Strongly-typed calculator input (`ApplicationConfig`, `AreaSpec`,
//!   `ProductApplication`)
//! - The fixed product-type unit tables (`ProductType`)
//! - The derived metrics snapshot (`SprayMetrics`, `PressureStatus`)
//! - `compute_spray_metrics`: the pure calculation function
//!
//! # Architecture
//!
//! The calculator is a pure function over a validated config and an injected
//! [`sp_nozzles::NozzleCatalog`]. It performs no I/O, holds no state, and is
//! safe to call concurrently. Metrics are never persisted: callers store the
//! inputs and recompute on every read, so derived values cannot go stale.
//!
//! Input validation lives upstream (the plan layer constructs
//! `ApplicationConfig` only after range checks); the one failure the
//! calculator itself owns is an unknown nozzle identifier.
//!
//! # Example
//!
//! ```
//! use sp_metrics::{ApplicationConfig, AreaKind, AreaSpec, compute_spray_metrics};
//! use sp_nozzles::NozzleCatalog;
//!
//! let config = ApplicationConfig {
//!     nozzle_id: "syngenta-025-xc".into(),
//!     spray_volume_l_ha: 300.0,
//!     nozzle_spacing_m: 0.5,
//!     nozzle_count: 11,
//!     speed_km_h: 5.0,
//!     tank_size_l: 400.0,
//!     areas: vec![AreaSpec { size_ha: 5.0, kind: AreaKind::Fairway }],
//!     products: vec![],
//! };
//!
//! let metrics = compute_spray_metrics(&NozzleCatalog::builtin(), &config).unwrap();
//! assert!((metrics.flow_per_nozzle_l_min - 1.25).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod metrics;

// Re-exports for ergonomics
pub use config::{ApplicationConfig, AreaKind, AreaSpec, ProductApplication, ProductType};
pub use error::{MetricsError, MetricsResult};
pub use metrics::{PressureStatus, ProductTotal, SprayMetrics, compute_spray_metrics};
