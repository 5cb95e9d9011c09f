//! Shared application service layer for sprayflow.
//!
//! Provides a unified interface for frontends, centralizing plan loading,
//! validation, and metric computation behind one error type.

pub mod error;
pub mod metrics_service;
pub mod plan_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use metrics_service::{MetricsReport, compute_for_plan, report_json};
pub use plan_service::{PlanSummary, load_plan, save_plan, summarize_plan, validate_plan_file};
