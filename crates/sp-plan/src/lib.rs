//! sp-plan: canonical spray plan file format and validation.
//!
//! A plan file stores the *inputs* of an application only: nozzle id,
//! sprayer settings, areas, and products. Derived metrics are recomputed on
//! every read and never written to disk, so they cannot go stale.
//!
//! Parsing and validation are separate steps: `load_yaml`/`load_json` only
//! deserialize, and `validate_plan` checks ranges and resolves the nozzle
//! reference against a caller-supplied catalog. The service layer composes
//! the two.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_plan};

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> PlanResult<Plan> {
    let content = std::fs::read_to_string(path)?;
    let plan: Plan = serde_yaml::from_str(&content)?;
    Ok(plan)
}

pub fn save_yaml(path: &std::path::Path, plan: &Plan) -> PlanResult<()> {
    let content = serde_yaml::to_string(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> PlanResult<Plan> {
    let content = std::fs::read_to_string(path)?;
    let plan: Plan = serde_json::from_str(&content)?;
    Ok(plan)
}

pub fn save_json(path: &std::path::Path, plan: &Plan) -> PlanResult<()> {
    let content = serde_json::to_string_pretty(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}
