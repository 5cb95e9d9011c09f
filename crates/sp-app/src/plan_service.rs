//! Plan loading, saving, validation, and introspection.

use std::path::Path;

use sp_nozzles::NozzleCatalog;
use sp_plan::{Plan, PlanStatusDef};

use crate::error::{AppError, AppResult};

/// Summary of a plan for listing.
#[derive(Debug, Clone)]
pub struct PlanSummary {
    pub name: String,
    pub status: PlanStatusDef,
    pub nozzle_id: String,
    pub area_count: usize,
    pub product_count: usize,
    pub total_area_ha: f64,
}

/// Load a plan from a YAML file (`.yaml`/`.yml`) or JSON file (`.json`),
/// chosen by extension. No validation; see [`validate_plan_file`].
pub fn load_plan(path: &Path) -> AppResult<Plan> {
    let plan = if is_json(path) {
        sp_plan::load_json(path)
    } else {
        sp_plan::load_yaml(path)
    };

    plan.map_err(|err| match err {
        sp_plan::PlanError::Io(source) => AppError::PlanFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

/// Save a plan, format chosen by extension as in [`load_plan`].
pub fn save_plan(path: &Path, plan: &Plan) -> AppResult<()> {
    let result = if is_json(path) {
        sp_plan::save_json(path, plan)
    } else {
        sp_plan::save_yaml(path, plan)
    };

    result.map_err(|err| match err {
        sp_plan::PlanError::Io(source) => AppError::PlanFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

/// Load and fully validate a plan against the given catalog.
pub fn validate_plan_file(path: &Path, catalog: &NozzleCatalog) -> AppResult<Plan> {
    let plan = load_plan(path)?;
    sp_plan::validate_plan(&plan, catalog)?;
    tracing::debug!(plan = %plan.name, "plan validated");
    Ok(plan)
}

pub fn summarize_plan(plan: &Plan) -> PlanSummary {
    PlanSummary {
        name: plan.name.clone(),
        status: plan.status,
        nozzle_id: plan.sprayer.nozzle_id.clone(),
        area_count: plan.areas.len(),
        product_count: plan.products.len(),
        total_area_ha: plan.areas.iter().map(|area| area.size_ha).sum(),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_plan::{AreaDef, AreaKindDef, SprayerDef};

    #[test]
    fn summary_totals_areas() {
        let plan = Plan {
            version: 1,
            name: "Tees".into(),
            status: PlanStatusDef::Draft,
            scheduled_date: None,
            sprayer: SprayerDef {
                nozzle_id: "teejet-aixr11002".into(),
                spray_volume_l_ha: 200.0,
                nozzle_spacing_m: 0.5,
                nozzle_count: 12,
                speed_km_h: 6.0,
                tank_size_l: 600.0,
            },
            areas: vec![
                AreaDef {
                    name: "Tees front".into(),
                    size_ha: 0.4,
                    kind: AreaKindDef::Tee,
                },
                AreaDef {
                    name: "Tees back".into(),
                    size_ha: 0.35,
                    kind: AreaKindDef::Tee,
                },
            ],
            products: vec![],
        };

        let summary = summarize_plan(&plan);
        assert_eq!(summary.area_count, 2);
        assert_eq!(summary.product_count, 0);
        assert!((summary.total_area_ha - 0.75).abs() < 1e-12);
    }

    #[test]
    fn extension_picks_format() {
        assert!(is_json(Path::new("plan.JSON")));
        assert!(!is_json(Path::new("plan.yaml")));
        assert!(!is_json(Path::new("plan")));
    }
}
