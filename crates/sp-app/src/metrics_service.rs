//! Plan-to-metrics computation and report assembly.

use serde::Serialize;
use sp_metrics::{SprayMetrics, compute_spray_metrics};
use sp_nozzles::NozzleCatalog;
use sp_plan::Plan;

use crate::error::AppResult;

/// Everything a frontend needs to present one computed application.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub plan_name: String,
    pub nozzle_id: String,
    pub nozzle_label: String,
    pub nozzle_pressure_window_bar: (f64, f64),
    #[serde(flatten)]
    pub metrics: SprayMetrics,
    /// Ceiling of the fractional `tanks_required`; a "trips to the tank"
    /// planning count.
    pub whole_tanks: f64,
}

/// Compute metrics for an already-validated plan.
pub fn compute_for_plan(plan: &Plan, catalog: &NozzleCatalog) -> AppResult<MetricsReport> {
    let config = plan.to_application_config();
    let nozzle = catalog
        .resolve(&config.nozzle_id)
        .map_err(sp_metrics::MetricsError::from)?;
    let metrics = compute_spray_metrics(catalog, &config)?;

    tracing::debug!(
        plan = %plan.name,
        nozzle = %nozzle.id,
        pressure_bar = metrics.required_pressure_bar,
        status = metrics.pressure_status.label(),
        "metrics computed"
    );

    Ok(MetricsReport {
        plan_name: plan.name.clone(),
        nozzle_id: nozzle.id.to_string(),
        nozzle_label: format!("{} {}", nozzle.brand, nozzle.label),
        nozzle_pressure_window_bar: (nozzle.min_pressure_bar, nozzle.max_pressure_bar),
        whole_tanks: metrics.whole_tanks(),
        metrics,
    })
}

/// Serialize a report for machine consumers.
pub fn report_json(report: &MetricsReport) -> AppResult<String> {
    serde_json::to_string_pretty(report)
        .map_err(|err| crate::AppError::Plan(format!("Failed to serialize report: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_plan::{AreaDef, AreaKindDef, PlanStatusDef, SprayerDef};

    fn plan() -> Plan {
        Plan {
            version: 1,
            name: "Fairways".into(),
            status: PlanStatusDef::Draft,
            scheduled_date: None,
            sprayer: SprayerDef {
                nozzle_id: "syngenta-025-xc".into(),
                spray_volume_l_ha: 300.0,
                nozzle_spacing_m: 0.5,
                nozzle_count: 11,
                speed_km_h: 5.0,
                tank_size_l: 400.0,
            },
            areas: vec![AreaDef {
                name: "All fairways".into(),
                size_ha: 5.0,
                kind: AreaKindDef::Fairway,
            }],
            products: vec![],
        }
    }

    #[test]
    fn report_carries_metrics_and_derived_tanks() {
        let report = compute_for_plan(&plan(), &NozzleCatalog::builtin()).unwrap();
        assert_eq!(report.metrics.tanks_required, 3.75);
        assert_eq!(report.whole_tanks, 4.0);
        assert_eq!(report.nozzle_label, "Syngenta XC 025");
    }

    #[test]
    fn unknown_nozzle_surfaces_as_metrics_error() {
        let mut bad = plan();
        bad.sprayer.nozzle_id = "ghost".into();
        let err = compute_for_plan(&bad, &NozzleCatalog::builtin()).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn report_serializes_to_json() {
        // 274 L/ha at 4 km/h needs ~2.5 bar, inside the 1-4 bar window.
        let mut in_window = plan();
        in_window.sprayer.spray_volume_l_ha = 274.0;
        in_window.sprayer.speed_km_h = 4.0;
        let report = compute_for_plan(&in_window, &NozzleCatalog::builtin()).unwrap();
        let json = report_json(&report).unwrap();
        assert!(json.contains("\"pressure_status\": \"ok\""));
        assert!(json.contains("\"plan_name\": \"Fairways\""));
    }

    #[test]
    fn over_window_pressure_serializes_as_high() {
        // The base fixture (300 L/ha at 5 km/h) needs ~4.69 bar, over the
        // syngenta-025-xc maximum of 4 bar.
        let report = compute_for_plan(&plan(), &NozzleCatalog::builtin()).unwrap();
        assert!(report.metrics.required_pressure_bar > 4.0);
        let json = report_json(&report).unwrap();
        assert!(json.contains("\"pressure_status\": \"high\""));
    }
}
