//! Plan validation logic.
//!
//! Enforces the input ranges the calculator assumes: the calculator itself
//! never re-checks them, so every `ApplicationConfig` must come from a plan
//! that passed this gate.

use crate::schema::{LATEST_VERSION, Plan, PlanStatusDef};
use sp_nozzles::NozzleCatalog;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_plan(plan: &Plan, catalog: &NozzleCatalog) -> Result<(), ValidationError> {
    if plan.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: plan.version,
        });
    }

    if plan.name.trim().is_empty() {
        return Err(invalid("name", "\"\"", "must not be empty"));
    }

    if plan.status != PlanStatusDef::Draft && plan.scheduled_date.is_none() {
        return Err(invalid(
            "scheduled_date",
            "none",
            "scheduled and completed plans need a date",
        ));
    }

    validate_sprayer(plan, catalog)?;
    validate_areas(plan)?;
    validate_products(plan)?;

    Ok(())
}

fn validate_sprayer(plan: &Plan, catalog: &NozzleCatalog) -> Result<(), ValidationError> {
    let sprayer = &plan.sprayer;

    if catalog.get(&sprayer.nozzle_id).is_none() {
        return Err(ValidationError::MissingReference {
            id: sprayer.nozzle_id.clone(),
            context: "sprayer nozzle_id".to_string(),
        });
    }

    if !(sprayer.spray_volume_l_ha.is_finite() && sprayer.spray_volume_l_ha > 0.0) {
        return Err(invalid(
            "sprayer.spray_volume_l_ha",
            sprayer.spray_volume_l_ha,
            "must be positive and finite",
        ));
    }

    if !(sprayer.nozzle_spacing_m.is_finite()
        && sprayer.nozzle_spacing_m > 0.0
        && sprayer.nozzle_spacing_m < 10.0)
    {
        return Err(invalid(
            "sprayer.nozzle_spacing_m",
            sprayer.nozzle_spacing_m,
            "must be between 0 and 10 m exclusive",
        ));
    }

    if !(1..=200).contains(&sprayer.nozzle_count) {
        return Err(invalid(
            "sprayer.nozzle_count",
            sprayer.nozzle_count,
            "must be between 1 and 200",
        ));
    }

    if !(sprayer.speed_km_h.is_finite()
        && (3.0..=12.0).contains(&sprayer.speed_km_h))
    {
        return Err(invalid(
            "sprayer.speed_km_h",
            sprayer.speed_km_h,
            "must be between 3 and 12 km/h",
        ));
    }

    if !(sprayer.tank_size_l.is_finite() && sprayer.tank_size_l > 0.0) {
        return Err(invalid(
            "sprayer.tank_size_l",
            sprayer.tank_size_l,
            "must be positive and finite",
        ));
    }

    Ok(())
}

fn validate_areas(plan: &Plan) -> Result<(), ValidationError> {
    if plan.areas.is_empty() {
        return Err(invalid("areas", "[]", "at least one area is required"));
    }

    for area in &plan.areas {
        if !(area.size_ha.is_finite() && area.size_ha >= 0.0) {
            return Err(invalid(
                &format!("areas[{}].size_ha", area.name),
                area.size_ha,
                "must be non-negative and finite",
            ));
        }
    }

    Ok(())
}

fn validate_products(plan: &Plan) -> Result<(), ValidationError> {
    let mut product_ids = HashSet::new();
    for product in &plan.products {
        if !product_ids.insert(&product.id) {
            return Err(ValidationError::DuplicateId {
                id: product.id.clone(),
                context: "products".to_string(),
            });
        }

        if !(product.rate_per_ha.is_finite() && product.rate_per_ha > 0.0) {
            return Err(invalid(
                &format!("products[{}].rate_per_ha", product.id),
                product.rate_per_ha,
                "must be positive and finite",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AreaDef, AreaKindDef, ProductDef, ProductTypeDef, SprayerDef};

    fn valid_plan() -> Plan {
        Plan {
            version: 1,
            name: "Greens preventative".into(),
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
                name: "Front nine greens".into(),
                size_ha: 1.2,
                kind: AreaKindDef::Green,
            }],
            products: vec![ProductDef {
                id: "p1".into(),
                name: "Fungicide".into(),
                product_type: ProductTypeDef::Liquid,
                rate_per_ha: 3.0,
            }],
        }
    }

    #[test]
    fn valid_plan_passes() {
        validate_plan(&valid_plan(), &NozzleCatalog::builtin()).unwrap();
    }

    #[test]
    fn unknown_nozzle_is_missing_reference() {
        let mut plan = valid_plan();
        plan.sprayer.nozzle_id = "no-such-nozzle".into();
        let err = validate_plan(&plan, &NozzleCatalog::builtin()).unwrap_err();
        assert!(matches!(err, ValidationError::MissingReference { .. }));
    }

    #[test]
    fn speed_out_of_range_rejected() {
        for speed in [2.9, 12.1, f64::NAN] {
            let mut plan = valid_plan();
            plan.sprayer.speed_km_h = speed;
            let err = validate_plan(&plan, &NozzleCatalog::builtin()).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidValue { .. }));
        }
    }

    #[test]
    fn speed_range_endpoints_accepted() {
        for speed in [3.0, 12.0] {
            let mut plan = valid_plan();
            plan.sprayer.speed_km_h = speed;
            validate_plan(&plan, &NozzleCatalog::builtin()).unwrap();
        }
    }

    #[test]
    fn spacing_bounds_are_exclusive() {
        for spacing in [0.0, 10.0] {
            let mut plan = valid_plan();
            plan.sprayer.nozzle_spacing_m = spacing;
            assert!(validate_plan(&plan, &NozzleCatalog::builtin()).is_err());
        }
    }

    #[test]
    fn nozzle_count_limits() {
        let mut plan = valid_plan();
        plan.sprayer.nozzle_count = 0;
        assert!(validate_plan(&plan, &NozzleCatalog::builtin()).is_err());
        plan.sprayer.nozzle_count = 201;
        assert!(validate_plan(&plan, &NozzleCatalog::builtin()).is_err());
        plan.sprayer.nozzle_count = 200;
        assert!(validate_plan(&plan, &NozzleCatalog::builtin()).is_ok());
    }

    #[test]
    fn empty_areas_rejected() {
        let mut plan = valid_plan();
        plan.areas.clear();
        assert!(validate_plan(&plan, &NozzleCatalog::builtin()).is_err());
    }

    #[test]
    fn zero_size_area_is_allowed() {
        let mut plan = valid_plan();
        plan.areas[0].size_ha = 0.0;
        validate_plan(&plan, &NozzleCatalog::builtin()).unwrap();
    }

    #[test]
    fn duplicate_product_ids_rejected() {
        let mut plan = valid_plan();
        let dup = plan.products[0].clone();
        plan.products.push(dup);
        let err = validate_plan(&plan, &NozzleCatalog::builtin()).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateId { .. }));
    }

    #[test]
    fn scheduled_without_date_rejected() {
        let mut plan = valid_plan();
        plan.status = PlanStatusDef::Scheduled;
        assert!(validate_plan(&plan, &NozzleCatalog::builtin()).is_err());

        plan.scheduled_date = chrono::NaiveDate::from_ymd_opt(2026, 9, 14);
        validate_plan(&plan, &NozzleCatalog::builtin()).unwrap();
    }

    #[test]
    fn future_version_rejected() {
        let mut plan = valid_plan();
        plan.version = LATEST_VERSION + 1;
        let err = validate_plan(&plan, &NozzleCatalog::builtin()).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedVersion { .. }));
    }
}
