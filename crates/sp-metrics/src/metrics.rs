//! The spray metrics calculation.
//!
//! Pure, deterministic, side-effect free: same config in, same snapshot out.
//! Concurrent callers do not interact. Debouncing for live-editing UIs is a
//! caller concern.

use crate::config::{ApplicationConfig, ProductApplication};
use crate::error::MetricsResult;
use sp_core::units::{Area, Pressure, Time, Volume, VolumeRate, bar, ha, liters, lpm, minutes};
use sp_core::{Real, finite_or_zero};
use sp_nozzles::{NozzleCatalog, NozzleSpec};

/// Converts L/ha * km/h * m to L/min in the nozzle flow formula.
/// Empirical agricultural-spraying constant; fixed, not configurable.
const FLOW_RATE_DIVISOR: Real = 600.0;

/// Converts m * km/h to ha/h in the coverage-rate formula.
const COVERAGE_DIVISOR: Real = 10.0;

/// Classification of required pressure against the nozzle's operating window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PressureStatus {
    Ok,
    Low,
    High,
}

impl PressureStatus {
    /// Bounds are inclusive: pressure equal to either limit is `Ok`.
    pub fn classify(pressure_bar: Real, nozzle: &NozzleSpec) -> Self {
        if pressure_bar < nozzle.min_pressure_bar {
            Self::Low
        } else if pressure_bar > nozzle.max_pressure_bar {
            Self::High
        } else {
            Self::Ok
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

/// Aggregated amount of one product over the whole application.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProductTotal {
    pub product_id: String,
    pub product_name: String,
    /// Total amount in `unit`.
    pub total_amount: Real,
    /// "kg" for soluble products, "L" for liquid ones.
    pub unit: &'static str,
}

/// Derived operational metrics for one spray application.
///
/// An immutable snapshot, recomputed on every input change and never
/// persisted. `spray_time_minutes` is a lower bound: it assumes continuous
/// spraying with no turns, refills, or overlap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SprayMetrics {
    /// Output of a single nozzle (L/min).
    pub flow_per_nozzle_l_min: Real,
    /// Boom pressure needed to hit the target spray volume (bar).
    pub required_pressure_bar: Real,
    pub pressure_status: PressureStatus,
    /// Sum of all zone sizes (ha).
    pub total_area_ha: Real,
    /// Total liquid to apply (L).
    pub total_spray_volume_l: Real,
    /// Fractional tank fills needed. See [`SprayMetrics::whole_tanks`] for
    /// the rounded-up trip count.
    pub tanks_required: Real,
    /// Single-pass spraying time estimate (min), lower bound.
    pub spray_time_minutes: Real,
    /// One entry per configured product, in input order.
    pub product_totals: Vec<ProductTotal>,
}

impl SprayMetrics {
    pub fn flow_per_nozzle(&self) -> VolumeRate {
        lpm(self.flow_per_nozzle_l_min)
    }

    pub fn required_pressure(&self) -> Pressure {
        bar(self.required_pressure_bar)
    }

    pub fn total_area(&self) -> Area {
        ha(self.total_area_ha)
    }

    pub fn total_spray_volume(&self) -> Volume {
        liters(self.total_spray_volume_l)
    }

    pub fn spray_time(&self) -> Time {
        minutes(self.spray_time_minutes)
    }

    /// Whole tank fills ("trips to the tank"), the ceiling of
    /// [`tanks_required`](Self::tanks_required). Display concern; the
    /// fractional value is canonical.
    pub fn whole_tanks(&self) -> Real {
        if self.tanks_required <= 0.0 {
            0.0
        } else {
            self.tanks_required.ceil()
        }
    }
}

/// Compute the derived metrics for one spray application.
///
/// The only failure mode is a `nozzle_id` the catalog does not carry; all
/// degenerate numerics (non-finite zone sizes, zero divisors) are recovered
/// locally to 0 so a live-editing caller never sees NaN or infinity.
pub fn compute_spray_metrics(
    catalog: &NozzleCatalog,
    config: &ApplicationConfig,
) -> MetricsResult<SprayMetrics> {
    let nozzle = catalog.resolve(&config.nozzle_id)?;

    // Flow per nozzle (L/min): L/ha * km/h * m / 600.
    let volume_speed_spacing =
        config.spray_volume_l_ha * config.speed_km_h * config.nozzle_spacing_m;
    let flow_per_nozzle_l_min = volume_speed_spacing / FLOW_RATE_DIVISOR;

    // Required pressure (bar) is the square of (flow / k).
    let required_pressure_bar =
        (volume_speed_spacing / (FLOW_RATE_DIVISOR * nozzle.k_factor)).powi(2);

    let pressure_status = PressureStatus::classify(required_pressure_bar, nozzle);

    let total_area_ha: Real = config
        .areas
        .iter()
        .map(|area| finite_or_zero(area.size_ha))
        .sum();

    let total_spray_volume_l = total_area_ha * config.spray_volume_l_ha;

    let tanks_required = if total_spray_volume_l == 0.0 || config.tank_size_l == 0.0 {
        0.0
    } else {
        total_spray_volume_l / config.tank_size_l
    };

    // Coverage rate (ha/h) from boom width and ground speed; time is a
    // lower-bound single-pass estimate.
    let sprayer_width_m = config.nozzle_spacing_m * Real::from(config.nozzle_count);
    let area_covered_per_hour_ha = sprayer_width_m * config.speed_km_h / COVERAGE_DIVISOR;
    let spray_time_hours = if area_covered_per_hour_ha > 0.0 {
        total_area_ha / area_covered_per_hour_ha
    } else {
        0.0
    };
    let spray_time_minutes = spray_time_hours * 60.0;

    let product_totals = config
        .products
        .iter()
        .map(|product| product_total(product, total_area_ha))
        .collect();

    Ok(SprayMetrics {
        flow_per_nozzle_l_min,
        required_pressure_bar,
        pressure_status,
        total_area_ha,
        total_spray_volume_l,
        tanks_required,
        spray_time_minutes,
        product_totals,
    })
}

fn product_total(product: &ProductApplication, total_area_ha: Real) -> ProductTotal {
    ProductTotal {
        product_id: product.product_id.clone(),
        product_name: product.product_name.clone(),
        total_amount: total_area_ha * product.rate_per_ha,
        unit: product.product_type.total_unit(),
    }
}
