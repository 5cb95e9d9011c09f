//! Calculator input types.
//!
//! `ApplicationConfig` is the strongly-typed form of a spray application.
//! It is constructed by the plan layer only after range validation, so the
//! calculator can assume positive spacing/volume/tank size and an in-range
//! ground speed without re-checking.

use sp_core::Real;

/// Kind of course zone. Display only; the calculation ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AreaKind {
    Green,
    Tee,
    Fairway,
    Approach,
    Rough,
    Other,
}

impl AreaKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Tee => "Tee",
            Self::Fairway => "Fairway",
            Self::Approach => "Approach",
            Self::Rough => "Rough",
            Self::Other => "Other",
        }
    }
}

/// One sprayable zone. Only the size participates in the calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaSpec {
    /// Zone size in hectares. Non-finite values contribute 0 to the
    /// aggregate sum instead of poisoning it.
    pub size_ha: Real,
    pub kind: AreaKind,
}

/// Dosing unit family for a product.
///
/// Soluble products are dosed by mass, liquid products by volume. The
/// type-to-unit mapping is fixed domain vocabulary, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProductType {
    Soluble,
    Liquid,
}

impl ProductType {
    /// Unit for the per-hectare application rate.
    pub fn rate_unit(self) -> &'static str {
        match self {
            Self::Soluble => "kg/ha",
            Self::Liquid => "L/ha",
        }
    }

    /// Unit for the aggregated total over the whole application.
    pub fn total_unit(self) -> &'static str {
        match self {
            Self::Soluble => "kg",
            Self::Liquid => "L",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Soluble => "Soluble",
            Self::Liquid => "Liquid",
        }
    }
}

/// One product's dosing spec within an application.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductApplication {
    pub product_id: String,
    pub product_name: String,
    pub product_type: ProductType,
    /// Rate of product per hectare, in `product_type.rate_unit()`.
    pub rate_per_ha: Real,
}

/// Validated sprayer configuration for one application.
///
/// Field ranges are enforced by the plan layer before construction:
/// positive spray volume, spacing in (0, 10) m, nozzle count in [1, 200],
/// speed in [3, 12] km/h, positive tank size. The calculator does not clamp;
/// out-of-range-but-finite input yields undefined but non-crashing output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicationConfig {
    /// Must resolve in the active nozzle catalog.
    pub nozzle_id: String,
    /// Target application rate (L/ha).
    pub spray_volume_l_ha: Real,
    /// Spacing between nozzles along the boom (m).
    pub nozzle_spacing_m: Real,
    /// Number of nozzles on the boom.
    pub nozzle_count: u32,
    /// Ground speed (km/h).
    pub speed_km_h: Real,
    /// Tank capacity (L).
    pub tank_size_l: Real,
    /// Zones to cover. Order irrelevant; only the aggregate size matters.
    pub areas: Vec<AreaSpec>,
    /// Products to apply. Output totals echo this order, one per element.
    pub products: Vec<ProductApplication>,
}
