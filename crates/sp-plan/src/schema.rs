//! Plan file schema definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sp_metrics::{ApplicationConfig, AreaKind, AreaSpec, ProductApplication, ProductType};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub status: PlanStatusDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    pub sprayer: SprayerDef,
    #[serde(default)]
    pub areas: Vec<AreaDef>,
    #[serde(default)]
    pub products: Vec<ProductDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatusDef {
    #[default]
    Draft,
    Scheduled,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SprayerDef {
    pub nozzle_id: String,
    pub spray_volume_l_ha: f64,
    pub nozzle_spacing_m: f64,
    pub nozzle_count: u32,
    pub speed_km_h: f64,
    pub tank_size_l: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaDef {
    pub name: String,
    pub size_ha: f64,
    #[serde(default)]
    pub kind: AreaKindDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaKindDef {
    Green,
    Tee,
    Fairway,
    Approach,
    Rough,
    #[default]
    Other,
}

impl AreaKindDef {
    pub fn to_kind(self) -> AreaKind {
        match self {
            Self::Green => AreaKind::Green,
            Self::Tee => AreaKind::Tee,
            Self::Fairway => AreaKind::Fairway,
            Self::Approach => AreaKind::Approach,
            Self::Rough => AreaKind::Rough,
            Self::Other => AreaKind::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductTypeDef,
    pub rate_per_ha: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductTypeDef {
    Soluble,
    Liquid,
}

impl ProductTypeDef {
    pub fn to_product_type(self) -> ProductType {
        match self {
            Self::Soluble => ProductType::Soluble,
            Self::Liquid => ProductType::Liquid,
        }
    }
}

impl Plan {
    /// Build the calculator input from this plan. Callers are expected to
    /// run [`crate::validate_plan`] first; conversion itself never fails.
    pub fn to_application_config(&self) -> ApplicationConfig {
        ApplicationConfig {
            nozzle_id: self.sprayer.nozzle_id.clone(),
            spray_volume_l_ha: self.sprayer.spray_volume_l_ha,
            nozzle_spacing_m: self.sprayer.nozzle_spacing_m,
            nozzle_count: self.sprayer.nozzle_count,
            speed_km_h: self.sprayer.speed_km_h,
            tank_size_l: self.sprayer.tank_size_l,
            areas: self
                .areas
                .iter()
                .map(|area| AreaSpec {
                    size_ha: area.size_ha,
                    kind: area.kind.to_kind(),
                })
                .collect(),
            products: self
                .products
                .iter()
                .map(|product| ProductApplication {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    product_type: product.product_type.to_product_type(),
                    rate_per_ha: product.rate_per_ha,
                })
                .collect(),
        }
    }
}
