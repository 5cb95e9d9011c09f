use crate::error::{NozzleError, NozzleResult};

/// Physical constants for one nozzle model.
///
/// `k_factor` is the empirical flow coefficient relating pressure to flow
/// (flow L/min = k * sqrt(P bar)). Pressure bounds are the manufacturer's
/// recommended operating window, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub brand: &'static str,
    pub k_factor: f64,
    pub min_pressure_bar: f64,
    pub max_pressure_bar: f64,
}

impl NozzleSpec {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_ascii_lowercase().contains(&query)
            || self.label.to_ascii_lowercase().contains(&query)
            || self.brand.to_ascii_lowercase().contains(&query)
    }
}

// k-factors follow the ISO nominal-size relation k = q(3 bar) / sqrt(3):
// 015 -> 0.346, 025 -> 0.577, 03 -> 0.693, 04 -> 0.924. The AIXR 11004 is
// catalogued at 0.91 per TeeJet's published chart.
const BUILTIN_TURF_CATALOG: [NozzleSpec; 5] = [
    NozzleSpec {
        id: "syngenta-025-xc",
        label: "XC 025",
        brand: "Syngenta",
        k_factor: 0.577,
        min_pressure_bar: 1.0,
        max_pressure_bar: 4.0,
    },
    NozzleSpec {
        id: "syngenta-04-xc",
        label: "XC 04",
        brand: "Syngenta",
        k_factor: 0.924,
        min_pressure_bar: 1.0,
        max_pressure_bar: 4.0,
    },
    NozzleSpec {
        id: "teejet-aixr11004",
        label: "AIXR 11004",
        brand: "TeeJet",
        k_factor: 0.91,
        min_pressure_bar: 1.0,
        max_pressure_bar: 6.0,
    },
    NozzleSpec {
        id: "teejet-aixr11002",
        label: "AIXR 11002",
        brand: "TeeJet",
        k_factor: 0.462,
        min_pressure_bar: 1.0,
        max_pressure_bar: 6.0,
    },
    NozzleSpec {
        id: "lechler-idk12003",
        label: "IDK 120-03",
        brand: "Lechler",
        k_factor: 0.693,
        min_pressure_bar: 1.5,
        max_pressure_bar: 6.0,
    },
];

/// Immutable nozzle lookup table.
///
/// Constructed once and passed by reference into the calculator, so tests and
/// regional deployments can swap in alternate nozzle sets.
#[derive(Debug, Clone, Copy)]
pub struct NozzleCatalog {
    entries: &'static [NozzleSpec],
}

impl NozzleCatalog {
    /// Catalog over the built-in turf nozzle table.
    pub fn builtin() -> Self {
        Self {
            entries: &BUILTIN_TURF_CATALOG,
        }
    }

    /// Catalog over a caller-supplied table.
    pub fn with_entries(entries: &'static [NozzleSpec]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [NozzleSpec] {
        self.entries
    }

    pub fn get(&self, id: &str) -> Option<&'static NozzleSpec> {
        self.entries.iter().find(|spec| spec.id == id)
    }

    /// Lookup that fails loudly. Unknown identifiers are a caller bug or
    /// stale stored data, never something to compute through.
    pub fn resolve(&self, id: &str) -> NozzleResult<&'static NozzleSpec> {
        self.get(id).ok_or_else(|| NozzleError::UnknownNozzle {
            id: id.to_string(),
        })
    }

    /// Case-insensitive substring filter over id, label, and brand.
    pub fn filter(&self, query: &str) -> Vec<&'static NozzleSpec> {
        self.entries
            .iter()
            .filter(|spec| spec.matches_query(query))
            .collect()
    }
}

impl Default for NozzleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn builtin_nozzle_catalog() -> &'static [NozzleSpec] {
    &BUILTIN_TURF_CATALOG
}

pub fn filter_builtin_catalog(query: &str) -> Vec<&'static NozzleSpec> {
    NozzleCatalog::builtin().filter(query)
}
