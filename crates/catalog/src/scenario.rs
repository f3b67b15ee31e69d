use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A position in degrees, longitude first to match GeoJSON convention.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

/// One geotagged exposure point in a scenario's feature collection.
///
/// Invariant: `value >= 0` and `eai >= 0`. Points are immutable once part
/// of a scenario's collection.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPoint {
    pub lon: f64,
    pub lat: f64,
    /// Monetary exposure at this location.
    pub value: f64,
    /// Expected annual impact (expected annual loss).
    pub eai: f64,
}

/// The set of risk points belonging to one scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskCollection {
    pub features: Vec<RiskPoint>,
}

/// A named, selectable risk dataset with its initial map viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub center: LonLat,
    pub zoom: u32,
    /// Absent means "no data to render", which is valid, not an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RiskCollection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    DuplicateId(String),
    Parse(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "scenario catalog is empty"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate scenario id: {id}"),
            CatalogError::Parse(msg) => write!(f, "malformed scenario catalog: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered catalog of selectable scenarios, supplied once at startup.
///
/// Construction enforces that the catalog is non-empty and ids are unique;
/// after that the catalog is read-only and the first entry is the default
/// selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, CatalogError> {
        if scenarios.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = BTreeSet::new();
        for s in &scenarios {
            if !seen.insert(s.id.as_str()) {
                return Err(CatalogError::DuplicateId(s.id.clone()));
            }
        }
        Ok(Self { scenarios })
    }

    /// Parses a JSON array of scenarios and validates it as a catalog.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let scenarios = serde_json::from_str::<Vec<Scenario>>(raw)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(scenarios)
    }

    /// Scenarios in their supplied order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// The default selection.
    pub fn first(&self) -> &Scenario {
        &self.scenarios[0]
    }

    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.scenarios.iter().position(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }
}
