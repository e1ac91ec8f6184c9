use crate::model::{Factor, ToleranceBand};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tolerance table: an ordered list of crops with per-factor comfort bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToleranceTableDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Ordered list of crop records. Position in this list breaks score
    /// ties during ranking, so the order is part of the table's meaning.
    pub crops: Vec<CropToleranceDef>,
}

/// Tolerance bands for a single crop. Every crop carries all 7 factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropToleranceDef {
    pub crop: String,
    pub bands: BTreeMap<Factor, ToleranceBand>,
}

/// Crop name to pest-control advice, with a generic fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PestAdviceDef {
    pub name: String,
    pub version: String,
    pub entries: BTreeMap<String, String>,
    /// Advice emitted for crops with no entry. Not an error path.
    pub fallback: String,
}

/// Base yields and season multipliers for the yield estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldTableDef {
    pub name: String,
    pub version: String,
    /// Base yield in tons per hectare, keyed by lowercase crop name.
    pub base_yields: BTreeMap<String, f64>,
    pub default_base_yield: f64,
    /// Season name to yield multiplier. Lookup is exact-match.
    pub season_multipliers: BTreeMap<String, f64>,
    pub default_multiplier: f64,
}
