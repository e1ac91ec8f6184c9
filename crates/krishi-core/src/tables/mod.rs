pub mod builtin;
pub mod schema;

use crate::error::KrishiError;
use crate::model::Factor;
use schema::{PestAdviceDef, ToleranceTableDef, YieldTableDef};
use std::collections::HashSet;
use std::path::Path;

/// All rule tables the engine needs. Built once at startup and passed by
/// reference; nothing mutates a table after construction.
#[derive(Debug, Clone)]
pub struct Tables {
    pub tolerances: ToleranceTableDef,
    pub pest: PestAdviceDef,
    pub yields: YieldTableDef,
}

impl Tables {
    pub fn builtin() -> Result<Tables, KrishiError> {
        builtin::load()
    }
}

/// Load a tolerance table from a JSON file.
pub fn load_tolerance_table(path: &Path) -> Result<ToleranceTableDef, KrishiError> {
    let content = std::fs::read_to_string(path).map_err(|e| KrishiError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let table: ToleranceTableDef =
        serde_json::from_str(&content).map_err(|e| KrishiError::TableLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_tolerance_table(&table)?;
    Ok(table)
}

/// Parse a tolerance table from a JSON string (no file path context).
pub fn parse_tolerance_table_str(json: &str) -> Result<ToleranceTableDef, KrishiError> {
    let table: ToleranceTableDef = serde_json::from_str(json).map_err(KrishiError::Json)?;
    validate_tolerance_table(&table)?;
    Ok(table)
}

/// Validate that a tolerance table is well-formed.
pub fn validate_tolerance_table(table: &ToleranceTableDef) -> Result<(), KrishiError> {
    if table.crops.is_empty() {
        return Err(KrishiError::TableInvalid("crops must not be empty".into()));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for crop in &table.crops {
        if crop.crop.is_empty() {
            return Err(KrishiError::TableInvalid(
                "crop name must not be empty".into(),
            ));
        }
        if !seen.insert(crop.crop.as_str()) {
            return Err(KrishiError::TableInvalid(format!(
                "duplicate crop '{}'",
                crop.crop
            )));
        }

        for factor in Factor::ALL {
            let band = crop.bands.get(&factor).ok_or_else(|| {
                KrishiError::TableInvalid(format!(
                    "crop '{}' is missing a band for '{}'",
                    crop.crop, factor
                ))
            })?;
            // The score decay divides by the bound itself, so bounds must
            // be strictly positive and finite.
            if !(band.min > 0.0 && band.min.is_finite() && band.max.is_finite()) {
                return Err(KrishiError::TableInvalid(format!(
                    "crop '{}' has a non-positive or non-finite bound for '{}'",
                    crop.crop, factor
                )));
            }
            if band.min > band.max {
                return Err(KrishiError::TableInvalid(format!(
                    "crop '{}' has min > max for '{}'",
                    crop.crop, factor
                )));
            }
        }
    }

    Ok(())
}

/// Validate the yield-factor table.
pub fn validate_yield_table(table: &YieldTableDef) -> Result<(), KrishiError> {
    if !(table.default_base_yield > 0.0) {
        return Err(KrishiError::TableInvalid(
            "default_base_yield must be positive".into(),
        ));
    }
    if !(table.default_multiplier > 0.0) {
        return Err(KrishiError::TableInvalid(
            "default_multiplier must be positive".into(),
        ));
    }
    for (crop, value) in &table.base_yields {
        if crop.chars().any(|c| c.is_uppercase()) {
            return Err(KrishiError::TableInvalid(format!(
                "base yield key '{crop}' must be lowercase"
            )));
        }
        if !(*value > 0.0) {
            return Err(KrishiError::TableInvalid(format!(
                "base yield for '{crop}' must be positive"
            )));
        }
    }
    for (season, value) in &table.season_multipliers {
        if !(*value > 0.0) {
            return Err(KrishiError::TableInvalid(format!(
                "season multiplier for '{season}' must be positive"
            )));
        }
    }
    Ok(())
}
