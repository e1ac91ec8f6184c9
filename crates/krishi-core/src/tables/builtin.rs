use super::schema::{PestAdviceDef, ToleranceTableDef, YieldTableDef};
use super::Tables;
use crate::error::KrishiError;
use tracing::debug;

const CROP_TOLERANCES_JSON: &str = include_str!("../../../../rules/crop-tolerances.json");
const PEST_ADVICE_JSON: &str = include_str!("../../../../rules/pest-advice.json");
const YIELD_FACTORS_JSON: &str = include_str!("../../../../rules/yield-factors.json");

/// Load and validate the builtin rule tables.
pub fn load() -> Result<Tables, KrishiError> {
    let tolerances: ToleranceTableDef = serde_json::from_str(CROP_TOLERANCES_JSON)?;
    super::validate_tolerance_table(&tolerances)?;

    let pest: PestAdviceDef = serde_json::from_str(PEST_ADVICE_JSON)?;
    let yields: YieldTableDef = serde_json::from_str(YIELD_FACTORS_JSON)?;
    super::validate_yield_table(&yields)?;

    debug!(
        crops = tolerances.crops.len(),
        pest_entries = pest.entries.len(),
        "loaded builtin rule tables"
    );

    Ok(Tables {
        tolerances,
        pest,
        yields,
    })
}
