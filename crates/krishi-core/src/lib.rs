pub mod advisory;
pub mod engine;
pub mod error;
pub mod model;
pub mod predictor;
pub mod protocol;
pub mod tables;
pub mod validate;
pub mod yields;

use engine::outcome::Recommendation;
use error::KrishiError;
use model::{SoilMeasurement, YieldRequest};
use predictor::{CropPredictor, RuleBasedPredictor};
use tables::Tables;
use yields::YieldEstimate;

/// Main API entry point: recommend a crop for a measurement and derive
/// the advisory items for the winner.
///
/// Validates the measurement first; no scoring happens for out-of-range
/// input.
pub fn recommend(
    measurement: &SoilMeasurement,
    tables: &Tables,
) -> Result<Recommendation, KrishiError> {
    let predictor = RuleBasedPredictor::new(&tables.tolerances);
    let prediction = predictor.predict(measurement)?;
    let advisory = advisory::generate(&prediction.predicted_crop, measurement, &tables.pest);
    Ok(Recommendation {
        prediction,
        advisory,
    })
}

/// Estimate production volume for a crop/area/season. Independent of the
/// recommendation path; shares no state with it.
pub fn estimate_yield(request: &YieldRequest, tables: &Tables) -> YieldEstimate {
    yields::estimate(request, &tables.yields)
}
