use crate::advisory;
use crate::engine::outcome::Recommendation;
use crate::error::KrishiError;
use crate::model::{SoilMeasurement, YieldRequest};
use crate::predictor::CropPredictor;
use crate::tables::Tables;
use crate::yields;
use serde::Deserialize;
use serde_json::{json, Value};

/// One request message on the process boundary. Exactly one payload is
/// expected; `soilData` wins if both are present.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(rename = "soilData")]
    pub soil_data: Option<SoilMeasurement>,
    #[serde(rename = "yieldData")]
    pub yield_data: Option<YieldRequest>,
}

/// Handle one message and produce the reply value.
///
/// Never fails: parse, validation and computation errors all become an
/// `{"error": ...}` payload, so the caller prints the reply to stdout
/// and exits 0 regardless.
pub fn handle_message(input: &str, predictor: &dyn CropPredictor, tables: &Tables) -> Value {
    match reply(input, predictor, tables) {
        Ok(value) => value,
        Err(e) => json!({ "error": e.to_string() }),
    }
}

fn reply(input: &str, predictor: &dyn CropPredictor, tables: &Tables) -> Result<Value, KrishiError> {
    let envelope: Envelope = serde_json::from_str(input)?;

    if let Some(soil) = envelope.soil_data {
        let prediction = predictor.predict(&soil)?;
        let advisory = advisory::generate(&prediction.predicted_crop, &soil, &tables.pest);
        let recommendation = Recommendation {
            prediction,
            advisory,
        };
        Ok(serde_json::to_value(recommendation)?)
    } else if let Some(request) = envelope.yield_data {
        Ok(serde_json::to_value(yields::estimate(
            &request,
            &tables.yields,
        ))?)
    } else {
        Ok(json!({ "error": "Invalid input data" }))
    }
}
