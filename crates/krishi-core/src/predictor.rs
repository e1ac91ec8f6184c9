use crate::engine::outcome::CropPrediction;
use crate::engine::scoring;
use crate::error::KrishiError;
use crate::model::SoilMeasurement;
use crate::tables::schema::ToleranceTableDef;
use crate::validate;
use std::path::PathBuf;
use tracing::debug;

/// Strategy seam: anything that turns a measurement into a ranked crop
/// prediction. The rule-based engine implements it; a model-backed
/// classifier can slot in behind the same contract.
pub trait CropPredictor {
    fn predict(&self, measurement: &SoilMeasurement) -> Result<CropPrediction, KrishiError>;

    fn backend_name(&self) -> &str;
}

/// Tolerance-band predictor backed by the static crop table.
pub struct RuleBasedPredictor<'a> {
    table: &'a ToleranceTableDef,
}

impl<'a> RuleBasedPredictor<'a> {
    pub fn new(table: &'a ToleranceTableDef) -> Self {
        Self { table }
    }
}

impl CropPredictor for RuleBasedPredictor<'_> {
    fn predict(&self, measurement: &SoilMeasurement) -> Result<CropPrediction, KrishiError> {
        // Fail fast on out-of-range fields; nothing gets scored.
        validate::validate(measurement)?;

        let ranked = scoring::rank(self.table, measurement);
        let winner = ranked
            .first()
            .ok_or_else(|| KrishiError::TableInvalid("crops must not be empty".into()))?;

        debug!(
            crop = %winner.crop,
            confidence = winner.confidence,
            "ranked {} crops",
            ranked.len()
        );

        Ok(CropPrediction {
            predicted_crop: winner.crop.clone(),
            confidence: winner.confidence,
            confidence_percentage: winner.confidence_percentage,
            top_3_alternatives: ranked.iter().take(3).cloned().collect(),
        })
    }

    fn backend_name(&self) -> &str {
        "rules"
    }
}

/// Find the first existing file among an ordered list of candidates.
///
/// Model artifacts may live next to the binary or in the working
/// directory; callers list the candidates in preference order and get an
/// explicit not-found error naming all of them when the list is
/// exhausted.
pub fn resolve_model_file(candidates: &[PathBuf]) -> Result<PathBuf, KrishiError> {
    for candidate in candidates {
        if candidate.exists() {
            return Ok(candidate.clone());
        }
    }
    Err(KrishiError::ModelNotFound {
        candidates: candidates.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Tables;

    #[test]
    fn test_rule_based_predictor_rejects_out_of_range() {
        let tables = Tables::builtin().unwrap();
        let predictor = RuleBasedPredictor::new(&tables.tolerances);
        let measurement = SoilMeasurement {
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 50.0,
            temperature: 25.0,
            humidity: 80.0,
            ph: 11.0,
            rainfall: 1200.0,
        };
        let err = predictor.predict(&measurement).unwrap_err();
        assert!(matches!(err, KrishiError::OutOfRange { field: "pH", .. }));
    }

    #[test]
    fn test_prediction_shape() {
        let tables = Tables::builtin().unwrap();
        let predictor = RuleBasedPredictor::new(&tables.tolerances);
        let measurement = SoilMeasurement {
            nitrogen: 100.0,
            phosphorus: 50.0,
            potassium: 50.0,
            temperature: 25.0,
            humidity: 80.0,
            ph: 6.5,
            rainfall: 1200.0,
        };
        let prediction = predictor.predict(&measurement).unwrap();
        assert_eq!(prediction.top_3_alternatives.len(), 3);
        assert_eq!(
            prediction.predicted_crop,
            prediction.top_3_alternatives[0].crop
        );
        assert_eq!(prediction.confidence, prediction.top_3_alternatives[0].confidence);
        assert_eq!(predictor.backend_name(), "rules");
    }

    #[test]
    fn test_resolve_model_file_first_existing_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.onnx");
        let present = dir.path().join("model.onnx");
        std::fs::write(&present, b"stub").unwrap();

        let resolved = resolve_model_file(&[missing.clone(), present.clone()]).unwrap();
        assert_eq!(resolved, present);
    }

    #[test]
    fn test_resolve_model_file_exhausted_lists_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.pkl");
        let b = dir.path().join("b.pkl");
        let err = resolve_model_file(&[a.clone(), b.clone()]).unwrap_err();
        match err {
            KrishiError::ModelNotFound { candidates } => {
                assert_eq!(candidates, vec![a, b]);
            }
            other => panic!("expected ModelNotFound, got {other:?}"),
        }
    }
}
