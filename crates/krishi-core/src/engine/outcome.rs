use crate::advisory::AdvisoryItem;
use serde::{Deserialize, Serialize};

/// One crop with its match score against a measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCrop {
    pub crop: String,
    /// Match score in [0, 1].
    pub confidence: f64,
    pub confidence_percentage: f64,
}

/// Ranked prediction. Every predictor strategy, rule-based or
/// model-backed, produces this same shape so callers can switch
/// strategies without changing the consuming contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropPrediction {
    pub predicted_crop: String,
    pub confidence: f64,
    pub confidence_percentage: f64,
    /// Sorted by confidence, descending. Length min(3, configured crops).
    pub top_3_alternatives: Vec<ScoredCrop>,
}

/// Full recommendation: the prediction plus the three advisory items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub prediction: CropPrediction,
    pub advisory: Vec<AdvisoryItem>,
}
