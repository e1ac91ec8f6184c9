use crate::model::SoilMeasurement;
use crate::tables::schema::PestAdviceDef;
use serde::{Deserialize, Serialize};

/// Rainfall below this (mm) triggers the irrigation advisory.
const LOW_RAINFALL_MM: f64 = 200.0;
/// Nitrogen below this (kg/ha) triggers the urea advisory.
const LOW_NITROGEN: f64 = 50.0;
/// Phosphorus below this (kg/ha) triggers the DAP advisory.
const LOW_PHOSPHORUS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryCategory {
    Irrigation,
    Fertilizer,
    Pest,
}

/// One categorized, rule-derived recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryItem {
    #[serde(rename = "type")]
    pub category: AdvisoryCategory,
    pub title: String,
    pub description: String,
}

/// Derive the advisory items for a predicted crop and raw measurement.
///
/// Always exactly three items, in irrigation, fertilizer, pest order.
/// The fertilizer checks are mutually exclusive and nitrogen is checked
/// strictly before phosphorus, so a doubly-deficient soil only reports
/// the nitrogen advisory.
pub fn generate(
    crop: &str,
    measurement: &SoilMeasurement,
    pest: &PestAdviceDef,
) -> Vec<AdvisoryItem> {
    let irrigation = if measurement.rainfall < LOW_RAINFALL_MM {
        format!("Apply 150-200mm water per week during flowering stage for {crop}")
    } else {
        "Monitor soil moisture. Reduce irrigation if rainfall is adequate".to_string()
    };

    let fertilizer = if measurement.nitrogen < LOW_NITROGEN {
        "Add 15-20kg Urea per acre. Soil nitrogen is low"
    } else if measurement.phosphorus < LOW_PHOSPHORUS {
        "Add 10kg DAP per acre. Phosphorus levels need improvement"
    } else {
        "Maintain current fertilizer schedule. Soil nutrients are adequate"
    };

    let pest_advice = pest
        .entries
        .get(crop)
        .cloned()
        .unwrap_or_else(|| pest.fallback.clone());

    vec![
        AdvisoryItem {
            category: AdvisoryCategory::Irrigation,
            title: "Irrigation".into(),
            description: irrigation,
        },
        AdvisoryItem {
            category: AdvisoryCategory::Fertilizer,
            title: "Fertilizer".into(),
            description: fertilizer.into(),
        },
        AdvisoryItem {
            category: AdvisoryCategory::Pest,
            title: "Pest Control".into(),
            description: pest_advice,
        },
    ]
}
