use super::outcome::ScoredCrop;
use crate::model::{Factor, SoilMeasurement, ToleranceBand};
use crate::tables::schema::{CropToleranceDef, ToleranceTableDef};

/// Contribution of a single factor to a crop's match score.
///
/// Inside the band a factor contributes 1.0. Outside, the contribution
/// decays linearly with the distance to the violated bound, normalized by
/// that bound's own magnitude (not the band width), floored at 0. A value
/// just outside a band still earns most of the point; a far miss earns
/// nothing.
fn factor_contribution(value: f64, band: &ToleranceBand) -> f64 {
    if band.contains(value) {
        1.0
    } else if value < band.min {
        (1.0 - (band.min - value) / band.min).max(0.0)
    } else {
        (1.0 - (value - band.max) / band.max).max(0.0)
    }
}

/// Match score of one crop against one measurement, in [0, 1].
///
/// Sums the 7 factor contributions in `Factor::ALL` order and divides by
/// 7. The summation order is fixed so scores are bit-for-bit reproducible.
pub fn score_crop(crop: &CropToleranceDef, measurement: &SoilMeasurement) -> f64 {
    let mut sum = 0.0;
    for factor in Factor::ALL {
        if let Some(band) = crop.bands.get(&factor) {
            sum += factor_contribution(measurement.value(factor), band);
        }
    }
    sum / Factor::ALL.len() as f64
}

/// Score every crop and sort by score, descending.
///
/// `sort_by` is stable, so crops with equal scores keep the table's
/// original order. The table order is the only tie-break.
pub fn rank(table: &ToleranceTableDef, measurement: &SoilMeasurement) -> Vec<ScoredCrop> {
    let mut scored: Vec<ScoredCrop> = table
        .crops
        .iter()
        .map(|crop| {
            let score = score_crop(crop, measurement);
            ScoredCrop {
                crop: crop.crop.clone(),
                confidence: score,
                confidence_percentage: score * 100.0,
            }
        })
        .collect();
    scored.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    scored
}
