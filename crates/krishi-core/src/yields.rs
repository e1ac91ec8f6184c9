use crate::model::YieldRequest;
use crate::tables::schema::YieldTableDef;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Estimated production for a crop/area/season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldEstimate {
    /// Total production over the area, in tons.
    pub predicted_production: f64,
    /// Tons per hectare after the season adjustment.
    pub predicted_yield: f64,
    pub area: f64,
    pub crop: String,
    pub season: String,
    pub district: String,
    pub year: i32,
}

/// Estimate production volume. Independent of the recommendation path.
///
/// Lookup-and-multiply: the crop's base yield (case-insensitive match,
/// table default when unknown) times the season multiplier (exact-name
/// match, default when unrecognized). Both fallbacks are deliberate
/// tolerance, not error paths.
pub fn estimate(request: &YieldRequest, table: &YieldTableDef) -> YieldEstimate {
    let base = match table.base_yields.get(&request.crop.to_lowercase()) {
        Some(value) => *value,
        None => {
            debug!(crop = %request.crop, "no base yield entry, using default");
            table.default_base_yield
        }
    };

    let multiplier = match table.season_multipliers.get(&request.season) {
        Some(value) => *value,
        None => {
            debug!(season = %request.season, "unrecognized season, using default multiplier");
            table.default_multiplier
        }
    };

    let predicted_yield = base * multiplier;
    YieldEstimate {
        predicted_production: predicted_yield * request.area,
        predicted_yield,
        area: request.area,
        crop: request.crop.clone(),
        season: request.season.clone(),
        district: request.district.clone(),
        year: request.year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> YieldTableDef {
        YieldTableDef {
            name: "Yield factors".into(),
            version: "1.0".into(),
            base_yields: [("rice".to_string(), 4.5), ("wheat".to_string(), 3.2)]
                .into_iter()
                .collect(),
            default_base_yield: 2.5,
            season_multipliers: [
                ("Kharif".to_string(), 1.1),
                ("Rabi".to_string(), 1.0),
                ("Summer".to_string(), 0.9),
            ]
            .into_iter()
            .collect(),
            default_multiplier: 1.0,
        }
    }

    fn request(crop: &str, area: f64, season: &str) -> YieldRequest {
        YieldRequest {
            crop: crop.into(),
            area,
            season: season.into(),
            district: "Pune".into(),
            year: 2025,
        }
    }

    #[test]
    fn test_known_crop_and_season() {
        let est = estimate(&request("rice", 10.0, "Kharif"), &table());
        assert_eq!(est.predicted_yield, 4.5 * 1.1);
        assert_eq!(est.predicted_production, 4.5 * 1.1 * 10.0);
    }

    #[test]
    fn test_unknown_crop_defaults_to_base_yield() {
        let est = estimate(&request("dragonfruit", 10.0, "Rabi"), &table());
        assert_eq!(est.predicted_yield, 2.5);
        assert_eq!(est.predicted_production, 25.0);
    }

    #[test]
    fn test_crop_lookup_is_case_insensitive() {
        let est = estimate(&request("Rice", 2.0, "Rabi"), &table());
        assert_eq!(est.predicted_yield, 4.5);
        // The request fields are echoed verbatim, lookup aside.
        assert_eq!(est.crop, "Rice");
    }

    #[test]
    fn test_unrecognized_season_silently_defaults() {
        let est = estimate(&request("wheat", 5.0, "Monsoon"), &table());
        assert_eq!(est.predicted_yield, 3.2);
        assert_eq!(est.season, "Monsoon");
    }

    #[test]
    fn test_request_fields_echoed() {
        let est = estimate(&request("wheat", 5.0, "Rabi"), &table());
        assert_eq!(est.area, 5.0);
        assert_eq!(est.district, "Pune");
        assert_eq!(est.year, 2025);
    }

    #[test]
    fn test_estimation_is_idempotent() {
        let req = request("rice", 7.0, "Summer");
        let a = estimate(&req, &table());
        let b = estimate(&req, &table());
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }
}
