//! End-to-end tests over the builtin rule tables: recommendation with
//! advisory, yield estimation, and the stdin/stdout message protocol.

use krishi_core::error::KrishiError;
use krishi_core::model::{SoilMeasurement, YieldRequest};
use krishi_core::predictor::RuleBasedPredictor;
use krishi_core::tables::Tables;
use krishi_core::{estimate_yield, recommend};

fn measurement(
    n: f64,
    p: f64,
    k: f64,
    temperature: f64,
    humidity: f64,
    ph: f64,
    rainfall: f64,
) -> SoilMeasurement {
    SoilMeasurement {
        nitrogen: n,
        phosphorus: p,
        potassium: k,
        temperature,
        humidity,
        ph,
        rainfall,
    }
}

// ---------------------------------------------------------------------------
// Golden scenario: fixed measurement, fixed table, exact winner and score
// ---------------------------------------------------------------------------
#[test]
fn golden_recommendation_scenario() {
    let tables = Tables::builtin().unwrap();
    let m = measurement(120.0, 80.0, 60.0, 22.5, 65.0, 7.2, 450.0);

    let rec = recommend(&m, &tables).unwrap();

    assert_eq!(rec.prediction.predicted_crop, "tomato");
    // Only the pH factor (7.2 against a 6.0-7.0 band) misses:
    // (6 + (1 - 0.2/7.0)) / 7
    assert_eq!(rec.prediction.confidence, 0.9959183673469388);
    assert_eq!(rec.prediction.confidence_percentage, 99.59183673469389);

    let alternatives: Vec<&str> = rec
        .prediction
        .top_3_alternatives
        .iter()
        .map(|s| s.crop.as_str())
        .collect();
    assert_eq!(alternatives, vec!["tomato", "wheat", "potato"]);
    assert_eq!(rec.prediction.top_3_alternatives[1].confidence, 0.979591836734694);
}

#[test]
fn golden_scenario_advisory() {
    let tables = Tables::builtin().unwrap();
    let m = measurement(120.0, 80.0, 60.0, 22.5, 65.0, 7.2, 450.0);

    let rec = recommend(&m, &tables).unwrap();
    let advisory = &rec.advisory;
    assert_eq!(advisory.len(), 3);
    // Rainfall 450 is adequate, nutrients are adequate, tomato has a
    // pest entry.
    assert_eq!(
        advisory[0].description,
        "Monitor soil moisture. Reduce irrigation if rainfall is adequate"
    );
    assert_eq!(
        advisory[1].description,
        "Maintain current fertilizer schedule. Soil nutrients are adequate"
    );
    assert_eq!(
        advisory[2].description,
        "Watch for fruit borer and early blight. Use resistant varieties"
    );
}

// ---------------------------------------------------------------------------
// A measurement inside every rice band scores exactly 1.0 and wins
// ---------------------------------------------------------------------------
#[test]
fn perfect_rice_conditions_score_one() {
    let tables = Tables::builtin().unwrap();
    let m = measurement(100.0, 50.0, 50.0, 25.0, 80.0, 6.5, 1200.0);

    let rec = recommend(&m, &tables).unwrap();
    assert_eq!(rec.prediction.predicted_crop, "rice");
    assert_eq!(rec.prediction.confidence, 1.0);
    assert_eq!(rec.prediction.confidence_percentage, 100.0);
}

// ---------------------------------------------------------------------------
// Every score stays in [0, 1], and the top-3 list is non-increasing
// ---------------------------------------------------------------------------
#[test]
fn scores_bounded_and_sorted() {
    let tables = Tables::builtin().unwrap();
    let m = measurement(10.0, 140.0, 200.0, 40.0, 20.0, 9.0, 2800.0);

    let ranked = krishi_core::engine::rank(&tables.tolerances, &m);
    assert_eq!(ranked.len(), 10);
    for pair in ranked.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
    for scored in &ranked {
        assert!((0.0..=1.0).contains(&scored.confidence));
    }

    let rec = recommend(&m, &tables).unwrap();
    assert_eq!(rec.prediction.top_3_alternatives.len(), 3);
}

// ---------------------------------------------------------------------------
// Out-of-range input fails before any scoring
// ---------------------------------------------------------------------------
#[test]
fn out_of_range_ph_rejected() {
    let tables = Tables::builtin().unwrap();
    let m = measurement(100.0, 50.0, 50.0, 25.0, 80.0, 11.0, 1200.0);

    let err = recommend(&m, &tables).unwrap_err();
    assert!(matches!(err, KrishiError::OutOfRange { field: "pH", .. }));
}

// ---------------------------------------------------------------------------
// Yield estimation: unknown crop takes the default base yield
// ---------------------------------------------------------------------------
#[test]
fn yield_unknown_crop_rabi() {
    let tables = Tables::builtin().unwrap();
    let request = YieldRequest {
        crop: "dragonfruit".into(),
        area: 10.0,
        season: "Rabi".into(),
        district: "Nashik".into(),
        year: 2025,
    };

    let est = estimate_yield(&request, &tables);
    assert_eq!(est.predicted_yield, 2.5);
    assert_eq!(est.predicted_production, 25.0);
    assert_eq!(est.crop, "dragonfruit");
    assert_eq!(est.season, "Rabi");
    assert_eq!(est.district, "Nashik");
    assert_eq!(est.year, 2025);
}

#[test]
fn yield_known_crop_with_season_multiplier() {
    let tables = Tables::builtin().unwrap();
    let request = YieldRequest {
        crop: "rice".into(),
        area: 4.0,
        season: "Kharif".into(),
        district: String::new(),
        year: 2024,
    };

    let est = estimate_yield(&request, &tables);
    assert_eq!(est.predicted_yield, 4.5 * 1.1);
    assert_eq!(est.predicted_production, 4.5 * 1.1 * 4.0);
}

// ---------------------------------------------------------------------------
// Idempotence: identical input, identical output
// ---------------------------------------------------------------------------
#[test]
fn recommendation_is_idempotent() {
    let tables = Tables::builtin().unwrap();
    let m = measurement(90.0, 45.0, 55.0, 28.0, 75.0, 6.2, 900.0);

    let a = recommend(&m, &tables).unwrap();
    let b = recommend(&m, &tables).unwrap();
    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Protocol: the recommendation wire shape is flat, with snake_case keys
// ---------------------------------------------------------------------------
#[test]
fn protocol_wire_shape() {
    let tables = Tables::builtin().unwrap();
    let predictor = RuleBasedPredictor::new(&tables.tolerances);

    let reply = krishi_core::protocol::handle_message(
        r#"{"soilData": {"N": 120, "P": 80, "K": 60, "temperature": 22.5,
            "humidity": 65, "ph": 7.2, "rainfall": 450}}"#,
        &predictor,
        &tables,
    );

    assert_eq!(reply["predicted_crop"], "tomato");
    assert_eq!(reply["top_3_alternatives"][0]["crop"], "tomato");
    assert_eq!(reply["top_3_alternatives"][1]["crop"], "wheat");
    assert_eq!(reply["advisory"][0]["type"], "irrigation");
    assert_eq!(reply["advisory"][0]["title"], "Irrigation");
    assert_eq!(reply["advisory"][2]["title"], "Pest Control");
}

// ---------------------------------------------------------------------------
// Custom tables: equal-score crops keep their listed order
// ---------------------------------------------------------------------------
#[test]
fn custom_table_tie_break_follows_listing_order() {
    fn table_json(first: &str, second: &str) -> String {
        let crop = |name: &str| {
            format!(
                r#"{{
                    "crop": "{name}",
                    "bands": {{
                        "n": {{ "min": 80, "max": 120 }},
                        "p": {{ "min": 40, "max": 60 }},
                        "k": {{ "min": 40, "max": 60 }},
                        "temperature": {{ "min": 20, "max": 35 }},
                        "humidity": {{ "min": 70, "max": 95 }},
                        "ph": {{ "min": 5.5, "max": 7.0 }},
                        "rainfall": {{ "min": 1000, "max": 3000 }}
                    }}
                }}"#
            )
        };
        format!(
            r#"{{ "name": "Tie", "version": "1.0", "crops": [{}, {}] }}"#,
            crop(first),
            crop(second)
        )
    }

    let m = measurement(100.0, 50.0, 50.0, 25.0, 80.0, 6.5, 1200.0);

    let table = krishi_core::tables::parse_tolerance_table_str(&table_json("alpha", "beta")).unwrap();
    let ranked = krishi_core::engine::rank(&table, &m);
    assert_eq!(ranked[0].crop, "alpha");
    assert_eq!(ranked[0].confidence, ranked[1].confidence);

    let table = krishi_core::tables::parse_tolerance_table_str(&table_json("beta", "alpha")).unwrap();
    let ranked = krishi_core::engine::rank(&table, &m);
    assert_eq!(ranked[0].crop, "beta");
}
