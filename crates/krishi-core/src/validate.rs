use crate::error::KrishiError;
use crate::model::{Factor, SoilMeasurement};

/// Inclusive accepted range per factor, checked in this order.
///
/// Rainfall: upstream data sheets quote 298.6 as the sensor ceiling, but
/// annual district totals routinely exceed it; the enforced bound is 3000.
pub const VALID_RANGES: [(Factor, f64, f64); 7] = [
    (Factor::N, 0.0, 140.0),
    (Factor::P, 5.0, 145.0),
    (Factor::K, 5.0, 205.0),
    (Factor::Temperature, 8.8, 43.7),
    (Factor::Humidity, 14.3, 99.9),
    (Factor::Ph, 3.5, 9.9),
    (Factor::Rainfall, 20.2, 3000.0),
];

/// Check every field against its accepted range. Fails on the first
/// violation, before any scoring happens.
pub fn validate(measurement: &SoilMeasurement) -> Result<(), KrishiError> {
    for (factor, min, max) in VALID_RANGES {
        let value = measurement.value(factor);
        if !(min..=max).contains(&value) {
            return Err(KrishiError::OutOfRange {
                field: factor.label(),
                min,
                max,
                value,
            });
        }
    }
    Ok(())
}
