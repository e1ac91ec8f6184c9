use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven soil/weather factors, in scoring and validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    N,
    P,
    K,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
}

impl Factor {
    pub const ALL: [Factor; 7] = [
        Factor::N,
        Factor::P,
        Factor::K,
        Factor::Temperature,
        Factor::Humidity,
        Factor::Ph,
        Factor::Rainfall,
    ];

    /// Human-readable label used in validation errors.
    pub fn label(&self) -> &'static str {
        match self {
            Factor::N => "N (Nitrogen)",
            Factor::P => "P (Phosphorus)",
            Factor::K => "K (Potassium)",
            Factor::Temperature => "Temperature",
            Factor::Humidity => "Humidity",
            Factor::Ph => "pH",
            Factor::Rainfall => "Rainfall",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Factor::N => "n",
            Factor::P => "p",
            Factor::K => "k",
            Factor::Temperature => "temperature",
            Factor::Humidity => "humidity",
            Factor::Ph => "ph",
            Factor::Rainfall => "rainfall",
        };
        write!(f, "{key}")
    }
}

/// One soil/weather measurement. Immutable once constructed.
///
/// Wire names follow the sensor payload convention: nutrients are
/// uppercase single letters, the rest lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilMeasurement {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl SoilMeasurement {
    pub fn value(&self, factor: Factor) -> f64 {
        match factor {
            Factor::N => self.nitrogen,
            Factor::P => self.phosphorus,
            Factor::K => self.potassium,
            Factor::Temperature => self.temperature,
            Factor::Humidity => self.humidity,
            Factor::Ph => self.ph,
            Factor::Rainfall => self.rainfall,
        }
    }
}

/// Inclusive `(min, max)` comfort zone for one factor of one crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceBand {
    pub min: f64,
    pub max: f64,
}

impl ToleranceBand {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// One yield estimation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldRequest {
    pub crop: String,
    /// Cultivated area in hectares.
    pub area: f64,
    pub season: String,
    #[serde(default)]
    pub district: String,
    pub year: i32,
}
