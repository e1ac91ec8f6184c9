use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum KrishiError {
    #[error("{field} must be between {min}-{max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("failed to load table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid table: {0}")]
    TableInvalid(String),

    #[error("no model file found (tried {candidates:?})")]
    ModelNotFound { candidates: Vec<PathBuf> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
