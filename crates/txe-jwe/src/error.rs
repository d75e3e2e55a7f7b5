use thiserror::Error;

/// JWE General Serialization conversion errors.
#[derive(Debug, Error)]
pub enum JweError {
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("malformed field {field}: {reason}")]
    MalformedField { field: &'static str, reason: String },

    #[error("JSON serialization failed: {0}")]
    Json(String),
}
