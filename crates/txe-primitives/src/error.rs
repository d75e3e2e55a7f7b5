use thiserror::Error;

/// Primitive parsing/rendering errors shared across the TXE crates.
#[derive(Debug, Error)]
pub enum PrimitivesError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
