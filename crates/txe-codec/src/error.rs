use thiserror::Error;

/// TXE binary envelope encode/decode errors.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("truncated envelope: {0}")]
    Truncated(String),

    #[error("length overflow: {0}")]
    LengthOverflow(String),

    #[error("trailing bytes after last recipient")]
    TrailingBytes,
}
