use thiserror::Error;

/// RLP (Recursive Length Prefix) decoding/encoding errors.
#[derive(Debug, Error)]
pub enum RlpError {
    #[error("empty input")]
    EmptyInput,

    #[error("bad length prefix: {0}")]
    BadLengthPrefix(String),

    #[error("trailing bytes after top-level item")]
    TrailingBytes,

    #[error("field type mismatch: {0}")]
    FieldTypeMismatch(String),
}
