use thiserror::Error;
use txe_primitives::PrimitivesError;
use txe_rlp::RlpError;

/// `SafeTx` payload encode/decode errors.
#[derive(Debug, Error)]
pub enum SafeTxError {
    #[error("rlp error: {0}")]
    Rlp(#[from] RlpError),

    #[error("invalid address field: {0}")]
    InvalidAddress(#[from] PrimitivesError),

    #[error("invalid operation byte: {0:#04x}")]
    InvalidOperation(u8),

    #[error("expected 9 fields, got {0}")]
    WrongFieldCount(usize),
}
