use crate::error::SafeTxError;

/// The Safe multisig call kind: a regular `CALL` or a `DELEGATECALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Call = 0,
    DelegateCall = 1,
}

impl Operation {
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(byte: u8) -> Result<Self, SafeTxError> {
        match byte {
            0 => Ok(Operation::Call),
            1 => Ok(Operation::DelegateCall),
            other => Err(SafeTxError::InvalidOperation(other)),
        }
    }
}
