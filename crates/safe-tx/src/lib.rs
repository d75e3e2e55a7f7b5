//! # safe-tx
//!
//! The Safe multisig transaction codec (spec component C): the nine-field
//! `SafeTx` payload plus `nonce`, RLP-encoded in a fixed field order.

pub mod error;
pub mod operation;
pub mod payload;

pub use error::SafeTxError;
pub use operation::Operation;
pub use payload::{SafeTxPayload, Transaction};
