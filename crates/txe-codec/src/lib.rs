//! # txe-codec
//!
//! The TXE binary envelope (spec component D): a fixed, big-endian wire
//! layout for one AES-128-GCM ciphertext plus its per-recipient key wraps.

pub mod envelope;
pub mod error;

pub use envelope::{Envelope, Recipient};
pub use error::CodecError;
