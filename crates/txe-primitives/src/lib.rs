//! # txe-primitives
//!
//! Hex parsing/rendering and shared byte-level primitives for the TXE
//! (Safe Transaction Encryption) crates: `0x`-prefixed hex codecs and
//! fixed-length address guards (spec component A).

pub mod address;
pub mod error;
pub mod hex;

pub use alloy_primitives::{Address, Bytes, U256};
pub use error::PrimitivesError;
