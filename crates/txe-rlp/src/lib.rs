//! # txe-rlp
//!
//! Canonical Ethereum RLP (Recursive Length Prefix) codec: a hand-rolled
//! item-tree encoder/decoder (spec component B), not a typed-struct derive.
//! Leaves are byte strings, interior nodes are ordered lists; integers are
//! minimal big-endian byte strings with zero as the empty string.

pub mod codec;
pub mod error;
pub mod item;
pub mod uint;

pub use codec::{decode, encode};
pub use error::RlpError;
pub use item::RlpItem;
