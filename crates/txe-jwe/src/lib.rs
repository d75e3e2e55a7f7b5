//! # txe-jwe
//!
//! The JWE General Serialization adapter (spec component E): converts a
//! decoded TXE envelope to and from its JSON Web Encryption rendering.

pub mod convert;
pub mod error;
pub mod model;

pub use convert::{from_json, from_jwe, is_txe, to_json, to_jwe, PROTECTED_A128GCM};
pub use error::JweError;
pub use model::{Epk, Jwe, JweRecipient, RecipientHeader};
