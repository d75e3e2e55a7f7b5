//! # txe-crypto
//!
//! Hybrid multi-recipient encryption and decryption (spec components F/G):
//! one shared AES-128-GCM content key wrapped per recipient via
//! ECDH-ES+A128KW over X25519.

pub mod aead;
pub mod concat_kdf;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod exchange;
pub mod key_wrap;

pub use decrypt::decrypt;
pub use encrypt::{encrypt, EncryptOutput, EncryptPrivate, PrivateRecipient};
pub use error::CryptoError;
