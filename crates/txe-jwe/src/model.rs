use serde::{Deserialize, Serialize};

/// `ECDH-ES+A128KW` over Curve25519, expressed as an OKP JWK (RFC 8037).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epk {
    pub kty: String,
    pub crv: String,
    pub x: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientHeader {
    pub alg: String,
    pub epk: Epk,
}

/// One entry of a JWE General Serialization `recipients` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JweRecipient {
    pub header: RecipientHeader,
    pub encrypted_key: String,
}

/// A JWE General Serialization object (RFC 7516 §7.2.1), restricted to the
/// `A128GCM` / `ECDH-ES+A128KW` profile this envelope format uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwe {
    pub protected: String,
    pub iv: String,
    pub tag: String,
    pub ciphertext: String,
    pub recipients: Vec<JweRecipient>,
}
