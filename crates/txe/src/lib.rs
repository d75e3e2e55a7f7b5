//! # txe
//!
//! Safe Transaction Encryption: confidential distribution of a multisig
//! transaction payload to an ordered list of recipients, with a verifier
//! relation a zero-knowledge proof can attest to without revealing the
//! plaintext or any recipient's private material.
//!
//! This crate is the public library surface (§6): [`encrypt`], [`decrypt`],
//! [`extract`], [`argify`], [`verify`], [`to_jwe`], [`from_jwe`], and
//! [`is_txe`].

pub mod error;

pub use error::TxeError;

pub use alloy_primitives::{Address, U256};
pub use safe_tx::{Operation, SafeTxPayload};
pub use txe_circuit::{Input, PrivateInput, PrivateRecipient, PublicInput, PublicRecipient};
pub use txe_codec::{Envelope, Recipient};
pub use txe_crypto::{EncryptOutput, EncryptPrivate};
pub use txe_jwe::Jwe;

/// Evaluates the verifier relation (§4.I) over an assembled [`Input`],
/// accepting iff the payload commitment, AEAD consistency, and
/// per-recipient key-wrap constraints all hold.
pub fn verify(input: &Input) -> Result<(), TxeError> {
    Ok(txe_circuit::relation::verify(input)?)
}

/// Encrypts `payload` for every recipient in `recipient_public_keys`,
/// sharing one CEK across recipients but giving each a fresh ephemeral
/// X25519 keypair (§4.F). Returns the TXE blob plus the private witness
/// needed to prove the verifier relation over it.
pub fn encrypt(
    payload: &SafeTxPayload,
    recipient_public_keys: &[[u8; 32]],
) -> Result<EncryptOutput, TxeError> {
    Ok(txe_crypto::encrypt(payload, recipient_public_keys)?)
}

/// Decrypts a TXE blob with a recipient's static X25519 private key
/// (§4.G), returning the nine-field `SafeTx` payload.
pub fn decrypt(blob: &[u8], recipient_secret_key: &[u8; 32]) -> Result<SafeTxPayload, TxeError> {
    Ok(txe_crypto::decrypt(blob, recipient_secret_key)?)
}

/// Assembles the circuit witness for a blob, `structHash`, and `nonce`
/// (§4.H). The private half is zero-filled placeholders; a prover fills
/// in the real secret values before calling [`txe_circuit::relation::verify`].
pub fn extract(struct_hash: &[u8], nonce: U256, blob: &[u8]) -> Result<Input, TxeError> {
    Ok(txe_circuit::extract(struct_hash, nonce, blob)?)
}

/// Serializes a circuit [`Input`] as the two RLP-encoded hex arguments the
/// prover/verifier binary consumes (§4.H).
pub fn argify(input: &Input) -> (String, String) {
    txe_circuit::argify(input)
}

/// Converts a TXE blob to its JWE General Serialization form (§4.E).
pub fn to_jwe(blob: &[u8]) -> Result<Jwe, TxeError> {
    let envelope = Envelope::decode(blob)?;
    Ok(txe_jwe::to_jwe(&envelope))
}

/// Converts a JWE General Serialization object back into a TXE blob.
pub fn from_jwe(jwe: &Jwe) -> Result<Vec<u8>, TxeError> {
    let envelope = txe_jwe::from_jwe(jwe)?;
    Ok(envelope.encode()?)
}

/// Serializes a [`Jwe`] to its JSON General Serialization text form, for
/// handing to a standard JWE library (§8 JWE compatibility property).
pub fn jwe_to_json(jwe: &Jwe) -> Result<String, TxeError> {
    Ok(txe_jwe::to_json(jwe)?)
}

/// Parses a JWE General Serialization JSON document into a [`Jwe`].
pub fn jwe_from_json(json: &str) -> Result<Jwe, TxeError> {
    Ok(txe_jwe::from_json(json)?)
}

/// Returns `true` if `bytes` is either a well-formed TXE blob or the JSON
/// text of a JWE General Serialization object convertible to one (§6).
pub fn is_txe(bytes: &[u8]) -> bool {
    txe_jwe::is_txe(bytes)
}
