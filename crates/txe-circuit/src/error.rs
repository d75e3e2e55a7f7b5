use thiserror::Error;

use safe_tx::SafeTxError;
use txe_codec::CodecError;

/// Witness assembly errors (spec component H).
#[derive(Debug, Error)]
pub enum CircuitError {
    #[error("struct hash must be 32 bytes, got {0}")]
    InvalidStructHashLength(usize),

    #[error(transparent)]
    Envelope(#[from] CodecError),
}

/// Verifier relation failures (spec component I) — each variant names the
/// specific constraint group that did not hold.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("payload commitment mismatch: recomputed struct hash does not equal the public commitment")]
    StructHashMismatch,

    #[error("AEAD consistency failure: recomputed ciphertext/tag does not equal the public values")]
    AeadMismatch,

    #[error("recipient count mismatch: public has {public}, private has {private}")]
    RecipientCountMismatch { public: usize, private: usize },

    #[error("recipient {0}: ephemeral public key does not match the private ephemeral scalar")]
    EphemeralPublicKeyMismatch(usize),

    #[error("recipient {0}: recomputed key wrap does not equal the public encrypted key")]
    KeyWrapMismatch(usize),

    #[error("private transaction bytes do not RLP-decode as a SafeTx payload: {0}")]
    MalformedTransaction(#[from] SafeTxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_circuit_error() {
        assert_eq!(
            CircuitError::InvalidStructHashLength(31).to_string(),
            "struct hash must be 32 bytes, got 31"
        );
    }

    #[test]
    fn display_verify_error_variants() {
        assert_eq!(
            VerifyError::StructHashMismatch.to_string(),
            "payload commitment mismatch: recomputed struct hash does not equal the public commitment"
        );
        assert_eq!(
            VerifyError::RecipientCountMismatch {
                public: 2,
                private: 1
            }
            .to_string(),
            "recipient count mismatch: public has 2, private has 1"
        );
        assert_eq!(
            VerifyError::EphemeralPublicKeyMismatch(3).to_string(),
            "recipient 3: ephemeral public key does not match the private ephemeral scalar"
        );
    }
}
