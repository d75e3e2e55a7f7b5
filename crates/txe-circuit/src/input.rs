use alloy_primitives::U256;
use txe_codec::Envelope;

use crate::error::CircuitError;

/// One recipient's public key-wrap record, as carried in the public half of
/// an [`Input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicRecipient {
    pub encrypted_key: [u8; 24],
    pub ephemeral_public_key: [u8; 32],
}

/// The public half of the witness: the real envelope plus the EIP-712
/// commitment the circuit re-derives (§4.H/§4.I).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicInput {
    pub struct_hash: [u8; 32],
    pub nonce: U256,
    pub ciphertext: Vec<u8>,
    pub iv: [u8; 12],
    pub tag: [u8; 16],
    pub recipients: Vec<PublicRecipient>,
}

/// One recipient's secret material, as carried in the private half of an
/// [`Input`]. [`extract`] fills this with zeroed placeholders; a prover
/// fills it with the real values before calling [`crate::relation::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateRecipient {
    pub public_key: [u8; 32],
    pub ephemeral_private_key: [u8; 32],
}

/// The private half of the witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateInput {
    pub transaction: Vec<u8>,
    pub content_encryption_key: [u8; 16],
    pub recipients: Vec<PrivateRecipient>,
}

/// The full circuit witness: a public half the verifier sees and a private
/// half only the prover knows the real values of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub public: PublicInput,
    pub private: PrivateInput,
}

/// Assembles an [`Input`] from a `structHash`, `nonce`, and a TXE blob
/// (§4.H).
///
/// The public half carries the real envelope and commitment. The private
/// half is filled with zero-filled placeholders of the shapes the proving
/// backend allocates at verification time: `transaction` has length
/// `|ciphertext|`, `contentEncryptionKey` is 16 bytes, and there is one
/// `(publicKey, ephemeralPrivateKey)` pair per public recipient.
pub fn extract(struct_hash: &[u8], nonce: U256, blob: &[u8]) -> Result<Input, CircuitError> {
    if struct_hash.len() != 32 {
        return Err(CircuitError::InvalidStructHashLength(struct_hash.len()));
    }
    let mut struct_hash_fixed = [0u8; 32];
    struct_hash_fixed.copy_from_slice(struct_hash);

    let envelope = Envelope::decode(blob)?;
    let recipient_count = envelope.recipients.len();

    let public_recipients = envelope
        .recipients
        .iter()
        .map(|r| PublicRecipient {
            encrypted_key: r.encrypted_key,
            ephemeral_public_key: r.ephemeral_public_key,
        })
        .collect();

    let private_placeholder_len = envelope.ciphertext.len();

    Ok(Input {
        public: PublicInput {
            struct_hash: struct_hash_fixed,
            nonce,
            ciphertext: envelope.ciphertext,
            iv: envelope.iv,
            tag: envelope.tag,
            recipients: public_recipients,
        },
        private: PrivateInput {
            transaction: vec![0u8; private_placeholder_len],
            content_encryption_key: [0u8; 16],
            recipients: (0..recipient_count)
                .map(|_| PrivateRecipient {
                    public_key: [0u8; 32],
                    ephemeral_private_key: [0u8; 32],
                })
                .collect(),
        },
    })
}
