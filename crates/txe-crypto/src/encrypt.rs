use rand::RngCore;
use rand_core::OsRng;
use safe_tx::SafeTxPayload;
use txe_codec::{Envelope, Recipient};
use zeroize::Zeroize;

use crate::aead;
use crate::concat_kdf::derive_key_wrapping_key;
use crate::error::CryptoError;
use crate::exchange;
use crate::key_wrap;

const MAX_RECIPIENTS: usize = 256;

/// One entry of the private witness: the recipient's static public key and
/// the fresh ephemeral private key generated for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateRecipient {
    pub public_key: [u8; 32],
    pub ephemeral_private_key: [u8; 32],
}

/// The private witness half of an encryption (§4.F step 7): everything the
/// verifier relation needs that the blob itself does not reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptPrivate {
    pub transaction: Vec<u8>,
    pub content_encryption_key: [u8; 16],
    pub recipients: Vec<PrivateRecipient>,
}

/// The full result of [`encrypt`]: the public TXE blob and its private
/// witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptOutput {
    pub blob: Vec<u8>,
    pub private: EncryptPrivate,
}

/// Encrypts `payload` for every key in `recipient_public_keys`, sharing one
/// fresh CEK across all recipients but giving each its own ephemeral X25519
/// keypair (§4.F).
pub fn encrypt(
    payload: &SafeTxPayload,
    recipient_public_keys: &[[u8; 32]],
) -> Result<EncryptOutput, CryptoError> {
    if recipient_public_keys.is_empty() {
        return Err(CryptoError::NoRecipients);
    }
    if recipient_public_keys.len() > MAX_RECIPIENTS {
        return Err(CryptoError::TooManyRecipients(recipient_public_keys.len()));
    }

    let transaction = payload.encode();

    let mut cek = [0u8; 16];
    OsRng
        .try_fill_bytes(&mut cek)
        .map_err(|e| CryptoError::RngFailure(e.to_string()))?;
    let mut iv = [0u8; 12];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| CryptoError::RngFailure(e.to_string()))?;

    let (ciphertext, tag) = aead::seal(&cek, &iv, &transaction)?;

    let mut envelope_recipients = Vec::with_capacity(recipient_public_keys.len());
    let mut private_recipients = Vec::with_capacity(recipient_public_keys.len());

    for public_key in recipient_public_keys {
        let (ephemeral_secret, ephemeral_public) = exchange::generate_ephemeral();
        let mut shared = exchange::diffie_hellman(&ephemeral_secret, public_key);
        let mut kek = derive_key_wrapping_key(&shared);
        shared.zeroize();
        let encrypted_key = key_wrap::wrap(&kek, &cek)?;
        kek.zeroize();

        envelope_recipients.push(Recipient {
            encrypted_key,
            ephemeral_public_key: ephemeral_public.to_bytes(),
        });
        private_recipients.push(PrivateRecipient {
            public_key: *public_key,
            ephemeral_private_key: ephemeral_secret.to_bytes(),
        });
    }

    let envelope = Envelope {
        ciphertext,
        iv,
        tag,
        recipients: envelope_recipients,
    };
    let blob = envelope.encode()?;

    Ok(EncryptOutput {
        blob,
        private: EncryptPrivate {
            transaction,
            content_encryption_key: cek,
            recipients: private_recipients,
        },
    })
}
