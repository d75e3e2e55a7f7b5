use safe_tx::SafeTxPayload;
use x25519_dalek::{PublicKey, StaticSecret};

use txe_crypto::aead;
use txe_crypto::concat_kdf::derive_key_wrapping_key;
use txe_crypto::key_wrap;

use crate::eip712::safe_tx_struct_hash;
use crate::error::VerifyError;
use crate::input::Input;

/// Evaluates the verifier relation (§4.I) — the predicate a zero-knowledge
/// proof over `input` attests to. Accepts iff all four constraint groups
/// hold; the first failing group is reported.
pub fn verify(input: &Input) -> Result<(), VerifyError> {
    verify_shape(input)?;
    verify_payload_commitment(input)?;
    verify_aead_consistency(input)?;
    verify_key_wraps(input)?;
    Ok(())
}

fn verify_shape(input: &Input) -> Result<(), VerifyError> {
    let public_n = input.public.recipients.len();
    let private_n = input.private.recipients.len();
    if public_n != private_n {
        return Err(VerifyError::RecipientCountMismatch {
            public: public_n,
            private: private_n,
        });
    }
    Ok(())
}

/// Constraint 1: `keccak256(transaction_canonical_payload(private.transaction))
/// == public.structHash`, computed over the RLP-decoded transaction fields
/// and `public.nonce`.
fn verify_payload_commitment(input: &Input) -> Result<(), VerifyError> {
    let payload = SafeTxPayload::decode(&input.private.transaction)?;
    let recomputed = safe_tx_struct_hash(&payload, input.public.nonce);
    if recomputed != input.public.struct_hash {
        return Err(VerifyError::StructHashMismatch);
    }
    Ok(())
}

/// Constraint 2: AES-128-GCM encryption of `private.transaction` under
/// `private.contentEncryptionKey` with nonce `public.iv` and empty AAD
/// reproduces `public.ciphertext`/`public.tag` exactly, length and bytes.
fn verify_aead_consistency(input: &Input) -> Result<(), VerifyError> {
    if input.private.transaction.len() != input.public.ciphertext.len() {
        return Err(VerifyError::AeadMismatch);
    }
    let (ciphertext, tag) = aead::seal(
        &input.private.content_encryption_key,
        &input.public.iv,
        &input.private.transaction,
    )
    .map_err(|_| VerifyError::AeadMismatch)?;

    if ciphertext != input.public.ciphertext || tag != input.public.tag {
        return Err(VerifyError::AeadMismatch);
    }
    Ok(())
}

/// Constraint 3: for each recipient, the private ephemeral scalar
/// reproduces the public ephemeral public key, the resulting shared secret
/// derives the same key-wrapping key, and wrapping the CEK under it
/// reproduces the public `encryptedKey`.
fn verify_key_wraps(input: &Input) -> Result<(), VerifyError> {
    for (i, (public_recipient, private_recipient)) in input
        .public
        .recipients
        .iter()
        .zip(input.private.recipients.iter())
        .enumerate()
    {
        let ephemeral_secret = StaticSecret::from(private_recipient.ephemeral_private_key);
        let recomputed_public = PublicKey::from(&ephemeral_secret);
        if recomputed_public.to_bytes() != public_recipient.ephemeral_public_key {
            return Err(VerifyError::EphemeralPublicKeyMismatch(i));
        }

        let recipient_public = PublicKey::from(private_recipient.public_key);
        let shared = ephemeral_secret.diffie_hellman(&recipient_public).to_bytes();
        let kek = derive_key_wrapping_key(&shared);

        let wrapped = key_wrap::wrap(&kek, &input.private.content_encryption_key)
            .map_err(|_| VerifyError::KeyWrapMismatch(i))?;
        if wrapped != public_recipient.encrypted_key {
            return Err(VerifyError::KeyWrapMismatch(i));
        }
    }
    Ok(())
}
