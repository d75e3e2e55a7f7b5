use safe_tx::SafeTxPayload;
use txe_codec::Envelope;
use x25519_dalek::StaticSecret;
use zeroize::Zeroize;

use crate::aead;
use crate::concat_kdf::derive_key_wrapping_key;
use crate::error::CryptoError;
use crate::exchange;
use crate::key_wrap;

/// Decrypts a TXE blob with a recipient's static X25519 private key.
///
/// Tries envelope recipients in order and stops at the first entry that
/// unwraps successfully (§4.G); fails with [`CryptoError::NotARecipient`]
/// if none do, with [`CryptoError::AuthTagInvalid`] if the recovered CEK
/// does not authenticate the ciphertext, and with
/// [`CryptoError::MalformedPayload`] if the plaintext doesn't parse as a
/// nine-field `SafeTx` list.
pub fn decrypt(blob: &[u8], recipient_secret_key: &[u8; 32]) -> Result<SafeTxPayload, CryptoError> {
    let envelope = Envelope::decode(blob)?;
    let secret = StaticSecret::from(*recipient_secret_key);

    let mut recovered_cek = None;
    for recipient in &envelope.recipients {
        let mut shared = exchange::diffie_hellman(&secret, &recipient.ephemeral_public_key);
        let mut kek = derive_key_wrapping_key(&shared);
        shared.zeroize();
        let unwrapped = key_wrap::unwrap(&kek, &recipient.encrypted_key);
        kek.zeroize();
        if let Ok(cek) = unwrapped {
            recovered_cek = Some(cek);
            break;
        }
    }
    let mut cek = recovered_cek.ok_or(CryptoError::NotARecipient)?;

    let plaintext = aead::open(&cek, &envelope.iv, &envelope.ciphertext, &envelope.tag)?;
    cek.zeroize();

    Ok(SafeTxPayload::decode(&plaintext)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encrypt::encrypt;
    use alloy_primitives::{Address, U256};
    use safe_tx::Operation;
    use x25519_dalek::PublicKey;

    fn sample_payload() -> SafeTxPayload {
        SafeTxPayload {
            to: Address::repeat_byte(0xaa),
            value: U256::from(1_000_000u64),
            data: vec![0x01, 0x02, 0x03],
            operation: Operation::DelegateCall,
            safe_tx_gas: U256::from(21000u64),
            base_gas: U256::from(0u64),
            gas_price: U256::from(1u64),
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
        }
    }

    #[test]
    fn roundtrip_single_recipient() {
        let payload = sample_payload();
        let secret = [0x33u8; 32];
        let public = PublicKey::from(&StaticSecret::from(secret)).to_bytes();

        let output = encrypt(&payload, &[public]).unwrap();
        let decrypted = decrypt(&output.blob, &secret).unwrap();

        assert_eq!(decrypted, payload);
    }

    #[test]
    fn roundtrip_middle_recipient_among_three() {
        let payload = sample_payload();
        let secrets: Vec<[u8; 32]> = (1..=3u8).map(|i| [i; 32]).collect();
        let publics: Vec<[u8; 32]> = secrets
            .iter()
            .map(|s| PublicKey::from(&StaticSecret::from(*s)).to_bytes())
            .collect();

        let output = encrypt(&payload, &publics).unwrap();
        let decrypted = decrypt(&output.blob, &secrets[1]).unwrap();

        assert_eq!(decrypted, payload);
    }

    #[test]
    fn wrong_key_fails_with_not_a_recipient() {
        let payload = sample_payload();
        let public = PublicKey::from(&StaticSecret::from([0x01u8; 32])).to_bytes();
        let output = encrypt(&payload, &[public]).unwrap();

        let result = decrypt(&output.blob, &[0x02u8; 32]);
        assert!(matches!(result, Err(CryptoError::NotARecipient)));
    }

    #[test]
    fn flipped_iv_fails_with_auth_tag_invalid() {
        let payload = sample_payload();
        let secret = [0x07u8; 32];
        let public = PublicKey::from(&StaticSecret::from(secret)).to_bytes();
        let output = encrypt(&payload, &[public]).unwrap();

        let mut envelope = Envelope::decode(&output.blob).unwrap();
        envelope.iv[0] ^= 0xff;
        let tampered_blob = envelope.encode().unwrap();

        let result = decrypt(&tampered_blob, &secret);
        assert!(matches!(result, Err(CryptoError::AuthTagInvalid)));
    }

    #[test]
    fn tampered_ciphertext_fails_with_auth_tag_invalid() {
        let payload = sample_payload();
        let secret = [0x09u8; 32];
        let public = PublicKey::from(&StaticSecret::from(secret)).to_bytes();
        let output = encrypt(&payload, &[public]).unwrap();

        let mut envelope = Envelope::decode(&output.blob).unwrap();
        envelope.ciphertext[0] ^= 0xff;
        let tampered_blob = envelope.encode().unwrap();

        let result = decrypt(&tampered_blob, &secret);
        assert!(matches!(result, Err(CryptoError::AuthTagInvalid)));
    }
}
