use aes_gcm::aead::Aead;
use aes_gcm::{Aes128Gcm, Key, KeyInit, Nonce};

use crate::error::CryptoError;

/// AES-128-GCM tag size in bytes.
const TAG_SIZE: usize = 16;

/// Encrypts `plaintext` under `key` with the given 12-byte `iv` and empty
/// additional authenticated data (§4.F step 4). Returns `(ciphertext, tag)`
/// with `ciphertext.len() == plaintext.len()`.
pub fn seal(
    key: &[u8; 16],
    iv: &[u8; 12],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_SIZE]), CryptoError> {
    let cipher = Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(key));
    let nonce = Nonce::from_slice(iv);

    let mut combined = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| CryptoError::AuthTagInvalid)?;
    let tag_bytes = combined.split_off(combined.len() - TAG_SIZE);

    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&tag_bytes);
    Ok((combined, tag))
}

/// Decrypts `ciphertext` under `key` with `iv` and `tag`, empty AAD
/// (§4.G step 4). Fails with [`CryptoError::AuthTagInvalid`] if the tag
/// does not authenticate.
pub fn open(
    key: &[u8; 16],
    iv: &[u8; 12],
    ciphertext: &[u8],
    tag: &[u8; TAG_SIZE],
) -> Result<Vec<u8>, CryptoError> {
    let cipher = Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(key));
    let nonce = Nonce::from_slice(iv);

    let mut combined = Vec::with_capacity(ciphertext.len() + TAG_SIZE);
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(tag);

    cipher
        .decrypt(nonce, combined.as_slice())
        .map_err(|_| CryptoError::AuthTagInvalid)
}
