use aes_kw::KekAes128;

use crate::error::CryptoError;

/// Wraps a 16-byte CEK under a 16-byte key-wrapping key (RFC 3394), producing
/// a 24-byte `encryptedKey`.
pub fn wrap(kek: &[u8; 16], cek: &[u8; 16]) -> Result<[u8; 24], CryptoError> {
    let kek = KekAes128::from(*kek);
    let mut wrapped = [0u8; 24];
    kek.wrap(cek, &mut wrapped)
        .map_err(|e| CryptoError::KeyWrapFailed(format!("{e:?}")))?;
    Ok(wrapped)
}

/// Unwraps a 24-byte `encryptedKey` under a 16-byte key-wrapping key,
/// recovering the 16-byte CEK. Fails (rather than panics) on integrity
/// check failure, since an unwrap attempt with the wrong key is the
/// expected way a non-recipient is told apart from a recipient.
pub fn unwrap(kek: &[u8; 16], wrapped: &[u8; 24]) -> Result<[u8; 16], CryptoError> {
    let kek = KekAes128::from(*kek);
    let mut cek = [0u8; 16];
    kek.unwrap(wrapped, &mut cek)
        .map_err(|e| CryptoError::KeyUnwrapFailed(format!("{e:?}")))?;
    Ok(cek)
}
