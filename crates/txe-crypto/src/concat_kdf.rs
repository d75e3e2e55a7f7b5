use sha2::{Digest, Sha256};

const ALG_ID: &str = "ECDH-ES+A128KW";
const KEY_DATA_LEN_BITS: u32 = 128;

/// RFC 7518 §4.6 Concat-KDF-SHA256, specialized to the fixed
/// `ECDH-ES+A128KW` algorithm identifier, empty `PartyUInfo`/`PartyVInfo`,
/// and a 128-bit output.
///
/// Since the requested key length (128 bits) is no larger than SHA-256's
/// output, a single round (counter = 1) suffices; the digest is truncated
/// to its first 16 bytes.
pub fn derive_key_wrapping_key(shared_secret: &[u8; 32]) -> [u8; 16] {
    let mut hasher = Sha256::new();
    hasher.update(1u32.to_be_bytes());
    hasher.update(shared_secret);
    hasher.update((ALG_ID.len() as u32).to_be_bytes());
    hasher.update(ALG_ID.as_bytes());
    hasher.update(0u32.to_be_bytes()); // PartyUInfo (apu), empty
    hasher.update(0u32.to_be_bytes()); // PartyVInfo (apv), empty
    hasher.update(KEY_DATA_LEN_BITS.to_be_bytes()); // SuppPubInfo

    let digest = hasher.finalize();
    let mut kek = [0u8; 16];
    kek.copy_from_slice(&digest[..16]);
    kek
}
