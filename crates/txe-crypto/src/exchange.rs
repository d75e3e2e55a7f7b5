use rand_core::OsRng;
use x25519_dalek::{PublicKey, StaticSecret};

/// Generates a fresh X25519 keypair for one-time (ephemeral) use.
///
/// Returns a [`StaticSecret`] rather than `x25519_dalek::EphemeralSecret`:
/// the verifier relation needs the raw scalar bytes as a private witness
/// value, and `EphemeralSecret` deliberately has no byte accessor to
/// discourage scalar reuse. Callers MUST still use the returned secret
/// exactly once.
pub fn generate_ephemeral() -> (StaticSecret, PublicKey) {
    let secret = StaticSecret::random_from_rng(OsRng);
    let public = PublicKey::from(&secret);
    (secret, public)
}

/// Computes the X25519 shared secret between `secret` and a peer's raw
/// 32-byte public key.
pub fn diffie_hellman(secret: &StaticSecret, peer_public_bytes: &[u8; 32]) -> [u8; 32] {
    let peer_public = PublicKey::from(*peer_public_bytes);
    secret.diffie_hellman(&peer_public).to_bytes()
}
