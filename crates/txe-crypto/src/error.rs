use thiserror::Error;

use safe_tx::SafeTxError;
use txe_codec::CodecError;

/// Encryption/decryption errors (spec components F/G).
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("no recipients supplied")]
    NoRecipients,

    #[error("too many recipients: {0}")]
    TooManyRecipients(usize),

    #[error("AEAD authentication failed")]
    AuthTagInvalid,

    #[error("recipient key does not unwrap any envelope entry")]
    NotARecipient,

    #[error("key unwrap failed: {0}")]
    KeyUnwrapFailed(String),

    #[error("key wrap failed: {0}")]
    KeyWrapFailed(String),

    #[error("CSPRNG failure: {0}")]
    RngFailure(String),

    #[error(transparent)]
    Envelope(#[from] CodecError),

    #[error("malformed decrypted payload: {0}")]
    MalformedPayload(#[from] SafeTxError),
}
