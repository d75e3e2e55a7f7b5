use thiserror::Error;

use safe_tx::SafeTxError;
use txe_circuit::{CircuitError, VerifyError};
use txe_codec::CodecError;
use txe_crypto::CryptoError;
use txe_jwe::JweError;

/// Aggregate error type for the public library surface, collecting every
/// sub-crate's error enum behind one `From` chain.
#[derive(Debug, Error)]
pub enum TxeError {
    #[error(transparent)]
    Payload(#[from] SafeTxError),

    #[error(transparent)]
    Envelope(#[from] CodecError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Jwe(#[from] JweError),

    #[error(transparent)]
    Circuit(#[from] CircuitError),

    #[error(transparent)]
    Verify(#[from] VerifyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_codec_error() {
        let err: TxeError = CodecError::TrailingBytes.into();
        assert!(matches!(err, TxeError::Envelope(CodecError::TrailingBytes)));
    }

    #[test]
    fn wraps_crypto_error() {
        let err: TxeError = CryptoError::NotARecipient.into();
        assert!(matches!(err, TxeError::Crypto(CryptoError::NotARecipient)));
        assert_eq!(err.to_string(), "recipient key does not unwrap any envelope entry");
    }

    #[test]
    fn wraps_verify_error() {
        let err: TxeError = VerifyError::StructHashMismatch.into();
        assert!(matches!(
            err,
            TxeError::Verify(VerifyError::StructHashMismatch)
        ));
    }
}
