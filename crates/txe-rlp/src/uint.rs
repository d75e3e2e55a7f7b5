use crate::error::RlpError;

/// Trims leading zero bytes from a big-endian integer representation,
/// producing the minimal encoding RLP requires (§4.B); an all-zero value
/// trims to the empty byte string.
pub fn minimal_be_bytes(be_bytes: &[u8]) -> Vec<u8> {
    let start = be_bytes.iter().position(|&b| b != 0).unwrap_or(be_bytes.len());
    be_bytes[start..].to_vec()
}

/// Validates that a decoded byte string is a minimally-encoded RLP integer:
/// no leading zero byte, and zero itself must be the empty string rather
/// than a lone `0x00` byte.
pub fn validate_minimal_uint(bytes: &[u8]) -> Result<(), RlpError> {
    if bytes.len() > 1 && bytes[0] == 0 {
        return Err(RlpError::FieldTypeMismatch(
            "non-minimal integer encoding: leading zero byte".into(),
        ));
    }
    if bytes.len() == 1 && bytes[0] == 0 {
        return Err(RlpError::FieldTypeMismatch(
            "zero must encode as the empty byte string, not 0x00".into(),
        ));
    }
    Ok(())
}
