use crate::error::PrimitivesError;

/// Decodes a `0x`-prefixed hex string into raw bytes.
///
/// The hex body must have even length (§3 invariant 4); an odd-length body
/// cannot represent a whole number of bytes.
pub fn decode_hex_prefixed(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let body = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| PrimitivesError::InvalidHex("missing 0x prefix".into()))?;

    if body.len() % 2 != 0 {
        return Err(PrimitivesError::InvalidHex(format!(
            "odd-length hex body: {} characters",
            body.len()
        )));
    }

    hex::decode(body).map_err(|e| PrimitivesError::InvalidHex(e.to_string()))
}

/// Renders bytes as a `0x`-prefixed lowercase hex string.
pub fn encode_hex_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
