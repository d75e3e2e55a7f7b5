use std::str::FromStr;

use alloy_primitives::Address;

use crate::error::PrimitivesError;

/// Parses a `0x`-prefixed 20-byte address, guarding the fixed length
/// invariant from §3 (all addresses are exactly 20 bytes).
pub fn parse_address(s: &str) -> Result<Address, PrimitivesError> {
    Address::from_str(s).map_err(|e| PrimitivesError::InvalidAddress(e.to_string()))
}
