use alloy_primitives::U256;
use safe_tx::SafeTxPayload;
use sha3::{Digest, Keccak256};

/// The Gnosis Safe `SafeTx` EIP-712 type string (Safe contracts v1.3.0+).
pub const SAFE_TX_TYPE_STRING: &str = "SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)";

/// `keccak256(SAFE_TX_TYPE_STRING)`.
pub fn safe_tx_type_hash() -> [u8; 32] {
    Keccak256::digest(SAFE_TX_TYPE_STRING.as_bytes()).into()
}

fn left_pad_32(bytes: &[u8]) -> [u8; 32] {
    let mut word = [0u8; 32];
    let start = 32 - bytes.len();
    word[start..].copy_from_slice(bytes);
    word
}

/// Recomputes the EIP-712 `hashStruct` of a `SafeTx` over the nine payload
/// fields and the public `nonce` (§4.I.1).
///
/// `bytes`-typed fields (`data`) are encoded per `encodeData` as the
/// `keccak256` of their contents, not the raw bytes themselves.
pub fn safe_tx_struct_hash(payload: &SafeTxPayload, nonce: U256) -> [u8; 32] {
    let data_hash: [u8; 32] = Keccak256::digest(&payload.data).into();

    let mut preimage = Vec::with_capacity(11 * 32);
    preimage.extend_from_slice(&safe_tx_type_hash());
    preimage.extend_from_slice(&left_pad_32(payload.to.as_slice()));
    preimage.extend_from_slice(&payload.value.to_be_bytes::<32>());
    preimage.extend_from_slice(&data_hash);
    preimage.extend_from_slice(&left_pad_32(&[payload.operation.to_u8()]));
    preimage.extend_from_slice(&payload.safe_tx_gas.to_be_bytes::<32>());
    preimage.extend_from_slice(&payload.base_gas.to_be_bytes::<32>());
    preimage.extend_from_slice(&payload.gas_price.to_be_bytes::<32>());
    preimage.extend_from_slice(&left_pad_32(payload.gas_token.as_slice()));
    preimage.extend_from_slice(&left_pad_32(payload.refund_receiver.as_slice()));
    preimage.extend_from_slice(&nonce.to_be_bytes::<32>());

    Keccak256::digest(&preimage).into()
}
