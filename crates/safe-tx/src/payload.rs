use alloy_primitives::{Address, U256};
use txe_primitives::PrimitivesError;
use txe_rlp::{codec, item::RlpItem, uint};

use crate::error::SafeTxError;
use crate::operation::Operation;

/// The nine Safe multisig transaction fields, in their fixed wire order,
/// *excluding* `nonce` (§3: nonce is carried in the public commitment, not
/// the encrypted payload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeTxPayload {
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
    pub operation: Operation,
    pub safe_tx_gas: U256,
    pub base_gas: U256,
    pub gas_price: U256,
    pub gas_token: Address,
    pub refund_receiver: Address,
}

impl SafeTxPayload {
    /// RLP-encodes the nine fields as a list, in fixed order
    /// `[to, value, data, operation, safeTxGas, baseGas, gasPrice, gasToken, refundReceiver]`.
    pub fn encode(&self) -> Vec<u8> {
        let item = RlpItem::list(vec![
            RlpItem::bytes(self.to.as_slice().to_vec()),
            RlpItem::bytes(uint::minimal_be_bytes(&self.value.to_be_bytes::<32>())),
            RlpItem::bytes(self.data.clone()),
            RlpItem::bytes(uint::minimal_be_bytes(&[self.operation.to_u8()])),
            RlpItem::bytes(uint::minimal_be_bytes(&self.safe_tx_gas.to_be_bytes::<32>())),
            RlpItem::bytes(uint::minimal_be_bytes(&self.base_gas.to_be_bytes::<32>())),
            RlpItem::bytes(uint::minimal_be_bytes(&self.gas_price.to_be_bytes::<32>())),
            RlpItem::bytes(self.gas_token.as_slice().to_vec()),
            RlpItem::bytes(self.refund_receiver.as_slice().to_vec()),
        ]);
        codec::encode(&item)
    }

    /// Decodes the nine-field RLP list produced by [`Self::encode`].
    ///
    /// The top item must be a list of exactly nine elements; address fields
    /// must be 20 bytes; integer fields must be minimal big-endian;
    /// `operation` must be `0x` (CALL) or `0x01` (DELEGATECALL).
    pub fn decode(bytes: &[u8]) -> Result<Self, SafeTxError> {
        let item = codec::decode(bytes)?;
        let fields = item.as_list()?;
        if fields.len() != 9 {
            return Err(SafeTxError::WrongFieldCount(fields.len()));
        }

        let to = decode_address(fields[0].as_bytes()?)?;
        let value = decode_uint(fields[1].as_bytes()?)?;
        let data = fields[2].as_bytes()?.to_vec();
        let operation = decode_operation(fields[3].as_bytes()?)?;
        let safe_tx_gas = decode_uint(fields[4].as_bytes()?)?;
        let base_gas = decode_uint(fields[5].as_bytes()?)?;
        let gas_price = decode_uint(fields[6].as_bytes()?)?;
        let gas_token = decode_address(fields[7].as_bytes()?)?;
        let refund_receiver = decode_address(fields[8].as_bytes()?)?;

        Ok(SafeTxPayload {
            to,
            value,
            data,
            operation,
            safe_tx_gas,
            base_gas,
            gas_price,
            gas_token,
            refund_receiver,
        })
    }
}

fn decode_address(bytes: &[u8]) -> Result<Address, SafeTxError> {
    Address::try_from(bytes)
        .map_err(|_| {
            SafeTxError::InvalidAddress(PrimitivesError::InvalidAddress(format!(
                "expected 20 bytes, got {}",
                bytes.len()
            )))
        })
}

fn decode_uint(bytes: &[u8]) -> Result<U256, SafeTxError> {
    uint::validate_minimal_uint(bytes)?;
    Ok(U256::from_be_slice(bytes))
}

fn decode_operation(bytes: &[u8]) -> Result<Operation, SafeTxError> {
    match bytes {
        [] => Operation::from_u8(0),
        [b] if *b != 0 => Operation::from_u8(*b),
        _ => Err(SafeTxError::InvalidOperation(bytes.first().copied().unwrap_or(0xff))),
    }
}

/// The full Safe multisig transaction: the nine-field payload plus the
/// `nonce`, which is bound into the public commitment rather than the
/// ciphertext (§3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub payload: SafeTxPayload,
    pub nonce: U256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_payload() -> SafeTxPayload {
        SafeTxPayload {
            to: Address::from_str("0xa1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1").unwrap(),
            value: U256::from(2u64),
            data: vec![0x03, 0x04, 0x05, 0x06],
            operation: Operation::DelegateCall,
            safe_tx_gas: U256::from(7u64),
            base_gas: U256::from(8u64),
            gas_price: U256::from(9u64),
            gas_token: Address::from_str("0xa2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2a2").unwrap(),
            refund_receiver: Address::from_str("0xa3a3a3a3a3a3a3a3a3a3a3a3a3a3a3a3a3a3a3a3")
                .unwrap(),
        }
    }

    #[test]
    fn roundtrip() {
        let payload = sample_payload();
        let encoded = payload.encode();
        let decoded = SafeTxPayload::decode(&encoded).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn roundtrip_all_zero() {
        let payload = SafeTxPayload {
            to: Address::ZERO,
            value: U256::ZERO,
            data: vec![],
            operation: Operation::Call,
            safe_tx_gas: U256::ZERO,
            base_gas: U256::ZERO,
            gas_price: U256::ZERO,
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
        };
        let encoded = payload.encode();
        let decoded = SafeTxPayload::decode(&encoded).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        let item = RlpItem::list(vec![RlpItem::bytes(vec![1])]);
        let encoded = txe_rlp::codec::encode(&item);
        match SafeTxPayload::decode(&encoded) {
            Err(SafeTxError::WrongFieldCount(1)) => {}
            other => panic!("expected WrongFieldCount(1), got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_non_list_top_item() {
        let encoded = txe_rlp::codec::encode(&RlpItem::bytes(vec![1, 2, 3]));
        assert!(SafeTxPayload::decode(&encoded).is_err());
    }

    #[test]
    fn decode_rejects_bad_address_length() {
        let mut payload = sample_payload();
        let item = RlpItem::list(vec![
            RlpItem::bytes(vec![0xa1u8; 19]), // too short
            RlpItem::bytes(uint::minimal_be_bytes(&payload.value.to_be_bytes::<32>())),
            RlpItem::bytes(std::mem::take(&mut payload.data)),
            RlpItem::bytes(vec![payload.operation.to_u8()]),
            RlpItem::bytes(uint::minimal_be_bytes(&payload.safe_tx_gas.to_be_bytes::<32>())),
            RlpItem::bytes(uint::minimal_be_bytes(&payload.base_gas.to_be_bytes::<32>())),
            RlpItem::bytes(uint::minimal_be_bytes(&payload.gas_price.to_be_bytes::<32>())),
            RlpItem::bytes(payload.gas_token.as_slice().to_vec()),
            RlpItem::bytes(payload.refund_receiver.as_slice().to_vec()),
        ]);
        let encoded = txe_rlp::codec::encode(&item);
        assert!(SafeTxPayload::decode(&encoded).is_err());
    }

    #[test]
    fn decode_rejects_invalid_operation_byte() {
        let payload = sample_payload();
        let item = RlpItem::list(vec![
            RlpItem::bytes(payload.to.as_slice().to_vec()),
            RlpItem::bytes(uint::minimal_be_bytes(&payload.value.to_be_bytes::<32>())),
            RlpItem::bytes(payload.data.clone()),
            RlpItem::bytes(vec![0x02]), // invalid operation
            RlpItem::bytes(uint::minimal_be_bytes(&payload.safe_tx_gas.to_be_bytes::<32>())),
            RlpItem::bytes(uint::minimal_be_bytes(&payload.base_gas.to_be_bytes::<32>())),
            RlpItem::bytes(uint::minimal_be_bytes(&payload.gas_price.to_be_bytes::<32>())),
            RlpItem::bytes(payload.gas_token.as_slice().to_vec()),
            RlpItem::bytes(payload.refund_receiver.as_slice().to_vec()),
        ]);
        let encoded = txe_rlp::codec::encode(&item);
        assert!(matches!(
            SafeTxPayload::decode(&encoded),
            Err(SafeTxError::InvalidOperation(0x02))
        ));
    }

    #[test]
    fn operation_call_encodes_as_empty_string() {
        let mut payload = sample_payload();
        payload.operation = Operation::Call;
        let encoded = payload.encode();
        // The operation field's RLP item should be the canonical zero encoding (0x80).
        let item = txe_rlp::codec::decode(&encoded).unwrap();
        let fields = item.as_list().unwrap();
        assert_eq!(fields[3].as_bytes().unwrap(), &[] as &[u8]);
    }

    #[test]
    fn operation_delegatecall_encodes_as_single_byte() {
        let mut payload = sample_payload();
        payload.operation = Operation::DelegateCall;
        let encoded = payload.encode();
        let item = txe_rlp::codec::decode(&encoded).unwrap();
        let fields = item.as_list().unwrap();
        assert_eq!(fields[3].as_bytes().unwrap(), &[0x01]);
    }

    #[test]
    fn encoding_is_deterministic() {
        let payload = sample_payload();
        assert_eq!(payload.encode(), payload.encode());
    }
}
