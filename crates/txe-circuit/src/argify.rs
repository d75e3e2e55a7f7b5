use txe_rlp::{codec, item::RlpItem, uint};

use crate::input::Input;

fn recipient_list<T>(recipients: &[T], fields: impl Fn(&T) -> (Vec<u8>, Vec<u8>)) -> RlpItem {
    RlpItem::list(
        recipients
            .iter()
            .map(|r| {
                let (a, b) = fields(r);
                RlpItem::list(vec![RlpItem::bytes(a), RlpItem::bytes(b)])
            })
            .collect(),
    )
}

/// Serializes each half of `input` as a single RLP-encoded list and returns
/// both as `0x`-prefixed hex strings (§4.H): the canonical argument syntax
/// passed to the prover/verifier binary.
///
/// `public = [structHash, nonce, ciphertext, iv, tag, [[encryptedKey, ephemeralPublicKey], ...]]`
/// `private = [transaction, contentEncryptionKey, [[publicKey, ephemeralPrivateKey], ...]]`
pub fn argify(input: &Input) -> (String, String) {
    let public_item = RlpItem::list(vec![
        RlpItem::bytes(input.public.struct_hash.to_vec()),
        RlpItem::bytes(uint::minimal_be_bytes(&input.public.nonce.to_be_bytes::<32>())),
        RlpItem::bytes(input.public.ciphertext.clone()),
        RlpItem::bytes(input.public.iv.to_vec()),
        RlpItem::bytes(input.public.tag.to_vec()),
        recipient_list(&input.public.recipients, |r| {
            (r.encrypted_key.to_vec(), r.ephemeral_public_key.to_vec())
        }),
    ]);

    let private_item = RlpItem::list(vec![
        RlpItem::bytes(input.private.transaction.clone()),
        RlpItem::bytes(input.private.content_encryption_key.to_vec()),
        recipient_list(&input.private.recipients, |r| {
            (r.public_key.to_vec(), r.ephemeral_private_key.to_vec())
        }),
    ]);

    (
        txe_primitives::encode_hex_prefixed(&codec::encode(&public_item)),
        txe_primitives::encode_hex_prefixed(&codec::encode(&private_item)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::extract;
    use alloy_primitives::U256;
    use txe_codec::{Envelope, Recipient};

    fn sample_input() -> Input {
        let blob = Envelope {
            ciphertext: vec![0xab; 10],
            iv: [0x01; 12],
            tag: [0x02; 16],
            recipients: vec![Recipient {
                encrypted_key: [0x03; 24],
                ephemeral_public_key: [0x04; 32],
            }],
        }
        .encode()
        .unwrap();
        extract(&[0x09u8; 32], U256::from(7u64), &blob).unwrap()
    }

    #[test]
    fn produces_hex_prefixed_strings() {
        let (public, private) = argify(&sample_input());
        assert!(public.starts_with("0x"));
        assert!(private.starts_with("0x"));
    }

    #[test]
    fn is_deterministic() {
        let input = sample_input();
        assert_eq!(argify(&input), argify(&input));
    }

    #[test]
    fn public_and_private_differ() {
        let (public, private) = argify(&sample_input());
        assert_ne!(public, private);
    }

    #[test]
    fn public_argument_decodes_to_six_fields() {
        let (public, _) = argify(&sample_input());
        let bytes = hex::decode(&public[2..]).unwrap();
        let item = codec::decode(&bytes).unwrap();
        assert_eq!(item.as_list().unwrap().len(), 6);
    }

    #[test]
    fn private_argument_decodes_to_three_fields() {
        let (_, private) = argify(&sample_input());
        let bytes = hex::decode(&private[2..]).unwrap();
        let item = codec::decode(&bytes).unwrap();
        assert_eq!(item.as_list().unwrap().len(), 3);
    }
}
