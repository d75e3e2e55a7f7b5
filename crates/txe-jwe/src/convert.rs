use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use txe_codec::{Envelope, Recipient};

use crate::error::JweError;
use crate::model::{Epk, Jwe, JweRecipient, RecipientHeader};

/// base64url(`{"enc":"A128GCM"}`), unpadded. The only protected header this
/// format ever emits (§4.E).
pub const PROTECTED_A128GCM: &str = "eyJlbmMiOiJBMTI4R0NNIn0";

const ALG_ECDH_ES_A128KW: &str = "ECDH-ES+A128KW";
const EPK_KTY_OKP: &str = "OKP";
const EPK_CRV_X25519: &str = "X25519";

fn encode_b64(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

fn decode_b64(field: &'static str, value: &str) -> Result<Vec<u8>, JweError> {
    URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| JweError::MalformedField {
            field,
            reason: e.to_string(),
        })
}

fn decode_b64_fixed<const N: usize>(field: &'static str, value: &str) -> Result<[u8; N], JweError> {
    let bytes = decode_b64(field, value)?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| JweError::MalformedField {
            field,
            reason: format!("expected {N} bytes, got {}", bytes.len()),
        })
}

/// Converts a decoded TXE envelope to its JWE General Serialization form.
pub fn to_jwe(envelope: &Envelope) -> Jwe {
    Jwe {
        protected: PROTECTED_A128GCM.to_string(),
        iv: encode_b64(&envelope.iv),
        tag: encode_b64(&envelope.tag),
        ciphertext: encode_b64(&envelope.ciphertext),
        recipients: envelope
            .recipients
            .iter()
            .map(|r| JweRecipient {
                header: RecipientHeader {
                    alg: ALG_ECDH_ES_A128KW.to_string(),
                    epk: Epk {
                        kty: EPK_KTY_OKP.to_string(),
                        crv: EPK_CRV_X25519.to_string(),
                        x: encode_b64(&r.ephemeral_public_key),
                    },
                },
                encrypted_key: encode_b64(&r.encrypted_key),
            })
            .collect(),
    }
}

/// Parses a JWE General Serialization object back into a TXE envelope.
///
/// Rejects any `alg`/`crv` other than the `ECDH-ES+A128KW`/`X25519` profile
/// this format uses, and any field whose decoded length doesn't match the
/// fixed envelope layout (§3).
pub fn from_jwe(jwe: &Jwe) -> Result<Envelope, JweError> {
    let iv = decode_b64_fixed("iv", &jwe.iv)?;
    let tag = decode_b64_fixed("tag", &jwe.tag)?;
    let ciphertext = decode_b64("ciphertext", &jwe.ciphertext)?;

    if jwe.recipients.is_empty() {
        return Err(JweError::MalformedField {
            field: "recipients",
            reason: "must be non-empty".into(),
        });
    }

    let recipients = jwe
        .recipients
        .iter()
        .map(|r| {
            if r.header.alg != ALG_ECDH_ES_A128KW {
                return Err(JweError::UnsupportedAlgorithm(r.header.alg.clone()));
            }
            if r.header.epk.kty != EPK_KTY_OKP || r.header.epk.crv != EPK_CRV_X25519 {
                return Err(JweError::UnsupportedAlgorithm(format!(
                    "{}/{}",
                    r.header.epk.kty, r.header.epk.crv
                )));
            }
            Ok(Recipient {
                encrypted_key: decode_b64_fixed("encrypted_key", &r.encrypted_key)?,
                ephemeral_public_key: decode_b64_fixed("epk.x", &r.header.epk.x)?,
            })
        })
        .collect::<Result<Vec<_>, JweError>>()?;

    Ok(Envelope {
        ciphertext,
        iv,
        tag,
        recipients,
    })
}

/// Serializes a [`Jwe`] to its JSON General Serialization text form.
///
/// This is the one point where the adapter touches actual JSON text rather
/// than the structured [`Jwe`] model; `spec.md` §1 places JSON serialization
/// of JWE beyond this conversion surface out of scope, so this exists only
/// as a thin convenience for callers handing the result to a standard JWE
/// library (§8 JWE compatibility property), not as a general JWE/JSON layer.
pub fn to_json(jwe: &Jwe) -> Result<String, JweError> {
    serde_json::to_string(jwe).map_err(|e| JweError::Json(e.to_string()))
}

/// Parses a JWE General Serialization JSON document into a [`Jwe`].
pub fn from_json(json: &str) -> Result<Jwe, JweError> {
    serde_json::from_str(json).map_err(|e| JweError::Json(e.to_string()))
}

/// Returns `true` if `bytes` is either a well-formed TXE envelope (§4.D) or
/// the UTF-8 JSON text of a JWE General Serialization object convertible to
/// one (§4.E) — a structural sniff for callers handed an opaque value of
/// unknown provenance.
pub fn is_txe(bytes: &[u8]) -> bool {
    if Envelope::decode(bytes).is_ok() {
        return true;
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => from_json(text).map(|jwe| from_jwe(&jwe).is_ok()).unwrap_or(false),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_envelope() -> Envelope {
        Envelope {
            ciphertext: vec![0xab; 10],
            iv: [0x01; 12],
            tag: [0x02; 16],
            recipients: vec![
                Recipient {
                    encrypted_key: [0x03; 24],
                    ephemeral_public_key: [0x04; 32],
                },
                Recipient {
                    encrypted_key: [0x05; 24],
                    ephemeral_public_key: [0x06; 32],
                },
            ],
        }
    }

    #[test]
    fn roundtrip() {
        let envelope = sample_envelope();
        let jwe = to_jwe(&envelope);
        let decoded = from_jwe(&jwe).unwrap();
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn protected_header_is_the_canonical_constant() {
        let jwe = to_jwe(&sample_envelope());
        assert_eq!(jwe.protected, PROTECTED_A128GCM);
    }

    #[test]
    fn protected_header_decodes_to_expected_json() {
        let decoded = URL_SAFE_NO_PAD.decode(PROTECTED_A128GCM).unwrap();
        assert_eq!(decoded, br#"{"enc":"A128GCM"}"#);
    }

    #[test]
    fn recipient_header_uses_ecdh_es_a128kw_and_x25519() {
        let jwe = to_jwe(&sample_envelope());
        for recipient in &jwe.recipients {
            assert_eq!(recipient.header.alg, "ECDH-ES+A128KW");
            assert_eq!(recipient.header.epk.kty, "OKP");
            assert_eq!(recipient.header.epk.crv, "X25519");
        }
    }

    #[test]
    fn from_jwe_rejects_unknown_alg() {
        let mut jwe = to_jwe(&sample_envelope());
        jwe.recipients[0].header.alg = "RSA-OAEP".to_string();
        assert!(matches!(
            from_jwe(&jwe),
            Err(JweError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn from_jwe_rejects_wrong_length_iv() {
        let mut jwe = to_jwe(&sample_envelope());
        jwe.iv = encode_b64(&[0u8; 11]);
        assert!(matches!(
            from_jwe(&jwe),
            Err(JweError::MalformedField { field: "iv", .. })
        ));
    }

    #[test]
    fn from_jwe_rejects_empty_recipients() {
        let mut jwe = to_jwe(&sample_envelope());
        jwe.recipients.clear();
        assert!(from_jwe(&jwe).is_err());
    }

    #[test]
    fn is_txe_accepts_valid_envelope_bytes() {
        let encoded = sample_envelope().encode().unwrap();
        assert!(is_txe(&encoded));
    }

    #[test]
    fn is_txe_rejects_garbage() {
        assert!(!is_txe(b"not a txe envelope"));
        assert!(!is_txe(&[]));
    }

    #[test]
    fn is_txe_accepts_jwe_json_text() {
        let jwe = to_jwe(&sample_envelope());
        let json = to_json(&jwe).unwrap();
        assert!(is_txe(json.as_bytes()));
    }

    #[test]
    fn is_txe_rejects_jwe_json_with_unsupported_algorithm() {
        let mut jwe = to_jwe(&sample_envelope());
        jwe.recipients[0].header.alg = "RSA-OAEP".to_string();
        let json = to_json(&jwe).unwrap();
        assert!(!is_txe(json.as_bytes()));
    }

    #[test]
    fn json_roundtrip() {
        let jwe = to_jwe(&sample_envelope());
        let json = to_json(&jwe).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(parsed, jwe);
    }

    #[test]
    fn json_uses_jwe_general_serialization_field_names() {
        let jwe = to_jwe(&sample_envelope());
        let json = to_json(&jwe).unwrap();
        for field in ["protected", "iv", "tag", "ciphertext", "recipients", "header", "encrypted_key"] {
            assert!(json.contains(field), "missing field {field} in {json}");
        }
    }

    #[test]
    fn from_json_rejects_malformed_document() {
        assert!(matches!(from_json("not json"), Err(JweError::Json(_))));
    }

    #[test]
    fn base64_is_unpadded_url_safe() {
        let jwe = to_jwe(&sample_envelope());
        assert!(!jwe.ciphertext.contains('='));
        assert!(!jwe.ciphertext.contains('+'));
        assert!(!jwe.ciphertext.contains('/'));
    }
}
