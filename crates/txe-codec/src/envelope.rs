use crate::error::CodecError;

const IV_LEN: usize = 12;
const TAG_LEN: usize = 16;
const ENCRYPTED_KEY_LEN: usize = 24;
const EPHEMERAL_PUBLIC_KEY_LEN: usize = 32;
const RECIPIENT_LEN: usize = ENCRYPTED_KEY_LEN + EPHEMERAL_PUBLIC_KEY_LEN;
const MAX_CIPHERTEXT_LEN: usize = u16::MAX as usize;
const MAX_RECIPIENTS: usize = 256;

/// One `{encryptedKey, ephemeralPublicKey}` pair (§3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub encrypted_key: [u8; ENCRYPTED_KEY_LEN],
    pub ephemeral_public_key: [u8; EPHEMERAL_PUBLIC_KEY_LEN],
}

/// The TXE binary envelope (§4.D): `ciphertext`, `iv`, `tag`, and an
/// ordered, non-empty list of per-recipient key-wrap records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub ciphertext: Vec<u8>,
    pub iv: [u8; IV_LEN],
    pub tag: [u8; TAG_LEN],
    pub recipients: Vec<Recipient>,
}

impl Envelope {
    /// Packs the envelope into its wire format.
    ///
    /// Layout (all integers big-endian): `ciphertext_len: u16`,
    /// `ciphertext`, `iv: [u8; 12]`, `tag: [u8; 16]`,
    /// `recipient_count_minus_one: u8`, then `56 * N` bytes of recipients.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        if self.ciphertext.len() > MAX_CIPHERTEXT_LEN {
            return Err(CodecError::LengthOverflow(format!(
                "ciphertext length {} exceeds {}",
                self.ciphertext.len(),
                MAX_CIPHERTEXT_LEN
            )));
        }
        if self.recipients.is_empty() || self.recipients.len() > MAX_RECIPIENTS {
            return Err(CodecError::LengthOverflow(format!(
                "recipient count {} outside [1, {}]",
                self.recipients.len(),
                MAX_RECIPIENTS
            )));
        }

        let mut out = Vec::with_capacity(
            2 + self.ciphertext.len() + IV_LEN + TAG_LEN + 1 + self.recipients.len() * RECIPIENT_LEN,
        );
        out.extend_from_slice(&(self.ciphertext.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.tag);
        out.push((self.recipients.len() - 1) as u8);
        for recipient in &self.recipients {
            out.extend_from_slice(&recipient.encrypted_key);
            out.extend_from_slice(&recipient.ephemeral_public_key);
        }
        Ok(out)
    }

    /// Unpacks an envelope from its wire format, rejecting both truncated
    /// buffers and any trailing bytes after the last recipient.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut cursor = Cursor::new(bytes);

        let len_bytes = cursor.take(2)?;
        let ciphertext_len = u16::from_be_bytes([len_bytes[0], len_bytes[1]]) as usize;

        let ciphertext = cursor.take(ciphertext_len)?.to_vec();

        let iv: [u8; IV_LEN] = cursor.take(IV_LEN)?.try_into().unwrap();
        let tag: [u8; TAG_LEN] = cursor.take(TAG_LEN)?.try_into().unwrap();

        let count_minus_one = cursor.take(1)?[0];
        let recipient_count = count_minus_one as usize + 1;

        let mut recipients = Vec::with_capacity(recipient_count);
        for _ in 0..recipient_count {
            let record = cursor.take(RECIPIENT_LEN)?;
            let encrypted_key: [u8; ENCRYPTED_KEY_LEN] =
                record[..ENCRYPTED_KEY_LEN].try_into().unwrap();
            let ephemeral_public_key: [u8; EPHEMERAL_PUBLIC_KEY_LEN] =
                record[ENCRYPTED_KEY_LEN..].try_into().unwrap();
            recipients.push(Recipient {
                encrypted_key,
                ephemeral_public_key,
            });
        }

        if !cursor.is_empty() {
            return Err(CodecError::TrailingBytes);
        }

        Ok(Envelope {
            ciphertext,
            iv,
            tag,
            recipients,
        })
    }
}

/// A minimal forward-only cursor over a byte slice, used to keep
/// [`Envelope::decode`]'s pointer walk linear and bounds-checked.
struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        let end = self.offset.checked_add(len).ok_or_else(|| {
            CodecError::Truncated("field length overflowed the cursor offset".into())
        })?;
        if end > self.bytes.len() {
            return Err(CodecError::Truncated(format!(
                "need {} bytes at offset {}, only {} available",
                len,
                self.offset,
                self.bytes.len().saturating_sub(self.offset)
            )));
        }
        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn is_empty(&self) -> bool {
        self.offset == self.bytes.len()
    }
}
