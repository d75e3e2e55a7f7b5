use crate::error::RlpError;
use crate::item::RlpItem;

/// Encodes an [`RlpItem`] tree into canonical RLP bytes (§4.B).
pub fn encode(item: &RlpItem) -> Vec<u8> {
    match item {
        RlpItem::Bytes(data) => encode_bytes(data),
        RlpItem::List(items) => {
            let payload: Vec<u8> = items.iter().flat_map(encode).collect();
            let mut out = encode_length_prefix(payload.len(), 0xc0, 0xf7);
            out.extend_from_slice(&payload);
            out
        }
    }
}

fn encode_bytes(data: &[u8]) -> Vec<u8> {
    if data.len() == 1 && data[0] < 0x80 {
        return vec![data[0]];
    }
    let mut out = encode_length_prefix(data.len(), 0x80, 0xb7);
    out.extend_from_slice(data);
    out
}

/// Encodes a length prefix: `short_offset + L` for `L < 56`, or
/// `long_offset + lsize` followed by `L` as `lsize` big-endian bytes.
fn encode_length_prefix(len: usize, short_offset: u8, long_offset: u8) -> Vec<u8> {
    if len < 56 {
        vec![short_offset + len as u8]
    } else {
        let len_bytes = minimal_be_bytes(len as u128);
        let mut out = Vec::with_capacity(1 + len_bytes.len());
        out.push(long_offset + len_bytes.len() as u8);
        out.extend_from_slice(&len_bytes);
        out
    }
}

fn minimal_be_bytes(mut value: u128) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let mut bytes = Vec::new();
    while value > 0 {
        bytes.push((value & 0xff) as u8);
        value >>= 8;
    }
    bytes.reverse();
    bytes
}

/// Decodes a full buffer as a single top-level RLP item, rejecting any
/// trailing bytes (§4.B).
pub fn decode(input: &[u8]) -> Result<RlpItem, RlpError> {
    if input.is_empty() {
        return Err(RlpError::EmptyInput);
    }
    let (item, consumed) = decode_item(input)?;
    if consumed != input.len() {
        return Err(RlpError::TrailingBytes);
    }
    Ok(item)
}

/// Decodes one RLP item from the front of `input`, returning the item and
/// the number of bytes it consumed.
fn decode_item(input: &[u8]) -> Result<(RlpItem, usize), RlpError> {
    if input.is_empty() {
        return Err(RlpError::EmptyInput);
    }

    let tag = input[0];
    match tag {
        0x00..=0x7f => Ok((RlpItem::Bytes(vec![tag]), 1)),
        0x80..=0xb7 => {
            let len = (tag - 0x80) as usize;
            let payload = take(input, 1, len)?;
            Ok((RlpItem::Bytes(payload.to_vec()), 1 + len))
        }
        0xb8..=0xbf => {
            let lsize = (tag - 0xb7) as usize;
            let len_bytes = take(input, 1, lsize)?;
            let len = be_bytes_to_usize(len_bytes)?;
            let payload = take(input, 1 + lsize, len)?;
            Ok((RlpItem::Bytes(payload.to_vec()), 1 + lsize + len))
        }
        0xc0..=0xf7 => {
            let len = (tag - 0xc0) as usize;
            let payload = take(input, 1, len)?;
            let items = decode_list_payload(payload)?;
            Ok((RlpItem::List(items), 1 + len))
        }
        0xf8..=0xff => {
            let lsize = (tag - 0xf7) as usize;
            let len_bytes = take(input, 1, lsize)?;
            let len = be_bytes_to_usize(len_bytes)?;
            let payload = take(input, 1 + lsize, len)?;
            let items = decode_list_payload(payload)?;
            Ok((RlpItem::List(items), 1 + lsize + len))
        }
    }
}

fn decode_list_payload(mut payload: &[u8]) -> Result<Vec<RlpItem>, RlpError> {
    let mut items = Vec::new();
    while !payload.is_empty() {
        let (item, consumed) = decode_item(payload)?;
        items.push(item);
        payload = &payload[consumed..];
    }
    Ok(items)
}

/// Slices `len` bytes starting at `offset`, erroring if the slice would
/// overrun the buffer (a malicious/corrupt declared length).
fn take(input: &[u8], offset: usize, len: usize) -> Result<&[u8], RlpError> {
    let end = offset
        .checked_add(len)
        .ok_or_else(|| RlpError::BadLengthPrefix("length overflow".into()))?;
    if end > input.len() {
        return Err(RlpError::BadLengthPrefix(format!(
            "declared length {len} overruns input (have {} bytes available)",
            input.len().saturating_sub(offset)
        )));
    }
    Ok(&input[offset..end])
}

fn be_bytes_to_usize(bytes: &[u8]) -> Result<usize, RlpError> {
    if bytes.len() > std::mem::size_of::<usize>() {
        return Err(RlpError::BadLengthPrefix("length too large".into()));
    }
    let mut value: usize = 0;
    for &b in bytes {
        value = (value << 8) | b as usize;
    }
    Ok(value)
}
