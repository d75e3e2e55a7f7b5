use crate::error::RlpError;

/// A decoded (or to-be-encoded) RLP tree node.
///
/// Leaves are byte strings; interior nodes are ordered lists of items. This
/// mirrors the shape every Ethereum RLP payload has before it is
/// interpreted as a specific typed structure (§4.B).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpItem {
    Bytes(Vec<u8>),
    List(Vec<RlpItem>),
}

impl RlpItem {
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        RlpItem::Bytes(data.into())
    }

    pub fn list(items: impl Into<Vec<RlpItem>>) -> Self {
        RlpItem::List(items.into())
    }

    /// Returns the inner byte string, or `FieldTypeMismatch` if this is a list.
    pub fn as_bytes(&self) -> Result<&[u8], RlpError> {
        match self {
            RlpItem::Bytes(b) => Ok(b),
            RlpItem::List(_) => Err(RlpError::FieldTypeMismatch(
                "expected byte string, found list".into(),
            )),
        }
    }

    /// Returns the inner item list, or `FieldTypeMismatch` if this is a byte string.
    pub fn as_list(&self) -> Result<&[RlpItem], RlpError> {
        match self {
            RlpItem::List(items) => Ok(items),
            RlpItem::Bytes(_) => Err(RlpError::FieldTypeMismatch(
                "expected list, found byte string".into(),
            )),
        }
    }
}
