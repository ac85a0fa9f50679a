use serde::{Deserialize, Serialize};

/// Store operation that produced a trace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Write,
    Delete,
}

/// One raw key/value change captured from the node's store.
///
/// Keys and values travel as hex strings when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    #[serde(rename = "operation_type")]
    pub operation: Operation,
    #[serde(with = "hex::serde")]
    pub key: Vec<u8>,
    #[serde(with = "hex::serde", default)]
    pub value: Vec<u8>,
}

impl TraceEntry {
    pub fn write(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            operation: Operation::Write,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn delete(key: impl Into<Vec<u8>>) -> Self {
        Self {
            operation: Operation::Delete,
            key: key.into(),
            value: Vec::new(),
        }
    }
}

/// Ordered entries of a single record kind. An entry's index in `payload`
/// is the index reported in processing errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceBatch {
    pub payload: Vec<TraceEntry>,
}

impl TraceBatch {
    pub fn new(payload: Vec<TraceEntry>) -> Self {
        Self { payload }
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl FromIterator<TraceEntry> for TraceBatch {
    fn from_iter<I: IntoIterator<Item = TraceEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
