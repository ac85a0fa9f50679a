use crate::consts::PROCESSING_ERROR_NAME;
use serde::Serialize;
use std::fmt;

/// Category of a per-entry failure.
///
/// `Skipped` marks entries that belong to a foreign record type sharing the
/// same key space. They are reported so callers can see them, but they are
/// not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Shape,
    Decode,
    TypeResolution,
    Validation,
    Conversion,
    Skipped,
}

impl ErrorKind {
    pub fn is_failure(&self) -> bool {
        !matches!(self, ErrorKind::Skipped)
    }
}

/// One failed batch entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorObject {
    pub value: String,
    pub payload_index: usize,
    #[serde(skip)]
    pub kind: ErrorKind,
}

/// Aggregated per-entry errors of a single batch call, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingError {
    pub name: String,
    pub errors: Vec<ErrorObject>,
}

impl ProcessingError {
    pub(crate) fn new(errors: Vec<ErrorObject>) -> Self {
        Self {
            name: PROCESSING_ERROR_NAME.to_string(),
            errors,
        }
    }

    /// Payload indices of every reported entry.
    pub fn indices(&self) -> Vec<usize> {
        self.errors.iter().map(|e| e.payload_index).collect()
    }

    /// Reported entries excluding benign skips.
    pub fn failures(&self) -> impl Iterator<Item = &ErrorObject> {
        self.errors.iter().filter(|e| e.kind.is_failure())
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} entries not processed", self.name, self.errors.len())?;
        for e in &self.errors {
            write!(f, "; [{}] {}", e.payload_index, e.value)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProcessingError {}
