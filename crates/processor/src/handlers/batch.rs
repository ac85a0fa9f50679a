use crate::types::{ErrorKind, ErrorObject, ProcessingError, TraceBatch, TraceEntry};
use serde::Serialize;
use thiserror::Error;

/// Why a single batch entry produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Key length or key layout does not match the record kind
    #[error("{0}")]
    Shape(String),

    /// Value cannot be parsed as the expected message
    #[error("{0}")]
    Decode(String),

    /// Polymorphic value resolved to an unsupported concrete type
    #[error("{0}")]
    TypeResolution(String),

    /// Decoded value is not well formed
    #[error("{0}")]
    Validation(String),

    /// Address conversion failed
    #[error("{0}")]
    Conversion(String),

    /// Value belongs to another record type sharing the key space
    #[error("{0}")]
    Skipped(String),
}

impl EntryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EntryError::Shape(_) => ErrorKind::Shape,
            EntryError::Decode(_) => ErrorKind::Decode,
            EntryError::TypeResolution(_) => ErrorKind::TypeResolution,
            EntryError::Validation(_) => ErrorKind::Validation,
            EntryError::Conversion(_) => ErrorKind::Conversion,
            EntryError::Skipped(_) => ErrorKind::Skipped,
        }
    }
}

/// Records decoded from one batch plus the errors of the entries that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutput<T> {
    pub records: Vec<T>,
    pub error: Option<ProcessingError>,
}

impl<T> BatchOutput<T> {
    /// True when no entry was reported.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Number of reported entries that are real failures.
    pub fn failure_count(&self) -> usize {
        self.error.as_ref().map_or(0, |e| e.failures().count())
    }
}

#[derive(Debug, Default)]
struct ErrorCollector {
    errors: Vec<ErrorObject>,
}

impl ErrorCollector {
    fn push(&mut self, payload_index: usize, error: EntryError) {
        self.errors.push(ErrorObject {
            value: error.to_string(),
            payload_index,
            kind: error.kind(),
        });
    }

    fn finish(self) -> Option<ProcessingError> {
        if self.errors.is_empty() {
            return None;
        }
        Some(ProcessingError::new(self.errors))
    }
}

/// Run `decode_entry` over every entry of `batch`.
///
/// `Ok(Some)` emits a record, `Ok(None)` filters the entry silently and
/// `Err` records one error item at the entry's index.
pub(crate) fn process_batch<T, F>(
    kind: &'static str,
    batch: &TraceBatch,
    mut decode_entry: F,
) -> BatchOutput<T>
where
    F: FnMut(&TraceEntry) -> Result<Option<T>, EntryError>,
{
    let mut records = Vec::with_capacity(batch.len());
    let mut errors = ErrorCollector::default();

    for (index, entry) in batch.payload.iter().enumerate() {
        let span = tracing::debug_span!("trace_entry", kind, index);
        let _enter = span.enter();

        match decode_entry(entry) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => tracing::debug!("entry filtered"),
            Err(error) => {
                tracing::debug!(error = %error, error_kind = ?error.kind(), "entry not processed");
                errors.push(index, error);
            }
        }
    }

    let error = errors.finish();
    tracing::debug!(
        kind,
        entries = batch.len(),
        records = records.len(),
        errors = error.as_ref().map_or(0, |e| e.errors.len()),
        "batch processed"
    );

    BatchOutput { records, error }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_of(n: usize) -> TraceBatch {
        (0..n).map(|i| TraceEntry::write(vec![i as u8], vec![])).collect()
    }

    #[test]
    fn test_failures_do_not_stop_the_batch() {
        let batch = batch_of(8);
        let output = process_batch("test", &batch, |entry| match entry.key[0] {
            2 | 5 => Err(EntryError::Decode(format!("bad entry {}", entry.key[0]))),
            k => Ok(Some(k)),
        });

        assert_eq!(output.records, vec![0, 1, 3, 4, 6, 7]);
        let error = output.error.unwrap();
        assert_eq!(error.indices(), vec![2, 5]);
        assert_eq!(error.errors[0].value, "bad entry 2");
        assert_eq!(error.errors[1].kind, ErrorKind::Decode);
    }

    #[test]
    fn test_filtered_entries_report_nothing() {
        let batch = batch_of(4);
        let output = process_batch("test", &batch, |entry| {
            Ok::<_, EntryError>((entry.key[0] % 2 == 0).then_some(entry.key[0]))
        });

        assert_eq!(output.records, vec![0, 2]);
        assert!(output.is_complete());
    }

    #[test]
    fn test_skipped_entries_are_not_failures() {
        let batch = batch_of(3);
        let output = process_batch("test", &batch, |entry| match entry.key[0] {
            0 => Err(EntryError::Skipped("foreign value".to_string())),
            1 => Err(EntryError::Shape("short key".to_string())),
            k => Ok(Some(k)),
        });

        assert!(!output.is_complete());
        assert_eq!(output.failure_count(), 1);
        assert_eq!(output.error.unwrap().indices(), vec![0, 1]);
    }

    #[test]
    fn test_empty_batch() {
        let output: BatchOutput<u8> =
            process_batch("test", &TraceBatch::default(), |_| unreachable!());
        assert!(output.records.is_empty());
        assert!(output.error.is_none());
    }
}
