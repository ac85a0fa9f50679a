use super::batch::process_batch;
use super::{BatchOutput, EntryError, Processor};
use crate::proto::ibc::transfer::DenomTrace;
use crate::types::{IbcDenomTraceRecord, TraceBatch, TraceEntry};

impl Processor {
    /// Decode ICS-20 denom traces along with their `ibc/{hash}` hashes.
    pub fn ibc_denom_trace(&self, batch: &TraceBatch) -> BatchOutput<IbcDenomTraceRecord> {
        process_batch("ibc_denom_trace", batch, |entry| self.decode_denom_trace(entry))
    }

    fn decode_denom_trace(
        &self,
        entry: &TraceEntry,
    ) -> Result<Option<IbcDenomTraceRecord>, EntryError> {
        let trace: DenomTrace = self
            .codec()
            .decode(&entry.value)
            .map_err(|e| EntryError::Decode(e.to_string()))?;

        if trace.base_denom.is_empty() {
            tracing::debug!(path = %trace.path, "denom trace without base denom");
            return Ok(None);
        }

        trace.validate().map_err(|e| {
            EntryError::Validation(format!(
                "found a denom trace that isn't ICS20 compliant, {}",
                e
            ))
        })?;

        let hash = hex::encode(trace.hash());
        tracing::debug!(path = %trace.path, base_denom = %trace.base_denom, %hash, "denom trace decoded");

        Ok(Some(IbcDenomTraceRecord {
            path: trace.path,
            base_denom: trace.base_denom,
            hash,
        }))
    }
}
