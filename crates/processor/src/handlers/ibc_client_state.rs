use super::batch::process_batch;
use super::{BatchOutput, EntryError, Processor};
use crate::codec::ClientStateValue;
use crate::types::{IbcClientStateRecord, TraceBatch, TraceEntry};

impl Processor {
    /// Decode IBC light client states stored under `clients/{id}/clientState`.
    pub fn ibc_client_state(&self, batch: &TraceBatch) -> BatchOutput<IbcClientStateRecord> {
        process_batch("ibc_client_state", batch, |entry| {
            self.decode_client_state(entry)
        })
    }

    fn decode_client_state(
        &self,
        entry: &TraceEntry,
    ) -> Result<Option<IbcClientStateRecord>, EntryError> {
        let state = self
            .codec()
            .unpack_client_state(&entry.value)
            .map_err(|e| EntryError::Decode(e.to_string()))?;

        let state = match state {
            ClientStateValue::Tendermint(state) => state,
            other => {
                tracing::debug!(client_type = other.type_name(), "non tendermint client state");
                return Err(EntryError::TypeResolution(
                    "detected ibc client state not of tendermint type, ignoring".to_string(),
                ));
            }
        };

        let trusting_period = state
            .check_durations()
            .and_then(|_| state.trusting_period_nanos())
            .map_err(|e| {
                EntryError::Decode(format!("failed to unmarshal TendermintClientState, {}", e))
            })?;

        state.validate().map_err(|e| {
            EntryError::Validation(format!("found non-compliant ibc client state, {}", e))
        })?;

        let key = String::from_utf8_lossy(&entry.key);
        let client_id = key.split('/').nth(1).ok_or_else(|| {
            EntryError::Shape(format!("client state key {} has no client identifier", key))
        })?;

        Ok(Some(IbcClientStateRecord {
            client_id: client_id.to_string(),
            latest_height: state.latest_revision_height(),
            trusting_period,
            chain_id: state.chain_id,
        }))
    }
}
