use super::batch::process_batch;
use super::{BatchOutput, EntryError, Processor};
use crate::consts::KEY_CONNECTION_PREFIX;
use crate::proto::ibc::connection::ConnectionEnd;
use crate::types::{IbcConnectionRecord, TraceBatch, TraceEntry};

impl Processor {
    /// Decode IBC connection ends stored under `connections/{id}`. Other keys
    /// sharing the store are ignored.
    pub fn ibc_connection(&self, batch: &TraceBatch) -> BatchOutput<IbcConnectionRecord> {
        process_batch("ibc_connection", batch, |entry| self.decode_connection(entry))
    }

    fn decode_connection(
        &self,
        entry: &TraceEntry,
    ) -> Result<Option<IbcConnectionRecord>, EntryError> {
        let key = String::from_utf8_lossy(&entry.key);
        let fields: Vec<&str> = key.split('/').filter(|f| !f.is_empty()).collect();

        let [prefix, connection_id] = fields.as_slice() else {
            return Ok(None);
        };
        if *prefix != KEY_CONNECTION_PREFIX {
            return Ok(None);
        }

        let connection: ConnectionEnd = self
            .codec()
            .decode(&entry.value)
            .map_err(|e| EntryError::Decode(e.to_string()))?;

        connection.validate_basic().map_err(|e| {
            EntryError::Validation(format!("found non-compliant connection end, {}", e))
        })?;

        let counterparty = connection.counterparty_or_default();

        Ok(Some(IbcConnectionRecord {
            connection_id: connection_id.to_string(),
            state: connection.state_name(),
            client_id: connection.client_id,
            counterparty_connection_id: counterparty.connection_id,
            counterparty_client_id: counterparty.client_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::proto::ibc::connection::tests::open_connection;
    use crate::test_fixtures::processor;
    use crate::types::{ErrorKind, TraceBatch, TraceEntry};
    use prost::Message;

    #[test]
    fn test_connection_end() {
        let entry = TraceEntry::write(
            b"connections/connection-0".to_vec(),
            open_connection().encode_to_vec(),
        );
        let output = processor().ibc_connection(&TraceBatch::new(vec![entry]));

        assert!(output.is_complete());
        let record = &output.records[0];
        assert_eq!(record.connection_id, "connection-0");
        assert_eq!(record.client_id, "07-tendermint-0");
        assert_eq!(record.state, "STATE_OPEN");
        assert_eq!(record.counterparty_connection_id, "connection-185");
        assert_eq!(record.counterparty_client_id, "07-tendermint-259");
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let value = open_connection().encode_to_vec();
        let batch = TraceBatch::new(vec![
            TraceEntry::write(b"clients/07-tendermint-0/connections".to_vec(), value.clone()),
            TraceEntry::write(b"connections".to_vec(), value.clone()),
            TraceEntry::write(b"connections/connection-0/extra".to_vec(), value.clone()),
            TraceEntry::write(b"nextConnectionSequence".to_vec(), vec![0xff]),
        ]);

        let output = processor().ibc_connection(&batch);
        assert!(output.records.is_empty());
        assert!(output.error.is_none());
    }

    #[test]
    fn test_empty_fields_are_discarded() {
        let entry = TraceEntry::write(
            b"/connections//connection-7/".to_vec(),
            open_connection().encode_to_vec(),
        );
        let output = processor().ibc_connection(&TraceBatch::new(vec![entry]));
        assert_eq!(output.records[0].connection_id, "connection-7");
    }

    #[test]
    fn test_non_compliant_connection() {
        let mut connection = open_connection();
        connection.client_id = "bad".to_string();
        let entry = TraceEntry::write(b"connections/connection-0".to_vec(), connection.encode_to_vec());

        let output = processor().ibc_connection(&TraceBatch::new(vec![entry]));
        let error = output.error.unwrap();
        assert_eq!(error.errors[0].kind, ErrorKind::Validation);
        assert!(error.errors[0].value.starts_with("found non-compliant connection end, "));
    }
}
