use super::batch::process_batch;
use super::{BatchOutput, EntryError, Processor};
use crate::proto::ibc::channel::{Channel, Order};
use crate::types::{IbcChannelRecord, TraceBatch, TraceEntry};
use crate::utils::ibc_host::parse_channel_path;

impl Processor {
    /// Decode IBC channel ends. Only unordered channels produce records.
    pub fn ibc_channel(&self, batch: &TraceBatch) -> BatchOutput<IbcChannelRecord> {
        process_batch("ibc_channel", batch, |entry| self.decode_channel(entry))
    }

    fn decode_channel(&self, entry: &TraceEntry) -> Result<Option<IbcChannelRecord>, EntryError> {
        let channel: Channel = self
            .codec()
            .decode(&entry.value)
            .map_err(|e| EntryError::Decode(e.to_string()))?;

        channel
            .validate_basic()
            .map_err(|e| EntryError::Validation(format!("found non-compliant channel: {}", e)))?;

        if channel.parsed_ordering() != Some(Order::Unordered) {
            tracing::debug!(ordering = channel.ordering, "ignoring non-unordered channel");
            return Ok(None);
        }

        let path = String::from_utf8_lossy(&entry.key);
        let (port_id, channel_id) =
            parse_channel_path(&path).map_err(|e| EntryError::Shape(e.to_string()))?;

        tracing::debug!(%port_id, %channel_id, "channel decoded");

        Ok(Some(IbcChannelRecord {
            counterparty_channel_id: channel.counterparty_channel_id().to_string(),
            channel_id,
            hops: channel.connection_hops,
            port_id,
            state: channel.state,
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::proto::ibc::channel::Order;
    use crate::proto::ibc::channel::tests::open_channel;
    use crate::test_fixtures::processor;
    use crate::types::{ErrorKind, TraceBatch, TraceEntry};
    use prost::Message;

    const CHANNEL_KEY: &[u8] = b"channelEnds/ports/transfer/channels/channel-0";

    #[test]
    fn test_unordered_channel() {
        let entry = TraceEntry::write(CHANNEL_KEY, open_channel(Order::Unordered).encode_to_vec());
        let output = processor().ibc_channel(&TraceBatch::new(vec![entry]));

        assert!(output.is_complete());
        let record = &output.records[0];
        assert_eq!(record.port_id, "transfer");
        assert_eq!(record.channel_id, "channel-0");
        assert_eq!(record.counterparty_channel_id, "channel-141");
        assert_eq!(record.hops, vec!["connection-257".to_string()]);
        assert_eq!(record.state, 3);
    }

    #[test]
    fn test_ordered_channel_is_filtered() {
        let entry = TraceEntry::write(CHANNEL_KEY, open_channel(Order::Ordered).encode_to_vec());
        let output = processor().ibc_channel(&TraceBatch::new(vec![entry]));
        assert!(output.records.is_empty());
        assert!(output.error.is_none());
    }

    #[test]
    fn test_malformed_channel_path() {
        let entry = TraceEntry::write(
            b"channelEnds/ports/transfer".to_vec(),
            open_channel(Order::Unordered).encode_to_vec(),
        );
        let output = processor().ibc_channel(&TraceBatch::new(vec![entry]));
        assert_eq!(output.error.unwrap().errors[0].kind, ErrorKind::Shape);
    }

    #[test]
    fn test_non_compliant_channel() {
        let mut channel = open_channel(Order::Unordered);
        channel.connection_hops.clear();
        let entry = TraceEntry::write(CHANNEL_KEY, channel.encode_to_vec());

        let output = processor().ibc_channel(&TraceBatch::new(vec![entry]));
        let error = output.error.unwrap();
        assert_eq!(error.errors[0].kind, ErrorKind::Validation);
        assert!(error.errors[0].value.starts_with("found non-compliant channel: "));
    }
}
