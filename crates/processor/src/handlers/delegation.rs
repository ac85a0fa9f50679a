use super::batch::process_batch;
use super::{BatchOutput, EntryError, Processor};
use crate::codec::AddressCodec;
use crate::consts::{ADDRESS_LENGTH, DELEGATION_KEY_MIN_LENGTH};
use crate::proto::staking::Delegation;
use crate::types::{DelegationKind, DelegationRecord, Operation, TraceBatch, TraceEntry};

impl Processor {
    /// Decode staking delegation entries.
    ///
    /// Deletions carry no value, so the delegator and validator are read from
    /// the `prefix | delegator | validator` key instead.
    pub fn delegation(&self, batch: &TraceBatch) -> BatchOutput<DelegationRecord> {
        process_batch("delegation", batch, |entry| self.decode_delegation(entry))
    }

    fn decode_delegation(
        &self,
        entry: &TraceEntry,
    ) -> Result<Option<DelegationRecord>, EntryError> {
        if entry.operation == Operation::Delete {
            return delegation_from_key(&entry.key).map(Some);
        }

        let delegation: Delegation = self.codec().decode(&entry.value).map_err(|e| {
            EntryError::Decode(format!(
                "found delegation object, but cannot unmarshal, {}",
                e
            ))
        })?;
        let shares = delegation.parsed_shares().map_err(|e| {
            EntryError::Decode(format!(
                "found delegation object, but cannot unmarshal, {}",
                e
            ))
        })?;

        let delegator = AddressCodec::to_hex(&delegation.delegator_address).map_err(|e| {
            EntryError::Conversion(format!(
                "cannot convert delegator address from bech32 to hex, {}",
                e
            ))
        })?;
        let validator = AddressCodec::to_hex(&delegation.validator_address).map_err(|e| {
            EntryError::Conversion(format!(
                "cannot convert validator address from bech32 to hex, {}",
                e
            ))
        })?;

        tracing::debug!(%delegator, %validator, "delegation decoded");

        Ok(Some(DelegationRecord {
            delegator,
            validator,
            amount: shares.to_string(),
            kind: DelegationKind::Create,
        }))
    }
}

fn delegation_from_key(key: &[u8]) -> Result<DelegationRecord, EntryError> {
    if key.len() < DELEGATION_KEY_MIN_LENGTH {
        return Err(EntryError::Shape(
            "detected invalid delegation row, ignoring".to_string(),
        ));
    }

    let delegator = &key[1..1 + ADDRESS_LENGTH];
    let validator = &key[1 + ADDRESS_LENGTH..DELEGATION_KEY_MIN_LENGTH];

    Ok(DelegationRecord {
        delegator: hex::encode(delegator),
        validator: hex::encode(validator),
        amount: String::new(),
        kind: DelegationKind::Delete,
    })
}

#[cfg(test)]
mod tests {
    use crate::proto::staking::Delegation;
    use crate::test_fixtures::*;
    use crate::types::{DelegationKind, ErrorKind, TraceBatch, TraceEntry};
    use prost::Message;

    fn delegation(delegator: &str, validator: &str, shares: &str) -> Vec<u8> {
        Delegation {
            delegator_address: delegator.to_string(),
            validator_address: validator.to_string(),
            shares: shares.to_string(),
        }
        .encode_to_vec()
    }

    #[test]
    fn test_create_delegation() {
        let entry = TraceEntry::write(
            delegation_key(&[0x01; 20], &[0x02; 20]),
            delegation(
                &cosmos_address(&[0x01; 20]),
                &bech32_address("cosmosvaloper", &[0x02; 20]),
                "2500000000000000000",
            ),
        );

        let output = processor().delegation(&TraceBatch::new(vec![entry]));
        assert!(output.is_complete());
        let record = &output.records[0];
        assert_eq!(record.delegator, "01".repeat(20));
        assert_eq!(record.validator, "02".repeat(20));
        assert_eq!(record.amount, "2.500000000000000000");
        assert_eq!(record.kind, DelegationKind::Create);
    }

    #[test]
    fn test_delete_delegation_key_boundary() {
        let mut short = delegation_key(&[0x01; 20], &[0x02; 20]);
        short.pop();
        let batch = TraceBatch::new(vec![
            TraceEntry::delete(short),
            TraceEntry::delete(delegation_key(&[0x01; 20], &[0x02; 20])),
        ]);

        let output = processor().delegation(&batch);
        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].delegator, "01".repeat(20));
        assert_eq!(output.records[0].validator, "02".repeat(20));
        assert_eq!(output.records[0].amount, "");
        assert_eq!(output.records[0].kind, DelegationKind::Delete);

        let error = output.error.unwrap();
        assert_eq!(error.indices(), vec![0]);
        assert_eq!(error.errors[0].value, "detected invalid delegation row, ignoring");
        assert_eq!(error.errors[0].kind, ErrorKind::Shape);
    }

    #[test]
    fn test_delete_ignores_value() {
        let mut entry = TraceEntry::delete(delegation_key(&[0x01; 20], &[0x02; 20]));
        entry.value = vec![0xff, 0xff];
        let output = processor().delegation(&TraceBatch::new(vec![entry]));
        assert!(output.is_complete());
    }

    #[test]
    fn test_address_conversion_errors() {
        let validator = bech32_address("cosmosvaloper", &[0x02; 20]);
        let batch = TraceBatch::new(vec![
            TraceEntry::write(vec![0x31], delegation("bogus", &validator, "1")),
            TraceEntry::write(
                vec![0x31],
                delegation(&cosmos_address(&[0x01; 20]), "bogus", "1"),
            ),
        ]);

        let output = processor().delegation(&batch);
        let error = output.error.unwrap();
        assert!(error.errors.iter().all(|e| e.kind == ErrorKind::Conversion));
        assert!(error.errors[0].value.starts_with("cannot convert delegator address"));
        assert!(error.errors[1].value.starts_with("cannot convert validator address"));
    }

    #[test]
    fn test_malformed_shares() {
        let validator = bech32_address("cosmosvaloper", &[0x02; 20]);
        let entry = TraceEntry::write(
            vec![0x31],
            delegation(&cosmos_address(&[0x01; 20]), &validator, "1.5"),
        );

        let output = processor().delegation(&TraceBatch::new(vec![entry]));
        let error = output.error.unwrap();
        assert_eq!(error.errors[0].kind, ErrorKind::Decode);
        assert!(error.errors[0].value.starts_with("found delegation object, but cannot unmarshal"));
    }
}
