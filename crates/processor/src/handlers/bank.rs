use super::batch::process_batch;
use super::{BatchOutput, EntryError, Processor};
use crate::consts::{ADDRESS_LENGTH, BALANCES_PREFIX};
use crate::proto::bank::{Coin, validate_coin};
use crate::types::{BalanceRecord, TraceBatch, TraceEntry};

impl Processor {
    /// Decode bank balance entries (`0x02 | address | denom` keys).
    pub fn bank(&self, batch: &TraceBatch) -> BatchOutput<BalanceRecord> {
        process_batch("bank", batch, |entry| self.decode_balance(entry))
    }

    fn decode_balance(&self, entry: &TraceEntry) -> Result<Option<BalanceRecord>, EntryError> {
        let prefix_len = BALANCES_PREFIX.len();

        if entry.key.len() < prefix_len + ADDRESS_LENGTH {
            return Err(EntryError::Shape(
                "found bank entry which doesn't respect balance prefix bounds check, ignoring"
                    .to_string(),
            ));
        }

        let address = &entry.key[prefix_len..prefix_len + ADDRESS_LENGTH];

        let coin: Coin = self
            .codec()
            .decode(&entry.value)
            .map_err(|e| EntryError::Decode(e.to_string()))?;
        let amount = coin
            .parsed_amount()
            .map_err(|e| EntryError::Decode(format!("failed to unmarshal coin amount, {}", e)))?;

        if let Err(e) = validate_coin(&coin.denom, &amount) {
            tracing::debug!(denom = %coin.denom, amount = %amount, error = %e, "detected invalid coin");
            return Err(EntryError::Validation(
                "detected invalid coin, ignoring".to_string(),
            ));
        }

        Ok(Some(BalanceRecord {
            address: hex::encode(address),
            denom: coin.denom,
            amount: amount.to_string(),
        }))
    }
}
