use super::batch::process_batch;
use super::{BatchOutput, EntryError, Processor};
use crate::codec::{AccountValue, AddressCodec, CodecError};
use crate::consts::AUTH_KEY_LENGTH;
use crate::types::{AccountRecord, TraceBatch, TraceEntry};

impl Processor {
    /// Decode auth store entries into account records.
    ///
    /// Module accounts and values of foreign types that share the auth key
    /// prefix (slashing uses the same one) are reported as skipped.
    pub fn auth(&self, batch: &TraceBatch) -> BatchOutput<AccountRecord> {
        process_batch("auth", batch, |entry| self.decode_account(entry))
    }

    fn decode_account(&self, entry: &TraceEntry) -> Result<Option<AccountRecord>, EntryError> {
        tracing::debug!(key = %hex::encode(&entry.key), "auth processor entered");

        if entry.key.len() != AUTH_KEY_LENGTH {
            return Err(EntryError::Shape(
                "cannot process key, not of auth type".to_string(),
            ));
        }

        let account = match self.codec().unpack_account(&entry.value) {
            Ok(account) => account,
            Err(CodecError::UnregisteredType { type_url, .. }) => {
                tracing::debug!(type_url = %type_url, "value is not an account");
                return Err(EntryError::Skipped("value is not an account".to_string()));
            }
            Err(e) => return Err(EntryError::Decode(e.to_string())),
        };

        let base = match account {
            AccountValue::Base(base) => base,
            AccountValue::Module(module) => {
                tracing::debug!(name = %module.name, "detected module account, ignoring");
                return Err(EntryError::Skipped(
                    "detected module account, ignoring".to_string(),
                ));
            }
            other => {
                return Err(EntryError::TypeResolution(format!(
                    "cannot cast account to BaseAccount, account object type {}",
                    other.type_name()
                )));
            }
        };

        if let Err(e) = base.validate(self.addresses()) {
            tracing::debug!(address = %base.address, error = %e, "found invalid base account");
            return Err(EntryError::Validation(format!(
                "non compliant auth account, {}",
                e
            )));
        }

        let address = AddressCodec::to_hex(&base.address).map_err(|e| {
            EntryError::Conversion(format!("cannot parse {} as bech32, {}", base.address, e))
        })?;

        Ok(Some(AccountRecord {
            address,
            account_number: base.account_number,
            sequence_number: base.sequence,
        }))
    }
}
