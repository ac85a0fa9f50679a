//! `ibc.applications.transfer.v1.DenomTrace` (ICS-20).

use crate::proto::ValidationError;
use crate::utils::ibc_host::{validate_channel_identifier, validate_port_identifier};
use sha2::{Digest, Sha256};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DenomTrace {
    /// `{port}/{channel}` pairs the token travelled through
    #[prost(string, tag = "1")]
    pub path: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub base_denom: ::prost::alloc::string::String,
}

impl DenomTrace {
    pub fn full_denom_path(&self) -> String {
        if self.path.is_empty() {
            return self.base_denom.clone();
        }
        format!("{}/{}", self.path, self.base_denom)
    }

    /// SHA-256 of the full denom path, the hash used in `ibc/{hash}` denoms.
    pub fn hash(&self) -> [u8; 32] {
        Sha256::digest(self.full_denom_path().as_bytes()).into()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // native token, no trace
        if self.path.is_empty() && !self.base_denom.is_empty() {
            return Ok(());
        }
        if self.base_denom.trim().is_empty() {
            return Err(ValidationError::invalid("base denomination cannot be blank"));
        }

        let identifiers: Vec<&str> = self.path.split('/').collect();
        validate_trace_identifiers(&identifiers)
    }
}

fn validate_trace_identifiers(identifiers: &[&str]) -> Result<(), ValidationError> {
    if identifiers.is_empty() || identifiers.len() % 2 != 0 {
        return Err(ValidationError::invalid(format!(
            "trace info must come in pairs of port and channel identifiers '{{portID}}/{{channelID}}', got the identifiers: {:?}",
            identifiers
        )));
    }

    for (i, pair) in identifiers.chunks_exact(2).enumerate() {
        validate_port_identifier(pair[0]).map_err(|e| {
            ValidationError::identifier(format!("invalid port ID at position {}", i * 2), e)
        })?;
        validate_channel_identifier(pair[1]).map_err(|e| {
            ValidationError::identifier(format!("invalid channel ID at position {}", i * 2), e)
        })?;
    }

    Ok(())
}
