//! Light client states stored under `clients/{client_id}/clientState`.

use crate::proto::ValidationError;
use prost_types::Duration;
use thiserror::Error;

/// Maximum chain ID length accepted by Tendermint.
const MAX_CHAIN_ID_LEN: usize = 50;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("duration {seconds}s {nanos}ns is out of range")]
pub struct DurationOutOfRange {
    pub seconds: i64,
    pub nanos: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct Height {
    #[prost(uint64, tag = "1")]
    pub revision_number: u64,
    #[prost(uint64, tag = "2")]
    pub revision_height: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct Fraction {
    #[prost(uint64, tag = "1")]
    pub numerator: u64,
    #[prost(uint64, tag = "2")]
    pub denominator: u64,
}

/// ICS-23 proof spec. Its contents are not inspected, only its presence.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProofSpec {}

/// `ibc.lightclients.tendermint.v1.ClientState`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TendermintClientState {
    #[prost(string, tag = "1")]
    pub chain_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub trust_level: ::core::option::Option<Fraction>,
    #[prost(message, optional, tag = "3")]
    pub trusting_period: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "4")]
    pub unbonding_period: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "5")]
    pub max_clock_drift: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "6")]
    pub frozen_height: ::core::option::Option<Height>,
    #[prost(message, optional, tag = "7")]
    pub latest_height: ::core::option::Option<Height>,
    #[prost(message, repeated, tag = "8")]
    pub proof_specs: ::prost::alloc::vec::Vec<ProofSpec>,
    #[prost(string, repeated, tag = "9")]
    pub upgrade_path: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(bool, tag = "10")]
    pub allow_update_after_expiry: bool,
    #[prost(bool, tag = "11")]
    pub allow_update_after_misbehaviour: bool,
}

/// `ibc.lightclients.solomachine.v1.ClientState`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SoloMachineClientState {
    #[prost(uint64, tag = "1")]
    pub sequence: u64,
    #[prost(uint64, tag = "2")]
    pub frozen_sequence: u64,
}

/// `ibc.lightclients.localhost.v1.ClientState`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LocalhostClientState {
    #[prost(string, tag = "1")]
    pub chain_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub height: ::core::option::Option<Height>,
}

/// Duration in nanoseconds. Absent durations are zero.
///
/// Fails when `nanos` is not a valid fraction of a second with the sign of
/// `seconds`, or when the total does not fit an `i64`.
pub fn duration_nanos(duration: Option<&Duration>) -> Result<i64, DurationOutOfRange> {
    let Some(d) = duration else {
        return Ok(0);
    };
    let out_of_range = DurationOutOfRange {
        seconds: d.seconds,
        nanos: d.nanos,
    };

    let nanos = i64::from(d.nanos);
    let mixed_sign = d.seconds != 0 && nanos != 0 && (d.seconds < 0) != (nanos < 0);
    if nanos.abs() >= NANOS_PER_SECOND || mixed_sign {
        return Err(out_of_range);
    }

    d.seconds
        .checked_mul(NANOS_PER_SECOND)
        .and_then(|n| n.checked_add(nanos))
        .ok_or(out_of_range)
}

impl TendermintClientState {
    pub fn latest_revision_height(&self) -> u64 {
        self.latest_height.map_or(0, |h| h.revision_height)
    }

    pub fn trusting_period_nanos(&self) -> Result<i64, DurationOutOfRange> {
        duration_nanos(self.trusting_period.as_ref())
    }

    /// Every period converts to nanoseconds without overflow.
    pub fn check_durations(&self) -> Result<(), DurationOutOfRange> {
        for period in [
            &self.trusting_period,
            &self.unbonding_period,
            &self.max_clock_drift,
        ] {
            duration_nanos(period.as_ref())?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chain_id.trim().is_empty() {
            return Err(ValidationError::invalid("chain id cannot be empty string"));
        }
        if self.chain_id.len() > MAX_CHAIN_ID_LEN {
            return Err(ValidationError::invalid(format!(
                "chainID is too long; got: {}, max: {}",
                self.chain_id.len(),
                MAX_CHAIN_ID_LEN
            )));
        }

        let trust_level = self.trust_level.unwrap_or_default();
        validate_trust_level(&trust_level)?;

        let nanos = |d: &Option<Duration>| {
            duration_nanos(d.as_ref()).map_err(|e| ValidationError::invalid(e.to_string()))
        };
        let trusting = nanos(&self.trusting_period)?;
        let unbonding = nanos(&self.unbonding_period)?;
        if trusting == 0 {
            return Err(ValidationError::invalid("trusting period cannot be zero"));
        }
        if unbonding == 0 {
            return Err(ValidationError::invalid("unbonding period cannot be zero"));
        }
        if nanos(&self.max_clock_drift)? == 0 {
            return Err(ValidationError::invalid("max clock drift cannot be zero"));
        }
        if self.latest_revision_height() == 0 {
            return Err(ValidationError::invalid(
                "tendermint revision height cannot be zero",
            ));
        }
        if trusting >= unbonding {
            return Err(ValidationError::invalid(format!(
                "trusting period ({}ns) should be < unbonding period ({}ns)",
                trusting, unbonding
            )));
        }
        if self.proof_specs.is_empty() {
            return Err(ValidationError::invalid(
                "proof specs cannot be nil for tm client",
            ));
        }
        for (i, key) in self.upgrade_path.iter().enumerate() {
            if key.trim().is_empty() {
                return Err(ValidationError::invalid(format!(
                    "key in upgrade path at index {} cannot be empty",
                    i
                )));
            }
        }

        Ok(())
    }
}

/// Trust level must lie within [1/3, 1].
fn validate_trust_level(level: &Fraction) -> Result<(), ValidationError> {
    let numerator = u128::from(level.numerator);
    let denominator = u128::from(level.denominator);
    if denominator == 0 || numerator * 3 < denominator || numerator > denominator {
        return Err(ValidationError::invalid(format!(
            "trustLevel must be within [1/3, 1], given {}/{}",
            level.numerator, level.denominator
        )));
    }
    Ok(())
}
