//! `cosmos.base.v1beta1.Coin`.

use super::ValidationError;
use crate::utils::numeric::{Int, NumericError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DENOM_REGEX: Regex =
        Regex::new(r"^[a-zA-Z][a-zA-Z0-9/:._-]{2,127}$").expect("denom pattern is valid");
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    /// Signed decimal integer, empty when zero
    #[prost(string, tag = "2")]
    pub amount: ::prost::alloc::string::String,
}

impl Coin {
    pub fn parsed_amount(&self) -> Result<Int, NumericError> {
        self.amount.parse()
    }
}

pub fn validate_denom(denom: &str) -> Result<(), ValidationError> {
    if !DENOM_REGEX.is_match(denom) {
        return Err(ValidationError::invalid(format!("invalid denom: {}", denom)));
    }
    Ok(())
}

/// A coin is valid when its denom is well formed and its amount is not negative.
pub fn validate_coin(denom: &str, amount: &Int) -> Result<(), ValidationError> {
    validate_denom(denom)?;
    if amount.is_negative() {
        return Err(ValidationError::invalid(format!(
            "negative coin amount: {}",
            amount
        )));
    }
    Ok(())
}
