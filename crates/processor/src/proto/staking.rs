//! `cosmos.staking.v1beta1.Delegation`.

use crate::utils::numeric::{Dec, NumericError};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Delegation {
    #[prost(string, tag = "1")]
    pub delegator_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub validator_address: ::prost::alloc::string::String,
    /// Decimal scaled by 10^18, serialized as an integer string
    #[prost(string, tag = "3")]
    pub shares: ::prost::alloc::string::String,
}

impl Delegation {
    pub fn parsed_shares(&self) -> Result<Dec, NumericError> {
        Dec::from_scaled_str(&self.shares)
    }
}
