//! `ibc.core.channel.v1.Channel`.

use crate::proto::ValidationError;
use crate::utils::ibc_host::{
    validate_channel_identifier, validate_connection_identifier, validate_port_identifier,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum State {
    UninitializedUnspecified = 0,
    Init = 1,
    Tryopen = 2,
    Open = 3,
    Closed = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Order {
    NoneUnspecified = 0,
    Unordered = 1,
    Ordered = 2,
}

impl Order {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Order::NoneUnspecified => "ORDER_NONE_UNSPECIFIED",
            Order::Unordered => "ORDER_UNORDERED",
            Order::Ordered => "ORDER_ORDERED",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Channel {
    #[prost(enumeration = "State", tag = "1")]
    pub state: i32,
    #[prost(enumeration = "Order", tag = "2")]
    pub ordering: i32,
    #[prost(message, optional, tag = "3")]
    pub counterparty: ::core::option::Option<Counterparty>,
    #[prost(string, repeated, tag = "4")]
    pub connection_hops: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "5")]
    pub version: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Counterparty {
    #[prost(string, tag = "1")]
    pub port_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub channel_id: ::prost::alloc::string::String,
}

impl Channel {
    pub fn parsed_ordering(&self) -> Option<Order> {
        Order::try_from(self.ordering).ok()
    }

    pub fn counterparty_channel_id(&self) -> &str {
        self.counterparty
            .as_ref()
            .map(|c| c.channel_id.as_str())
            .unwrap_or_default()
    }

    pub fn validate_basic(&self) -> Result<(), ValidationError> {
        if self.state == State::UninitializedUnspecified as i32 {
            return Err(ValidationError::invalid("invalid channel state: uninitialized"));
        }

        match self.parsed_ordering() {
            Some(Order::Ordered) | Some(Order::Unordered) => {}
            Some(other) => {
                return Err(ValidationError::invalid(format!(
                    "invalid channel ordering: {}",
                    other.as_str_name()
                )));
            }
            None => {
                return Err(ValidationError::invalid(format!(
                    "invalid channel ordering: {}",
                    self.ordering
                )));
            }
        }

        if self.connection_hops.len() != 1 {
            return Err(ValidationError::invalid(format!(
                "current IBC version only supports one connection hop, got {}",
                self.connection_hops.len()
            )));
        }

        validate_connection_identifier(&self.connection_hops[0])
            .map_err(|e| ValidationError::identifier("invalid connection hop ID", e))?;

        match &self.counterparty {
            Some(counterparty) => counterparty.validate_basic(),
            None => Counterparty::default().validate_basic(),
        }
    }
}

impl Counterparty {
    pub fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_port_identifier(&self.port_id)
            .map_err(|e| ValidationError::identifier("invalid counterparty port ID", e))?;

        if !self.channel_id.is_empty() {
            validate_channel_identifier(&self.channel_id)
                .map_err(|e| ValidationError::identifier("invalid counterparty channel ID", e))?;
        }

        Ok(())
    }
}
