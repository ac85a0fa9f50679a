//! `ibc.core.connection.v1.ConnectionEnd`.

use crate::proto::ValidationError;
use crate::utils::ibc_host::{validate_client_identifier, validate_connection_identifier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum State {
    UninitializedUnspecified = 0,
    Init = 1,
    Tryopen = 2,
    Open = 3,
}

impl State {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            State::UninitializedUnspecified => "STATE_UNINITIALIZED_UNSPECIFIED",
            State::Init => "STATE_INIT",
            State::Tryopen => "STATE_TRYOPEN",
            State::Open => "STATE_OPEN",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConnectionEnd {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub versions: ::prost::alloc::vec::Vec<Version>,
    #[prost(enumeration = "State", tag = "3")]
    pub state: i32,
    #[prost(message, optional, tag = "4")]
    pub counterparty: ::core::option::Option<Counterparty>,
    #[prost(uint64, tag = "5")]
    pub delay_period: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Version {
    #[prost(string, tag = "1")]
    pub identifier: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub features: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Counterparty {
    #[prost(string, tag = "1")]
    pub client_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub connection_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub prefix: ::core::option::Option<MerklePrefix>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MerklePrefix {
    #[prost(bytes = "vec", tag = "1")]
    pub key_prefix: ::prost::alloc::vec::Vec<u8>,
}

impl ConnectionEnd {
    /// Protobuf enum name of the state; unknown values render as the number.
    pub fn state_name(&self) -> String {
        match State::try_from(self.state) {
            Ok(state) => state.as_str_name().to_string(),
            Err(_) => self.state.to_string(),
        }
    }

    pub fn counterparty_or_default(&self) -> Counterparty {
        self.counterparty.clone().unwrap_or_default()
    }

    pub fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_client_identifier(&self.client_id)
            .map_err(|e| ValidationError::identifier("invalid client ID", e))?;

        if self.versions.is_empty() {
            return Err(ValidationError::invalid("empty connection versions"));
        }
        for version in &self.versions {
            version.validate()?;
        }

        self.counterparty_or_default().validate_basic()
    }
}

impl Version {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.identifier.trim().is_empty() {
            return Err(ValidationError::invalid("version identifier cannot be blank"));
        }
        for (i, feature) in self.features.iter().enumerate() {
            if feature.trim().is_empty() {
                return Err(ValidationError::invalid(format!(
                    "feature {} cannot be blank",
                    i
                )));
            }
        }
        Ok(())
    }
}

impl Counterparty {
    pub fn validate_basic(&self) -> Result<(), ValidationError> {
        if !self.connection_id.is_empty() {
            validate_connection_identifier(&self.connection_id).map_err(|e| {
                ValidationError::identifier("invalid counterparty connection ID", e)
            })?;
        }

        validate_client_identifier(&self.client_id)
            .map_err(|e| ValidationError::identifier("invalid counterparty client ID", e))?;

        let prefix_empty = self
            .prefix
            .as_ref()
            .is_none_or(|p| p.key_prefix.is_empty());
        if prefix_empty {
            return Err(ValidationError::invalid("counterparty prefix cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn open_connection() -> ConnectionEnd {
        ConnectionEnd {
            client_id: "07-tendermint-0".to_string(),
            versions: vec![Version {
                identifier: "1".to_string(),
                features: vec!["ORDER_ORDERED".to_string(), "ORDER_UNORDERED".to_string()],
            }],
            state: State::Open as i32,
            counterparty: Some(Counterparty {
                client_id: "07-tendermint-259".to_string(),
                connection_id: "connection-185".to_string(),
                prefix: Some(MerklePrefix {
                    key_prefix: b"ibc".to_vec(),
                }),
            }),
            delay_period: 0,
        }
    }

    #[test]
    fn test_validate_open_connection() {
        assert!(open_connection().validate_basic().is_ok());
    }

    #[test]
    fn test_state_name() {
        let mut connection = open_connection();
        assert_eq!(connection.state_name(), "STATE_OPEN");
        connection.state = State::Tryopen as i32;
        assert_eq!(connection.state_name(), "STATE_TRYOPEN");
        connection.state = 42;
        assert_eq!(connection.state_name(), "42");
    }

    #[test]
    fn test_validate_versions() {
        let mut connection = open_connection();
        connection.versions.clear();
        assert!(connection.validate_basic().is_err());

        connection.versions = vec![Version {
            identifier: "1".to_string(),
            features: vec![" ".to_string()],
        }];
        let err = connection.validate_basic().unwrap_err();
        assert_eq!(err.to_string(), "feature 0 cannot be blank");
    }

    #[test]
    fn test_validate_counterparty_prefix() {
        let mut connection = open_connection();
        if let Some(counterparty) = connection.counterparty.as_mut() {
            counterparty.prefix = None;
        }
        let err = connection.validate_basic().unwrap_err();
        assert_eq!(err.to_string(), "counterparty prefix cannot be empty");
    }

    #[test]
    fn test_validate_counterparty_connection_optional() {
        let mut connection = open_connection();
        if let Some(counterparty) = connection.counterparty.as_mut() {
            counterparty.connection_id.clear();
        }
        assert!(connection.validate_basic().is_ok());
    }
}
