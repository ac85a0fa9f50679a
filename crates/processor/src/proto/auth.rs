//! `cosmos.auth.v1beta1` and `cosmos.vesting.v1beta1` account types.

use super::ValidationError;
use crate::codec::AddressCodec;
use crate::consts::type_urls;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

const SECP256K1_PUBKEY_SIZE: usize = 33;
const ED25519_PUBKEY_SIZE: usize = 32;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BaseAccount {
    #[prost(string, tag = "1")]
    pub address: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub pub_key: ::core::option::Option<::prost_types::Any>,
    #[prost(uint64, tag = "3")]
    pub account_number: u64,
    #[prost(uint64, tag = "4")]
    pub sequence: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModuleAccount {
    #[prost(message, optional, tag = "1")]
    pub base_account: ::core::option::Option<BaseAccount>,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub permissions: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

/// Common prefix of every vesting account type: field 1 is always the
/// embedded `BaseVestingAccount`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VestingAccount {
    #[prost(message, optional, tag = "1")]
    pub base_vesting_account: ::core::option::Option<BaseVestingAccount>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BaseVestingAccount {
    #[prost(message, optional, tag = "1")]
    pub base_account: ::core::option::Option<BaseAccount>,
    #[prost(int64, tag = "5")]
    pub end_time: i64,
}

/// Layout shared by the secp256k1 and ed25519 public key messages.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PubKey {
    #[prost(bytes = "vec", tag = "1")]
    pub key: ::prost::alloc::vec::Vec<u8>,
}

impl BaseAccount {
    /// An account without an address or public key is valid. Otherwise the
    /// address must carry the chain's prefix and match the address derived
    /// from the public key.
    pub fn validate(&self, addresses: &AddressCodec) -> Result<(), ValidationError> {
        let Some(pub_key) = &self.pub_key else {
            return Ok(());
        };
        if self.address.is_empty() {
            return Ok(());
        }

        let account_address = addresses
            .decode(&self.address)
            .map_err(|e| ValidationError::invalid(e.to_string()))?;
        let key_address = pubkey_address(pub_key)?;

        if account_address != key_address {
            return Err(ValidationError::invalid(
                "account address and pubkey address do not match",
            ));
        }

        Ok(())
    }
}

/// Derive the 20-byte account address of a packed public key.
fn pubkey_address(pub_key: &::prost_types::Any) -> Result<Vec<u8>, ValidationError> {
    let decoded = <PubKey as ::prost::Message>::decode(pub_key.value.as_slice())
        .map_err(|e| ValidationError::invalid(format!("cannot decode public key: {}", e)))?;

    match pub_key.type_url.as_str() {
        type_urls::SECP256K1_PUBKEY => {
            if decoded.key.len() != SECP256K1_PUBKEY_SIZE {
                return Err(ValidationError::invalid(format!(
                    "length of secp256k1 pubkey is incorrect: got {}, expected {}",
                    decoded.key.len(),
                    SECP256K1_PUBKEY_SIZE
                )));
            }
            let sha = Sha256::digest(&decoded.key);
            Ok(Ripemd160::digest(sha).to_vec())
        }
        type_urls::ED25519_PUBKEY => {
            if decoded.key.len() != ED25519_PUBKEY_SIZE {
                return Err(ValidationError::invalid(format!(
                    "length of ed25519 pubkey is incorrect: got {}, expected {}",
                    decoded.key.len(),
                    ED25519_PUBKEY_SIZE
                )));
            }
            Ok(Sha256::digest(&decoded.key)[..20].to_vec())
        }
        other => Err(ValidationError::invalid(format!(
            "unsupported public key type {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    fn codec() -> AddressCodec {
        AddressCodec::new("cosmos").unwrap()
    }

    fn secp_key() -> Vec<u8> {
        let mut key = vec![0x02];
        key.extend_from_slice(&[0x11; 32]);
        key
    }

    fn packed(type_url: &str, key: Vec<u8>) -> ::prost_types::Any {
        ::prost_types::Any {
            type_url: type_url.to_string(),
            value: PubKey { key }.encode_to_vec(),
        }
    }

    #[test]
    fn test_validate_without_pubkey() {
        let account = BaseAccount {
            address: "not even bech32".to_string(),
            ..Default::default()
        };
        assert!(account.validate(&codec()).is_ok());
    }

    #[test]
    fn test_validate_matching_secp256k1_pubkey() {
        let key = secp_key();
        let address = Ripemd160::digest(Sha256::digest(&key)).to_vec();
        let account = BaseAccount {
            address: codec().encode(&address).unwrap(),
            pub_key: Some(packed(type_urls::SECP256K1_PUBKEY, key)),
            account_number: 1,
            sequence: 0,
        };
        assert!(account.validate(&codec()).is_ok());
    }

    #[test]
    fn test_validate_matching_ed25519_pubkey() {
        let key = vec![0x42; 32];
        let address = Sha256::digest(&key)[..20].to_vec();
        let account = BaseAccount {
            address: codec().encode(&address).unwrap(),
            pub_key: Some(packed(type_urls::ED25519_PUBKEY, key)),
            ..Default::default()
        };
        assert!(account.validate(&codec()).is_ok());
    }

    #[test]
    fn test_validate_mismatched_pubkey() {
        let account = BaseAccount {
            address: codec().encode(&[0x01; 20]).unwrap(),
            pub_key: Some(packed(type_urls::SECP256K1_PUBKEY, secp_key())),
            ..Default::default()
        };
        let err = account.validate(&codec()).unwrap_err();
        assert_eq!(err.to_string(), "account address and pubkey address do not match");
    }

    #[test]
    fn test_validate_wrong_prefix() {
        let address = AddressCodec::new("osmo").unwrap().encode(&[0x01; 20]).unwrap();
        let account = BaseAccount {
            address,
            pub_key: Some(packed(type_urls::SECP256K1_PUBKEY, secp_key())),
            ..Default::default()
        };
        assert!(account.validate(&codec()).is_err());
    }

    #[test]
    fn test_validate_unsupported_key_type() {
        let account = BaseAccount {
            address: codec().encode(&[0x01; 20]).unwrap(),
            pub_key: Some(packed("/cosmos.crypto.multisig.LegacyAminoPubKey", vec![1, 2, 3])),
            ..Default::default()
        };
        let err = account.validate(&codec()).unwrap_err();
        assert!(err.to_string().contains("unsupported public key type"));
    }
}
