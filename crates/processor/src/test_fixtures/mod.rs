//! Builders shared by the unit tests.

use crate::codec::{AddressCodec, ProtoCodec};
use crate::consts::{BALANCES_PREFIX, type_urls};
use crate::handlers::Processor;
use crate::proto::auth::PubKey;
use crate::proto::bank::Coin;
use prost::Message;
use prost_types::Any;
use std::sync::Arc;

pub fn processor() -> Processor {
    Processor::new(
        Arc::new(ProtoCodec::new()),
        AddressCodec::new("cosmos").unwrap(),
    )
}

pub fn pack<M: Message>(type_url: &str, msg: &M) -> Vec<u8> {
    any(type_url, msg).encode_to_vec()
}

pub fn any<M: Message>(type_url: &str, msg: &M) -> Any {
    Any {
        type_url: type_url.to_string(),
        value: msg.encode_to_vec(),
    }
}

pub fn bech32_address(hrp: &str, address: &[u8]) -> String {
    AddressCodec::new(hrp).unwrap().encode(address).unwrap()
}

pub fn cosmos_address(address: &[u8]) -> String {
    bech32_address("cosmos", address)
}

pub fn secp256k1_pubkey(key: &[u8]) -> Any {
    any(type_urls::SECP256K1_PUBKEY, &PubKey { key: key.to_vec() })
}

pub fn auth_key(address: &[u8]) -> Vec<u8> {
    [&[0x01][..], address].concat()
}

pub fn balance_key(address: &[u8], denom: &str) -> Vec<u8> {
    [BALANCES_PREFIX, address, denom.as_bytes()].concat()
}

pub fn delegation_key(delegator: &[u8], validator: &[u8]) -> Vec<u8> {
    [&[0x31][..], delegator, validator].concat()
}

pub fn coin(denom: &str, amount: &str) -> Vec<u8> {
    Coin {
        denom: denom.to_string(),
        amount: amount.to_string(),
    }
    .encode_to_vec()
}
