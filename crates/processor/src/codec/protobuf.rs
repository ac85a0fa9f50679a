use crate::consts::type_urls;
use crate::proto::auth::{BaseAccount, ModuleAccount, VestingAccount};
use crate::proto::ibc::client::{
    LocalhostClientState, SoloMachineClientState, TendermintClientState,
};
use prost::Message;
use prost_types::Any;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("no concrete type registered for type URL {type_url} against interface {interface}")]
    UnregisteredType {
        type_url: String,
        interface: &'static str,
    },

    #[error("failed to unmarshal {type_name}: {source}")]
    Decode {
        type_name: String,
        #[source]
        source: prost::DecodeError,
    },
}

impl CodecError {
    fn decode(type_name: impl Into<String>, source: prost::DecodeError) -> Self {
        CodecError::Decode {
            type_name: type_name.into(),
            source,
        }
    }
}

/// Concrete account types behind the auth store's `AccountI` interface.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountValue {
    Base(BaseAccount),
    Module(ModuleAccount),
    Vesting {
        type_url: String,
        account: VestingAccount,
    },
}

impl AccountValue {
    pub fn type_name(&self) -> &str {
        match self {
            AccountValue::Base(_) => type_urls::BASE_ACCOUNT,
            AccountValue::Module(_) => type_urls::MODULE_ACCOUNT,
            AccountValue::Vesting { type_url, .. } => type_url,
        }
    }
}

/// Concrete light client types behind IBC's `ClientState` interface.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientStateValue {
    Tendermint(TendermintClientState),
    SoloMachine(SoloMachineClientState),
    Localhost(LocalhostClientState),
}

impl ClientStateValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ClientStateValue::Tendermint(_) => type_urls::TENDERMINT_CLIENT_STATE,
            ClientStateValue::SoloMachine(_) => type_urls::SOLOMACHINE_CLIENT_STATE,
            ClientStateValue::Localhost(_) => type_urls::LOCALHOST_CLIENT_STATE,
        }
    }
}

type Decoder<T> = Box<dyn Fn(&[u8]) -> Result<T, prost::DecodeError> + Send + Sync>;

/// Dispatch table from protobuf type URL to the decoder of one concrete
/// implementation of an interface.
pub struct TypeRegistry<T> {
    interface: &'static str,
    decoders: HashMap<String, Decoder<T>>,
}

impl<T> TypeRegistry<T> {
    pub fn new(interface: &'static str) -> Self {
        Self {
            interface,
            decoders: HashMap::new(),
        }
    }

    /// Register `decoder` for `type_url`, replacing any previous registration.
    pub fn register<F>(&mut self, type_url: impl Into<String>, decoder: F)
    where
        F: Fn(&[u8]) -> Result<T, prost::DecodeError> + Send + Sync + 'static,
    {
        self.decoders.insert(type_url.into(), Box::new(decoder));
    }

    pub fn resolve(&self, any: &Any) -> Result<T, CodecError> {
        let decoder =
            self.decoders
                .get(&any.type_url)
                .ok_or_else(|| CodecError::UnregisteredType {
                    type_url: any.type_url.clone(),
                    interface: self.interface,
                })?;
        decoder(&any.value).map_err(|e| CodecError::decode(any.type_url.clone(), e))
    }
}

impl<T> std::fmt::Debug for TypeRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut urls: Vec<&String> = self.decoders.keys().collect();
        urls.sort();
        f.debug_struct("TypeRegistry")
            .field("interface", &self.interface)
            .field("type_urls", &urls)
            .finish()
    }
}

/// Protobuf codec for store values.
///
/// Concrete messages decode directly with [`ProtoCodec::decode`]. Interface
/// values are stored as `google.protobuf.Any` and are resolved through the
/// registry of their interface. The codec is immutable once built and can be
/// shared between threads.
#[derive(Debug)]
pub struct ProtoCodec {
    accounts: TypeRegistry<AccountValue>,
    client_states: TypeRegistry<ClientStateValue>,
}

impl ProtoCodec {
    /// A codec with no interface implementations registered.
    pub fn empty() -> Self {
        Self {
            accounts: TypeRegistry::new("cosmos.auth.v1beta1.AccountI"),
            client_states: TypeRegistry::new("ibc.core.client.v1.ClientState"),
        }
    }

    /// A codec with the SDK account types and the IBC light clients registered.
    pub fn new() -> Self {
        let mut codec = Self::empty();

        codec.register_account(type_urls::BASE_ACCOUNT, |bz| {
            BaseAccount::decode(bz).map(AccountValue::Base)
        });
        codec.register_account(type_urls::MODULE_ACCOUNT, |bz| {
            ModuleAccount::decode(bz).map(AccountValue::Module)
        });
        for type_url in [
            type_urls::CONTINUOUS_VESTING_ACCOUNT,
            type_urls::DELAYED_VESTING_ACCOUNT,
            type_urls::PERIODIC_VESTING_ACCOUNT,
            type_urls::PERMANENT_LOCKED_ACCOUNT,
        ] {
            codec.register_account(type_url, move |bz| {
                VestingAccount::decode(bz).map(|account| AccountValue::Vesting {
                    type_url: type_url.to_string(),
                    account,
                })
            });
        }

        codec.register_client_state(type_urls::TENDERMINT_CLIENT_STATE, |bz| {
            TendermintClientState::decode(bz).map(ClientStateValue::Tendermint)
        });
        codec.register_client_state(type_urls::SOLOMACHINE_CLIENT_STATE, |bz| {
            SoloMachineClientState::decode(bz).map(ClientStateValue::SoloMachine)
        });
        codec.register_client_state(type_urls::LOCALHOST_CLIENT_STATE, |bz| {
            LocalhostClientState::decode(bz).map(ClientStateValue::Localhost)
        });

        codec
    }

    pub fn register_account<F>(&mut self, type_url: impl Into<String>, decoder: F)
    where
        F: Fn(&[u8]) -> Result<AccountValue, prost::DecodeError> + Send + Sync + 'static,
    {
        self.accounts.register(type_url, decoder);
    }

    pub fn register_client_state<F>(&mut self, type_url: impl Into<String>, decoder: F)
    where
        F: Fn(&[u8]) -> Result<ClientStateValue, prost::DecodeError> + Send + Sync + 'static,
    {
        self.client_states.register(type_url, decoder);
    }

    /// Decode bytes as a known concrete message.
    pub fn decode<M: Message + Default>(&self, bytes: &[u8]) -> Result<M, CodecError> {
        M::decode(bytes).map_err(|e| CodecError::decode(short_type_name::<M>(), e))
    }

    /// Decode an `Any` wrapped account and resolve its concrete type.
    pub fn unpack_account(&self, bytes: &[u8]) -> Result<AccountValue, CodecError> {
        let any: Any = self.decode(bytes)?;
        self.accounts.resolve(&any)
    }

    /// Decode an `Any` wrapped light client state and resolve its concrete type.
    pub fn unpack_client_state(&self, bytes: &[u8]) -> Result<ClientStateValue, CodecError> {
        let any: Any = self.decode(bytes)?;
        self.client_states.resolve(&any)
    }
}

impl Default for ProtoCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn short_type_name<M>() -> &'static str {
    let full = std::any::type_name::<M>();
    full.rsplit("::").next().unwrap_or(full)
}
