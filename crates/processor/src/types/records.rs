use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Hex-encoded binary account address
    pub address: String,
    pub account_number: u64,
    pub sequence_number: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Hex-encoded binary account address
    pub address: String,
    pub denom: String,
    /// Decimal integer amount
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelegationKind {
    #[serde(rename = "create_delegation")]
    Create,
    #[serde(rename = "delete_delegation")]
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRecord {
    pub delegator: String,
    pub validator: String,
    /// Delegated shares as an 18-decimal fixed point string, empty on deletion
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: DelegationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbcChannelRecord {
    pub channel_id: String,
    pub counterparty_channel_id: String,
    pub hops: Vec<String>,
    pub port_id: String,
    pub state: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbcClientStateRecord {
    pub chain_id: String,
    pub client_id: String,
    pub latest_height: u64,
    /// Trusting period in nanoseconds
    pub trusting_period: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbcConnectionRecord {
    pub connection_id: String,
    pub client_id: String,
    pub state: String,
    pub counterparty_connection_id: String,
    pub counterparty_client_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbcDenomTraceRecord {
    pub path: String,
    pub base_denom: String,
    /// Hex-encoded SHA-256 of the full denom path
    pub hash: String,
}
