// Copyright (C) 2026 Tendermint Labs
// SPDX-License-Identifier: GPL-3.0-or-later

//! Store key layout constants for the Cosmos SDK modules whose traces are decoded.

/// Width of a binary account or validator address.
pub const ADDRESS_LENGTH: usize = 20;

/// Auth store keys are a one-byte prefix followed by the account address.
pub const AUTH_KEY_LENGTH: usize = ADDRESS_LENGTH + 1;

/// Prefix of bank balance keys: `0x02 | address | denom`.
pub const BALANCES_PREFIX: &[u8] = &[0x02];

/// Staking delegation keys: `prefix | delegator | validator`.
pub const DELEGATION_KEY_MIN_LENGTH: usize = 1 + 2 * ADDRESS_LENGTH;

/// First path segment of IBC connection end keys (`connections/{id}`).
pub const KEY_CONNECTION_PREFIX: &str = "connections";

/// Segments of an IBC channel end path
/// (`channelEnds/ports/{port}/channels/{channel}`).
pub const KEY_PORT_PREFIX: &str = "ports";
pub const KEY_CHANNEL_PREFIX: &str = "channels";

/// Name carried by every serialized processing error.
pub const PROCESSING_ERROR_NAME: &str = "ProcessingError";

/// Protobuf type URLs understood by the default codec registrations.
pub mod type_urls {
    pub const BASE_ACCOUNT: &str = "/cosmos.auth.v1beta1.BaseAccount";
    pub const MODULE_ACCOUNT: &str = "/cosmos.auth.v1beta1.ModuleAccount";
    pub const CONTINUOUS_VESTING_ACCOUNT: &str = "/cosmos.vesting.v1beta1.ContinuousVestingAccount";
    pub const DELAYED_VESTING_ACCOUNT: &str = "/cosmos.vesting.v1beta1.DelayedVestingAccount";
    pub const PERIODIC_VESTING_ACCOUNT: &str = "/cosmos.vesting.v1beta1.PeriodicVestingAccount";
    pub const PERMANENT_LOCKED_ACCOUNT: &str = "/cosmos.vesting.v1beta1.PermanentLockedAccount";

    pub const SECP256K1_PUBKEY: &str = "/cosmos.crypto.secp256k1.PubKey";
    pub const ED25519_PUBKEY: &str = "/cosmos.crypto.ed25519.PubKey";

    pub const TENDERMINT_CLIENT_STATE: &str = "/ibc.lightclients.tendermint.v1.ClientState";
    pub const SOLOMACHINE_CLIENT_STATE: &str = "/ibc.lightclients.solomachine.v1.ClientState";
    pub const LOCALHOST_CLIENT_STATE: &str = "/ibc.lightclients.localhost.v1.ClientState";
}
