//! IBC core and application types (`ibc.core.*`, `ibc.lightclients.*`,
//! `ibc.applications.transfer.v1`).

pub mod channel;
pub mod client;
pub mod connection;
pub mod transfer;
