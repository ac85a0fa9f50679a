//! The trace processor: one decoding operation per store record kind.
//!
//! Every operation walks the whole batch. An entry that cannot be decoded
//! contributes one item to the batch's [`ProcessingError`](crate::types::ProcessingError)
//! and never stops the remaining entries from being decoded.

mod auth;
mod bank;
mod batch;
mod delegation;
mod ibc_channel;
mod ibc_client_state;
mod ibc_connection;
mod ibc_denom_trace;

pub use batch::{BatchOutput, EntryError};

use crate::codec::{AddressCodec, ProtoCodec};
use std::sync::Arc;

/// Stateless decoder of store trace batches.
///
/// Cloning is cheap and clones share the same codec, so a processor can be
/// handed to as many threads as needed.
#[derive(Debug, Clone)]
pub struct Processor {
    codec: Arc<ProtoCodec>,
    addresses: AddressCodec,
}

impl Processor {
    pub fn new(codec: Arc<ProtoCodec>, addresses: AddressCodec) -> Self {
        Self { codec, addresses }
    }

    pub fn codec(&self) -> &ProtoCodec {
        &self.codec
    }

    pub fn addresses(&self) -> &AddressCodec {
        &self.addresses
    }
}
