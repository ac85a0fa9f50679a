//! Hand-written prost types for the Cosmos SDK and IBC store values that the
//! processor decodes, together with the well-formedness rules each type
//! enforces before it is turned into a record.
//!
//! Only the fields the processor reads are declared. Unknown fields are
//! skipped by the protobuf decoder.

pub mod auth;
pub mod bank;
pub mod ibc;
pub mod staking;

use crate::utils::ibc_host::IdentifierError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{context}: {source}")]
    Identifier {
        context: String,
        #[source]
        source: IdentifierError,
    },

    #[error("{0}")]
    Invalid(String),
}

impl ValidationError {
    pub(crate) fn identifier(context: impl Into<String>, source: IdentifierError) -> Self {
        ValidationError::Identifier {
            context: context.into(),
            source,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ValidationError::Invalid(msg.into())
    }
}
