mod processing_error;
mod records;
mod trace;

pub use processing_error::{ErrorKind, ErrorObject, ProcessingError};
pub use records::{
    AccountRecord, BalanceRecord, DelegationKind, DelegationRecord, IbcChannelRecord,
    IbcClientStateRecord, IbcConnectionRecord, IbcDenomTraceRecord,
};
pub use trace::{Operation, TraceBatch, TraceEntry};
