//! Binary and address codecs injected into the [`Processor`](crate::handlers::Processor).

mod address;
mod protobuf;

pub use address::{AddressCodec, AddressError};
pub use protobuf::{AccountValue, ClientStateValue, CodecError, ProtoCodec, TypeRegistry};
