use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("invalid bech32 prefix {prefix}: {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    #[error("empty address string is not allowed")]
    Empty,

    #[error("decoding bech32 failed: {0}")]
    Decode(String),

    #[error("invalid Bech32 prefix; expected {expected}, got {got}")]
    WrongPrefix { expected: String, got: String },

    #[error("encoding bech32 failed: {0}")]
    Encode(String),
}

/// Converts between binary addresses and bech32 strings.
///
/// `encode` and `decode` use the configured prefix; `to_hex` accepts any
/// prefix, which covers validator operator addresses.
#[derive(Debug, Clone)]
pub struct AddressCodec {
    hrp: Hrp,
    prefix: String,
}

impl AddressCodec {
    pub fn new(prefix: &str) -> Result<Self, AddressError> {
        let hrp = Hrp::parse(prefix).map_err(|e| AddressError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            hrp,
            prefix: prefix.to_lowercase(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn encode(&self, address: &[u8]) -> Result<String, AddressError> {
        bech32::encode::<Bech32>(self.hrp, address).map_err(|e| AddressError::Encode(e.to_string()))
    }

    /// Decode an address that must carry this codec's prefix.
    pub fn decode(&self, address: &str) -> Result<Vec<u8>, AddressError> {
        let (prefix, bytes) = Self::decode_any_prefix(address)?;
        if prefix != self.prefix {
            return Err(AddressError::WrongPrefix {
                expected: self.prefix.clone(),
                got: prefix,
            });
        }
        Ok(bytes)
    }

    /// Decode a bech32 string regardless of its prefix, returning the
    /// lowercase prefix and the address bytes.
    pub fn decode_any_prefix(address: &str) -> Result<(String, Vec<u8>), AddressError> {
        if address.is_empty() {
            return Err(AddressError::Empty);
        }
        let checked = CheckedHrpstring::new::<Bech32>(address)
            .map_err(|e| AddressError::Decode(e.to_string()))?;
        let bytes: Vec<u8> = checked.byte_iter().collect();

        // byte_iter drops trailing padding bits, so only the canonical
        // encoding of `bytes` is accepted.
        let canonical = bech32::encode_lower::<Bech32>(checked.hrp(), &bytes)
            .map_err(|e| AddressError::Decode(e.to_string()))?;
        if canonical != address.to_lowercase() {
            return Err(AddressError::Decode("invalid incomplete group".to_string()));
        }

        Ok((checked.hrp().to_lowercase(), bytes))
    }

    /// Hex encoding of the bytes behind a bech32 address of any prefix.
    pub fn to_hex(address: &str) -> Result<String, AddressError> {
        let (_, bytes) = Self::decode_any_prefix(address)?;
        Ok(hex::encode(bytes))
    }
}
