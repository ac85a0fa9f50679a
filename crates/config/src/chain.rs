use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Invalid bech32 prefix '{prefix}': {reason}")]
    InvalidBech32Prefix { prefix: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// Human-readable part of account addresses on the traced chain
    ///
    /// Env: TL_CHAIN_BECH32_PREFIX
    /// Default: cosmos
    #[serde(default = "default_bech32_prefix")]
    pub bech32_prefix: String,
}

fn default_bech32_prefix() -> String {
    "cosmos".to_string()
}

impl ChainConfig {
    pub(crate) fn validate(&self) -> Result<(), ChainError> {
        bech32::Hrp::parse(&self.bech32_prefix).map_err(|e| ChainError::InvalidBech32Prefix {
            prefix: self.bech32_prefix.clone(),
            reason: e.to_string(),
        })?;

        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            bech32_prefix: default_bech32_prefix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_config() {
        let config = ChainConfig::default();
        assert_eq!(config.bech32_prefix, "cosmos");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_prefix() {
        let config = ChainConfig {
            bech32_prefix: "".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mixed_case_prefix() {
        let config = ChainConfig {
            bech32_prefix: "CosMos".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_custom_prefix() {
        for prefix in ["osmo", "akash", "cro", "terra"] {
            let config = ChainConfig {
                bech32_prefix: prefix.to_string(),
            };
            assert!(config.validate().is_ok(), "Prefix {} should be valid", prefix);
        }
    }
}
