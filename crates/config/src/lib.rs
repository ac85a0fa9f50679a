mod args;
mod chain;
mod error;
mod log;

pub use args::{Args, RecordKind};
pub use chain::{ChainConfig, ChainError};
pub use error::ConfigError;
pub use log::LogConfig;

use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct TracelistenerConfig {
    pub log: LogConfig,
    pub chain: ChainConfig,
}

impl TracelistenerConfig {
    /// Load configuration from `TL_*` environment variables.
    ///
    /// Each section is read under its own prefix (`TL_LOG_`, `TL_CHAIN_`) so
    /// that every field maps to a flat variable name.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            log: envy::prefixed("TL_LOG_").from_env::<LogConfig>()?,
            chain: envy::prefixed("TL_CHAIN_").from_env::<ChainConfig>()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load variables from `env_file` (when it exists) before reading the
    /// environment. Variables already set in the process take precedence.
    pub fn from_env_file(env_file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = env_file.as_ref();
        if path.exists() {
            dotenv::from_path(path).map_err(|e| ConfigError::EnvFileError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()?;
        self.chain.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for key in [
            "TL_LOG_LEVEL",
            "TL_LOG_JSON",
            "TL_LOG_STRIP_ANSI",
            "TL_CHAIN_BECH32_PREFIX",
        ] {
            // SAFETY: tests touching the environment are serialized.
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    fn test_default_config() {
        let config = TracelistenerConfig::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.chain.bech32_prefix, "cosmos");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = TracelistenerConfig::from_env().unwrap();
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
        assert_eq!(config.chain.bech32_prefix, "cosmos");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        unsafe {
            std::env::set_var("TL_LOG_LEVEL", "debug");
            std::env::set_var("TL_LOG_JSON", "true");
            std::env::set_var("TL_CHAIN_BECH32_PREFIX", "osmo");
        }

        let config = TracelistenerConfig::from_env().unwrap();
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
        assert_eq!(config.chain.bech32_prefix, "osmo");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_level() {
        clear_env();
        unsafe { std::env::set_var("TL_LOG_LEVEL", "loud") };

        let result = TracelistenerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::LogError(_))));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TL_CHAIN_BECH32_PREFIX=akash").unwrap();
        writeln!(file, "TL_LOG_LEVEL=warn").unwrap();

        let config = TracelistenerConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.chain.bech32_prefix, "akash");
        assert_eq!(config.log.level, "warn");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_env_file_is_ignored() {
        clear_env();
        let config = TracelistenerConfig::from_env_file("/nonexistent/.env.tracelistener").unwrap();
        assert_eq!(config.chain.bech32_prefix, "cosmos");
    }
}
