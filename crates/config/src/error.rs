use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to read env file {path}: {reason}")]
    EnvFileError { path: String, reason: String },

    #[error("Log configuration error: {0}")]
    LogError(#[from] crate::log::LogError),

    #[error("Chain configuration error: {0}")]
    ChainError(#[from] crate::chain::ChainError),
}
