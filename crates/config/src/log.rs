use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log level '{level}'. Must be one of: {valid}")]
    InvalidLevel { level: String, valid: String },
}

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log Level
    ///
    /// Env: TL_LOG_LEVEL
    /// Valid values: trace, debug, info, warn, error
    /// Default: info
    #[serde(default = "default_level")]
    pub level: String,

    /// Output logs in JSON format
    ///
    /// Env: TL_LOG_JSON
    /// Default: false
    #[serde(default)]
    pub json: bool,

    /// Strip ANSI color codes from logs
    ///
    /// Env: TL_LOG_STRIP_ANSI
    /// Default: false
    #[serde(default)]
    pub strip_ansi: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl LogConfig {
    pub(crate) fn validate(&self) -> Result<(), LogError> {
        if !VALID_LEVELS.contains(&self.level.as_str()) {
            return Err(LogError::InvalidLevel {
                level: self.level.clone(),
                valid: VALID_LEVELS.join(", "),
            });
        }

        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            strip_ansi: false,
        }
    }
}
