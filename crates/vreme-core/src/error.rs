//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory could not be determined")]
    NoConfigDir,

    #[error("Failed to read configuration: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write configuration: {0}")]
    Write(#[source] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NoConfigDir => "Could not locate a configuration directory.",
            ConfigError::Read(_) => "Unable to read the configuration file.",
            ConfigError::Write(_) => "Unable to write the configuration file.",
            ConfigError::Parse(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
        }
    }
}
