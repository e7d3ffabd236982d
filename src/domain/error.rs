//! Domain error types

use thiserror::Error;

/// Error when an unknown output format is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid format: \"{input}\". Valid formats are: txt, md, csv")]
pub struct InvalidFormatError {
    pub input: String,
}

/// Error when an unknown output mode is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid mode: \"{input}\". Valid modes are: copy, download")]
pub struct InvalidModeError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
