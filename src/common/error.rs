//! Error types for the application.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors raised while handling a single character lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Invalid format. Please use the format: `CharacterName-ServerName`")]
    InvalidFormat,
}

/// Discord-related errors.
#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Failed to register slash command '{name}': {source}")]
    RegisterFailed {
        name: String,
        #[source]
        source: serenity::Error,
    },

    #[error("Modal submission did not contain the '{custom_id}' input")]
    MissingInput { custom_id: String },

    #[error("Serenity error: {0}")]
    Serenity(#[from] serenity::Error),
}

/// Result type alias for Discord operations.
pub type DiscordResult<T> = std::result::Result<T, DiscordError>;
