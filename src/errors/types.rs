//! Error type definitions for the badge service
//!
//! Rendering and cache lookups cannot fail; everything here comes from
//! configuration, startup, or background task management.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written back out
    #[error("Configuration serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache errors
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

/// Badge cache specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// Builder was given settings the cache cannot run with
    #[error("Invalid cache settings: {field} - {message}")]
    InvalidSettings { field: String, message: String },

    /// The background sweep task panicked or was aborted
    #[error("Sweep task failed: {0}")]
    SweeperJoin(#[from] tokio::task::JoinError),
}

impl AppError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl CacheError {
    pub fn invalid_settings<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidSettings {
            field: field.into(),
            message: message.into(),
        }
    }
}
