//! Error types for weatherkit
//!
//! The helper functions themselves never fail; these errors cover the
//! configuration layer.

use thiserror::Error;

/// Main error type for weatherkit
#[derive(Error, Debug)]
pub enum WeatherKitError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// TOML decoding errors
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for weatherkit operations
pub type Result<T> = std::result::Result<T, WeatherKitError>;
