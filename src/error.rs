//! Error types for garpd.

use std::io;

use thiserror::Error;

/// Main error type for garpd operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("interface enumeration failed: {0}")]
    Enumeration(String),

    #[error("failed to parse address {addr:?} on {interface}: {source}")]
    AddressParse {
        interface: String,
        addr: String,
        #[source]
        source: ipnetwork::IpNetworkError,
    },

    #[error("interface {0} is down")]
    InterfaceDown(String),

    #[error("frame construction failed: {0}")]
    Serialization(String),

    #[error("failed to transmit on {interface}: {reason}")]
    Transmit { interface: String, reason: String },
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
