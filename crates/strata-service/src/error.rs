//! Error types for service host wiring

use strata_core::ConfigError;
use thiserror::Error;

use crate::host::State;

/// Result type alias for service host operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Main error type for service host wiring
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// An option was applied to a host type it cannot configure
    #[error("Option requires host type {expected}, got {found}")]
    UnsupportedHost { expected: String, found: String },

    /// A required configuration key did not resolve
    #[error("Missing required configuration key '{key}'")]
    MissingConfig { key: String },

    /// Lifecycle method called in the wrong state
    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: State, to: State },

    /// Configuration provider errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The lifecycle observer rejected a transition
    #[error("Observer error: {0}")]
    Observer(String),
}

impl ServiceError {
    pub fn unsupported_host(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnsupportedHost {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn missing_config(key: impl Into<String>) -> Self {
        Self::MissingConfig { key: key.into() }
    }

    pub fn observer(message: impl Into<String>) -> Self {
        Self::Observer(message.into())
    }
}
