//! Core error types

use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main error type for configuration providers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A provider refused a change-callback registration
    #[error("Provider '{provider}' failed to register callback for '{key}': {message}")]
    CallbackRegistration {
        provider: String,
        key: String,
        message: String,
    },

    /// A provider refused to drop a change-callback registration
    #[error("Provider '{provider}' failed to unregister callback '{token}': {message}")]
    CallbackUnregistration {
        provider: String,
        token: String,
        message: String,
    },

    /// A provider factory could not produce its provider
    #[error("Provider '{provider}' failed to initialize: {message}")]
    ProviderInit { provider: String, message: String },

    /// Catch-all for backend-specific failures
    #[error("{0}")]
    Other(String),
}

impl ConfigError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::CallbackRegistration { .. } => "CONFIG_CALLBACK_REGISTER",
            ConfigError::CallbackUnregistration { .. } => "CONFIG_CALLBACK_UNREGISTER",
            ConfigError::ProviderInit { .. } => "CONFIG_PROVIDER_INIT",
            ConfigError::Other(_) => "CONFIG_OTHER",
        }
    }

    /// Name of the provider that raised the error, when known
    pub fn provider(&self) -> Option<&str> {
        match self {
            ConfigError::CallbackRegistration { provider, .. }
            | ConfigError::CallbackUnregistration { provider, .. }
            | ConfigError::ProviderInit { provider, .. } => Some(provider),
            ConfigError::Other(_) => None,
        }
    }
}
