//! Constructor methods for ConfigError

use super::types::ConfigError;

impl ConfigError {
    /// Create a callback registration error
    pub fn registration(
        provider: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::CallbackRegistration {
            provider: provider.into(),
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a callback unregistration error
    pub fn unregistration(
        provider: impl Into<String>,
        token: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::CallbackUnregistration {
            provider: provider.into(),
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create a provider initialization error
    pub fn provider_init(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderInit {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
