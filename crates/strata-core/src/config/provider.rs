//! The provider capability shared by every configuration backend

use std::sync::Arc;

use serde_json::Value;

use super::value::ConfigurationValue;
use crate::error::ConfigResult;

/// Shared, type-erased handle to a provider
pub type SharedProvider = Arc<dyn ConfigurationProvider>;

/// Invoked by a backend when a watched key changes: `(key, provider name, new data)`
pub type ChangeCallback = Arc<dyn Fn(&str, &str, &Value) + Send + Sync>;

/// Deferred provider construction, run while assembling a group
pub type ProviderFn = Box<dyn FnOnce() -> ConfigResult<SharedProvider> + Send>;

/// A configuration backend.
///
/// Implementations must be safe to call from many threads at once. A lookup
/// never fails: a missing key comes back as a value with `has_value() == false`.
pub trait ConfigurationProvider: Send + Sync {
    /// Identifier of this provider (not of its members, for composites)
    fn name(&self) -> &str;

    /// Resolve `key`
    fn get_value(&self, key: &str) -> ConfigurationValue;

    /// Wrap this provider so every lookup is prefixed with `prefix`
    fn scope(&self, prefix: &str) -> SharedProvider;

    /// Subscribe `callback` to changes of `key`
    fn register_change_callback(&self, key: &str, callback: ChangeCallback) -> ConfigResult<()>;

    /// Drop the subscription identified by `token`
    fn unregister_change_callback(&self, token: &str) -> ConfigResult<()>;

    /// Shared handle to this same provider.
    ///
    /// Every [`ConfigurationValue`] owns its root as a [`SharedProvider`],
    /// and a composite resets that root to itself, which cannot be done from
    /// `&self` alone. Implementations should make this cheap, typically by
    /// keeping their state behind an `Arc`.
    fn shared(&self) -> SharedProvider;
}
