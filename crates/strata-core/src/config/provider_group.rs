//! Priority-ordered composite of providers
//!
//! Index 0 is the highest priority. Providers handed to
//! [`ProviderGroup::new`] are prepended one at a time, so the last argument
//! wins: `new("g", [defaults, env, remote])` consults `remote` first.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::provider::{ChangeCallback, ConfigurationProvider, ProviderFn, SharedProvider};
use super::scoped_provider::ScopedProvider;
use super::value::ConfigurationValue;
use crate::error::ConfigResult;

/// Resolves keys against its members, highest priority first.
///
/// A group is value-like: [`with_provider`](Self::with_provider) returns a
/// new group and leaves the receiver untouched. Clones share one allocation
/// and members are shared, not owned.
#[derive(Clone)]
pub struct ProviderGroup {
    inner: Arc<GroupInner>,
}

struct GroupInner {
    name: String,
    providers: Vec<SharedProvider>,
}

impl ProviderGroup {
    /// Create a group; later providers take precedence over earlier ones
    pub fn new(name: impl Into<String>, providers: impl IntoIterator<Item = SharedProvider>) -> Self {
        let mut ordered: Vec<SharedProvider> = providers.into_iter().collect();
        ordered.reverse();
        Self::from_ordered(name.into(), ordered)
    }

    fn from_ordered(name: String, providers: Vec<SharedProvider>) -> Self {
        Self {
            inner: Arc::new(GroupInner { name, providers }),
        }
    }

    /// Build a group by running provider factories in order.
    ///
    /// Stops at the first factory that fails and returns its error.
    pub fn from_factories(
        name: impl Into<String>,
        factories: impl IntoIterator<Item = ProviderFn>,
    ) -> ConfigResult<Self> {
        let mut providers = Vec::new();
        for factory in factories {
            providers.push(factory()?);
        }
        Ok(Self::new(name, providers))
    }

    /// A new group with `provider` as its highest-priority member
    pub fn with_provider(&self, provider: SharedProvider) -> Self {
        let mut providers = Vec::with_capacity(self.len() + 1);
        providers.push(provider);
        providers.extend(self.inner.providers.iter().cloned());
        Self::from_ordered(self.inner.name.clone(), providers)
    }

    /// Members in resolution order
    pub fn providers(&self) -> &[SharedProvider] {
        &self.inner.providers
    }

    pub fn len(&self) -> usize {
        self.inner.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.providers.is_empty()
    }
}

impl ConfigurationProvider for ProviderGroup {
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn get_value(&self, key: &str) -> ConfigurationValue {
        let name = &self.inner.name;
        let mut last = None;

        for provider in self.providers() {
            let value = provider.get_value(key);
            if value.has_value() && !value.is_default() {
                trace!(group = %name, provider = %provider.name(), key, "resolved key");
                // Later traversal is scoped relative to the group.
                return value.with_root(self.shared());
            }
            last = Some(value);
        }

        trace!(group = %name, key, "no member has a value");
        let root = self.shared();
        match last {
            Some(value) => value.with_root(root),
            None => ConfigurationValue::missing(root, key),
        }
    }

    fn scope(&self, prefix: &str) -> SharedProvider {
        Arc::new(ScopedProvider::new(prefix, self.shared()))
    }

    fn register_change_callback(&self, key: &str, callback: ChangeCallback) -> ConfigResult<()> {
        for provider in self.providers() {
            provider.register_change_callback(key, Arc::clone(&callback))?;
            trace!(group = %self.inner.name, provider = %provider.name(), key, "registered change callback");
        }
        Ok(())
    }

    fn unregister_change_callback(&self, token: &str) -> ConfigResult<()> {
        for provider in self.providers() {
            provider.unregister_change_callback(token)?;
            trace!(group = %self.inner.name, provider = %provider.name(), token, "unregistered change callback");
        }
        Ok(())
    }

    fn shared(&self) -> SharedProvider {
        Arc::new(self.clone())
    }
}

impl fmt::Debug for ProviderGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<&str> = self.providers().iter().map(|p| p.name()).collect();
        f.debug_struct("ProviderGroup")
            .field("name", &self.inner.name)
            .field("providers", &members)
            .finish()
    }
}

#[cfg(test)]
#[path = "provider_group_tests.rs"]
mod provider_group_tests;
