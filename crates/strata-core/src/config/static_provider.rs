//! In-memory configuration backend

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use super::provider::{ChangeCallback, ConfigurationProvider, ProviderFn, SharedProvider};
use super::scoped_provider::{join_prefix, scoped_key};
use super::value::ConfigurationValue;
use crate::error::ConfigResult;

const STATIC_PROVIDER_NAME: &str = "static";

/// Fixed key/value table served as a configuration backend.
///
/// Clones share the same table. Intended for tests and for isolating
/// configuration from the environment.
#[derive(Clone)]
pub struct StaticProvider {
    data: Arc<RwLock<Map<String, Value>>>,
}

impl StaticProvider {
    /// Create a provider over `data`
    pub fn new(data: Map<String, Value>) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Create a provider from `(key, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

/// Factory form of [`StaticProvider::new`], for [`ProviderGroup::from_factories`](super::ProviderGroup::from_factories)
pub fn static_provider(data: Map<String, Value>) -> ProviderFn {
    Box::new(move || -> ConfigResult<SharedProvider> {
        Ok(Arc::new(StaticProvider::new(data)))
    })
}

impl ConfigurationProvider for StaticProvider {
    fn name(&self) -> &str {
        STATIC_PROVIDER_NAME
    }

    fn get_value(&self, key: &str) -> ConfigurationValue {
        let data = self.data.read();

        // The empty key answers with a snapshot of the whole table.
        if key.is_empty() {
            return ConfigurationValue::new(
                self.shared(),
                key,
                Some(Value::Object(data.clone())),
                true,
                None,
            );
        }

        let value = data.get(key).cloned();
        let found = value.is_some();
        ConfigurationValue::new(self.shared(), key, value, found, None)
    }

    fn scope(&self, prefix: &str) -> SharedProvider {
        Arc::new(ScopedStaticProvider::new(self.clone(), prefix))
    }

    // A fixed table never changes, so there is nothing to subscribe to.
    fn register_change_callback(&self, _key: &str, _callback: ChangeCallback) -> ConfigResult<()> {
        Ok(())
    }

    fn unregister_change_callback(&self, _token: &str) -> ConfigResult<()> {
        Ok(())
    }

    fn shared(&self) -> SharedProvider {
        Arc::new(self.clone())
    }
}

impl fmt::Debug for StaticProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticProvider")
            .field("entries", &self.len())
            .finish()
    }
}

/// A [`StaticProvider`] viewed under a dotted key prefix
#[derive(Clone, Debug)]
pub struct ScopedStaticProvider {
    inner: StaticProvider,
    prefix: String,
}

impl ScopedStaticProvider {
    pub fn new(inner: StaticProvider, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl ConfigurationProvider for ScopedStaticProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn get_value(&self, key: &str) -> ConfigurationValue {
        self.inner.get_value(&scoped_key(&self.prefix, key))
    }

    fn scope(&self, prefix: &str) -> SharedProvider {
        Arc::new(Self::new(
            self.inner.clone(),
            join_prefix(&self.prefix, prefix),
        ))
    }

    fn register_change_callback(&self, key: &str, callback: ChangeCallback) -> ConfigResult<()> {
        self.inner.register_change_callback(key, callback)
    }

    fn unregister_change_callback(&self, token: &str) -> ConfigResult<()> {
        self.inner.unregister_change_callback(token)
    }

    fn shared(&self) -> SharedProvider {
        Arc::new(self.clone())
    }
}

#[cfg(test)]
#[path = "static_provider_tests.rs"]
mod static_provider_tests;
