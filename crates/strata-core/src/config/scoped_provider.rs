//! Key-prefixing decorator for any provider
//!
//! A scoped provider with prefix `db` asked for `host` looks up `db.host`
//! in the provider it wraps. Dots are not escaped: prefix `a.b` with key `c`
//! and prefix `a` with key `b.c` address the same entry.

use std::fmt;
use std::sync::Arc;

use super::provider::{ChangeCallback, ConfigurationProvider, SharedProvider};
use super::value::ConfigurationValue;
use crate::error::ConfigResult;

/// Prefix `key` with `prefix` and a single dot. An empty prefix is a passthrough.
pub fn scoped_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Combine an outer prefix with a nested one, outer first
pub(crate) fn join_prefix(outer: &str, inner: &str) -> String {
    match (outer.is_empty(), inner.is_empty()) {
        (true, _) => inner.to_string(),
        (false, true) => outer.to_string(),
        (false, false) => format!("{}.{}", outer, inner),
    }
}

/// Wraps a provider and prefixes every lookup
#[derive(Clone)]
pub struct ScopedProvider {
    inner: SharedProvider,
    prefix: String,
}

impl ScopedProvider {
    pub fn new(prefix: impl Into<String>, inner: SharedProvider) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn inner(&self) -> &SharedProvider {
        &self.inner
    }
}

impl ConfigurationProvider for ScopedProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn get_value(&self, key: &str) -> ConfigurationValue {
        self.inner.get_value(&scoped_key(&self.prefix, key))
    }

    fn scope(&self, prefix: &str) -> SharedProvider {
        Arc::new(ScopedProvider::new(prefix, self.shared()))
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

impl fmt::Debug for ScopedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedProvider")
            .field("prefix", &self.prefix)
            .field("inner", &self.inner.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaticProvider;
    use serde_json::json;

    fn backend() -> SharedProvider {
        Arc::new(StaticProvider::from_pairs([
            ("db.host", json!("localhost")),
            ("a.b.k", json!("nested")),
            ("k", json!("bare")),
        ]))
    }

    #[test]
    fn test_scoped_key() {
        assert_eq!(scoped_key("db", "host"), "db.host");
        assert_eq!(scoped_key("", "host"), "host");
        assert_eq!(scoped_key("a.b", "c.d"), "a.b.c.d");
    }

    #[test]
    fn test_join_prefix() {
        assert_eq!(join_prefix("a", "b"), "a.b");
        assert_eq!(join_prefix("", "b"), "b");
        assert_eq!(join_prefix("a", ""), "a");
        assert_eq!(join_prefix("", ""), "");
    }

    #[test]
    fn test_get_value_prefixes_key() {
        let scoped = ScopedProvider::new("db", backend());
        let value = scoped.get_value("host");
        assert!(value.found());
        assert_eq!(value.as_str(), Some("localhost"));
        assert_eq!(value.key(), "db.host");
    }

    #[test]
    fn test_empty_prefix_is_passthrough() {
        let scoped = ScopedProvider::new("", backend());
        assert_eq!(scoped.get_value("k").as_str(), Some("bare"));
    }

    #[test]
    fn test_nested_scopes_concatenate_outer_to_inner() {
        let scoped = ScopedProvider::new("a", backend()).scope("b");
        let value = scoped.get_value("k");
        assert_eq!(value.as_str(), Some("nested"));
        assert_eq!(value.key(), "a.b.k");
    }

    #[test]
    fn test_dots_are_not_escaped() {
        // Known limitation: prefix/key boundaries are lexical only.
        let by_prefix = ScopedProvider::new("a.b", backend());
        let by_key = ScopedProvider::new("a", backend());
        assert_eq!(by_prefix.get_value("k").as_str(), Some("nested"));
        assert_eq!(by_key.get_value("b.k").as_str(), Some("nested"));
    }

    #[test]
    fn test_name_and_callbacks_delegate() {
        let scoped = ScopedProvider::new("db", backend());
        assert_eq!(scoped.name(), "static");
        let callback: ChangeCallback = Arc::new(|_: &str, _: &str, _: &serde_json::Value| {});
        assert!(scoped.register_change_callback("host", callback).is_ok());
        assert!(scoped.unregister_change_callback("token").is_ok());
    }
}
