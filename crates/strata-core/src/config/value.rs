//! Result record returned by every configuration read

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::provider::SharedProvider;
use super::value_type::ValueType;

/// Outcome of resolving a single key.
///
/// Built fresh for every lookup. The only field that changes after
/// construction is `root`, which a composite provider resets to itself so
/// that later traversal is scoped relative to the composite.
#[derive(Clone)]
pub struct ConfigurationValue {
    root: SharedProvider,
    key: String,
    value: Option<Value>,
    found: bool,
    is_default: bool,
    value_type: ValueType,
    timestamp: DateTime<Utc>,
}

impl ConfigurationValue {
    /// Create a value resolved by `root`.
    ///
    /// The type tag is derived from `value`. When `timestamp` is `None` the
    /// current time is recorded.
    pub fn new(
        root: SharedProvider,
        key: impl Into<String>,
        value: Option<Value>,
        found: bool,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        let value_type = ValueType::of(value.as_ref());
        Self {
            root,
            key: key.into(),
            value,
            found,
            is_default: false,
            value_type,
            timestamp: timestamp.unwrap_or_else(Utc::now),
        }
    }

    /// A value for a key that `root` does not have
    pub fn missing(root: SharedProvider, key: impl Into<String>) -> Self {
        Self::new(root, key, None, false, None)
    }

    /// Fill in `default` when the key was not found.
    ///
    /// Found values are returned unchanged; otherwise the result carries
    /// `default` and reports `is_default() == true`.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        if self.found {
            return self;
        }
        let default = default.into();
        self.value_type = ValueType::of(Some(&default));
        self.value = Some(default);
        self.is_default = true;
        self
    }

    /// Replace the provider considered authoritative for this value
    pub fn with_root(mut self, root: SharedProvider) -> Self {
        self.root = root;
        self
    }

    /// Whether there is anything to read: real data or a filled-in default
    pub fn has_value(&self) -> bool {
        self.found || self.is_default
    }

    /// Whether the payload is a fill-in default rather than backend data
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Whether the key existed in the resolving backend
    pub fn found(&self) -> bool {
        self.found
    }

    /// The key as the answering backend resolved it.
    ///
    /// For a lookup through a scoped provider this is the full prefixed key
    /// (`db.host` for `scope("db").get_value("host")`), so that `root` and
    /// `key` together always address the entry. Composites pass it through.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn root(&self) -> &SharedProvider {
        &self.root
    }

    /// Name of the provider this value is rooted at
    pub fn source(&self) -> &str {
        self.root.name()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(Value::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_ref().and_then(Value::as_bool)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_ref().and_then(Value::as_i64)
    }

    /// Float payloads only; integers are not widened
    pub fn as_f64(&self) -> Option<f64> {
        match self.value_type {
            ValueType::Float => self.value.as_ref().and_then(Value::as_f64),
            _ => None,
        }
    }

    /// Sorted top-level keys of a dictionary payload
    pub fn child_keys(&self) -> Option<Vec<String>> {
        let map = self.value.as_ref()?.as_object()?;
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        Some(keys)
    }
}

impl fmt::Debug for ConfigurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationValue")
            .field("root", &self.root.name())
            .field("key", &self.key)
            .field("value", &self.value)
            .field("found", &self.found)
            .field("is_default", &self.is_default)
            .field("value_type", &self.value_type)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod value_tests;
