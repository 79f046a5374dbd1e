//! Dotted-prefix metric scopes over a shared registry

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use strata_core::config::scoped_key;

use super::counter::Counter;
use super::gauge::Gauge;

/// Current value of a registered metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    Counter(u64),
    Gauge(f64),
}

#[derive(Debug, Default)]
struct Registry {
    counters: RwLock<HashMap<String, Arc<Counter>>>,
    gauges: RwLock<HashMap<String, Arc<Gauge>>>,
}

/// Handle for creating and reading metrics under a name prefix
#[derive(Debug, Clone)]
pub struct MetricsScope {
    prefix: String,
    registry: Arc<Registry>,
}

impl MetricsScope {
    /// A root scope with no prefix
    pub fn root() -> Self {
        Self::with_prefix("")
    }

    /// A root scope whose metrics all start with `prefix`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            registry: Arc::new(Registry::default()),
        }
    }

    /// A child scope sharing this scope's registry
    pub fn sub_scope(&self, name: &str) -> Self {
        Self {
            prefix: scoped_key(&self.prefix, name),
            registry: Arc::clone(&self.registry),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get or create the counter `name` in this scope
    pub fn counter(&self, name: &str) -> Arc<Counter> {
        let full = scoped_key(&self.prefix, name);
        if let Some(counter) = self.registry.counters.read().get(&full) {
            return Arc::clone(counter);
        }
        let mut counters = self.registry.counters.write();
        Arc::clone(
            counters
                .entry(full.clone())
                .or_insert_with(|| Arc::new(Counter::new(full))),
        )
    }

    /// Get or create the gauge `name` in this scope
    pub fn gauge(&self, name: &str) -> Arc<Gauge> {
        let full = scoped_key(&self.prefix, name);
        if let Some(gauge) = self.registry.gauges.read().get(&full) {
            return Arc::clone(gauge);
        }
        let mut gauges = self.registry.gauges.write();
        Arc::clone(
            gauges
                .entry(full.clone())
                .or_insert_with(|| Arc::new(Gauge::new(full))),
        )
    }

    /// Every metric in the shared registry, keyed by full name
    pub fn snapshot(&self) -> BTreeMap<String, MetricValue> {
        let mut out = BTreeMap::new();
        for (name, counter) in self.registry.counters.read().iter() {
            out.insert(name.clone(), MetricValue::Counter(counter.get()));
        }
        for (name, gauge) in self.registry.gauges.read().iter() {
            out.insert(name.clone(), MetricValue::Gauge(gauge.get()));
        }
        out
    }
}

impl Default for MetricsScope {
    fn default() -> Self {
        Self::root()
    }
}
