//! Metrics scopes handed to a service host
//!
//! A [`MetricsScope`] names metrics with a dotted prefix; sub-scopes share
//! one registry with their root, so a snapshot from any scope sees them all.

mod counter;
mod gauge;
mod scope;

pub use counter::Counter;
pub use gauge::Gauge;
pub use scope::{MetricValue, MetricsScope};
