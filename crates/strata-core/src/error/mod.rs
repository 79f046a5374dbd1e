//! Error types for Strata configuration providers
//!
//! A missing key is never an error: absence is reported through
//! [`ConfigurationValue::has_value`](crate::config::ConfigurationValue::has_value).
//! Errors only arise from change-subscription management and provider
//! construction.

mod constructors;
mod types;

pub use types::{ConfigError, ConfigResult};
