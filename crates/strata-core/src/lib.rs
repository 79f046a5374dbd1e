//! Strata Core Library
//!
//! Hierarchical configuration resolution: a chain of named providers that
//! answer "what is the value of key K" in a deterministic priority order,
//! returning the value together with its provenance and shape.

pub mod config;
pub mod error;
pub mod testutils;

// Re-export commonly used types
pub use config::{
    ChangeCallback, ConfigurationProvider, ConfigurationValue, ProviderFn, ProviderGroup,
    ScopedProvider, ScopedStaticProvider, SharedProvider, StaticProvider, ValueType,
};
pub use error::{ConfigError, ConfigResult};
