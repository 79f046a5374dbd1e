//! Configuration providers and priority-ordered resolution
//!
//! Every read goes through [`ConfigurationProvider::get_value`] and yields a
//! [`ConfigurationValue`] carrying the payload, whether it was found, whether
//! it is a fill-in default, and the provider that answered.
//!
//! Providers compose:
//! - [`StaticProvider`] serves an in-memory table.
//! - [`ScopedProvider`] / [`ScopedStaticProvider`] prefix keys with a dotted path.
//! - [`ProviderGroup`] consults its members in priority order, last added first.

mod provider;
mod provider_group;
mod scoped_provider;
mod static_provider;
mod value;
mod value_type;

pub use provider::{ChangeCallback, ConfigurationProvider, ProviderFn, SharedProvider};
pub use provider_group::ProviderGroup;
pub use scoped_provider::{ScopedProvider, scoped_key};
pub use static_provider::{ScopedStaticProvider, StaticProvider, static_provider};
pub use value::ConfigurationValue;
pub use value_type::ValueType;
