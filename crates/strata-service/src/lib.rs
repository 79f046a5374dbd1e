//! Strata Service Host
//!
//! Attaches a configuration provider, a logger span, a metrics scope and a
//! lifecycle observer to a service host through functional options.
//!
//! ```
//! use strata_core::testutils::static_app_data;
//! use strata_service::{ServiceHost, with_configuration};
//!
//! let provider = std::sync::Arc::new(static_app_data(Some("billing")));
//! let mut host = ServiceHost::new("billing", vec![with_configuration(provider)])?;
//! host.start()?;
//! assert_eq!(host.application_id(), Some("billing"));
//! # Ok::<(), strata_service::ServiceError>(())
//! ```

pub mod error;
pub mod host;
pub mod metrics;
pub mod observer;
pub mod options;

pub use error::{ServiceError, ServiceResult};
pub use host::{Host, ServiceHost, State};
pub use metrics::{Counter, Gauge, MetricsScope, MetricValue};
pub use observer::{Observer, ShutdownReason};
pub use options::{
    ServiceOption, with_configuration, with_logger, with_metrics_root_scope, with_observer,
};
