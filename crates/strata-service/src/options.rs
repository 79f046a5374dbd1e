//! Functional options for configuring a service host
//!
//! Each option targets [`ServiceHost`]. Applied to any other [`Host`]
//! implementation it fails with [`ServiceError::UnsupportedHost`] and leaves
//! the host unchanged.

use std::sync::Arc;

use strata_core::SharedProvider;
use tracing::Span;

use crate::error::{ServiceError, ServiceResult};
use crate::host::{Host, ServiceHost};
use crate::metrics::MetricsScope;
use crate::observer::Observer;

/// A deferred change to a host
pub type ServiceOption = Box<dyn FnOnce(&mut dyn Host) -> ServiceResult<()> + Send>;

fn service_host(host: &mut dyn Host) -> ServiceResult<&mut ServiceHost> {
    let found = host.type_name();
    host.as_any_mut()
        .downcast_mut::<ServiceHost>()
        .ok_or_else(|| ServiceError::unsupported_host(std::any::type_name::<ServiceHost>(), found))
}

/// Attach a configuration provider
pub fn with_configuration(provider: SharedProvider) -> ServiceOption {
    Box::new(move |host: &mut dyn Host| -> ServiceResult<()> {
        service_host(host)?.set_config_provider(provider);
        Ok(())
    })
}

/// Use `logger` as the span lifecycle events are recorded in
pub fn with_logger(logger: Span) -> ServiceOption {
    Box::new(move |host: &mut dyn Host| -> ServiceResult<()> {
        service_host(host)?.set_logger(logger);
        Ok(())
    })
}

/// Attach a metrics root scope
pub fn with_metrics_root_scope(scope: MetricsScope) -> ServiceOption {
    Box::new(move |host: &mut dyn Host| -> ServiceResult<()> {
        service_host(host)?.set_metrics_scope(scope);
        Ok(())
    })
}

/// Attach a lifecycle observer
pub fn with_observer(observer: Arc<dyn Observer>) -> ServiceOption {
    Box::new(move |host: &mut dyn Host| -> ServiceResult<()> {
        service_host(host)?.set_observer(observer);
        Ok(())
    })
}
