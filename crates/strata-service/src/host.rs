//! Service host and its lifecycle

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strata_core::{ConfigurationProvider, SharedProvider};
use tracing::{Span, debug, info};

use crate::error::{ServiceError, ServiceResult};
use crate::metrics::MetricsScope;
use crate::observer::{Observer, ShutdownReason};
use crate::options::ServiceOption;

/// Configuration key holding the application identifier
pub const APPLICATION_ID_KEY: &str = "applicationID";
/// Configuration key holding the owning team or person
pub const APPLICATION_OWNER_KEY: &str = "applicationOwner";

/// Lifecycle state of a service host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Uninitialized,
    Initialized,
    Running,
    Stopped,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Uninitialized => "uninitialized",
            State::Initialized => "initialized",
            State::Running => "running",
            State::Stopped => "stopped",
        };
        write!(f, "{}", name)
    }
}

/// Something options can be applied to
pub trait Host: Any + Send {
    fn name(&self) -> &str;

    fn config(&self) -> Option<&SharedProvider>;

    fn state(&self) -> State;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Concrete type name, for error reporting
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Lifecycle bookkeeping shared with the observer
struct ServiceCore {
    state: State,
    observer: Option<Arc<dyn Observer>>,
    application_id: Option<String>,
    application_owner: Option<String>,
}

/// The default service host
pub struct ServiceHost {
    name: String,
    config_provider: Option<SharedProvider>,
    logger: Span,
    scope: Option<MetricsScope>,
    observer: Option<Arc<dyn Observer>>,
    core: ServiceCore,
}

impl ServiceHost {
    /// Create a host and apply `options` in order.
    ///
    /// Fails with the first option error; later options are not applied.
    pub fn new(
        name: impl Into<String>,
        options: impl IntoIterator<Item = ServiceOption>,
    ) -> ServiceResult<Self> {
        let name = name.into();
        let mut host = Self {
            logger: tracing::info_span!("service", name = %name),
            name,
            config_provider: None,
            scope: None,
            observer: None,
            core: ServiceCore {
                state: State::Uninitialized,
                observer: None,
                application_id: None,
                application_owner: None,
            },
        };

        for option in options {
            option(&mut host as &mut dyn Host)?;
        }
        Ok(host)
    }

    /// Initialize from configuration and enter [`State::Running`].
    ///
    /// Requires a provider that resolves [`APPLICATION_ID_KEY`].
    pub fn start(&mut self) -> ServiceResult<()> {
        let span = self.logger.clone();
        let _entered = span.enter();

        if self.core.state != State::Uninitialized {
            return Err(ServiceError::InvalidTransition {
                from: self.core.state,
                to: State::Running,
            });
        }

        let provider = self
            .config_provider
            .as_ref()
            .ok_or_else(|| ServiceError::missing_config(APPLICATION_ID_KEY))?;
        let application_id = provider
            .get_value(APPLICATION_ID_KEY)
            .as_str()
            .map(String::from)
            .ok_or_else(|| ServiceError::missing_config(APPLICATION_ID_KEY))?;
        let application_owner = provider
            .get_value(APPLICATION_OWNER_KEY)
            .as_str()
            .map(String::from);

        if let Some(observer) = &self.core.observer {
            observer.on_init(&self.name)?;
        }

        self.core.application_id = Some(application_id);
        self.core.application_owner = application_owner;
        self.transition(State::Initialized);
        self.transition(State::Running);

        if let Some(scope) = &self.scope {
            scope.sub_scope("service").counter("start").inc();
        }
        info!(
            application_id = self.core.application_id.as_deref().unwrap_or_default(),
            "service started"
        );
        Ok(())
    }

    /// Leave [`State::Running`] and notify the observer
    pub fn stop(&mut self, reason: ShutdownReason) -> ServiceResult<()> {
        let span = self.logger.clone();
        let _entered = span.enter();

        if self.core.state != State::Running {
            return Err(ServiceError::InvalidTransition {
                from: self.core.state,
                to: State::Stopped,
            });
        }

        self.transition(State::Stopped);
        if let Some(observer) = &self.core.observer {
            observer.on_shutdown(&reason);
        }
        if let Some(scope) = &self.scope {
            scope.sub_scope("service").counter("stop").inc();
        }
        info!(reason = %reason, "service stopped");
        Ok(())
    }

    fn transition(&mut self, to: State) {
        let from = self.core.state;
        self.core.state = to;
        debug!(%from, %to, "state transition");
        if let Some(observer) = &self.core.observer {
            observer.on_state_change(from, to);
        }
    }

    pub fn application_id(&self) -> Option<&str> {
        self.core.application_id.as_deref()
    }

    pub fn application_owner(&self) -> Option<&str> {
        self.core.application_owner.as_deref()
    }

    pub fn logger(&self) -> &Span {
        &self.logger
    }

    pub fn metrics(&self) -> Option<&MetricsScope> {
        self.scope.as_ref()
    }

    pub fn observer(&self) -> Option<&Arc<dyn Observer>> {
        self.observer.as_ref()
    }

    pub(crate) fn set_config_provider(&mut self, provider: SharedProvider) {
        self.config_provider = Some(provider);
    }

    pub(crate) fn set_logger(&mut self, logger: Span) {
        self.logger = logger;
    }

    pub(crate) fn set_metrics_scope(&mut self, scope: MetricsScope) {
        self.scope = Some(scope);
    }

    pub(crate) fn set_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observer = Some(Arc::clone(&observer));
        self.core.observer = Some(observer);
    }
}

impl Host for ServiceHost {
    fn name(&self) -> &str {
        &self.name
    }

    fn config(&self) -> Option<&SharedProvider> {
        self.config_provider.as_ref()
    }

    fn state(&self) -> State {
        self.core.state
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for ServiceHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHost")
            .field("name", &self.name)
            .field("config", &self.config_provider.as_ref().map(|p| p.name()))
            .field("state", &self.core.state)
            .field("application_id", &self.core.application_id)
            .field("has_metrics", &self.scope.is_some())
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
