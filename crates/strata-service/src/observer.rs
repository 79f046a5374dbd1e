//! Lifecycle observer for service hosts

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ServiceResult;
use crate::host::State;

/// Why a service stopped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShutdownReason {
    pub reason: String,
    pub exit_code: i32,
}

impl ShutdownReason {
    pub fn new(reason: impl Into<String>, exit_code: i32) -> Self {
        Self {
            reason: reason.into(),
            exit_code,
        }
    }

    /// A clean, requested shutdown
    pub fn requested() -> Self {
        Self::new("shutdown requested", 0)
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (exit code {})", self.reason, self.exit_code)
    }
}

/// Receives lifecycle notifications from a service host.
///
/// `on_init` may veto startup by returning an error; the host then stays
/// uninitialized.
pub trait Observer: Send + Sync {
    fn on_init(&self, service_name: &str) -> ServiceResult<()>;

    fn on_state_change(&self, old: State, new: State);

    fn on_shutdown(&self, reason: &ShutdownReason);
}
