//! Gauges: point-in-time values that move both ways

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// A floating-point gauge.
///
/// The value is kept as raw `f64` bits, so no precision is lost on update.
/// Non-finite inputs are ignored and leave the current value in place.
#[derive(Debug)]
pub struct Gauge {
    name: String,
    bits: AtomicU64,
}

impl Gauge {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bits: AtomicU64::new(0f64.to_bits()),
        }
    }

    /// Replace the value; returns `false` if `value` was not finite
    pub fn set(&self, value: f64) -> bool {
        if !self.accepts(value) {
            return false;
        }
        self.bits.store(value.to_bits(), Ordering::Relaxed);
        true
    }

    pub fn inc_by(&self, n: f64) -> bool {
        self.update(n)
    }

    pub fn dec_by(&self, n: f64) -> bool {
        self.update(-n)
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, delta: f64) -> bool {
        if !self.accepts(delta) {
            return false;
        }
        self.bits
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                let next = f64::from_bits(bits) + delta;
                next.is_finite().then(|| next.to_bits())
            })
            .is_ok()
    }

    fn accepts(&self, value: f64) -> bool {
        if value.is_finite() {
            return true;
        }
        debug!(gauge = %self.name, value, "ignoring non-finite gauge update");
        false
    }
}
