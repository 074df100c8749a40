//! Bounded integer stat used for boredom, hunger and health.

use serde::{Deserialize, Serialize};

/// A value held in `[0, max]`. Clamping happens on write, never on read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatGauge {
    value: i32,
    max: i32,
}

impl StatGauge {
    /// Creates a gauge with the given ceiling; the initial value is clamped.
    pub fn new(value: i32, max: i32) -> Self {
        debug_assert!(max > 0, "gauge ceiling must be positive");
        let mut gauge = Self { value: 0, max };
        gauge.set(value);
        gauge
    }

    /// Gauge starting at zero.
    pub fn empty(max: i32) -> Self {
        Self::new(0, max)
    }

    /// Gauge starting at its ceiling.
    pub fn full(max: i32) -> Self {
        Self::new(max, max)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Stores `new_value` clamped to `[0, max]`.
    pub fn set(&mut self, new_value: i32) {
        self.value = new_value.clamp(0, self.max);
    }

    /// Same as `set(value + delta)`; saturates instead of overflowing.
    pub fn adjust(&mut self, delta: i32) {
        self.set(self.value.saturating_add(delta));
    }

    /// `value * 100 / max`, truncated.
    pub fn percentage(&self) -> i32 {
        self.value * 100 / self.max
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}
