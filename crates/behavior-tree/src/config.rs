//! Scheduler configuration.

use crate::error::ConfigError;

/// Controls how often the [`Scheduler`](crate::Scheduler) ticks each agent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerConfig {
    /// Seconds an agent accumulates before its tree is ticked. `0.0` ticks
    /// every agent on every update.
    pub tick_interval: f32,
}

impl SchedulerConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICK_INTERVAL: f32 = 0.1;

    pub const fn new() -> Self {
        Self {
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
        }
    }

    pub const fn with_tick_interval(tick_interval: f32) -> Self {
        Self { tick_interval }
    }

    /// Rejects negative or non-finite intervals.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval.is_finite() && self.tick_interval >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidTickInterval(self.tick_interval))
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::new()
    }
}
