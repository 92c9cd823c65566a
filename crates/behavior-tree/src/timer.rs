//! Cooldown timer state.
//!
//! Each [`Cooldown`](crate::Cooldown) owns one [`CooldownTimer`], so timer
//! state lives and dies with its node and there is no table to keep in sync.

/// Elapsed-time bookkeeping for a cooldown gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CooldownTimer {
    threshold: f32,
    elapsed: f32,
    cooling: bool,
}

impl CooldownTimer {
    /// Creates an idle timer. Negative or non-finite thresholds become `0.0`.
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.max(0.0)
        } else {
            0.0
        };
        Self {
            threshold,
            elapsed: 0.0,
            cooling: false,
        }
    }

    /// Cooldown length in seconds.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Seconds accumulated since cooling started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_cooling(&self) -> bool {
        self.cooling
    }

    /// Starts a fresh cooling period.
    pub fn start(&mut self) {
        self.cooling = true;
        self.elapsed = 0.0;
    }

    /// Returns the timer to idle.
    pub fn clear(&mut self) {
        self.cooling = false;
        self.elapsed = 0.0;
    }

    /// Adds `dt` to a cooling timer and reports whether the gate is still
    /// closed. A timer that reaches its threshold is cleared in the same call.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.cooling {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed < self.threshold {
            return true;
        }

        self.clear();
        false
    }
}
