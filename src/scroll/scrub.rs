use crate::foundation::error::{TimelineError, TimelineResult};

/// Exponential smoothing of scroll progress.
///
/// The rendered value moves toward the raw target by `1 - exp(-dt / tau)` of the remaining gap
/// each frame, with `tau = lag / SETTLE_TIME_CONSTANTS`. The step factor stays in `[0, 1)`, so
/// the value never overshoots. Once within [`Scrub::SNAP_EPSILON`] it snaps to the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrub {
    lag_secs: f64,
    current: f64,
    target: f64,
}

impl Scrub {
    /// Number of time constants that fit in the configured lag (about 99.3% catch-up).
    pub const SETTLE_TIME_CONSTANTS: f64 = 5.0;
    /// Gap below which the smoothed value lands exactly on the target.
    pub const SNAP_EPSILON: f64 = 1e-4;

    /// Create a smoother with `lag_secs` of catch-up time; `0` follows the target instantly.
    pub fn new(lag_secs: f64) -> TimelineResult<Self> {
        if !lag_secs.is_finite() || lag_secs < 0.0 {
            return Err(TimelineError::scroll("scrub lag must be finite and >= 0"));
        }
        Ok(Self {
            lag_secs,
            current: 0.0,
            target: 0.0,
        })
    }

    /// Configured lag in seconds.
    pub fn lag_secs(&self) -> f64 {
        self.lag_secs
    }

    /// Smoothed value.
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Raw value being chased.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Return `true` when the smoothed value equals the target.
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Update the raw value.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
        if self.lag_secs == 0.0 {
            self.current = target;
        }
    }

    /// Move both the smoothed and raw value to `value` without easing.
    pub fn jump_to(&mut self, value: f64) {
        self.current = value;
        self.target = value;
    }

    /// Advance by `dt` seconds and return the smoothed value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if self.lag_secs == 0.0 {
            self.current = self.target;
            return self.current;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let tau = self.lag_secs / Self::SETTLE_TIME_CONSTANTS;
        let alpha = 1.0 - (-dt / tau).exp();
        self.current += (self.target - self.current) * alpha;
        if (self.target - self.current).abs() < Self::SNAP_EPSILON {
            self.current = self.target;
        }
        self.current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/scrub.rs"]
mod tests;
