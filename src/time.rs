//! Time source abstraction.
//!
//! Every timed behavior takes its instants from a [`Clock`] so the whole
//! control loop can run against scripted time in tests. The two blocking
//! waits the controller performs (switch release, playback drain) go
//! through [`Clock::sleep`] rather than spinning.

use embassy_time::{Duration, Instant};

/// Monotonic time source with a cooperative sleep.
pub trait Clock {
    /// Current monotonic instant.
    fn now(&self) -> Instant;

    /// Block for at least `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Duration as fractional seconds.
#[allow(clippy::cast_precision_loss)]
pub fn as_secs_f32(duration: Duration) -> f32 {
    duration.as_micros() as f32 / 1_000_000.0
}
