//! Motion classification.
//!
//! Converts a polled 3-axis acceleration sample into a discrete event by
//! comparing the squared magnitude against two thresholds. The vertical axis
//! is ignored (the sensor board is mounted sideways to the blade), and the
//! square root is skipped since only threshold comparisons are needed.

use crate::controller::Mode;

/// Squared acceleration above which any powered mode registers a hit.
pub const HIT_THRESHOLD: f32 = 350.0;

/// Squared acceleration above which the idle mode registers a swing.
pub const SWING_THRESHOLD: f32 = 125.0;

/// One polled accelerometer reading, in m/s² per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Abstract polled accelerometer.
///
/// Implementations own the bus and the configured ±4g range; a failed
/// sensor is a startup-time fatal condition on the board side, so the poll
/// itself is infallible.
pub trait MotionSensor {
    /// Read the current acceleration.
    fn read(&mut self) -> AccelSample;
}

/// Discrete motion event derived from one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEvent {
    None,
    Swing,
    Hit,
}

/// Classify one acceleration sample.
///
/// A hit is recognized from any mode; a swing only from idle, so an effect
/// already in flight is never re-triggered by its own motion. Hit takes
/// precedence when both thresholds are exceeded.
pub fn classify(mode: &Mode, sample: AccelSample) -> MotionEvent {
    let total = sample.x * sample.x + sample.z * sample.z;
    if total > HIT_THRESHOLD {
        MotionEvent::Hit
    } else if matches!(mode, Mode::Idle) && total > SWING_THRESHOLD {
        MotionEvent::Swing
    } else {
        MotionEvent::None
    }
}
