//! Token rainbow animation.
//!
//! A palette-independent cycling effect that owns the strip while the
//! rainbow slot is selected. The full hue wheel is spread across the strip
//! and rotated by wall-clock time, so the animation stays smooth regardless
//! of loop iteration rate.

use embassy_time::{Duration, Instant};
use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

const DEFAULT_CYCLE_MS: u64 = 2_000;

/// Rainbow wheel effect driven by elapsed wall-clock time.
#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Duration of one complete hue rotation
    cycle_duration: Duration,
    /// Brightness value (0-255)
    value: u8,
    /// Saturation (0-255)
    saturation: u8,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self {
            cycle_duration: Duration::from_millis(DEFAULT_CYCLE_MS),
            value: 255,
            saturation: 255,
        }
    }
}

impl RainbowEffect {
    /// Set the cycle duration
    #[must_use]
    pub fn with_cycle_duration(mut self, duration: Duration) -> Self {
        self.cycle_duration = duration;
        self
    }

    /// Set the brightness value
    #[must_use]
    pub fn with_value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }

    /// Render a single frame
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let cycle_ms = self.cycle_duration.as_millis().max(1);
        let progress_ms = now.as_millis() % cycle_ms;
        let base_hue = ((progress_ms * 255) / cycle_ms) as u8;

        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let offset = ((i * 255) / len) as u8;
            *led = hsv2rgb(Hsv {
                hue: base_hue.wrapping_add(offset),
                sat: self.saturation,
                val: self.value,
            });
        }
    }
}
