//! Power-on / power-off sweep.
//!
//! A blocking, timed pixel sweep synchronized to the estimated duration of
//! the accompanying sound. The lit-pixel count follows a square-root easing
//! of elapsed time, so the sweep starts fast and lands softly; presentation
//! latency is compensated by nudging the start time backward after every
//! present.

use embassy_time::Duration;
use libm::{roundf, sqrtf};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::animation::AnimationEngine;
use crate::color::{self, Rgb};
use crate::sound::{AudioPlayer, SoundId};
use crate::time::{Clock, as_secs_f32};

/// Estimated duration of the `on` clip.
pub const POWER_ON_DURATION: Duration = Duration::from_millis(1_700);

/// Estimated duration of the `off` clip.
pub const POWER_OFF_DURATION: Duration = Duration::from_millis(1_150);

/// Strip presents disturb the monotonic clock slightly because interrupts
/// are off during the transfer; each present costs about this much per
/// pixel, and the start time is moved back to match.
const PRESENT_LATENCY_PER_PIXEL: Duration = Duration::from_micros(30);

/// Poll interval while draining the tail of the clip.
const PLAYBACK_POLL: Duration = Duration::from_millis(2);

/// One configured power sweep.
#[derive(Debug, Clone, Copy)]
pub struct PowerSequence {
    sound: SoundId,
    duration: Duration,
    reverse: bool,
}

impl PowerSequence {
    /// Ignition: sweep from the hilt outward into the idle color.
    pub const fn power_on() -> Self {
        Self {
            sound: SoundId::PowerOn,
            duration: POWER_ON_DURATION,
            reverse: false,
        }
    }

    /// Retraction: sweep from the tip inward to off.
    pub const fn power_off() -> Self {
        Self {
            sound: SoundId::PowerOff,
            duration: POWER_OFF_DURATION,
            reverse: true,
        }
    }

    /// Run the sweep to completion.
    ///
    /// Blocks until the animation time is exhausted and the clip has
    /// finished playing. A missing clip is skipped silently; the sweep
    /// still runs on its own timer.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn run<const N: usize, C, S, A>(
        &self,
        engine: &mut AnimationEngine<N>,
        idle: Rgb,
        clock: &mut C,
        strip: &mut S,
        audio: &mut A,
    ) where
        C: Clock,
        S: StripDriver,
        A: AudioPlayer,
    {
        let mut prev = if self.reverse { N } else { 0 };
        let mut start = clock.now();

        #[cfg(feature = "esp32-log")]
        println!("playing {}", self.sound.as_str());
        let _ = audio.play(self.sound, false);

        let duration_secs = as_secs_f32(self.duration);
        let latency = PRESENT_LATENCY_PER_PIXEL * N as u32;

        loop {
            let elapsed = as_secs_f32(clock.now().saturating_duration_since(start));
            if elapsed > duration_secs {
                break;
            }
            let mut fraction = elapsed / duration_secs;
            if self.reverse {
                fraction = 1.0 - fraction;
            }
            fraction = sqrtf(fraction);
            let threshold = (roundf(N as f32 * fraction) as usize).min(N);

            if threshold != prev {
                if self.reverse {
                    engine.fill_range(threshold..prev, color::OFF);
                } else {
                    engine.fill_range(prev..threshold, idle);
                }
                engine.present(strip);
                start = start.checked_sub(latency).unwrap_or(start);
                prev = threshold;
            }
        }

        // Timing jitter may end the loop short of the last pixel; force the
        // final frame either way.
        if self.reverse {
            engine.fill(color::OFF);
        } else {
            engine.fill(idle);
        }
        engine.present(strip);

        while audio.is_playing() {
            clock.sleep(PLAYBACK_POLL);
        }
    }
}
