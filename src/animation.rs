//! Per-frame strip animation.
//!
//! [`AnimationEngine`] owns the frame buffer mirroring the physical strip.
//! Frames are written wholesale or in contiguous ranges and then presented
//! atomically; the buffer is never left half-updated across a controller
//! iteration without a present.

use core::ops::Range;

use embassy_time::Instant;
use libm::fabsf;

use crate::StripDriver;
use crate::color::{self, Rgb, blend};
use crate::controller::TriggerEvent;
use crate::time::as_secs_f32;

/// Frame buffer plus the fade-back-to-idle logic.
#[derive(Debug, Clone)]
pub struct AnimationEngine<const N: usize> {
    frame: [Rgb; N],
}

impl<const N: usize> AnimationEngine<N> {
    pub fn new() -> Self {
        Self {
            frame: [color::OFF; N],
        }
    }

    /// Last-built frame.
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    /// Mutable frame access for effects that paint the strip directly.
    pub fn frame_mut(&mut self) -> &mut [Rgb] {
        &mut self.frame
    }

    /// Fill the whole frame with one color.
    pub fn fill(&mut self, color: Rgb) {
        self.frame.fill(color);
    }

    /// Fill a contiguous pixel range, clamped to the strip.
    pub fn fill_range(&mut self, range: Range<usize>, color: Rgb) {
        let start = range.start.min(N);
        let end = range.end.min(N);
        if start < end {
            self.frame[start..end].fill(color);
        }
    }

    /// Present the frame to the strip hardware.
    pub fn present<S: StripDriver>(&self, strip: &mut S) {
        strip.write(&self.frame);
    }

    /// Build one trigger-fade frame.
    ///
    /// The blend weight is the time since the trigger, in seconds. With
    /// `fold` set (swing) the weight ramps in and back out symmetrically
    /// around the effect's midpoint; without it (hit) the active color
    /// decays monotonically toward idle.
    pub fn trigger_frame(&mut self, trigger: &TriggerEvent, fold: bool, idle: Rgb, now: Instant) {
        let elapsed = as_secs_f32(now.saturating_duration_since(trigger.at));
        let weight = if fold {
            fabsf(0.5 - elapsed) * 2.0
        } else {
            elapsed
        };
        self.fill(blend(trigger.active, idle, weight));
    }
}

impl<const N: usize> Default for AnimationEngine<N> {
    fn default() -> Self {
        Self::new()
    }
}
