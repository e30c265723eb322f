//! Shared fake hardware for integration tests.
//!
//! Time is scripted: the clock advances a fixed step on every `now` call
//! and by the requested amount on every `sleep`, so blocking sequences
//! terminate deterministically without real waiting.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;

use embassy_time::{Duration, Instant};
use motion_saber::{
    AccelSample, AssetMissing, AudioPlayer, Board, Clock, ControlPanel, IndicatorState,
    MotionSensor, Rgb, SoundId, StripDriver,
};

/// Starts at one second so backward latency nudges never underflow.
const CLOCK_BASE_MICROS: u64 = 1_000_000;

pub struct TestClock {
    now: Cell<u64>,
    step: u64,
}

impl TestClock {
    pub fn new(step_micros: u64) -> Self {
        Self {
            now: Cell::new(CLOCK_BASE_MICROS),
            step: step_micros,
        }
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        let t = self.now.get();
        self.now.set(t + self.step);
        Instant::from_micros(t)
    }

    fn sleep(&mut self, duration: Duration) {
        self.now.set(self.now.get() + duration.as_micros());
    }
}

/// Records every presented frame.
#[derive(Default)]
pub struct FrameRecorder {
    pub frames: Vec<Vec<Rgb>>,
}

impl FrameRecorder {
    pub fn last(&self) -> &[Rgb] {
        self.frames.last().expect("no frame presented")
    }

    pub fn lit_count(frame: &[Rgb]) -> usize {
        frame
            .iter()
            .filter(|c| c.r != 0 || c.g != 0 || c.b != 0)
            .count()
    }

    pub fn is_uniform(frame: &[Rgb]) -> bool {
        frame.windows(2).all(|w| w[0] == w[1])
    }
}

impl StripDriver for FrameRecorder {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

/// Fire-and-forget player that reports "playing" for a fixed number of
/// polls after each accepted request.
pub struct ScriptedAudio {
    pub plays: Vec<(SoundId, bool)>,
    pub missing: Vec<SoundId>,
    ticks_per_play: usize,
    remaining: Cell<usize>,
}

impl ScriptedAudio {
    pub fn new(ticks_per_play: usize) -> Self {
        Self {
            plays: Vec::new(),
            missing: Vec::new(),
            ticks_per_play,
            remaining: Cell::new(0),
        }
    }

    pub fn last_play(&self) -> (SoundId, bool) {
        *self.plays.last().expect("no playback requested")
    }
}

impl AudioPlayer for ScriptedAudio {
    fn play(&mut self, sound: SoundId, looped: bool) -> Result<(), AssetMissing> {
        if self.missing.contains(&sound) {
            return Err(AssetMissing);
        }
        self.plays.push((sound, looped));
        self.remaining.set(self.ticks_per_play);
        Ok(())
    }

    fn is_playing(&self) -> bool {
        let remaining = self.remaining.get();
        if remaining == 0 {
            return false;
        }
        self.remaining.set(remaining - 1);
        true
    }
}

/// Buttons fed from scripted level queues; an empty queue reads released.
#[derive(Default)]
pub struct ScriptedPanel {
    pub power_levels: VecDeque<bool>,
    pub color_levels: VecDeque<bool>,
    pub indicator: Option<IndicatorState>,
    pub strip_enabled: Option<bool>,
}

impl ScriptedPanel {
    pub fn queue_power(&mut self, levels: &[bool]) {
        self.power_levels.extend(levels);
    }

    pub fn queue_color(&mut self, levels: &[bool]) {
        self.color_levels.extend(levels);
    }
}

impl ControlPanel for ScriptedPanel {
    fn power_switch_pressed(&mut self) -> bool {
        self.power_levels.pop_front().unwrap_or(false)
    }

    fn color_button_pressed(&mut self) -> bool {
        self.color_levels.pop_front().unwrap_or(false)
    }

    fn set_indicator(&mut self, state: IndicatorState) {
        self.indicator = Some(state);
    }

    fn set_strip_enable(&mut self, enabled: bool) {
        self.strip_enabled = Some(enabled);
    }
}

/// Accelerometer fed from a sample queue; an empty queue reads at rest.
#[derive(Default)]
pub struct ScriptedMotion {
    pub samples: VecDeque<AccelSample>,
}

impl ScriptedMotion {
    pub fn queue(&mut self, samples: &[(f32, f32, f32)]) {
        self.samples
            .extend(samples.iter().map(|&(x, y, z)| AccelSample { x, y, z }));
    }
}

impl MotionSensor for ScriptedMotion {
    fn read(&mut self) -> AccelSample {
        self.samples.pop_front().unwrap_or(AccelSample {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        })
    }
}

pub type TestBoard = Board<TestClock, FrameRecorder, ScriptedAudio, ScriptedMotion, ScriptedPanel>;

/// A board with a 10 ms clock step and three playback polls per clip.
pub fn test_board() -> TestBoard {
    Board {
        clock: TestClock::new(10_000),
        strip: FrameRecorder::default(),
        audio: ScriptedAudio::new(3),
        motion: ScriptedMotion::default(),
        panel: ScriptedPanel::default(),
    }
}
