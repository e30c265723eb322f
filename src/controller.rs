//! Top-level mode state machine.
//!
//! One [`Controller::step`] call is one iteration of the cooperative control
//! loop: color-button edge check, power-switch level check (which may block
//! for a whole power sweep), then motion handling. All shared state (mode,
//! palette, trigger, frame buffer) is owned here and mutated only between
//! presents, so the strip never shows a torn frame.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::animation::AnimationEngine;
use crate::button::LatchedButton;
use crate::color::Rgb;
use crate::motion::{MotionEvent, MotionSensor, classify};
use crate::palette::{IndicatorState, Palette};
use crate::power::PowerSequence;
use crate::rainbow::RainbowEffect;
use crate::sound::{AudioPlayer, SoundId};
use crate::time::Clock;

/// Hits flash white regardless of the selected palette slot.
const HIT_COLOR: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Poll interval while waiting for the power switch to be released.
const RELEASE_POLL: Duration = Duration::from_millis(200);

/// A swing or hit in flight: when it started and which color it fades from.
///
/// Created the instant motion is classified, consumed by the animation
/// engine every frame until the clip stops playing or a new trigger
/// preempts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvent {
    /// Instant the motion was classified.
    pub at: Instant,
    /// Full-intensity color the fade starts from.
    pub active: Rgb,
}

/// Controller mode.
///
/// Swing and hit carry their trigger event, so an effect mode can never
/// exist without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Off,
    Idle,
    Swing(TriggerEvent),
    Hit(TriggerEvent),
}

impl Mode {
    pub const fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }

    pub const fn is_powered(&self) -> bool {
        !self.is_off()
    }
}

/// Digital lines on the hilt: the two buttons, the indicator LEDs next to
/// the color button, and the strip enable line.
///
/// Implementations translate the active-low pulled-up inputs into plain
/// pressed/released levels.
pub trait ControlPanel {
    /// Level of the power toggle switch.
    fn power_switch_pressed(&mut self) -> bool;

    /// Level of the color-cycle button.
    fn color_button_pressed(&mut self) -> bool;

    /// Drive the three indicator lines.
    fn set_indicator(&mut self, state: IndicatorState);

    /// Drive the strip enable line.
    fn set_strip_enable(&mut self, enabled: bool);
}

/// The hardware collaborators, bundled so `step` stays callable.
pub struct Board<C, S, A, M, P> {
    pub clock: C,
    pub strip: S,
    pub audio: A,
    pub motion: M,
    pub panel: P,
}

/// The blade state machine: OFF → IDLE → SWING/HIT → IDLE.
pub struct Controller<const N: usize> {
    mode: Mode,
    palette: Palette,
    color_button: LatchedButton,
    engine: AnimationEngine<N>,
    rainbow: RainbowEffect,
}

impl<const N: usize> Controller<N> {
    pub fn new() -> Self {
        Self {
            mode: Mode::Off,
            palette: Palette::new(),
            color_button: LatchedButton::new(),
            engine: AnimationEngine::new(),
            rainbow: RainbowEffect::default(),
        }
    }

    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Last frame built for the strip.
    pub fn frame(&self) -> &[Rgb] {
        self.engine.frame()
    }

    /// One-time startup: blank the strip, light the indicator for the
    /// initial slot, and hold the strip enable line active.
    pub fn init<C, S, A, M, P>(&mut self, board: &mut Board<C, S, A, M, P>)
    where
        C: Clock,
        S: StripDriver,
        A: AudioPlayer,
        M: MotionSensor,
        P: ControlPanel,
    {
        board.panel.set_strip_enable(true);
        board.panel.set_indicator(self.palette.indicator());
        self.engine.fill(crate::color::OFF);
        self.engine.present(&mut board.strip);
    }

    /// Run one control-loop iteration.
    ///
    /// May block for the full power sequence when the power switch is
    /// pressed; everything else returns within one frame.
    pub fn step<C, S, A, M, P>(&mut self, board: &mut Board<C, S, A, M, P>)
    where
        C: Clock,
        S: StripDriver,
        A: AudioPlayer,
        M: MotionSensor,
        P: ControlPanel,
    {
        self.poll_color_button(board);

        if board.panel.power_switch_pressed() {
            self.toggle_power(board);
            while board.panel.power_switch_pressed() {
                board.clock.sleep(RELEASE_POLL);
            }
        } else if self.mode.is_powered() {
            self.poll_motion(board);
        }
    }

    /// Color-cycle button: one palette advance per press, honored only
    /// while powered. The latch state is frozen while off.
    fn poll_color_button<C, S, A, M, P>(&mut self, board: &mut Board<C, S, A, M, P>)
    where
        C: Clock,
        S: StripDriver,
        A: AudioPlayer,
        M: MotionSensor,
        P: ControlPanel,
    {
        if self.mode.is_off() {
            return;
        }
        let pressed = board.panel.color_button_pressed();
        if !self.color_button.update(pressed) {
            return;
        }

        self.palette.advance();
        board.panel.set_indicator(self.palette.indicator());
        #[cfg(feature = "esp32-log")]
        println!("changed to {}", self.palette.slot().as_str());

        if !self.palette.is_rainbow() {
            self.engine.fill(self.palette.idle_color());
            self.engine.present(&mut board.strip);
        }
    }

    /// Power switch: run the blocking sweep and flip between off and idle.
    fn toggle_power<C, S, A, M, P>(&mut self, board: &mut Board<C, S, A, M, P>)
    where
        C: Clock,
        S: StripDriver,
        A: AudioPlayer,
        M: MotionSensor,
        P: ControlPanel,
    {
        if self.mode.is_off() {
            PowerSequence::power_on().run(
                &mut self.engine,
                self.palette.idle_color(),
                &mut board.clock,
                &mut board.strip,
                &mut board.audio,
            );
            Self::play(&mut board.audio, SoundId::Idle, true);
            self.mode = Mode::Idle;
        } else {
            PowerSequence::power_off().run(
                &mut self.engine,
                self.palette.idle_color(),
                &mut board.clock,
                &mut board.strip,
                &mut board.audio,
            );
            self.mode = Mode::Off;
        }
    }

    /// Read the accelerometer, advance the token animation if active, and
    /// sequence trigger starts and fades.
    fn poll_motion<C, S, A, M, P>(&mut self, board: &mut Board<C, S, A, M, P>)
    where
        C: Clock,
        S: StripDriver,
        A: AudioPlayer,
        M: MotionSensor,
        P: ControlPanel,
    {
        let sample = board.motion.read();

        if self.palette.is_rainbow() {
            self.rainbow.render(board.clock.now(), self.engine.frame_mut());
            self.engine.present(&mut board.strip);
        }

        match classify(&self.mode, sample) {
            MotionEvent::Hit => {
                let trigger = TriggerEvent {
                    at: board.clock.now(),
                    active: HIT_COLOR,
                };
                Self::play(&mut board.audio, SoundId::Hit, false);
                self.mode = Mode::Hit(trigger);
            }
            MotionEvent::Swing => {
                let trigger = TriggerEvent {
                    at: board.clock.now(),
                    active: self.palette.active_color(),
                };
                Self::play(&mut board.audio, SoundId::Swing, false);
                self.mode = Mode::Swing(trigger);
            }
            MotionEvent::None => self.continue_trigger(board),
        }
    }

    /// Advance the fade of an in-flight trigger, or revert to idle once the
    /// clip has finished.
    fn continue_trigger<C, S, A, M, P>(&mut self, board: &mut Board<C, S, A, M, P>)
    where
        C: Clock,
        S: StripDriver,
        A: AudioPlayer,
        M: MotionSensor,
        P: ControlPanel,
    {
        let (trigger, fold) = match self.mode {
            Mode::Swing(trigger) => (trigger, true),
            Mode::Hit(trigger) => (trigger, false),
            Mode::Off | Mode::Idle => return,
        };

        if board.audio.is_playing() {
            if !self.palette.is_rainbow() {
                self.engine.trigger_frame(
                    &trigger,
                    fold,
                    self.palette.idle_color(),
                    board.clock.now(),
                );
                self.engine.present(&mut board.strip);
            }
        } else {
            Self::play(&mut board.audio, SoundId::Idle, true);
            if !self.palette.is_rainbow() {
                self.engine.fill(self.palette.idle_color());
                self.engine.present(&mut board.strip);
            }
            self.mode = Mode::Idle;
        }
    }

    /// Request playback; a missing asset is a no-op.
    fn play<A: AudioPlayer>(audio: &mut A, sound: SoundId, looped: bool) {
        #[cfg(feature = "esp32-log")]
        println!("playing {}", sound.as_str());
        let _ = audio.play(sound, looped);
    }
}

impl<const N: usize> Default for Controller<N> {
    fn default() -> Self {
        Self::new()
    }
}
