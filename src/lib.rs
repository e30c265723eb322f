#![no_std]

pub mod animation;
pub mod battery;
pub mod button;
pub mod color;
pub mod controller;
pub mod motion;
pub mod palette;
pub mod power;
pub mod rainbow;
pub mod sound;
pub mod time;

pub use animation::AnimationEngine;
pub use button::LatchedButton;
pub use color::{Hsv, Rgb, blend};
pub use controller::{Board, ControlPanel, Controller, Mode, TriggerEvent};
pub use motion::{AccelSample, MotionEvent, MotionSensor, classify};
pub use palette::{IndicatorState, Palette, PaletteSlot};
pub use power::PowerSequence;
pub use rainbow::RainbowEffect;
pub use sound::{AssetMissing, AudioPlayer, SoundId};
pub use time::Clock;

pub use embassy_time::{Duration, Instant};

/// Pixel count of the reference prop's strip.
///
/// The engine and controller are generic over the strip length; this is the
/// length the stock blade ships with.
pub const STRIP_PIXELS: usize = 60;

/// Abstract LED strip driver trait
///
/// Implement this trait to support different strip hardware.
/// The controller is generic over this trait. A `write` call presents the
/// whole frame to the strip at once; static brightness scaling, if any,
/// belongs to the implementation.
pub trait StripDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
