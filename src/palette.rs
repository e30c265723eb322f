//! Blade color selection.
//!
//! A fixed cycle of named colors plus the rainbow slot. The rainbow slot has
//! no meaningful static color: while it is selected, blend-based fills are
//! disabled and the token animation paints the strip instead.

use crate::color::{Rgb, scale_down};

const SLOT_NAME_RED: &str = "red";
const SLOT_NAME_PURPLE: &str = "purple";
const SLOT_NAME_CYAN: &str = "cyan";
const SLOT_NAME_GREEN: &str = "green";
const SLOT_NAME_RAINBOW: &str = "rainbow";

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
const PURPLE: Rgb = Rgb { r: 100, g: 0, b: 255 };
const CYAN: Rgb = Rgb { r: 0, g: 100, b: 255 };
const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
// Placeholder shown during power sweeps while rainbow is selected.
const RAINBOW_BASE: Rgb = Rgb { r: 255, g: 255, b: 255 };

/// Divisor applied to the base color to get the resting shade.
///
/// Ships at 1 (resting blade at full brightness); raise it to dim the blade
/// between trigger events.
const IDLE_DIVISOR: u8 = 1;

/// Named palette slots in their fixed cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSlot {
    Red,
    Purple,
    Cyan,
    Green,
    Rainbow,
}

impl PaletteSlot {
    /// Next slot in the cycle, wrapping from rainbow back to red.
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Purple,
            Self::Purple => Self::Cyan,
            Self::Cyan => Self::Green,
            Self::Green => Self::Rainbow,
            Self::Rainbow => Self::Red,
        }
    }

    /// Base color of the slot.
    pub const fn base_color(self) -> Rgb {
        match self {
            Self::Red => RED,
            Self::Purple => PURPLE,
            Self::Cyan => CYAN,
            Self::Green => GREEN,
            Self::Rainbow => RAINBOW_BASE,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => SLOT_NAME_RED,
            Self::Purple => SLOT_NAME_PURPLE,
            Self::Cyan => SLOT_NAME_CYAN,
            Self::Green => SLOT_NAME_GREEN,
            Self::Rainbow => SLOT_NAME_RAINBOW,
        }
    }
}

/// Requested state of the three indicator lines next to the color button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

/// The current color selection and its derived shades.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    slot: PaletteSlot,
}

impl Palette {
    pub const fn new() -> Self {
        Self {
            slot: PaletteSlot::Red,
        }
    }

    pub const fn slot(&self) -> PaletteSlot {
        self.slot
    }

    /// Advance to the next slot in the cycle.
    pub const fn advance(&mut self) {
        self.slot = self.slot.next();
    }

    /// Resting shade shown while powered and unperturbed.
    pub const fn idle_color(&self) -> Rgb {
        scale_down(self.slot.base_color(), IDLE_DIVISOR)
    }

    /// Full-intensity shade a swing fades from.
    pub const fn active_color(&self) -> Rgb {
        self.slot.base_color()
    }

    /// Whether the token animation owns the strip.
    pub const fn is_rainbow(&self) -> bool {
        matches!(self.slot, PaletteSlot::Rainbow)
    }

    /// Indicator-line state for the current slot.
    ///
    /// Fixed mapping: green slot lights the green line, purple and cyan the
    /// blue line, rainbow turns all lines off, red lights the red line.
    pub const fn indicator(&self) -> IndicatorState {
        match self.slot {
            PaletteSlot::Green => IndicatorState {
                red: false,
                green: true,
                blue: false,
            },
            PaletteSlot::Purple | PaletteSlot::Cyan => IndicatorState {
                red: false,
                green: false,
                blue: true,
            },
            PaletteSlot::Rainbow => IndicatorState {
                red: false,
                green: false,
                blue: false,
            },
            PaletteSlot::Red => IndicatorState {
                red: true,
                green: false,
                blue: false,
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
