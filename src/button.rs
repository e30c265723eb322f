//! Button press latching.

/// Edge latch for a level-read button.
///
/// `update` returns `true` exactly once per continuous press; the latch
/// only re-arms after the input reads released again, so holding the button
/// across many poll iterations never repeat-fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatchedButton {
    handled: bool,
}

impl LatchedButton {
    pub const fn new() -> Self {
        Self { handled: false }
    }

    /// Feed the current (already polarity-corrected) level.
    pub const fn update(&mut self, pressed: bool) -> bool {
        if !pressed {
            self.handled = false;
            return false;
        }
        if self.handled {
            return false;
        }
        self.handled = true;
        true
    }
}
