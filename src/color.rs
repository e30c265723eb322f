//! Color types and blending.
//!
//! Re-exports the `smart-leds` color types under local names and provides
//! the float-weight blend used by trigger animation, where the weight is an
//! elapsed-time value that may run past the [0, 1] range.

use libm::roundf;
use smart_leds::{RGB8, hsv::Hsv as HSV};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off.
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Blend two RGB colors with a float ratio.
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `weight` - Blend weight of `b`, clamped to 0.0..=1.0
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend(a: Rgb, b: Rgb, weight: f32) -> Rgb {
    let w_b = weight.clamp(0.0, 1.0);
    let w_a = 1.0 - w_b;
    let channel = |ca: u8, cb: u8| roundf(f32::from(ca) * w_a + f32::from(cb) * w_b) as u8;
    Rgb {
        r: channel(a.r, b.r),
        g: channel(a.g, b.g),
        b: channel(a.b, b.b),
    }
}

/// Divide each channel by an integer divisor.
///
/// Used to derive the resting shade from a palette color. A divisor of zero
/// is treated as one.
pub const fn scale_down(color: Rgb, divisor: u8) -> Rgb {
    let d = if divisor == 0 { 1 } else { divisor };
    Rgb {
        r: color.r / d,
        g: color.g / d,
        b: color.b / d,
    }
}
