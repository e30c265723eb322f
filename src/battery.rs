//! Battery voltage scaling.

/// Reference voltage of the ADC.
const ADC_REFERENCE_VOLTS: f32 = 3.3;

/// The monitor pin sits behind a half divider.
const DIVIDER_RATIO: f32 = 2.0;

/// Convert a raw 16-bit battery-monitor reading to volts.
///
/// Auxiliary only; the control loop does not act on it.
pub fn battery_volts(raw: u16) -> f32 {
    (f32::from(raw) * ADC_REFERENCE_VOLTS) / 65_536.0 * DIVIDER_RATIO
}
