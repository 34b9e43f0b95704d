//! Color type, named colors and conversion helpers.
//!
//! Colors are `palette::Srgb<f64>` with each channel in the 0.0-1.0 range.
//! Double precision keeps the quantized bytes identical to the reference
//! firmware, which computes channel intensities as `double`.

use palette::{FromColor, Hsv, Srgb};

/// Normalized RGB color used throughout the crate.
pub type Color = Srgb<f64>;

pub const COLOR_OFF: Color = Srgb::new(0.0, 0.0, 0.0);
pub const BLACK: Color = COLOR_OFF;
pub const RED: Color = Srgb::new(1.0, 0.0, 0.0);
pub const GREEN: Color = Srgb::new(0.0, 1.0, 0.0);
pub const BLUE: Color = Srgb::new(0.0, 0.0, 1.0);
pub const WHITE: Color = Srgb::new(1.0, 1.0, 1.0);
pub const YELLOW: Color = Srgb::new(1.0, 0.8, 0.0);
pub const ORANGE: Color = Srgb::new(1.0, 0.4, 0.0);
pub const CYAN: Color = Srgb::new(0.0, 1.0, 1.0);
pub const MAGENTA: Color = Srgb::new(1.0, 0.0, 1.0);

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f64, saturation: f64, value: f64) -> Color {
    let hsv: Hsv<palette::encoding::Srgb, f64> = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f64) -> Color {
    hsv(hue, 1.0, 1.0)
}

/// Scales every channel by `factor`.
///
/// Used for the dimmed solid fills, e.g. red at 80% intensity.
#[inline]
pub const fn scale(color: Color, factor: f64) -> Color {
    Srgb::new(
        color.red * factor,
        color.green * factor,
        color.blue * factor,
    )
}
