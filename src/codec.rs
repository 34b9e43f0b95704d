//! Conversion of normalized colors into the LED driver's wire word.

use crate::colors::Color;

/// One pixel as the LED driver expects it.
///
/// Bit layout, most significant first:
///
/// | bits  | channel |
/// |-------|---------|
/// | 31-24 | green   |
/// | 23-16 | red     |
/// | 15-8  | blue    |
/// | 7-0   | unused (zero) |
///
/// The driver shifts out the top 24 bits, so this layout is the GRB order
/// of WS2812-style pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedColor(pub u32);

impl PackedColor {
    /// All channels off.
    pub const OFF: Self = PackedColor(0);

    /// Packs already-quantized channel bytes.
    #[inline]
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        PackedColor(((green as u32) << 24) | ((red as u32) << 16) | ((blue as u32) << 8))
    }

    /// Returns the quantized `(red, green, blue)` bytes.
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (
            (self.0 >> 16) as u8,
            (self.0 >> 24) as u8,
            (self.0 >> 8) as u8,
        )
    }

    /// Returns the raw word.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

/// Encodes a normalized color into the driver's packed word.
///
/// Each channel is multiplied by 255 and truncated toward zero, so 0.5
/// becomes 127 rather than 128. Channels are not clamped first. Out-of-range
/// values saturate instead: anything negative (or NaN) encodes as 0 and
/// anything at or above 256/255 encodes as 255.
#[inline]
pub fn encode(color: Color) -> PackedColor {
    PackedColor::from_channels(
        quantize(color.red),
        quantize(color.green),
        quantize(color.blue),
    )
}

#[inline]
fn quantize(channel: f64) -> u8 {
    (channel * 255.0) as u8
}
