//! Frames and frame sequences.
//!
//! A [`Frame`] describes all [`NUM_PIXELS`] pixels of the matrix for one step
//! of an animation, together with how long the step is held. Pixels are
//! addressed by index `row * MATRIX_WIDTH + column`, which is also the order
//! they are wired in and pushed to the driver.

use crate::codec::{PackedColor, encode};
use crate::colors::{COLOR_OFF, Color, hue};
use crate::{DEFAULT_FRAME_MS, MATRIX_WIDTH, NUM_PIXELS};

/// Lit/unlit state of every pixel, one bit per pixel index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mask(u32);

impl Mask {
    /// No pixel lit.
    pub const EMPTY: Self = Mask(0);

    /// Every pixel lit.
    pub const FULL: Self = Mask((1 << NUM_PIXELS) - 1);

    /// Builds a mask from five row patterns, top row first.
    ///
    /// Within a row the most significant of the five bits is column 0, so a
    /// literal such as `0b10001` reads the same way the row looks.
    pub const fn from_rows(rows: [u8; MATRIX_WIDTH]) -> Self {
        let mut bits = 0u32;
        let mut row = 0;
        while row < MATRIX_WIDTH {
            let mut column = 0;
            while column < MATRIX_WIDTH {
                if rows[row] & (1 << (MATRIX_WIDTH - 1 - column)) != 0 {
                    bits |= 1 << ((row * MATRIX_WIDTH + column) as u32);
                }
                column += 1;
            }
            row += 1;
        }
        Mask(bits)
    }

    /// Builds a mask with the given pixel indices lit. Indices past the
    /// matrix are ignored.
    pub const fn from_indices(indices: &[usize]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < indices.len() {
            if indices[i] < NUM_PIXELS {
                bits |= 1 << (indices[i] as u32);
            }
            i += 1;
        }
        Mask(bits)
    }

    /// Builds a mask from raw bits. Bits past the matrix are dropped.
    pub const fn from_bits(bits: u32) -> Self {
        Mask(bits & Self::FULL.0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if the pixel at `index` is lit.
    pub const fn is_lit(self, index: usize) -> bool {
        index < NUM_PIXELS && self.0 & (1 << (index as u32)) != 0
    }

    /// Number of lit pixels.
    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn union(self, other: Self) -> Self {
        Mask(self.0 | other.0)
    }

    /// Returns a copy with one more pixel lit.
    pub const fn with_pixel(self, index: usize) -> Self {
        if index < NUM_PIXELS {
            Mask(self.0 | 1 << (index as u32))
        } else {
            self
        }
    }
}

/// How the lit pixels of a masked frame are colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Red to green sweep keyed on the frame's position, see [`transition_color`].
    Transition,

    /// Hue sweep keyed on the frame's position, starting at red.
    Rainbow,

    /// One fixed color for every lit pixel.
    Solid(Color),
}

impl Paint {
    /// Color of a lit pixel in frame `frame_index` of `frame_count`.
    pub fn color(&self, frame_index: usize, frame_count: usize) -> Color {
        match self {
            Paint::Transition => transition_color(frame_index, frame_count),
            Paint::Rainbow => hue(360.0 * progress(frame_index, frame_count)),
            Paint::Solid(color) => *color,
        }
    }
}

/// Pixel content of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pixels {
    /// Lit pixels take the paint color, the rest are black.
    Masked { mask: Mask, paint: Paint },

    /// An explicit color per pixel. Black means unlit.
    Colored([Color; NUM_PIXELS]),
}

/// One still image of the matrix and how long to hold it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub pixels: Pixels,
    pub duration_ms: u32,
}

impl Frame {
    /// Creates a frame whose lit pixels share one paint.
    pub const fn masked(mask: Mask, paint: Paint, duration_ms: u32) -> Self {
        Self {
            pixels: Pixels::Masked { mask, paint },
            duration_ms,
        }
    }

    /// Creates a frame with lit pixels in a single color.
    pub const fn solid(mask: Mask, color: Color, duration_ms: u32) -> Self {
        Self::masked(mask, Paint::Solid(color), duration_ms)
    }

    /// Creates a frame with an explicit color per pixel.
    pub const fn colored(colors: [Color; NUM_PIXELS], duration_ms: u32) -> Self {
        Self {
            pixels: Pixels::Colored(colors),
            duration_ms,
        }
    }

    /// Creates a per-pixel colored frame by painting masks in order.
    ///
    /// Later layers win where masks overlap.
    pub const fn layered(layers: &[(Mask, Color)], duration_ms: u32) -> Self {
        let mut colors = [COLOR_OFF; NUM_PIXELS];
        let mut layer = 0;
        while layer < layers.len() {
            let (mask, color) = layers[layer];
            let mut index = 0;
            while index < NUM_PIXELS {
                if mask.is_lit(index) {
                    colors[index] = color;
                }
                index += 1;
            }
            layer += 1;
        }
        Self::colored(colors, duration_ms)
    }

    /// Creates an all-black frame.
    pub const fn blank(duration_ms: u32) -> Self {
        Self::solid(Mask::EMPTY, COLOR_OFF, duration_ms)
    }

    /// Color of pixel `index` when this frame is shown as frame
    /// `frame_index` of a `frame_count` long sequence.
    pub fn color_at(&self, index: usize, frame_index: usize, frame_count: usize) -> Color {
        match &self.pixels {
            Pixels::Masked { mask, paint } => {
                if mask.is_lit(index) {
                    paint.color(frame_index, frame_count)
                } else {
                    COLOR_OFF
                }
            }
            Pixels::Colored(colors) => colors.get(index).copied().unwrap_or(COLOR_OFF),
        }
    }

    /// Encodes every pixel of the frame in wiring order.
    pub fn render(&self, frame_index: usize, frame_count: usize) -> [PackedColor; NUM_PIXELS] {
        core::array::from_fn(|index| encode(self.color_at(index, frame_index, frame_count)))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::blank(DEFAULT_FRAME_MS)
    }
}

/// A named animation: an ordered, immutable list of frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSequence {
    name: &'static str,
    frames: &'static [Frame],
}

impl FrameSequence {
    pub const fn new(name: &'static str, frames: &'static [Frame]) -> Self {
        Self { name, frames }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn frames(&self) -> &'static [Frame] {
        self.frames
    }

    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the frame at `index`, if any.
    pub fn frame(&self, index: usize) -> Option<&'static Frame> {
        self.frames.get(index)
    }

    /// Sum of all frame durations, i.e. how long playback blocks.
    pub fn total_duration_ms(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.duration_ms)).sum()
    }
}

/// Red to green color for frame `frame_index` of `frame_count`.
///
/// Red is `1 - f/F`, green is `f/F`, blue is zero. The first frame is full
/// red; the last one stops one step short of full green.
pub fn transition_color(frame_index: usize, frame_count: usize) -> Color {
    let progress = progress(frame_index, frame_count);
    Color::new(1.0 - progress, progress, 0.0)
}

fn progress(frame_index: usize, frame_count: usize) -> f64 {
    if frame_count == 0 {
        return 0.0;
    }
    frame_index as f64 / frame_count as f64
}
