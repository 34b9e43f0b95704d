//! Blocking frame playback.
//!
//! Provides [`AnimationPlayer`], which owns the LED driver and the delay
//! provider, and defines the [`LedDriver`] trait for hardware abstraction.

use crate::NUM_PIXELS;
use crate::codec::{PackedColor, encode};
use crate::colors::{COLOR_OFF, Color};
use crate::dispatch::Action;
use crate::frame::{Frame, FrameSequence};
use embedded_hal::delay::DelayNs;

/// Trait for abstracting the addressable LED chain.
///
/// Implement this for your driver (PIO state machine, SPI, bit-banged GPIO).
/// Each call transmits one pixel. The call blocks until the word has been
/// accepted; handle any hardware errors internally - this method cannot fail.
///
/// Callers push exactly [`NUM_PIXELS`] words per refresh, in wiring order,
/// with nothing in between to mark the start of a refresh.
pub trait LedDriver {
    /// Transmits one pixel's color word.
    fn push(&mut self, word: PackedColor);
}

impl<T: LedDriver + ?Sized> LedDriver for &mut T {
    #[inline]
    fn push(&mut self, word: PackedColor) {
        (**self).push(word);
    }
}

/// Plays frame sequences on an LED matrix, one at a time.
///
/// All operations block the calling thread. [`play`](Self::play) returns only
/// after the last frame's duration has elapsed; there is no way to cancel a
/// sequence once it started.
///
/// # Type Parameters
/// * `L` - LED driver implementation
/// * `D` - Blocking delay provider used to hold frames
pub struct AnimationPlayer<L: LedDriver, D: DelayNs> {
    driver: L,
    delay: D,
}

impl<L: LedDriver, D: DelayNs> AnimationPlayer<L, D> {
    /// Creates a player. Nothing is pushed until the first action.
    pub fn new(driver: L, delay: D) -> Self {
        Self { driver, delay }
    }

    /// Plays every frame of `sequence` in order.
    ///
    /// Each frame is pushed as one burst of [`NUM_PIXELS`] words followed by
    /// a sleep of the frame's duration. An empty sequence returns immediately
    /// without touching the driver.
    pub fn play(&mut self, sequence: &FrameSequence) {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "playing '{=str}' ({} frames, {} ms)",
            sequence.name(),
            sequence.frame_count(),
            sequence.total_duration_ms()
        );

        let frame_count = sequence.frame_count();
        for (frame_index, frame) in sequence.frames().iter().enumerate() {
            self.show(frame, frame_index, frame_count);
            self.delay.delay_ms(frame.duration_ms);
        }
    }

    /// Pushes a single frame without waiting afterwards.
    pub fn show(&mut self, frame: &Frame, frame_index: usize, frame_count: usize) {
        for index in 0..NUM_PIXELS {
            let color = frame.color_at(index, frame_index, frame_count);
            self.driver.push(encode(color));
        }
    }

    /// Sets every pixel to `color` in one pass.
    pub fn fill(&mut self, color: Color) {
        let word = encode(color);
        for _ in 0..NUM_PIXELS {
            self.driver.push(word);
        }
    }

    /// Turns every pixel off.
    pub fn turn_off(&mut self) {
        self.fill(COLOR_OFF);
    }

    /// Runs a dispatched action to completion.
    pub fn execute(&mut self, action: &Action) {
        match action {
            Action::Play(sequence) => self.play(sequence),
            Action::Fill(color) => self.fill(*color),
            Action::TurnOff => self.turn_off(),
        }
    }

    /// Blocks for `ms` milliseconds on the player's delay provider.
    pub fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Returns a reference to the LED driver.
    pub fn driver(&self) -> &L {
        &self.driver
    }

    /// Returns a mutable reference to the LED driver.
    pub fn driver_mut(&mut self) -> &mut L {
        &mut self.driver
    }

    /// Consumes the player and hands back the driver and delay.
    pub fn release(self) -> (L, D) {
        (self.driver, self.delay)
    }
}
