#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: Normalized RGB (`Srgb<f64>`, 0.0-1.0 per channel)
//! - **`PackedColor`**: The 32-bit word the LED driver shifts out (`G << 24 | R << 16 | B << 8`)
//! - **`Frame`**: One still image of the matrix plus how long to hold it
//! - **`FrameSequence`**: A named, immutable list of frames
//! - **`AnimationPlayer`**: Streams frames to an `LedDriver` and paces them with a `DelayNs`
//! - **`DispatchTable`** / **`Dispatcher`**: Maps keypad symbols to `Action`s
//! - **`KeyScanner`**: Trait for anything that yields one key per scan (see `MatrixKeypad`)
//! - **`MainLoop`**: Scan, dispatch, debounce, forever
//!
//! Everything runs on the caller's thread and blocks. An animation in progress
//! holds off keypad scanning until its last frame has been shown.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod catalog;
pub mod codec;
pub mod colors;
pub mod dispatch;
pub mod frame;
pub mod keypad;
pub mod main_loop;
pub mod player;

pub use codec::{PackedColor, encode};
pub use colors::{BLACK, BLUE, COLOR_OFF, Color, GREEN, RED, WHITE};
pub use dispatch::{Action, DispatchError, DispatchTable, DispatchTableBuilder, Dispatcher};
pub use frame::{Frame, FrameSequence, Mask, Paint, Pixels, transition_color};
pub use keypad::{KEYMAP, KeyScanner, KeySymbol, MatrixKeypad};
pub use main_loop::MainLoop;
pub use player::{AnimationPlayer, LedDriver};

/// Width and height of the LED matrix.
pub const MATRIX_WIDTH: usize = 5;

/// Number of pixels pushed per visual refresh.
pub const NUM_PIXELS: usize = MATRIX_WIDTH * MATRIX_WIDTH;

/// Default display time of one animation frame (10 frames per second).
pub const DEFAULT_FRAME_MS: u32 = 100;

/// Delay applied after every keypad poll.
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;
