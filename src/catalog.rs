//! Built-in animations and the standard key bindings.
//!
//! | key | action |
//! |-----|--------|
//! | `1` | battery charge |
//! | `2` | X mark |
//! | `3` | snake crossing |
//! | `4` | timer countdown |
//! | `5` | wave pulse |
//! | `6` | blinking face |
//! | `9` | letter glyphs |
//! | `0` | loop-around snake |
//! | `A` | all off |
//! | `B` | blue, full intensity |
//! | `C` | red, 80% |
//! | `D` | green, 50% |
//! | `#` | white, 20% |
//!
//! `7`, `8` and `*` are left unbound.

use crate::DEFAULT_FRAME_MS;
use crate::colors::{BLUE, GREEN, ORANGE, RED, WHITE, YELLOW, scale};
use crate::dispatch::{Action, DispatchError, DispatchTable};
use crate::frame::{Frame, FrameSequence, Mask, Paint};

// Battery charge: rows fill top to bottom, red shading to green.

static BATTERY_CHARGE_FRAMES: [Frame; 5] = [
    Frame::masked(Mask::from_rows([0b11111, 0, 0, 0, 0]), Paint::Transition, DEFAULT_FRAME_MS),
    Frame::masked(Mask::from_rows([0b11111, 0b11111, 0, 0, 0]), Paint::Transition, DEFAULT_FRAME_MS),
    Frame::masked(Mask::from_rows([0b11111, 0b11111, 0b11111, 0, 0]), Paint::Transition, DEFAULT_FRAME_MS),
    Frame::masked(Mask::from_rows([0b11111, 0b11111, 0b11111, 0b11111, 0]), Paint::Transition, DEFAULT_FRAME_MS),
    Frame::masked(Mask::FULL, Paint::Transition, DEFAULT_FRAME_MS),
];

pub static BATTERY_CHARGE: FrameSequence = FrameSequence::new("battery charge", &BATTERY_CHARGE_FRAMES);

// X mark: one stroke, then the full glyph blinking three times.

const X_STROKE: Mask = Mask::from_rows([0b10000, 0b01000, 0b00100, 0b00010, 0b00001]);
const X_GLYPH: Mask = X_STROKE.union(Mask::from_rows([0b00001, 0b00010, 0b00100, 0b01000, 0b10000]));

static X_MARK_FRAMES: [Frame; 7] = [
    Frame::solid(X_STROKE, RED, 200),
    Frame::solid(X_GLYPH, RED, 300),
    Frame::blank(150),
    Frame::solid(X_GLYPH, RED, 300),
    Frame::blank(150),
    Frame::solid(X_GLYPH, RED, 300),
    Frame::blank(0),
];

pub static X_MARK: FrameSequence = FrameSequence::new("x mark", &X_MARK_FRAMES);

// Snake crossing: a three pixel snake runs right along the top row and
// comes back left along the bottom row.

const fn top(row: u8) -> Mask {
    Mask::from_rows([row, 0, 0, 0, 0])
}

const fn bottom(row: u8) -> Mask {
    Mask::from_rows([0, 0, 0, 0, row])
}

static SNAKE_CROSSING_FRAMES: [Frame; 15] = [
    Frame::solid(top(0b10000), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(top(0b11000), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(top(0b11100), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(top(0b01110), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(top(0b00111), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(top(0b00011), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(top(0b00001), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(bottom(0b00001), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(bottom(0b00011), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(bottom(0b00111), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(bottom(0b01110), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(bottom(0b11100), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(bottom(0b11000), GREEN, DEFAULT_FRAME_MS),
    Frame::solid(bottom(0b10000), GREEN, DEFAULT_FRAME_MS),
    Frame::blank(0),
];

pub static SNAKE_CROSSING: FrameSequence = FrameSequence::new("snake crossing", &SNAKE_CROSSING_FRAMES);

// Timer countdown: 5 to 1, one second each, then a flash.

const DIGIT_5: Mask = Mask::from_rows([0b01110, 0b01000, 0b01110, 0b00010, 0b01110]);
const DIGIT_4: Mask = Mask::from_rows([0b01010, 0b01010, 0b01110, 0b00010, 0b00010]);
const DIGIT_3: Mask = Mask::from_rows([0b01110, 0b00010, 0b00110, 0b00010, 0b01110]);
const DIGIT_2: Mask = Mask::from_rows([0b01110, 0b00010, 0b01110, 0b01000, 0b01110]);
const DIGIT_1: Mask = Mask::from_rows([0b00100, 0b01100, 0b00100, 0b00100, 0b01110]);

static TIMER_COUNTDOWN_FRAMES: [Frame; 7] = [
    Frame::solid(DIGIT_5, ORANGE, 1000),
    Frame::solid(DIGIT_4, ORANGE, 1000),
    Frame::solid(DIGIT_3, ORANGE, 1000),
    Frame::solid(DIGIT_2, ORANGE, 1000),
    Frame::solid(DIGIT_1, ORANGE, 1000),
    Frame::solid(Mask::FULL, WHITE, 300),
    Frame::blank(0),
];

pub static TIMER_COUNTDOWN: FrameSequence = FrameSequence::new("timer countdown", &TIMER_COUNTDOWN_FRAMES);

// Wave pulse: rings expanding from the center, hue rotating per frame.

const RING_0: Mask = Mask::from_rows([0, 0, 0b00100, 0, 0]);
const RING_1: Mask = Mask::from_rows([0, 0b01110, 0b01010, 0b01110, 0]);
const RING_2: Mask = Mask::from_rows([0b11111, 0b10001, 0b10001, 0b10001, 0b11111]);

static WAVE_PULSE_FRAMES: [Frame; 9] = [
    Frame::masked(RING_0, Paint::Rainbow, 120),
    Frame::masked(RING_1, Paint::Rainbow, 120),
    Frame::masked(RING_2, Paint::Rainbow, 120),
    Frame::masked(RING_1, Paint::Rainbow, 120),
    Frame::masked(RING_0, Paint::Rainbow, 120),
    Frame::masked(RING_1, Paint::Rainbow, 120),
    Frame::masked(RING_2, Paint::Rainbow, 120),
    Frame::masked(RING_1, Paint::Rainbow, 120),
    Frame::masked(RING_0, Paint::Rainbow, 120),
];

pub static WAVE_PULSE: FrameSequence = FrameSequence::new("wave pulse", &WAVE_PULSE_FRAMES);

// Blinking face: blue eyes, red smile.

const EYES_OPEN: Mask = Mask::from_rows([0b01010, 0b01010, 0, 0, 0]);
const EYES_SHUT: Mask = Mask::from_rows([0, 0b11011, 0, 0, 0]);
const SMILE: Mask = Mask::from_rows([0, 0, 0, 0b10001, 0b01110]);

const FACE_OPEN: Frame = Frame::layered(&[(EYES_OPEN, BLUE), (SMILE, RED)], 600);
const FACE_SHUT: Frame = Frame::layered(&[(EYES_SHUT, BLUE), (SMILE, RED)], 150);

static BLINKING_FACE_FRAMES: [Frame; 5] = [FACE_OPEN, FACE_SHUT, FACE_OPEN, FACE_SHUT, FACE_OPEN];

pub static BLINKING_FACE: FrameSequence = FrameSequence::new("blinking face", &BLINKING_FACE_FRAMES);

// Letter glyphs: HELLO, one color per letter.

const GLYPH_H: Mask = Mask::from_rows([0b10001, 0b10001, 0b11111, 0b10001, 0b10001]);
const GLYPH_E: Mask = Mask::from_rows([0b11111, 0b10000, 0b11110, 0b10000, 0b11111]);
const GLYPH_L: Mask = Mask::from_rows([0b10000, 0b10000, 0b10000, 0b10000, 0b11111]);
const GLYPH_O: Mask = Mask::from_rows([0b01110, 0b10001, 0b10001, 0b10001, 0b01110]);

const LETTER_MS: u32 = 500;
const LETTER_GAP_MS: u32 = 80;

static LETTER_GLYPH_FRAMES: [Frame; 10] = [
    Frame::layered(&[(GLYPH_H, RED)], LETTER_MS),
    Frame::blank(LETTER_GAP_MS),
    Frame::layered(&[(GLYPH_E, ORANGE)], LETTER_MS),
    Frame::blank(LETTER_GAP_MS),
    Frame::layered(&[(GLYPH_L, YELLOW)], LETTER_MS),
    Frame::blank(LETTER_GAP_MS),
    Frame::layered(&[(GLYPH_L, GREEN)], LETTER_MS),
    Frame::blank(LETTER_GAP_MS),
    Frame::layered(&[(GLYPH_O, BLUE)], LETTER_MS),
    Frame::blank(0),
];

pub static LETTER_GLYPH: FrameSequence = FrameSequence::new("letter glyph", &LETTER_GLYPH_FRAMES);

// Loop-around snake: grows to three pixels and runs the border clockwise.

/// Border pixel indices, clockwise from the top-left corner.
const BORDER: [usize; 16] = [0, 1, 2, 3, 4, 9, 14, 19, 24, 23, 22, 21, 20, 15, 10, 5];
const SNAKE_LENGTH: usize = 3;
const SNAKE_STEP_MS: u32 = 80;

const fn loop_snake_frames() -> [Frame; BORDER.len() + 1] {
    let mut frames = [Frame::blank(0); BORDER.len() + 1];
    let mut step = 0;
    while step < BORDER.len() {
        let mut body = Mask::EMPTY;
        let mut segment = 0;
        while segment < SNAKE_LENGTH && segment <= step {
            body = body.with_pixel(BORDER[step - segment]);
            segment += 1;
        }
        frames[step] = Frame::masked(body, Paint::Transition, SNAKE_STEP_MS);
        step += 1;
    }
    frames
}

static LOOP_SNAKE_FRAMES: [Frame; BORDER.len() + 1] = loop_snake_frames();

pub static LOOP_SNAKE: FrameSequence = FrameSequence::new("loop-around snake", &LOOP_SNAKE_FRAMES);

/// Every built-in sequence.
pub static SEQUENCES: [&FrameSequence; 8] = [
    &BATTERY_CHARGE,
    &X_MARK,
    &SNAKE_CROSSING,
    &TIMER_COUNTDOWN,
    &WAVE_PULSE,
    &BLINKING_FACE,
    &LETTER_GLYPH,
    &LOOP_SNAKE,
];

/// Finds a built-in sequence by name.
pub fn by_name(name: &str) -> Option<&'static FrameSequence> {
    SEQUENCES.iter().copied().find(|sequence| sequence.name() == name)
}

/// Builds the standard key bindings listed in the module docs.
pub fn standard_table() -> Result<DispatchTable, DispatchError> {
    Ok(DispatchTable::builder()
        .bind('1', Action::Play(&BATTERY_CHARGE))?
        .bind('2', Action::Play(&X_MARK))?
        .bind('3', Action::Play(&SNAKE_CROSSING))?
        .bind('4', Action::Play(&TIMER_COUNTDOWN))?
        .bind('5', Action::Play(&WAVE_PULSE))?
        .bind('6', Action::Play(&BLINKING_FACE))?
        .bind('9', Action::Play(&LETTER_GLYPH))?
        .bind('0', Action::Play(&LOOP_SNAKE))?
        .bind('A', Action::TurnOff)?
        .bind('B', Action::Fill(BLUE))?
        .bind('C', Action::Fill(scale(RED, 0.8)))?
        .bind('D', Action::Fill(scale(GREEN, 0.5)))?
        .bind('#', Action::Fill(scale(WHITE, 0.2)))?
        .build())
}
