//! Shared test infrastructure for matrix-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use matrix_sequencer::keypad::{KEYPAD_COLS, KEYPAD_ROWS};
use matrix_sequencer::{KeyScanner, KeySymbol, LedDriver, NUM_PIXELS, PackedColor};

// ============================================================================
// Event Trace
// ============================================================================

/// Something the engine did to the hardware, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Push(PackedColor),
    Sleep(u32),
}

/// One burst of pushes and the sleep that closed it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Burst {
    pub words: Vec<PackedColor>,
    pub sleep_ms: Option<u32>,
}

/// Shared log of driver pushes and delays
pub struct Trace {
    events: RefCell<heapless::Vec<Event, 1024>>,
}

impl Trace {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(heapless::Vec::new()),
        }
    }

    fn record(&self, event: Event) {
        self.events
            .borrow_mut()
            .push(event)
            .expect("trace capacity exceeded");
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().iter().copied().collect()
    }

    pub fn pushes(&self) -> Vec<PackedColor> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Push(word) => Some(*word),
                Event::Sleep(_) => None,
            })
            .collect()
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Sleep(ms) => Some(*ms),
                Event::Push(_) => None,
            })
            .collect()
    }

    /// Groups the trace into push bursts, each closed by a sleep.
    ///
    /// A sleep with no pushes before it yields an empty burst.
    pub fn bursts(&self) -> Vec<Burst> {
        let mut bursts = Vec::new();
        let mut words = Vec::new();
        for event in self.events.borrow().iter() {
            match event {
                Event::Push(word) => words.push(*word),
                Event::Sleep(ms) => bursts.push(Burst {
                    words: core::mem::take(&mut words),
                    sleep_ms: Some(*ms),
                }),
            }
        }
        if !words.is_empty() {
            bursts.push(Burst {
                words,
                sleep_ms: None,
            });
        }
        bursts
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

// ============================================================================
// Mock LED Driver and Delay
// ============================================================================

/// LED driver that records every pushed word
pub struct MockDriver<'a> {
    trace: &'a Trace,
}

impl<'a> MockDriver<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace }
    }
}

impl LedDriver for MockDriver<'_> {
    fn push(&mut self, word: PackedColor) {
        self.trace.record(Event::Push(word));
    }
}

/// Delay that records sleeps instead of sleeping
pub struct MockDelay<'a> {
    trace: &'a Trace,
}

impl<'a> MockDelay<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.record(Event::Sleep(ns / 1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.trace.record(Event::Sleep(us / 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.trace.record(Event::Sleep(ms));
    }
}

// ============================================================================
// Scripted Keypad
// ============================================================================

/// Keypad that replays a fixed list of scan results, then reports no key
pub struct ScriptedKeypad<'a> {
    script: core::slice::Iter<'a, Option<char>>,
    scans: usize,
}

impl<'a> ScriptedKeypad<'a> {
    pub fn new(script: &'a [Option<char>]) -> Self {
        Self {
            script: script.iter(),
            scans: 0,
        }
    }

    pub fn scans(&self) -> usize {
        self.scans
    }
}

impl KeyScanner for ScriptedKeypad<'_> {
    fn scan(&mut self) -> Option<KeySymbol> {
        self.scans += 1;
        self.script.next().copied().flatten().and_then(KeySymbol::new)
    }
}

// ============================================================================
// Mock Keypad Matrix
// ============================================================================

/// Electrical state of a keypad matrix shared by its mock pins
pub struct KeypadBus {
    rows_low: Cell<[bool; KEYPAD_ROWS]>,
    pressed: RefCell<Vec<(usize, usize)>>,
    faulty_column: Cell<Option<usize>>,
    row_drives: Cell<usize>,
}

impl KeypadBus {
    pub fn new() -> Self {
        Self {
            rows_low: Cell::new([true; KEYPAD_ROWS]),
            pressed: RefCell::new(Vec::new()),
            faulty_column: Cell::new(None),
            row_drives: Cell::new(0),
        }
    }

    pub fn press(&self, row: usize, column: usize) {
        self.pressed.borrow_mut().push((row, column));
    }

    pub fn release_all(&self) {
        self.pressed.borrow_mut().clear();
    }

    /// Makes reads of one column fail.
    pub fn break_column(&self, column: usize) {
        self.faulty_column.set(Some(column));
    }

    pub fn all_rows_high(&self) -> bool {
        self.rows_low.get().iter().all(|low| !low)
    }

    /// How many times any row was driven low.
    pub fn row_drives(&self) -> usize {
        self.row_drives.get()
    }

    pub fn rows(&self) -> [MockRow<'_>; KEYPAD_ROWS] {
        core::array::from_fn(|index| MockRow { bus: self, index })
    }

    pub fn columns(&self) -> [MockColumn<'_>; KEYPAD_COLS] {
        core::array::from_fn(|index| MockColumn { bus: self, index })
    }

    fn set_row(&self, index: usize, low: bool) {
        let mut rows = self.rows_low.get();
        rows[index] = low;
        self.rows_low.set(rows);
        if low {
            self.row_drives.set(self.row_drives.get() + 1);
        }
    }

    fn column_is_low(&self, column: usize) -> bool {
        let rows = self.rows_low.get();
        self.pressed
            .borrow()
            .iter()
            .any(|&(r, c)| c == column && rows[r])
    }
}

#[derive(Debug)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct MockRow<'a> {
    bus: &'a KeypadBus,
    index: usize,
}

impl ErrorType for MockRow<'_> {
    type Error = MockPinError;
}

impl OutputPin for MockRow<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bus.set_row(self.index, true);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bus.set_row(self.index, false);
        Ok(())
    }
}

pub struct MockColumn<'a> {
    bus: &'a KeypadBus,
    index: usize,
}

impl ErrorType for MockColumn<'_> {
    type Error = MockPinError;
}

impl InputPin for MockColumn<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        if self.bus.faulty_column.get() == Some(self.index) {
            return Err(MockPinError);
        }
        Ok(self.bus.column_is_low(self.index))
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// A full refresh of one word.
pub fn uniform(word: PackedColor) -> Vec<PackedColor> {
    vec![word; NUM_PIXELS]
}

pub fn key(symbol: char) -> Option<KeySymbol> {
    KeySymbol::new(symbol)
}
