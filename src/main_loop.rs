//! The scan/dispatch/debounce loop.

use crate::DEFAULT_DEBOUNCE_MS;
use crate::dispatch::{Action, Dispatcher};
use crate::keypad::KeyScanner;
use crate::player::{AnimationPlayer, LedDriver};
use embedded_hal::delay::DelayNs;

/// Polls the keypad forever and runs whatever the pressed key is bound to.
///
/// Each iteration scans once, dispatches the result and then sleeps the
/// debounce interval, whether or not anything happened. The sleep is the
/// only debouncing: holding a key down replays its action on every poll.
///
/// # Type Parameters
/// * `K` - Keypad scanner
/// * `L` - LED driver
/// * `D` - Delay provider shared by frame pacing and debounce
pub struct MainLoop<K: KeyScanner, L: LedDriver, D: DelayNs> {
    keypad: K,
    player: AnimationPlayer<L, D>,
    dispatcher: Dispatcher,
    debounce_ms: u32,
}

impl<K: KeyScanner, L: LedDriver, D: DelayNs> MainLoop<K, L, D> {
    /// Creates a loop with the default 100 ms debounce.
    pub fn new(keypad: K, player: AnimationPlayer<L, D>, dispatcher: Dispatcher) -> Self {
        Self {
            keypad,
            player,
            dispatcher,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Overrides the delay applied after every poll.
    pub fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Runs one iteration and returns the action it executed, if any.
    pub fn poll_once(&mut self) -> Option<Action> {
        let key = self.keypad.scan();
        let action = self.dispatcher.dispatch(key, &mut self.player);
        self.player.pause_ms(self.debounce_ms);
        action
    }

    /// Runs until power is removed.
    pub fn run(&mut self) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "main loop started ({} keys bound, {} ms debounce)",
            self.dispatcher.table().len(),
            self.debounce_ms
        );

        loop {
            self.poll_once();
        }
    }

    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    pub fn player(&self) -> &AnimationPlayer<L, D> {
        &self.player
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Consumes the loop and returns its parts.
    pub fn release(self) -> (K, AnimationPlayer<L, D>, Dispatcher) {
        (self.keypad, self.player, self.dispatcher)
    }
}
