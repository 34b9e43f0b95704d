//! Key-to-action dispatch.
//!
//! A [`DispatchTable`] binds keypad symbols to [`Action`]s once at startup.
//! The [`Dispatcher`] looks up each scanned key and runs the bound action on
//! an [`AnimationPlayer`]. Keys without a binding, and polls where no key was
//! pressed, do nothing.

use crate::colors::Color;
use crate::frame::FrameSequence;
use crate::keypad::{KEY_COUNT, KeySymbol};
use crate::player::{AnimationPlayer, LedDriver};
use embedded_hal::delay::DelayNs;
use heapless::LinearMap;

/// What a key press does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Play a sequence from start to finish.
    Play(&'static FrameSequence),

    /// Set every pixel to one color.
    Fill(Color),

    /// Turn every pixel off.
    TurnOff,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Action {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Action::Play(sequence) => defmt::write!(f, "Play({=str})", sequence.name()),
            Action::Fill(color) => {
                defmt::write!(f, "Fill({}, {}, {})", color.red, color.green, color.blue)
            }
            Action::TurnOff => defmt::write!(f, "TurnOff"),
        }
    }
}

/// Dispatch table construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// The symbol does not exist on the keypad.
    UnknownKey(char),

    /// The key already has an action.
    DuplicateKey(KeySymbol),

    /// Table capacity exceeded.
    TableFull,
}

impl core::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DispatchError::UnknownKey(symbol) => {
                write!(f, "'{}' is not a key on the keypad", symbol)
            }
            DispatchError::DuplicateKey(key) => {
                write!(f, "key '{}' is already bound", key)
            }
            DispatchError::TableFull => {
                write!(f, "dispatch table capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DispatchError {}

/// Immutable mapping from keys to actions.
#[derive(Debug, Clone)]
pub struct DispatchTable {
    bindings: LinearMap<KeySymbol, Action, KEY_COUNT>,
}

impl DispatchTable {
    /// Creates a new table builder.
    pub fn builder() -> DispatchTableBuilder {
        DispatchTableBuilder::new()
    }

    /// Returns the action bound to `key`, if any.
    pub fn lookup(&self, key: KeySymbol) -> Option<&Action> {
        self.bindings.get(&key)
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bound keys in binding order.
    pub fn keys(&self) -> impl Iterator<Item = KeySymbol> + '_ {
        self.bindings.keys().copied()
    }
}

/// Builder for [`DispatchTable`].
#[derive(Debug)]
pub struct DispatchTableBuilder {
    bindings: LinearMap<KeySymbol, Action, KEY_COUNT>,
}

impl DispatchTableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            bindings: LinearMap::new(),
        }
    }

    /// Binds `symbol` to `action`.
    ///
    /// # Errors
    /// * `UnknownKey` - `symbol` is not on the keypad
    /// * `DuplicateKey` - `symbol` already has an action
    /// * `TableFull` - no room left in the table
    pub fn bind(mut self, symbol: char, action: Action) -> Result<Self, DispatchError> {
        let key = KeySymbol::new(symbol).ok_or(DispatchError::UnknownKey(symbol))?;

        if self.bindings.contains_key(&key) {
            return Err(DispatchError::DuplicateKey(key));
        }

        self.bindings
            .insert(key, action)
            .map_err(|_| DispatchError::TableFull)?;
        Ok(self)
    }

    /// Finishes the table. An empty table is valid and ignores every key.
    pub fn build(self) -> DispatchTable {
        DispatchTable {
            bindings: self.bindings,
        }
    }
}

impl Default for DispatchTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the action bound to each scanned key.
///
/// The dispatcher has a single resting state. Playing a sequence happens
/// inline: [`dispatch`](Self::dispatch) returns once the action is finished.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: DispatchTable,
}

impl Dispatcher {
    pub fn new(table: DispatchTable) -> Self {
        Self { table }
    }

    /// Creates a dispatcher with the standard key bindings.
    ///
    /// See [`catalog::standard_table`](crate::catalog::standard_table).
    pub fn standard() -> Result<Self, DispatchError> {
        crate::catalog::standard_table().map(Self::new)
    }

    /// Executes the action bound to `key` and returns it.
    ///
    /// Returns `None` without touching the player when no key was pressed or
    /// the key has no binding.
    pub fn dispatch<L: LedDriver, D: DelayNs>(
        &self,
        key: Option<KeySymbol>,
        player: &mut AnimationPlayer<L, D>,
    ) -> Option<Action> {
        let key = key?;
        let action = *self.table.lookup(key)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("key '{}' -> {}", key, action);

        player.execute(&action);
        Some(action)
    }

    pub fn table(&self) -> &DispatchTable {
        &self.table
    }
}
