//! Keypad symbols and matrix scanning.

use embedded_hal::digital::{InputPin, OutputPin};

pub const KEYPAD_ROWS: usize = 4;
pub const KEYPAD_COLS: usize = 4;
pub const KEY_COUNT: usize = KEYPAD_ROWS * KEYPAD_COLS;

/// Symbol printed on each key, indexed by `[row][column]`.
pub const KEYMAP: [[char; KEYPAD_COLS]; KEYPAD_ROWS] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// A symbol that exists on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySymbol(char);

impl KeySymbol {
    /// Returns the key printed with `symbol`, or `None` if the keypad has
    /// no such key.
    pub const fn new(symbol: char) -> Option<Self> {
        let mut row = 0;
        while row < KEYPAD_ROWS {
            let mut column = 0;
            while column < KEYPAD_COLS {
                if KEYMAP[row][column] == symbol {
                    return Some(KeySymbol(symbol));
                }
                column += 1;
            }
            row += 1;
        }
        None
    }

    /// Returns the key at a matrix position.
    pub const fn at(row: usize, column: usize) -> Option<Self> {
        if row < KEYPAD_ROWS && column < KEYPAD_COLS {
            Some(KeySymbol(KEYMAP[row][column]))
        } else {
            None
        }
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<KeySymbol> for char {
    fn from(key: KeySymbol) -> Self {
        key.0
    }
}

impl core::fmt::Display for KeySymbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for anything that reports the currently pressed key.
///
/// One call is one complete scan pass. Implementations handle hardware
/// errors internally; a key that cannot be read counts as not pressed.
pub trait KeyScanner {
    /// Returns the pressed key, or `None` if no key is down.
    fn scan(&mut self) -> Option<KeySymbol>;
}

impl<T: KeyScanner + ?Sized> KeyScanner for &mut T {
    #[inline]
    fn scan(&mut self) -> Option<KeySymbol> {
        (**self).scan()
    }
}

/// A 4x4 membrane keypad wired as a row/column matrix.
///
/// Rows are push-pull outputs idling high. Columns are inputs with pull-ups,
/// so a pressed key pulls its column low while its row is driven low.
///
/// # Type Parameters
/// * `R` - Row output pin type
/// * `C` - Column input pin type
pub struct MatrixKeypad<R: OutputPin, C: InputPin> {
    rows: [R; KEYPAD_ROWS],
    columns: [C; KEYPAD_COLS],
}

impl<R: OutputPin, C: InputPin> MatrixKeypad<R, C> {
    /// Takes ownership of the pins and releases every row.
    ///
    /// Pull-ups on the column pins must already be configured.
    pub fn new(mut rows: [R; KEYPAD_ROWS], columns: [C; KEYPAD_COLS]) -> Self {
        for row in rows.iter_mut() {
            let _ = row.set_high();
        }
        Self { rows, columns }
    }

    /// Hands the pins back.
    pub fn release(self) -> ([R; KEYPAD_ROWS], [C; KEYPAD_COLS]) {
        (self.rows, self.columns)
    }
}

impl<R: OutputPin, C: InputPin> KeyScanner for MatrixKeypad<R, C> {
    /// Drives each row low in turn and returns the first column found low.
    ///
    /// The row is released before returning, so every row idles high
    /// between scans.
    fn scan(&mut self) -> Option<KeySymbol> {
        for (row_index, row) in self.rows.iter_mut().enumerate() {
            let _ = row.set_low();
            let hit = self
                .columns
                .iter_mut()
                .position(|column| column.is_low().unwrap_or(false));
            let _ = row.set_high();

            if let Some(column_index) = hit {
                return KeySymbol::at(row_index, column_index);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_only_keypad_symbols() {
        assert_eq!(KeySymbol::new('#').map(KeySymbol::as_char), Some('#'));
        assert!(KeySymbol::new('E').is_none());
        assert!(KeySymbol::new('\0').is_none());
    }

    #[test]
    fn at_follows_keymap() {
        assert_eq!(KeySymbol::at(0, 3), KeySymbol::new('A'));
        assert_eq!(KeySymbol::at(3, 1), KeySymbol::new('0'));
        assert!(KeySymbol::at(4, 0).is_none());
    }
}
