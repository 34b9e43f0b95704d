use matrix_sequencer::{LedDriver, PackedColor};
use rp_pico::hal::pio::{Tx, ValidStateMachine};

/// WS2812 chain driven from a PIO state machine.
///
/// The state machine runs [`program`] with autopull at 24 bits, so each
/// [`PackedColor`] word pushed into the TX FIFO clocks out one pixel as
/// G, R, B, most significant bit first.
pub struct PioLedDriver<SM: ValidStateMachine> {
    tx: Tx<SM>,
}

impl<SM: ValidStateMachine> PioLedDriver<SM> {
    pub fn new(tx: Tx<SM>) -> Self {
        Self { tx }
    }

    pub fn release(self) -> Tx<SM> {
        self.tx
    }
}

impl<SM: ValidStateMachine> LedDriver for PioLedDriver<SM> {
    fn push(&mut self, word: PackedColor) {
        // Blocks while the FIFO is full
        while !self.tx.write(word.bits()) {
            core::hint::spin_loop();
        }
    }
}

/// Bit-timing program: ten state machine cycles per bit, high for 3 + 2
/// cycles on a one and 3 cycles on a zero.
pub fn program() -> pio::Program<32> {
    pio_proc::pio_asm!(
        ".side_set 1",
        ".wrap_target",
        "bitloop:",
        "    out x, 1        side 0 [2]",
        "    jmp !x do_zero  side 1 [1]",
        "do_one:",
        "    jmp bitloop     side 1 [4]",
        "do_zero:",
        "    nop             side 0 [4]",
        ".wrap",
    )
    .program
}

/// Integer and 1/256 fractional clock divider for an 800 kHz bit rate
/// (8 MHz state machine clock).
pub fn clock_divisor(system_clock_hz: u32) -> (u16, u8) {
    let target_hz = 8_000_000u64;
    let scaled = ((system_clock_hz as u64) << 8) / target_hz;
    ((scaled >> 8) as u16, (scaled & 0xff) as u8)
}
