#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use defmt_rtt as _;
use panic_probe as _;
use rp_pico::entry;
use rp_pico::hal::gpio::{FunctionPio0, Pin};
use rp_pico::hal::pio::{Buffers, PIOBuilder, PIOExt, PinDir, ShiftDirection};
use rp_pico::hal::{Clock, Sio, clocks::init_clocks_and_plls, pac, watchdog::Watchdog};

use matrix_sequencer::{AnimationPlayer, Dispatcher, MainLoop, MatrixKeypad};
use rp_pico_demos::ws2812::{self, PioLedDriver};

#[entry]
fn main() -> ! {
    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();
    let system_clock_hz = clocks.system_clock.freq().to_Hz();

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // LED matrix data line on GPIO7, driven by PIO0 SM0
    let led_pin: Pin<_, FunctionPio0, _> = pins.gpio7.into_function();
    let led_pin_id = led_pin.id().num;

    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let installed = pio.install(&ws2812::program()).unwrap();
    let (int, frac) = ws2812::clock_divisor(system_clock_hz);
    let (mut sm, _, tx) = PIOBuilder::from_installed_program(installed)
        .side_set_pin_base(led_pin_id)
        .out_shift_direction(ShiftDirection::Left)
        .autopull(true)
        .pull_threshold(24)
        .buffers(Buffers::OnlyTx)
        .clock_divisor_fixed_point(int, frac)
        .build(sm0);
    sm.set_pindirs([(led_pin_id, PinDir::Output)]);
    sm.start();

    // Keypad rows drive low one at a time, columns read through pull-ups
    let rows = [
        pins.gpio10.into_push_pull_output().into_dyn_pin(),
        pins.gpio9.into_push_pull_output().into_dyn_pin(),
        pins.gpio8.into_push_pull_output().into_dyn_pin(),
        pins.gpio5.into_push_pull_output().into_dyn_pin(),
    ];
    let columns = [
        pins.gpio4.into_pull_up_input().into_dyn_pin(),
        pins.gpio3.into_pull_up_input().into_dyn_pin(),
        pins.gpio2.into_pull_up_input().into_dyn_pin(),
        pins.gpio1.into_pull_up_input().into_dyn_pin(),
    ];
    let keypad = MatrixKeypad::new(rows, columns);

    let delay = Delay::new(core.SYST, system_clock_hz);
    let player = AnimationPlayer::new(PioLedDriver::new(tx), delay);
    let dispatcher = Dispatcher::standard().unwrap();

    defmt::info!("keypad matrix demo ready");

    MainLoop::new(keypad, player, dispatcher).run()
}
