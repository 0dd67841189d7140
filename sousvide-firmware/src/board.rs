//! Board wiring
//!
//! Pin numbers come from machine.toml; `take_board_pins!` (generated by
//! the build script) moves the matching GPIOs out of the peripherals.

use embassy_rp::adc;
use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;

/// GPIOs used by the controller
pub struct BoardPins {
    /// RF encoder D0-D2
    pub rf_address: Peri<'static, AnyPin>,
    /// RF encoder D3
    pub rf_channel: Peri<'static, AnyPin>,
    /// RF transmitter enable
    pub rf_modulator: Peri<'static, AnyPin>,
    /// DS18B20 1-Wire data line
    pub probe_data: Peri<'static, AnyPin>,
    /// Button ladder ADC input
    pub keypad: adc::Channel<'static>,
}
