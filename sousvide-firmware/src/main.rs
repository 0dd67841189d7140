//! Sousvide - Water Bath Cooking Controller Firmware
//!
//! Main firmware binary for the RP2040-based controller. Reads a DS18B20
//! water probe, switches the heater through an RF remote outlet and takes
//! parameters from a five-button analog panel.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use sousvide_core::traits::HeaterActuator;
use sousvide_core::CookingController;
use sousvide_drivers::heater::{RfSwitch, RfSwitchTiming};
use sousvide_drivers::sensor::{Ds18b20, Resolution};

#[macro_use]
mod config;

mod board;
mod channels;
mod onewire;
mod probe;
mod tasks;

use crate::config::MACHINE;
use crate::onewire::FlexOneWire;
use crate::probe::LoggedProbe;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Sousvide firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");
    info!("Board configuration: {:?}", MACHINE);

    let pins = take_board_pins!(p);

    // RF outlet. Its state after a reset is unknown, so switch it off
    // before anything else runs.
    let mut heater = RfSwitch::new(
        Output::new(pins.rf_address, Level::Low),
        Output::new(pins.rf_channel, Level::Low),
        Output::new(pins.rf_modulator, Level::Low),
        Delay,
        RfSwitchTiming::from(&MACHINE.rf_switch),
    );
    heater.force_off();
    info!(
        "RF switch initialized, outlet forced off ({} ms per command)",
        MACHINE.rf_switch.settling_delay_ms()
    );

    // Validated to 9-12 bits by the build script
    let resolution = Resolution::from_bits(MACHINE.probe.resolution_bits).unwrap_or(Resolution::Bits12);
    let probe = LoggedProbe::new(Ds18b20::new(
        FlexOneWire::new(pins.probe_data),
        Delay,
        resolution,
    ));
    info!(
        "DS18B20 on GPIO{}, {}-bit ({} ms conversion)",
        MACHINE.probe.data_pin,
        resolution.bits(),
        resolution.conversion_time_ms()
    );

    let controller = CookingController::new(probe, heater);
    let params = controller.parameters();
    info!(
        "Controller ready: {}°C for {} min",
        params.target_temp_c(),
        params.cook_time_min()
    );

    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());

    // Spawn tasks
    spawner
        .spawn(tasks::keypad_task(adc, pins.keypad, MACHINE.keypad))
        .unwrap();
    spawner
        .spawn(tasks::control_task(controller, MACHINE.tick_interval_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
