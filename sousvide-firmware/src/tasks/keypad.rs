//! Keypad polling task
//!
//! Samples the button ladder at the configured rate and queues one action
//! per debounced press.

use defmt::*;
use embassy_rp::adc::{self, Adc, Async};
use embassy_time::{Duration, Ticker};

use sousvide_core::config::KeypadHwConfig;
use sousvide_drivers::input::Keypad;

use crate::channels::UI_ACTIONS;

#[embassy_executor::task]
pub async fn keypad_task(
    mut adc: Adc<'static, Async>,
    mut channel: adc::Channel<'static>,
    config: KeypadHwConfig,
) {
    info!(
        "Keypad task started ({}-bit, {} ms poll, {} sample debounce)",
        config.adc_bits, config.poll_interval_ms, config.debounce_samples
    );

    let mut keypad = Keypad::new(&config);
    let mut ticker = Ticker::every(Duration::from_millis(config.poll_interval_ms as u64));

    loop {
        ticker.next().await;

        let raw = match adc.read(&mut channel).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Keypad ADC read failed: {:?}", defmt::Debug2Format(&e));
                continue;
            }
        };

        if let Some(button) = keypad.sample(raw) {
            debug!("Button: {:?} (raw {})", button, raw);
            if UI_ACTIONS.try_send(button.action()).is_err() {
                warn!("Action queue full, dropping {:?}", button);
            }
        }
    }
}
