//! RF remote-controlled outlet
//!
//! The heater is plugged into a 433 MHz remote outlet. The controller drives
//! the transmitter's encoder chip directly:
//!
//! - Address lines D0-D2 (tied together) select the outlet
//! - Data line D3 selects on (high) or off (low)
//! - The modulator line keys the transmitter
//!
//! A command sets the encoder lines, waits for the encoder to settle, then
//! keys the modulator for long enough that the outlet receives a full frame.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use sousvide_core::config::RfSwitchHwConfig;
use sousvide_core::traits::HeaterActuator;

/// Transmission timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RfSwitchTiming {
    /// Wait after setting the encoder lines (ms)
    pub encode_settle_ms: u32,
    /// Modulator keyed duration (ms)
    pub transmit_ms: u32,
}

impl Default for RfSwitchTiming {
    fn default() -> Self {
        Self::from(&RfSwitchHwConfig::default())
    }
}

impl From<&RfSwitchHwConfig> for RfSwitchTiming {
    fn from(config: &RfSwitchHwConfig) -> Self {
        Self {
            encode_settle_ms: config.encode_settle_ms,
            transmit_ms: config.transmit_ms,
        }
    }
}

/// Heater actuator backed by an RF remote outlet
///
/// GPIO writes on the supported boards cannot fail, so the pins are required
/// to have an [`Infallible`] error type.
pub struct RfSwitch<P, D> {
    address: P,
    channel: P,
    modulator: P,
    delay: D,
    timing: RfSwitchTiming,
    /// Last transmitted state
    on: bool,
    /// Number of frames sent since construction
    transmissions: u32,
}

impl<P, D> RfSwitch<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Create a new switch driver
    ///
    /// All lines are driven low and nothing is transmitted. The outlet's
    /// actual state is unknown until the first command; call
    /// [`HeaterActuator::force_off`] at boot to put it in a known state.
    pub fn new(address: P, channel: P, modulator: P, delay: D, timing: RfSwitchTiming) -> Self {
        let mut switch = Self {
            address,
            channel,
            modulator,
            delay,
            timing,
            on: false,
            transmissions: 0,
        };
        drive(&mut switch.address, false);
        drive(&mut switch.channel, false);
        drive(&mut switch.modulator, false);
        switch
    }

    /// Frames sent so far
    pub fn transmissions(&self) -> u32 {
        self.transmissions
    }

    /// Send one on/off frame, blocking for the full settle + transmit time
    fn transmit(&mut self, on: bool) {
        drive(&mut self.channel, on);
        drive(&mut self.address, true);
        self.delay.delay_ms(self.timing.encode_settle_ms);

        drive(&mut self.modulator, true);
        self.delay.delay_ms(self.timing.transmit_ms);
        drive(&mut self.modulator, false);

        self.on = on;
        self.transmissions = self.transmissions.wrapping_add(1);
    }
}

impl<P, D> HeaterActuator for RfSwitch<P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    fn set_on(&mut self, on: bool) {
        if on != self.on {
            self.transmit(on);
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn force_off(&mut self) {
        self.transmit(false);
    }
}

fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, high: bool) {
    match pin.set_state(PinState::from(high)) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embedded_hal::digital::ErrorType;

    /// Pin that remembers its level and counts rising edges
    #[derive(Default)]
    struct MockPin {
        high: Cell<bool>,
        rising_edges: Cell<u32>,
    }

    impl ErrorType for &MockPin {
        type Error = Infallible;
    }

    impl OutputPin for &MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            if !self.high.get() {
                self.rising_edges.set(self.rising_edges.get() + 1);
            }
            self.high.set(true);
            Ok(())
        }
    }

    /// Delay that only accumulates the requested time
    #[derive(Default)]
    struct MockDelay {
        total_ns: Cell<u64>,
    }

    impl MockDelay {
        fn total_ms(&self) -> u64 {
            self.total_ns.get() / 1_000_000
        }
    }

    impl DelayNs for &MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns.set(self.total_ns.get() + ns as u64);
        }
    }

    struct Rig {
        address: MockPin,
        channel: MockPin,
        modulator: MockPin,
        delay: MockDelay,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                address: MockPin::default(),
                channel: MockPin::default(),
                modulator: MockPin::default(),
                delay: MockDelay::default(),
            }
        }

        fn switch(&self) -> RfSwitch<&MockPin, &MockDelay> {
            RfSwitch::new(
                &self.address,
                &self.channel,
                &self.modulator,
                &self.delay,
                RfSwitchTiming::default(),
            )
        }
    }

    #[test]
    fn test_starts_idle() {
        let rig = Rig::new();
        let switch = rig.switch();

        assert!(!switch.is_on());
        assert_eq!(switch.transmissions(), 0);
        assert!(!rig.modulator.high.get());
        assert_eq!(rig.delay.total_ms(), 0);
    }

    #[test]
    fn test_on_frame() {
        let rig = Rig::new();
        let mut switch = rig.switch();

        switch.set_on(true);

        assert!(switch.is_on());
        assert!(rig.channel.high.get());
        assert!(rig.address.high.get());
        assert_eq!(rig.modulator.rising_edges.get(), 1);
        assert!(!rig.modulator.high.get());
        assert_eq!(rig.delay.total_ms(), 300);
    }

    #[test]
    fn test_off_frame_drops_data_line() {
        let rig = Rig::new();
        let mut switch = rig.switch();

        switch.set_on(true);
        switch.set_on(false);

        assert!(!switch.is_on());
        assert!(!rig.channel.high.get());
        assert!(rig.address.high.get());
        assert_eq!(rig.modulator.rising_edges.get(), 2);
        assert_eq!(rig.delay.total_ms(), 600);
    }

    #[test]
    fn test_repeated_command_is_noop() {
        let rig = Rig::new();
        let mut switch = rig.switch();

        switch.set_on(false);
        assert_eq!(switch.transmissions(), 0);

        switch.set_on(true);
        switch.set_on(true);
        switch.set_on(true);
        assert_eq!(switch.transmissions(), 1);
        assert_eq!(rig.modulator.rising_edges.get(), 1);
        assert_eq!(rig.delay.total_ms(), 300);
    }

    #[test]
    fn test_force_off_always_transmits() {
        let rig = Rig::new();
        let mut switch = rig.switch();

        switch.force_off();
        switch.force_off();

        assert!(!switch.is_on());
        assert_eq!(switch.transmissions(), 2);
        assert_eq!(rig.modulator.rising_edges.get(), 2);
    }

    #[test]
    fn test_timing_from_config() {
        let config = RfSwitchHwConfig {
            encode_settle_ms: 20,
            transmit_ms: 50,
            ..Default::default()
        };
        let rig = Rig::new();
        let mut switch = RfSwitch::new(
            &rig.address,
            &rig.channel,
            &rig.modulator,
            &rig.delay,
            RfSwitchTiming::from(&config),
        );

        switch.set_on(true);
        assert_eq!(rig.delay.total_ms(), config.settling_delay_ms() as u64);
    }
}
