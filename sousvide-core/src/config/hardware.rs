//! Hardware configuration types
//!
//! These types define the board wiring and timing for the RF power switch,
//! the temperature probe and the button panel. The firmware deserializes
//! them from `machine.toml` at build time.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest GPIO number on the RP2040
pub const MAX_GPIO: u8 = 29;

/// GPIOs wired to the RP2040 ADC
pub const ADC_GPIO_FIRST: u8 = 26;
pub const ADC_GPIO_LAST: u8 = 29;

/// Maximum number of problems reported by [`HardwareConfig::validate`]
pub const MAX_CONFIG_ERRORS: usize = 8;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// GPIO number does not exist on the board
    InvalidPin(u8),
    /// The same GPIO is assigned to more than one function
    DuplicatePin(u8),
    /// Keypad pin is not connected to the ADC
    NotAnAdcPin(u8),
    /// Probe resolution outside 9-12 bits
    InvalidResolution(u8),
    /// ADC resolution outside 8-16 bits
    InvalidAdcBits(u8),
    /// Control tick interval outside 100 ms - 60 s
    InvalidTickInterval(u32),
    /// RF switch timing must be non-zero
    InvalidSwitchTiming,
    /// Keypad debounce must be at least one sample
    InvalidDebounce,
}

/// RF remote power switch wiring and timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RfSwitchHwConfig {
    /// Encoder address lines D0-D2 (tied together)
    pub address_pin: u8,
    /// Encoder data line D3 (selects on/off)
    pub channel_pin: u8,
    /// Transmitter modulator enable
    pub modulator_pin: u8,
    /// Wait after setting the encoder lines, before keying the modulator (ms)
    pub encode_settle_ms: u32,
    /// How long the modulator stays keyed (ms)
    pub transmit_ms: u32,
}

impl Default for RfSwitchHwConfig {
    fn default() -> Self {
        Self {
            address_pin: 12,
            channel_pin: 13,
            modulator_pin: 11,
            encode_settle_ms: 100,
            transmit_ms: 200,
        }
    }
}

impl RfSwitchHwConfig {
    /// Total time a single switch command blocks for
    pub fn settling_delay_ms(&self) -> u32 {
        self.encode_settle_ms + self.transmit_ms
    }
}

/// DS18B20 probe wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProbeHwConfig {
    /// 1-Wire data pin (with external 4.7K pull-up)
    pub data_pin: u8,
    /// Conversion resolution in bits (9-12)
    pub resolution_bits: u8,
}

impl Default for ProbeHwConfig {
    fn default() -> Self {
        Self {
            data_pin: 2,
            resolution_bits: 12,
        }
    }
}

/// Analog button ladder wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeypadHwConfig {
    /// ADC input the resistor ladder is connected to
    pub adc_pin: u8,
    /// ADC sample width in bits
    pub adc_bits: u8,
    /// Consecutive identical samples required to accept a press
    pub debounce_samples: u8,
    /// Sampling period (ms)
    pub poll_interval_ms: u32,
}

impl Default for KeypadHwConfig {
    fn default() -> Self {
        Self {
            adc_pin: 26,
            adc_bits: 12,
            debounce_samples: 2,
            poll_interval_ms: 50,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HardwareConfig {
    /// Control loop period (ms)
    pub tick_interval_ms: u32,
    pub rf_switch: RfSwitchHwConfig,
    pub probe: ProbeHwConfig,
    pub keypad: KeypadHwConfig,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            rf_switch: RfSwitchHwConfig::default(),
            probe: ProbeHwConfig::default(),
            keypad: KeypadHwConfig::default(),
        }
    }
}

impl HardwareConfig {
    /// Check the configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<ConfigError, MAX_CONFIG_ERRORS>> {
        let mut errors: Vec<ConfigError, MAX_CONFIG_ERRORS> = Vec::new();

        if !(100..=60_000).contains(&self.tick_interval_ms) {
            let _ = errors.push(ConfigError::InvalidTickInterval(self.tick_interval_ms));
        }

        let pins = [
            self.rf_switch.address_pin,
            self.rf_switch.channel_pin,
            self.rf_switch.modulator_pin,
            self.probe.data_pin,
            self.keypad.adc_pin,
        ];
        for (i, &pin) in pins.iter().enumerate() {
            if pin > MAX_GPIO {
                let _ = errors.push(ConfigError::InvalidPin(pin));
            } else if pins[..i].contains(&pin) {
                let _ = errors.push(ConfigError::DuplicatePin(pin));
            }
        }

        if !(ADC_GPIO_FIRST..=ADC_GPIO_LAST).contains(&self.keypad.adc_pin) {
            let _ = errors.push(ConfigError::NotAnAdcPin(self.keypad.adc_pin));
        }

        if !(9..=12).contains(&self.probe.resolution_bits) {
            let _ = errors.push(ConfigError::InvalidResolution(self.probe.resolution_bits));
        }

        if !(8..=16).contains(&self.keypad.adc_bits) {
            let _ = errors.push(ConfigError::InvalidAdcBits(self.keypad.adc_bits));
        }

        if self.rf_switch.encode_settle_ms == 0 || self.rf_switch.transmit_ms == 0 {
            let _ = errors.push(ConfigError::InvalidSwitchTiming);
        }

        if self.keypad.debounce_samples == 0 || self.keypad.poll_interval_ms == 0 {
            let _ = errors.push(ConfigError::InvalidDebounce);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
