//! DS18B20 digital temperature probe
//!
//! Waterproof stainless probe on a 1-Wire bus with an external 4.7K pull-up.
//! The probe is the only device on the bus, so every transaction addresses
//! it with Skip ROM.
//!
//! A read is a full conversion cycle: start the conversion, wait the
//! conversion time for the configured resolution, then read and verify the
//! scratchpad.

use embedded_hal::delay::DelayNs;
use sousvide_core::traits::{ProbeError, TemperatureProbe};

use super::onewire::{crc8, OneWireBus, CONVERT_T, READ_SCRATCHPAD, SKIP_ROM, WRITE_SCRATCHPAD};

/// Scratchpad length including the CRC byte
pub const SCRATCHPAD_LEN: usize = 9;

/// Temperature register value after power-up, before any conversion (85.0°C)
pub const POWER_ON_RAW: i16 = 0x0550;

/// Configuration register value after power-up (12-bit)
pub const POWER_ON_CONFIG: u8 = 0x7F;

/// Scratchpad offset of the configuration register
const CONFIG_OFFSET: usize = 4;

/// Lowest measurable temperature (°C × 16)
pub const MIN_RAW: i16 = -55 * 16;

/// Highest measurable temperature (°C × 16)
pub const MAX_RAW: i16 = 125 * 16;

/// Alarm thresholds written alongside the configuration (unused)
const ALARM_HIGH: u8 = 0x4B;
const ALARM_LOW: u8 = 0x46;

/// Conversion resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 0.5°C
    Bits9,
    /// 0.25°C
    Bits10,
    /// 0.125°C
    Bits11,
    /// 0.0625°C
    Bits12,
}

impl Resolution {
    /// Resolution for a bit count, if supported
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            9 => Some(Resolution::Bits9),
            10 => Some(Resolution::Bits10),
            11 => Some(Resolution::Bits11),
            12 => Some(Resolution::Bits12),
            _ => None,
        }
    }

    pub fn bits(&self) -> u8 {
        match self {
            Resolution::Bits9 => 9,
            Resolution::Bits10 => 10,
            Resolution::Bits11 => 11,
            Resolution::Bits12 => 12,
        }
    }

    /// Maximum conversion time (ms)
    pub fn conversion_time_ms(&self) -> u32 {
        match self {
            Resolution::Bits9 => 94,
            Resolution::Bits10 => 188,
            Resolution::Bits11 => 375,
            Resolution::Bits12 => 750,
        }
    }

    /// Configuration register value
    fn config_byte(&self) -> u8 {
        ((self.bits() - 9) << 5) | 0x1F
    }

    /// Mask clearing the undefined low bits of the temperature register
    fn raw_mask(&self) -> i16 {
        !((1i16 << (12 - self.bits())) - 1)
    }
}

/// Convert a raw register value (°C × 16) to °C × 10, rounding to nearest
pub fn raw_to_x10(raw: i16) -> i16 {
    ((raw as i32 * 10 + 8).div_euclid(16)) as i16
}

/// DS18B20 probe
pub struct Ds18b20<B, D> {
    bus: B,
    delay: D,
    resolution: Resolution,
    /// Configuration register written since power-up
    configured: bool,
}

impl<B: OneWireBus, D: DelayNs> Ds18b20<B, D> {
    /// Create a new probe driver
    ///
    /// The resolution is written to the probe before the first conversion.
    pub fn new(bus: B, delay: D, resolution: Resolution) -> Self {
        Self {
            bus,
            delay,
            resolution,
            configured: false,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Get access to the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    fn configure(&mut self) -> Result<(), ProbeError> {
        if !self.bus.reset() {
            return Err(ProbeError::Disconnected);
        }
        self.bus.write_bytes(&[
            SKIP_ROM,
            WRITE_SCRATCHPAD,
            ALARM_HIGH,
            ALARM_LOW,
            self.resolution.config_byte(),
        ]);
        self.configured = true;
        Ok(())
    }

    fn convert(&mut self) -> Result<(), ProbeError> {
        if !self.bus.reset() {
            return Err(ProbeError::Disconnected);
        }
        self.bus.write_bytes(&[SKIP_ROM, CONVERT_T]);
        self.delay.delay_ms(self.resolution.conversion_time_ms());
        Ok(())
    }

    fn read_scratchpad(&mut self) -> Result<[u8; SCRATCHPAD_LEN], ProbeError> {
        if !self.bus.reset() {
            return Err(ProbeError::Disconnected);
        }
        self.bus.write_bytes(&[SKIP_ROM, READ_SCRATCHPAD]);

        let mut scratchpad = [0u8; SCRATCHPAD_LEN];
        self.bus.read_bytes(&mut scratchpad);

        // Probe unplugged mid-transaction: the pull-up reads all ones
        if scratchpad.iter().all(|&b| b == 0xFF) {
            return Err(ProbeError::Disconnected);
        }
        if crc8(&scratchpad[..SCRATCHPAD_LEN - 1]) != scratchpad[SCRATCHPAD_LEN - 1] {
            return Err(ProbeError::CrcMismatch);
        }
        Ok(scratchpad)
    }
}

impl<B: OneWireBus, D: DelayNs> TemperatureProbe for Ds18b20<B, D> {
    fn read_celsius_x10(&mut self) -> Result<i16, ProbeError> {
        if !self.configured {
            self.configure()?;
        }
        self.convert()?;
        let scratchpad = self.read_scratchpad()?;

        let config = scratchpad[CONFIG_OFFSET];
        if config != self.resolution.config_byte() {
            // Probe browned out and came back at its power-up resolution
            self.configured = false;
        }

        // 85.0°C is only a power-up value if the configuration was lost too.
        // At 12 bits the two cannot be told apart, so it is taken as a reading.
        let raw = i16::from_le_bytes([scratchpad[0], scratchpad[1]]);
        if raw == POWER_ON_RAW && config == POWER_ON_CONFIG && !self.configured {
            return Err(ProbeError::PowerOnReset);
        }

        let raw = raw & self.resolution.raw_mask();
        if !(MIN_RAW..=MAX_RAW).contains(&raw) {
            return Err(ProbeError::OutOfRange);
        }

        Ok(raw_to_x10(raw))
    }
}
