//! 1-Wire bus abstraction
//!
//! Only the byte-level operations the probe needs. The firmware provides a
//! bit-banged implementation on an open-drain GPIO.

/// ROM command: address every device on the bus
pub const SKIP_ROM: u8 = 0xCC;

/// Function command: start a temperature conversion
pub const CONVERT_T: u8 = 0x44;

/// Function command: write TH, TL and the configuration register
pub const WRITE_SCRATCHPAD: u8 = 0x4E;

/// Function command: read the 9-byte scratchpad
pub const READ_SCRATCHPAD: u8 = 0xBE;

/// Byte-level 1-Wire master
pub trait OneWireBus {
    /// Issue a reset pulse
    ///
    /// Returns true if at least one device answered with a presence pulse.
    fn reset(&mut self) -> bool;

    /// Write one byte, least significant bit first
    fn write_byte(&mut self, byte: u8);

    /// Read one byte, least significant bit first
    fn read_byte(&mut self) -> u8;

    /// Write several bytes in order
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    /// Fill `buf` with bytes read from the bus
    fn read_bytes(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut() {
            *byte = self.read_byte();
        }
    }
}

/// Dallas/Maxim CRC-8 (polynomial x^8 + x^5 + x^4 + 1, reflected, init 0)
///
/// Running the CRC over data followed by its CRC byte yields zero.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = 0u8;
    for &byte in data {
        let mut b = byte;
        for _ in 0..8 {
            let mix = (crc ^ b) & 0x01;
            crc >>= 1;
            if mix != 0 {
                crc ^= 0x8C;
            }
            b >>= 1;
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_crc8_rom_code() {
        // Family 0x02, serial 00 00 00 01 B8 1C
        let rom = [0x02, 0x1C, 0xB8, 0x01, 0x00, 0x00, 0x00];
        assert_eq!(crc8(&rom), 0xA2);
    }

    #[test]
    fn test_crc8_empty() {
        assert_eq!(crc8(&[]), 0);
    }

    #[test]
    fn test_crc8_power_on_scratchpad() {
        let scratchpad = [0x50, 0x05, 0x4B, 0x46, 0x7F, 0xFF, 0x0C, 0x10];
        assert_eq!(crc8(&scratchpad), 0x1C);
    }

    proptest! {
        #[test]
        fn crc_over_data_and_crc_is_zero(data in proptest::collection::vec(any::<u8>(), 0..16)) {
            let mut framed = data.clone();
            framed.push(crc8(&data));
            prop_assert_eq!(crc8(&framed), 0);
        }
    }
}
