//! Bit-banged 1-Wire master
//!
//! The data line has an external 4.7K pull-up. The pin's output latch is
//! held low, so enabling the output pulls the line low and switching back
//! to input releases it. Each time slot runs with interrupts masked; the
//! longest is the 70 µs write-0 slot.

use embassy_rp::gpio::{AnyPin, Flex, Pull};
use embassy_rp::Peri;
use embassy_time::{block_for, Duration};

use sousvide_drivers::sensor::OneWireBus;

/// Standard-speed timings (µs)
const RESET_LOW_US: u64 = 480;
const PRESENCE_WAIT_US: u64 = 70;
const RESET_RECOVERY_US: u64 = 410;
const WRITE_1_LOW_US: u64 = 6;
const WRITE_1_RELEASE_US: u64 = 64;
const WRITE_0_LOW_US: u64 = 60;
const WRITE_0_RELEASE_US: u64 = 10;
const READ_LOW_US: u64 = 6;
const READ_SAMPLE_US: u64 = 9;
const READ_RECOVERY_US: u64 = 55;

/// 1-Wire master on a single GPIO
pub struct FlexOneWire {
    pin: Flex<'static>,
}

impl FlexOneWire {
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(Pull::None);
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }

    fn pull_low(&mut self) {
        self.pin.set_as_output();
    }

    fn release(&mut self) {
        self.pin.set_as_input();
    }

    fn write_bit(&mut self, bit: bool) {
        cortex_m::interrupt::free(|_| {
            self.pull_low();
            if bit {
                delay_us(WRITE_1_LOW_US);
                self.release();
                delay_us(WRITE_1_RELEASE_US);
            } else {
                delay_us(WRITE_0_LOW_US);
                self.release();
                delay_us(WRITE_0_RELEASE_US);
            }
        })
    }

    fn read_bit(&mut self) -> bool {
        cortex_m::interrupt::free(|_| {
            self.pull_low();
            delay_us(READ_LOW_US);
            self.release();
            delay_us(READ_SAMPLE_US);
            let bit = self.pin.is_high();
            delay_us(READ_RECOVERY_US);
            bit
        })
    }
}

impl OneWireBus for FlexOneWire {
    fn reset(&mut self) -> bool {
        self.pull_low();
        delay_us(RESET_LOW_US);

        let present = cortex_m::interrupt::free(|_| {
            self.release();
            delay_us(PRESENCE_WAIT_US);
            self.pin.is_low()
        });

        delay_us(RESET_RECOVERY_US);
        present
    }

    fn write_byte(&mut self, byte: u8) {
        for i in 0..8 {
            self.write_bit(byte & (1 << i) != 0);
        }
    }

    fn read_byte(&mut self) -> u8 {
        let mut byte = 0u8;
        for i in 0..8 {
            if self.read_bit() {
                byte |= 1 << i;
            }
        }
        byte
    }
}

fn delay_us(us: u64) {
    block_for(Duration::from_micros(us));
}
