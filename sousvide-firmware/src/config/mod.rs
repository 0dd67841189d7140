//! Board configuration compiled from machine.toml
//!
//! Provides `MACHINE` and the `take_board_pins!` macro.

use sousvide_core::config::{HardwareConfig, KeypadHwConfig, ProbeHwConfig, RfSwitchHwConfig};

include!(concat!(env!("OUT_DIR"), "/machine_config.rs"));
