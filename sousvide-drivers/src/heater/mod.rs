//! Heater actuator implementations

pub mod rf_switch;

pub use rf_switch::{RfSwitch, RfSwitchTiming};
