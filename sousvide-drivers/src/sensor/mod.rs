//! Temperature probe implementations

pub mod ds18b20;
pub mod onewire;

pub use ds18b20::{Ds18b20, Resolution};
pub use onewire::OneWireBus;
