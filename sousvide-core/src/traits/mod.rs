//! Hardware abstraction traits
//!
//! These traits define the interface between the cooking logic
//! and hardware-specific implementations. Concrete handles are injected
//! into the controller at construction.

pub mod heater;
pub mod probe;

pub use heater::HeaterActuator;
pub use probe::{ProbeError, TemperatureProbe};
