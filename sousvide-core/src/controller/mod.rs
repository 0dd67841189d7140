//! Cooking controller
//!
//! The controller is the central brain that:
//! - Applies panel actions to the parameters
//! - Samples the probe and runs the safety check every tick
//! - Drives the phase machine and the cook clock
//! - Commands the heater
//! - Publishes a status snapshot for the display

pub mod cooking;
pub mod status;

pub use cooking::CookingController;
pub use status::ControllerStatus;
