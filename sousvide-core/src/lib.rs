//! Board-agnostic core logic for the sous-vide controller firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (temperature probe, heater actuator)
//! - Cooking state machine and the controller that drives it
//! - Safety monitoring logic
//! - Cook clock (holding-time tracking)
//! - Parameter bounds and the digit-wise parameter editor
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod safety;
pub mod state;
pub mod timer;
pub mod traits;
pub mod ui;

pub use controller::{ControllerStatus, CookingController};
pub use state::{Event, Phase, TripReason};
