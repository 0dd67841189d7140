//! Cooking lifecycle state machine
//!
//! Phases change only through a pure transition table. Side effects
//! (heater commands, clock handling) are performed by the controller.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{Phase, TripReason};
