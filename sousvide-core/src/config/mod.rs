//! Configuration types
//!
//! Safety bounds are compile-time constants. Board wiring and timing live in
//! [`HardwareConfig`], which the firmware fills from `machine.toml`.

pub mod bounds;
pub mod hardware;
pub mod types;

pub use bounds::*;
pub use hardware::*;
pub use types::*;
