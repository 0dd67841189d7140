//! Embassy async tasks
//!
//! The control task owns the controller; the keypad task feeds it actions.

pub mod control;
pub mod keypad;

pub use control::control_task;
pub use keypad::keypad_task;
