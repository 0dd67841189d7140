//! Operator input

pub mod keypad;

pub use keypad::{Button, Keypad, LadderThresholds};
