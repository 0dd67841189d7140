//! Safety monitoring
//!
//! Classifies readings and decides when heating must stop.

pub mod monitor;

pub use monitor::{SafetyFlag, SafetyMonitor, SafetyStatus};
