//! Safety monitor implementation
//!
//! Checks every probe reading against the fixed water temperature bounds.

use crate::config::bounds::{MAX_TEMP_C, MIN_TEMP_C};
use crate::state::TripReason;
use crate::traits::ProbeError;

/// Safety thresholds (°C × 10)
pub const MAX_TEMPERATURE_X10: i16 = MAX_TEMP_C * 10;
pub const MIN_TEMPERATURE_X10: i16 = MIN_TEMP_C * 10;

/// Classification of a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyFlag {
    /// Reading inside the closed safe interval
    Nominal,
    /// Reading above the maximum temperature
    OverTemperature,
    /// Reading below the minimum temperature
    UnderTemperature,
}

/// Safety condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// Reading usable (°C × 10)
    Ok(i16),
    /// Heating must stop
    Trip(TripReason),
}

/// Safety monitor for fault detection
///
/// Stateless: the verdict depends only on the reading passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafetyMonitor;

impl SafetyMonitor {
    /// Create a new safety monitor
    pub const fn new() -> Self {
        Self
    }

    /// Classify a reading against the safe interval
    ///
    /// Over-temperature is checked first.
    pub fn flag(&self, temp_x10: i16) -> SafetyFlag {
        if temp_x10 > MAX_TEMPERATURE_X10 {
            SafetyFlag::OverTemperature
        } else if temp_x10 < MIN_TEMPERATURE_X10 {
            SafetyFlag::UnderTemperature
        } else {
            SafetyFlag::Nominal
        }
    }

    /// Check a probe result
    ///
    /// A probe fault trips exactly like an out-of-bounds reading.
    pub fn check(&self, reading: Result<i16, ProbeError>) -> SafetyStatus {
        let temp_x10 = match reading {
            Ok(t) => t,
            Err(_) => return SafetyStatus::Trip(TripReason::ProbeFault),
        };

        match self.flag(temp_x10) {
            SafetyFlag::Nominal => SafetyStatus::Ok(temp_x10),
            SafetyFlag::OverTemperature => SafetyStatus::Trip(TripReason::OverTemperature),
            SafetyFlag::UnderTemperature => SafetyStatus::Trip(TripReason::UnderTemperature),
        }
    }
}
