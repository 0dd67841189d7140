//! Events that trigger phase transitions

use super::machine::TripReason;

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// User confirmed the parameters (third consecutive select)
    ParametersConfirmed,
    /// Reading came within 1.0°C of target; cook clock latched
    TargetReached,
    /// Holding time exceeded the configured duration
    CookComplete,
    /// Safety monitor rejected a reading
    SafetyTrip(TripReason),
    /// User started a new cycle after completion
    NewCycle,
}

impl Event {
    /// Check if this event indicates a trip
    pub fn is_trip(&self) -> bool {
        matches!(self, Event::SafetyTrip(_))
    }
}
