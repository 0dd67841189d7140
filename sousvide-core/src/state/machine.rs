//! Cooking phase definition
//!
//! All heater behavior is a function of the current phase and an event.

use super::events::Event;

/// Controller phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// User editing target temperature and duration; heater off
    SelectingParameters,
    /// Heater fully on until the water nears the target
    Heating,
    /// Target reached once; heater held on for the configured duration
    Cooking,
    /// Duration elapsed; heater off until a new cycle starts
    Done,
    /// Safety trip; heater off and all input refused until power cycle
    Tripped(TripReason),
}

/// Why the controller tripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TripReason {
    /// Reading above the maximum safe temperature
    OverTemperature,
    /// Reading below the minimum safe temperature
    UnderTemperature,
    /// Probe did not deliver a reading
    ProbeFault,
}

impl TripReason {
    /// Opaque diagnostic code shown on the error screen
    pub fn code(&self) -> u8 {
        match self {
            TripReason::OverTemperature => 1,
            TripReason::UnderTemperature => 2,
            TripReason::ProbeFault => 3,
        }
    }
}

impl Phase {
    /// Check if this phase drives the heater and samples the probe
    pub fn heater_allowed(&self) -> bool {
        matches!(self, Phase::Heating | Phase::Cooking)
    }

    /// Check if this is the safety trip phase
    pub fn is_tripped(&self) -> bool {
        matches!(self, Phase::Tripped(_))
    }

    /// Short label for the display and logs
    pub fn label(&self) -> &'static str {
        match self {
            Phase::SelectingParameters => "SELECT",
            Phase::Heating => "HEATING",
            Phase::Cooking => "COOKING",
            Phase::Done => "DONE",
            Phase::Tripped(_) => "ERROR",
        }
    }

    /// Process an event and return the next phase
    ///
    /// Tripped absorbs every event.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (Tripped(_), _) => self,

            (SelectingParameters, ParametersConfirmed) => Heating,

            (Heating, TargetReached) => Cooking,
            (Heating, SafetyTrip(reason)) => Tripped(reason),

            (Cooking, CookComplete) => Done,
            (Cooking, SafetyTrip(reason)) => Tripped(reason),

            (Done, NewCycle) => SelectingParameters,

            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let phase = Phase::SelectingParameters;
        let phase = phase.transition(Event::ParametersConfirmed);
        assert_eq!(phase, Phase::Heating);
        let phase = phase.transition(Event::TargetReached);
        assert_eq!(phase, Phase::Cooking);
        let phase = phase.transition(Event::CookComplete);
        assert_eq!(phase, Phase::Done);
        let phase = phase.transition(Event::NewCycle);
        assert_eq!(phase, Phase::SelectingParameters);
    }

    #[test]
    fn test_trip_from_active_phases() {
        for phase in [Phase::Heating, Phase::Cooking] {
            let next = phase.transition(Event::SafetyTrip(TripReason::OverTemperature));
            assert_eq!(next, Phase::Tripped(TripReason::OverTemperature));
        }
    }

    #[test]
    fn test_trip_ignored_when_heater_idle() {
        for phase in [Phase::SelectingParameters, Phase::Done] {
            let next = phase.transition(Event::SafetyTrip(TripReason::ProbeFault));
            assert_eq!(next, phase);
        }
    }

    #[test]
    fn test_tripped_absorbs_everything() {
        let tripped = Phase::Tripped(TripReason::UnderTemperature);
        let events = [
            Event::ParametersConfirmed,
            Event::TargetReached,
            Event::CookComplete,
            Event::NewCycle,
            Event::SafetyTrip(TripReason::OverTemperature),
        ];

        for event in events {
            assert_eq!(tripped.transition(event), tripped);
        }
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        assert_eq!(
            Phase::SelectingParameters.transition(Event::CookComplete),
            Phase::SelectingParameters
        );
        assert_eq!(Phase::Heating.transition(Event::NewCycle), Phase::Heating);
        assert_eq!(Phase::Cooking.transition(Event::TargetReached), Phase::Cooking);
    }

    #[test]
    fn test_heater_allowed() {
        assert!(Phase::Heating.heater_allowed());
        assert!(Phase::Cooking.heater_allowed());
        assert!(!Phase::SelectingParameters.heater_allowed());
        assert!(!Phase::Done.heater_allowed());
        assert!(!Phase::Tripped(TripReason::ProbeFault).heater_allowed());
    }

    #[test]
    fn test_trip_codes_distinct() {
        assert_eq!(TripReason::OverTemperature.code(), 1);
        assert_eq!(TripReason::UnderTemperature.code(), 2);
        assert_eq!(TripReason::ProbeFault.code(), 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Phase::SelectingParameters.label(), "SELECT");
        assert_eq!(Phase::Cooking.label(), "COOKING");
        assert_eq!(Phase::Tripped(TripReason::OverTemperature).label(), "ERROR");
        assert_eq!(Phase::Tripped(TripReason::ProbeFault).label(), "ERROR");
    }
}
