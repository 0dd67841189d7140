//! Cooking control state machine
//!
//! Owns the probe and the heater actuator. The control loop calls
//! [`CookingController::tick`] periodically and forwards panel actions to
//! [`CookingController::handle_action`]; both run to completion and are
//! never interleaved, so the controller needs no locking.

use crate::config::bounds::TARGET_BAND_X10;
use crate::config::CookingParameters;
use crate::safety::{SafetyMonitor, SafetyStatus};
use crate::state::{Event, Phase};
use crate::timer::CookTimer;
use crate::traits::{HeaterActuator, TemperatureProbe};
use crate::ui::{EditOutcome, ParameterEditor, UiAction};

use super::status::ControllerStatus;

/// Sous-vide cooking controller
pub struct CookingController<P, H> {
    probe: P,
    heater: H,
    phase: Phase,
    params: CookingParameters,
    editor: ParameterEditor,
    timer: CookTimer,
    safety: SafetyMonitor,
    /// Last reading that passed the safety check (°C × 10)
    last_reading_x10: Option<i16>,
    /// Holding minutes computed on the last cooking tick
    elapsed_min: u32,
}

impl<P: TemperatureProbe, H: HeaterActuator> CookingController<P, H> {
    /// Create a controller with default parameters
    ///
    /// Starts in parameter selection with the heater off.
    pub fn new(probe: P, heater: H) -> Self {
        Self::with_parameters(probe, heater, CookingParameters::default())
    }

    /// Create a controller with preset parameters
    pub fn with_parameters(probe: P, heater: H, params: CookingParameters) -> Self {
        let mut controller = Self {
            probe,
            heater,
            phase: Phase::SelectingParameters,
            params,
            editor: ParameterEditor::new(),
            timer: CookTimer::new(),
            safety: SafetyMonitor::new(),
            last_reading_x10: None,
            elapsed_min: 0,
        };
        controller.enter(Phase::SelectingParameters);
        controller
    }

    /// Get current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get current cooking parameters
    pub fn parameters(&self) -> CookingParameters {
        self.params
    }

    /// Check if the controller has tripped
    pub fn is_tripped(&self) -> bool {
        self.phase.is_tripped()
    }

    /// Last commanded heater state
    pub fn heater_on(&self) -> bool {
        self.heater.is_on()
    }

    /// Get access to the underlying probe
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Get access to the underlying heater actuator
    pub fn heater(&self) -> &H {
        &self.heater
    }

    /// Get the cook clock
    pub fn timer(&self) -> &CookTimer {
        &self.timer
    }

    /// Set the target temperature (clamped)
    ///
    /// Only accepted while selecting parameters. Returns whether it applied.
    pub fn set_target_temp(&mut self, temp_c: i32) -> bool {
        if self.phase != Phase::SelectingParameters {
            return false;
        }
        self.params.set_target_temp(temp_c);
        true
    }

    /// Set the cooking duration (clamped)
    ///
    /// Only accepted while selecting parameters. Returns whether it applied.
    pub fn set_cook_time(&mut self, minutes: i32) -> bool {
        if self.phase != Phase::SelectingParameters {
            return false;
        }
        self.params.set_cook_time(minutes);
        true
    }

    /// Process a panel action
    ///
    /// Edits parameters while selecting, starts a new cycle from Done,
    /// and is ignored everywhere else.
    pub fn handle_action(&mut self, action: UiAction) -> Option<Event> {
        match self.phase {
            Phase::SelectingParameters => match self.editor.apply(action, &mut self.params) {
                EditOutcome::Confirmed => self.apply_event(Event::ParametersConfirmed),
                EditOutcome::Pending => None,
            },
            Phase::Done if action == UiAction::Confirm => self.start_new_cycle(),
            _ => None,
        }
    }

    /// Leave Done and return to parameter selection
    ///
    /// Parameters keep their last values. No effect in any other phase.
    pub fn start_new_cycle(&mut self) -> Option<Event> {
        self.apply_event(Event::NewCycle)
    }

    /// Run one control tick
    ///
    /// Samples the probe while heating or cooking. The safety verdict is
    /// applied before any heater command, and a trip cancels the tick.
    pub fn tick(&mut self, now_ms: u64) -> Option<Event> {
        if !self.phase.heater_allowed() {
            return None;
        }

        let temp_x10 = match self.safety.check(self.probe.read_celsius_x10()) {
            SafetyStatus::Ok(t) => t,
            SafetyStatus::Trip(reason) => return self.apply_event(Event::SafetyTrip(reason)),
        };
        self.last_reading_x10 = Some(temp_x10);

        match self.phase {
            Phase::Heating => {
                self.command_heater(true);

                // Also true for any overshoot above target
                if self.params.target_temp_x10() - temp_x10 < TARGET_BAND_X10 {
                    self.timer.latch(now_ms);
                    return self.apply_event(Event::TargetReached);
                }
                None
            }
            Phase::Cooking => {
                self.elapsed_min = self.timer.elapsed_minutes(now_ms);

                if self.elapsed_min > self.params.cook_time_min() as u32 {
                    return self.apply_event(Event::CookComplete);
                }
                self.command_heater(true);
                None
            }
            _ => None,
        }
    }

    /// Snapshot for the display
    pub fn status(&self) -> ControllerStatus {
        let active = self.phase.heater_allowed();
        ControllerStatus {
            phase: self.phase,
            parameters: self.params,
            reading_x10: if active { self.last_reading_x10 } else { None },
            elapsed_min: self.elapsed_min,
            heater_on: self.heater.is_on(),
            trip_code: match self.phase {
                Phase::Tripped(reason) => Some(reason.code()),
                _ => None,
            },
            cursor: match self.phase {
                Phase::SelectingParameters => Some(self.editor.cursor()),
                _ => None,
            },
        }
    }

    /// Run the transition table and perform entry actions
    fn apply_event(&mut self, event: Event) -> Option<Event> {
        let next = self.phase.transition(event);
        if next == self.phase {
            return None;
        }

        // Phase is written before any actuation so a trip can never be
        // followed by a heater-on from the same call.
        self.phase = next;
        self.enter(next);
        Some(event)
    }

    fn enter(&mut self, phase: Phase) {
        match phase {
            Phase::SelectingParameters => {
                self.command_heater(false);
                self.timer.reset();
                self.editor.reset();
                self.last_reading_x10 = None;
                self.elapsed_min = 0;
            }
            Phase::Heating => {
                self.timer.reset();
                self.elapsed_min = 0;
            }
            Phase::Cooking => {
                self.elapsed_min = 0;
            }
            Phase::Done => {
                self.command_heater(false);
            }
            Phase::Tripped(_) => {
                self.heater.force_off();
            }
        }
    }

    /// Command the heater only if it differs from the actuator's state
    fn command_heater(&mut self, on: bool) {
        if self.heater.is_on() != on {
            self.heater.set_on(on);
        }
    }
}
