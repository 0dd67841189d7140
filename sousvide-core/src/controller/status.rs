//! Controller status snapshot for rendering

use crate::config::CookingParameters;
use crate::state::Phase;
use crate::ui::Cursor;

/// Everything the display needs to draw the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerStatus {
    pub phase: Phase,
    pub parameters: CookingParameters,
    /// Latest probe reading (°C × 10), only while heating or cooking
    pub reading_x10: Option<i16>,
    /// Whole minutes held at temperature
    pub elapsed_min: u32,
    /// Last commanded heater state
    pub heater_on: bool,
    /// Diagnostic code when tripped
    pub trip_code: Option<u8>,
    /// Blinking digit while selecting parameters
    pub cursor: Option<Cursor>,
}

impl ControllerStatus {
    /// Minutes of holding left, saturating at zero
    pub fn remaining_min(&self) -> u32 {
        (self.parameters.cook_time_min() as u32).saturating_sub(self.elapsed_min)
    }
}
