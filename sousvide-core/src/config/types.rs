//! Cooking parameter types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bounds::{DEFAULT_COOK_TIME_MIN, DEFAULT_TEMP_C, TEMP_BOUNDS, TIME_BOUNDS};

/// User-selected cooking parameters
///
/// Both fields always lie within the hard-coded safety bounds. Setters clamp
/// instead of rejecting, so there is no invalid-parameter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CookingParameters {
    /// Target water temperature (°C)
    target_temp_c: i16,
    /// Holding duration once the target is reached (minutes)
    cook_time_min: u16,
}

impl Default for CookingParameters {
    fn default() -> Self {
        Self {
            target_temp_c: DEFAULT_TEMP_C,
            cook_time_min: DEFAULT_COOK_TIME_MIN,
        }
    }
}

impl CookingParameters {
    /// Create parameters, clamping both values into bounds
    pub fn new(target_temp_c: i32, cook_time_min: i32) -> Self {
        let mut params = Self::default();
        params.set_target_temp(target_temp_c);
        params.set_cook_time(cook_time_min);
        params
    }

    /// Target temperature in whole degrees Celsius
    pub fn target_temp_c(&self) -> i16 {
        self.target_temp_c
    }

    /// Target temperature in 0.1°C units
    pub fn target_temp_x10(&self) -> i16 {
        self.target_temp_c * 10
    }

    /// Cooking duration in minutes
    pub fn cook_time_min(&self) -> u16 {
        self.cook_time_min
    }

    /// Set the target temperature, clamped to the temperature bounds
    pub fn set_target_temp(&mut self, temp_c: i32) {
        self.target_temp_c = TEMP_BOUNDS.clamp(temp_c) as i16;
    }

    /// Set the cooking duration, clamped to the time bounds
    pub fn set_cook_time(&mut self, minutes: i32) {
        self.cook_time_min = TIME_BOUNDS.clamp(minutes) as u16;
    }
}
