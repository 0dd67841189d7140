//! Hard-coded safety bounds
//!
//! These limits are not configurable. Cooking parameters are clamped into
//! them, and the safety monitor trips on readings outside the temperature
//! range.

/// Lowest target temperature and lowest safe water temperature (°C)
pub const MIN_TEMP_C: i16 = 20;

/// Highest target temperature and highest safe water temperature (°C)
pub const MAX_TEMP_C: i16 = 85;

/// Shortest cooking duration (minutes)
pub const MIN_COOK_TIME_MIN: u16 = 30;

/// Longest cooking duration (minutes)
pub const MAX_COOK_TIME_MIN: u16 = 600;

/// Default target temperature at power-on (°C)
pub const DEFAULT_TEMP_C: i16 = 60;

/// Default cooking duration at power-on (minutes)
pub const DEFAULT_COOK_TIME_MIN: u16 = 60;

/// The cook clock latches once the reading is less than this far below target
/// (°C × 10)
pub const TARGET_BAND_X10: i16 = 10;

/// Inclusive range of allowed values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

/// Target temperature bounds (°C)
pub const TEMP_BOUNDS: Bounds = Bounds::new(MIN_TEMP_C as i32, MAX_TEMP_C as i32);

/// Cooking duration bounds (minutes)
pub const TIME_BOUNDS: Bounds = Bounds::new(MIN_COOK_TIME_MIN as i32, MAX_COOK_TIME_MIN as i32);

impl Bounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Clamp a value into these bounds
    pub fn clamp(&self, value: i32) -> i32 {
        clamp(value, self.min, self.max)
    }

    /// Check whether a value lies inside the bounds
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Clamp `value` into `[lo, hi]`
///
/// Out-of-range values snap to the nearest bound; nothing is rejected.
pub fn clamp(value: i32, lo: i32, hi: i32) -> i32 {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_inside_is_identity() {
        assert_eq!(clamp(42, 20, 85), 42);
        assert_eq!(clamp(20, 20, 85), 20);
        assert_eq!(clamp(85, 20, 85), 85);
    }

    #[test]
    fn test_clamp_snaps_to_nearest_bound() {
        assert_eq!(clamp(5, 20, 85), 20);
        assert_eq!(clamp(-300, 20, 85), 20);
        assert_eq!(clamp(90, 20, 85), 85);
        assert_eq!(TIME_BOUNDS.clamp(1000), 600);
        assert_eq!(TIME_BOUNDS.clamp(0), 30);
    }

    #[test]
    fn test_bounds_contains() {
        assert!(TEMP_BOUNDS.contains(60));
        assert!(!TEMP_BOUNDS.contains(19));
        assert!(!TEMP_BOUNDS.contains(86));
    }

    proptest! {
        #[test]
        fn clamp_always_within_bounds(value in any::<i32>()) {
            let t = TEMP_BOUNDS.clamp(value);
            prop_assert!(TEMP_BOUNDS.contains(t));

            let d = TIME_BOUNDS.clamp(value);
            prop_assert!(TIME_BOUNDS.contains(d));
        }
    }
}
