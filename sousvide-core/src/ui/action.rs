//! Panel actions

/// Discrete edit and control actions from the button panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiAction {
    /// Move the digit cursor one place left (towards higher place values)
    ShiftLeft,
    /// Move the digit cursor one place right (towards the units)
    ShiftRight,
    /// Add one to the selected digit
    Increment,
    /// Subtract one from the selected digit
    Decrement,
    /// Select / confirm
    Confirm,
}

impl UiAction {
    /// Returns the value direction as a signed delta (-1, 0, or +1)
    pub fn value_delta(&self) -> i8 {
        match self {
            UiAction::Increment => 1,
            UiAction::Decrement => -1,
            _ => 0,
        }
    }
}
