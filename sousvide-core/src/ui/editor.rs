//! Digit-wise parameter editor
//!
//! The panel shows both parameters with a blinking digit:
//!
//! ```text
//! Temp: 60  °C OFF
//! Time: 060 min
//! ```
//!
//! Left/right move the blinking digit within the current line, up/down add
//! or subtract that digit's place value, select switches lines. Three
//! selects in a row with nothing in between confirm the parameters.

use crate::config::CookingParameters;

use super::action::UiAction;

/// Consecutive confirms needed to leave parameter selection
pub const CONFIRMS_TO_START: u8 = 3;

/// Panel column of the leftmost editable digit
pub const FIRST_DIGIT_COLUMN: u8 = 6;

/// Editable parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Target temperature, two digits, panel row 0
    Temperature,
    /// Cooking duration, three digits, panel row 1
    CookTime,
}

impl Field {
    /// Number of editable digits
    pub fn digits(&self) -> u8 {
        match self {
            Field::Temperature => 2,
            Field::CookTime => 3,
        }
    }

    /// Place value exponent of the leftmost digit
    pub fn max_place(&self) -> u8 {
        self.digits() - 1
    }

    fn other(&self) -> Self {
        match self {
            Field::Temperature => Field::CookTime,
            Field::CookTime => Field::Temperature,
        }
    }
}

/// Blinking digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cursor {
    pub field: Field,
    /// Power of ten of the selected digit (0 = units)
    pub place: u8,
}

impl Cursor {
    /// Cursor on the leftmost digit of `field`
    pub fn leftmost(field: Field) -> Self {
        Self {
            field,
            place: field.max_place(),
        }
    }

    /// Panel column of the selected digit
    pub fn column(&self) -> u8 {
        FIRST_DIGIT_COLUMN + (self.field.max_place() - self.place)
    }

    /// Amount one increment adds at this position
    pub fn step(&self) -> i32 {
        10i32.pow(self.place as u32)
    }
}

/// Result of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditOutcome {
    /// Still editing
    Pending,
    /// Confirm count reached; parameters accepted
    Confirmed,
}

/// Parameter editor state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterEditor {
    cursor: Cursor,
    /// Consecutive confirms since the last other action
    confirm_presses: u8,
}

impl Default for ParameterEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterEditor {
    /// Editor with the cursor on the leftmost temperature digit
    pub fn new() -> Self {
        Self {
            cursor: Cursor::leftmost(Field::Temperature),
            confirm_presses: 0,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Return to the initial cursor position with no pending confirms
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Apply one panel action to `params`
    ///
    /// Value edits are clamped by the parameter setters. Any action other
    /// than confirm clears the confirm count.
    pub fn apply(&mut self, action: UiAction, params: &mut CookingParameters) -> EditOutcome {
        if action != UiAction::Confirm {
            self.confirm_presses = 0;
        }

        match action {
            UiAction::ShiftLeft => {
                if self.cursor.place < self.cursor.field.max_place() {
                    self.cursor.place += 1;
                }
            }
            UiAction::ShiftRight => {
                self.cursor.place = self.cursor.place.saturating_sub(1);
            }
            UiAction::Increment | UiAction::Decrement => {
                let delta = self.cursor.step() * action.value_delta() as i32;
                match self.cursor.field {
                    Field::Temperature => {
                        params.set_target_temp(params.target_temp_c() as i32 + delta)
                    }
                    Field::CookTime => params.set_cook_time(params.cook_time_min() as i32 + delta),
                }
            }
            UiAction::Confirm => {
                self.cursor = Cursor::leftmost(self.cursor.field.other());
                self.confirm_presses += 1;

                if self.confirm_presses >= CONFIRMS_TO_START {
                    self.confirm_presses = 0;
                    return EditOutcome::Confirmed;
                }
            }
        }

        EditOutcome::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::bounds::{TEMP_BOUNDS, TIME_BOUNDS};
    use proptest::prelude::*;

    #[test]
    fn test_initial_cursor() {
        let editor = ParameterEditor::new();
        assert_eq!(editor.cursor().field, Field::Temperature);
        assert_eq!(editor.cursor().place, 1);
        assert_eq!(editor.cursor().column(), 6);
    }

    #[test]
    fn test_increment_tens_then_units() {
        let mut editor = ParameterEditor::new();
        let mut params = CookingParameters::default();

        editor.apply(UiAction::Increment, &mut params);
        assert_eq!(params.target_temp_c(), 70);

        editor.apply(UiAction::ShiftRight, &mut params);
        assert_eq!(editor.cursor().column(), 7);
        editor.apply(UiAction::Decrement, &mut params);
        assert_eq!(params.target_temp_c(), 69);
    }

    #[test]
    fn test_cursor_saturates_at_ends() {
        let mut editor = ParameterEditor::new();
        let mut params = CookingParameters::default();

        editor.apply(UiAction::ShiftLeft, &mut params);
        assert_eq!(editor.cursor().place, 1);

        for _ in 0..5 {
            editor.apply(UiAction::ShiftRight, &mut params);
        }
        assert_eq!(editor.cursor().place, 0);
    }

    #[test]
    fn test_cook_time_hundreds() {
        let mut editor = ParameterEditor::new();
        let mut params = CookingParameters::default();

        editor.apply(UiAction::Confirm, &mut params);
        assert_eq!(editor.cursor(), Cursor::leftmost(Field::CookTime));
        assert_eq!(editor.cursor().column(), 6);

        editor.apply(UiAction::Increment, &mut params);
        assert_eq!(params.cook_time_min(), 160);

        editor.apply(UiAction::ShiftRight, &mut params);
        editor.apply(UiAction::ShiftRight, &mut params);
        assert_eq!(editor.cursor().column(), 8);
        editor.apply(UiAction::Increment, &mut params);
        assert_eq!(params.cook_time_min(), 161);
    }

    #[test]
    fn test_edits_clamp() {
        let mut editor = ParameterEditor::new();
        let mut params = CookingParameters::default();

        // 60 + 10 + 10 + 10 = 90 -> clamps to 85
        for _ in 0..3 {
            editor.apply(UiAction::Increment, &mut params);
        }
        assert_eq!(params.target_temp_c(), 85);

        for _ in 0..10 {
            editor.apply(UiAction::Decrement, &mut params);
        }
        assert_eq!(params.target_temp_c(), 20);
    }

    #[test]
    fn test_three_consecutive_confirms() {
        let mut editor = ParameterEditor::new();
        let mut params = CookingParameters::default();

        assert_eq!(editor.apply(UiAction::Confirm, &mut params), EditOutcome::Pending);
        assert_eq!(editor.apply(UiAction::Confirm, &mut params), EditOutcome::Pending);
        assert_eq!(editor.apply(UiAction::Confirm, &mut params), EditOutcome::Confirmed);
        // Count restarts after a confirmation
        assert_eq!(editor.apply(UiAction::Confirm, &mut params), EditOutcome::Pending);
    }

    #[test]
    fn test_other_action_resets_confirm_count() {
        let mut editor = ParameterEditor::new();
        let mut params = CookingParameters::default();

        editor.apply(UiAction::Confirm, &mut params);
        editor.apply(UiAction::Confirm, &mut params);
        editor.apply(UiAction::ShiftLeft, &mut params);

        assert_eq!(editor.apply(UiAction::Confirm, &mut params), EditOutcome::Pending);
        assert_eq!(editor.apply(UiAction::Confirm, &mut params), EditOutcome::Pending);
        assert_eq!(editor.apply(UiAction::Confirm, &mut params), EditOutcome::Confirmed);
    }

    fn any_action() -> impl Strategy<Value = UiAction> {
        prop_oneof![
            Just(UiAction::ShiftLeft),
            Just(UiAction::ShiftRight),
            Just(UiAction::Increment),
            Just(UiAction::Decrement),
            Just(UiAction::Confirm),
        ]
    }

    proptest! {
        #[test]
        fn edits_stay_in_bounds(actions in proptest::collection::vec(any_action(), 0..200)) {
            let mut editor = ParameterEditor::new();
            let mut params = CookingParameters::default();

            for action in actions {
                editor.apply(action, &mut params);
                prop_assert!(TEMP_BOUNDS.contains(params.target_temp_c() as i32));
                prop_assert!(TIME_BOUNDS.contains(params.cook_time_min() as i32));
                prop_assert!(editor.cursor().place <= editor.cursor().field.max_place());
            }
        }
    }
}
