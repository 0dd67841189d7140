//! User-interface boundary
//!
//! Discrete panel actions and the digit-wise parameter editor used while
//! the controller is selecting parameters.

pub mod action;
pub mod editor;

pub use action::UiAction;
pub use editor::{Cursor, EditOutcome, Field, ParameterEditor, CONFIRMS_TO_START};
