//! Inter-task communication channels
//!
//! The keypad task only produces actions; the control task is the sole
//! owner of the controller and consumes them.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use sousvide_core::ui::UiAction;

/// Channel capacity for panel actions
const ACTION_CHANNEL_SIZE: usize = 8;

/// Debounced panel actions from the keypad
pub static UI_ACTIONS: Channel<CriticalSectionRawMutex, UiAction, ACTION_CHANNEL_SIZE> =
    Channel::new();
