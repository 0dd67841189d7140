//! Five-button analog keypad
//!
//! The panel buttons share one ADC input through a resistor ladder. Each
//! button pulls the input to a different voltage; with nothing pressed the
//! pull-up holds it near full scale.
//!
//! Thresholds are expressed for a 10-bit converter and samples from wider or
//! narrower converters are scaled to 10 bits before decoding.

use sousvide_core::config::KeypadHwConfig;
use sousvide_core::ui::UiAction;

/// Bits the ladder thresholds are expressed in
pub const THRESHOLD_BITS: u8 = 10;

/// Panel button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Right,
    Up,
    Down,
    Left,
    Select,
}

impl Button {
    /// Editing action bound to this button
    pub fn action(&self) -> UiAction {
        match self {
            Button::Right => UiAction::ShiftRight,
            Button::Left => UiAction::ShiftLeft,
            Button::Up => UiAction::Increment,
            Button::Down => UiAction::Decrement,
            Button::Select => UiAction::Confirm,
        }
    }
}

/// Upper bounds (exclusive, 10-bit) of each button's voltage band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LadderThresholds {
    pub right: u16,
    pub up: u16,
    pub down: u16,
    pub left: u16,
    pub select: u16,
    /// Samples above this are an idle panel
    pub idle: u16,
}

impl Default for LadderThresholds {
    fn default() -> Self {
        Self {
            right: 50,
            up: 195,
            down: 380,
            left: 555,
            select: 790,
            idle: 1000,
        }
    }
}

impl LadderThresholds {
    /// Decode a 10-bit sample
    ///
    /// Samples between the select band and the idle level decode as no
    /// button.
    pub fn decode(&self, sample: u16) -> Option<Button> {
        if sample > self.idle {
            return None;
        }
        if sample < self.right {
            Some(Button::Right)
        } else if sample < self.up {
            Some(Button::Up)
        } else if sample < self.down {
            Some(Button::Down)
        } else if sample < self.left {
            Some(Button::Left)
        } else if sample < self.select {
            Some(Button::Select)
        } else {
            None
        }
    }
}

/// Scale a sample from an `adc_bits` converter to 10 bits
pub fn to_threshold_scale(raw: u16, adc_bits: u8) -> u16 {
    if adc_bits >= THRESHOLD_BITS {
        raw >> (adc_bits - THRESHOLD_BITS)
    } else {
        raw << (THRESHOLD_BITS - adc_bits)
    }
}

/// Debouncing keypad decoder
///
/// Feed it one ADC sample per poll. A button is reported once, when it has
/// decoded identically for `debounce_samples` polls in a row. Holding a
/// button does not repeat; it must be released (debounced the same way)
/// before it reports again.
#[derive(Debug, Clone)]
pub struct Keypad {
    thresholds: LadderThresholds,
    adc_bits: u8,
    debounce_samples: u8,
    /// Decoded value of the most recent samples
    candidate: Option<Button>,
    /// Consecutive samples that decoded to `candidate`
    stable: u8,
    /// Debounced panel state
    accepted: Option<Button>,
}

impl Keypad {
    /// Create a decoder for the configured converter and debounce depth
    pub fn new(config: &KeypadHwConfig) -> Self {
        Self::with_thresholds(config, LadderThresholds::default())
    }

    pub fn with_thresholds(config: &KeypadHwConfig, thresholds: LadderThresholds) -> Self {
        Self {
            thresholds,
            adc_bits: config.adc_bits,
            debounce_samples: config.debounce_samples.max(1),
            candidate: None,
            stable: 0,
            accepted: None,
        }
    }

    /// Debounced button currently held, if any
    pub fn held(&self) -> Option<Button> {
        self.accepted
    }

    /// Process one raw sample, returning a newly pressed button
    pub fn sample(&mut self, raw: u16) -> Option<Button> {
        let decoded = self
            .thresholds
            .decode(to_threshold_scale(raw, self.adc_bits));

        if decoded == self.candidate {
            self.stable = self.stable.saturating_add(1);
        } else {
            self.candidate = decoded;
            self.stable = 1;
        }

        if self.stable < self.debounce_samples || self.candidate == self.accepted {
            return None;
        }

        self.accepted = self.candidate;
        self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypad_10bit(debounce_samples: u8) -> Keypad {
        Keypad::new(&KeypadHwConfig {
            adc_bits: 10,
            debounce_samples,
            ..Default::default()
        })
    }

    #[test]
    fn test_decode_bands() {
        let t = LadderThresholds::default();
        assert_eq!(t.decode(0), Some(Button::Right));
        assert_eq!(t.decode(49), Some(Button::Right));
        assert_eq!(t.decode(50), Some(Button::Up));
        assert_eq!(t.decode(194), Some(Button::Up));
        assert_eq!(t.decode(200), Some(Button::Down));
        assert_eq!(t.decode(400), Some(Button::Left));
        assert_eq!(t.decode(600), Some(Button::Select));
        assert_eq!(t.decode(789), Some(Button::Select));
        assert_eq!(t.decode(790), None);
        assert_eq!(t.decode(1001), None);
        assert_eq!(t.decode(1023), None);
    }

    #[test]
    fn test_scaling() {
        assert_eq!(to_threshold_scale(4095, 12), 1023);
        assert_eq!(to_threshold_scale(400, 12), 100);
        assert_eq!(to_threshold_scale(255, 8), 1020);
        assert_eq!(to_threshold_scale(512, 10), 512);
    }

    #[test]
    fn test_button_actions() {
        assert_eq!(Button::Right.action(), UiAction::ShiftRight);
        assert_eq!(Button::Left.action(), UiAction::ShiftLeft);
        assert_eq!(Button::Up.action(), UiAction::Increment);
        assert_eq!(Button::Down.action(), UiAction::Decrement);
        assert_eq!(Button::Select.action(), UiAction::Confirm);
    }

    #[test]
    fn test_press_reported_after_debounce() {
        let mut keypad = keypad_10bit(2);

        assert_eq!(keypad.sample(100), None);
        assert_eq!(keypad.sample(100), Some(Button::Up));
        assert_eq!(keypad.held(), Some(Button::Up));
    }

    #[test]
    fn test_hold_does_not_repeat() {
        let mut keypad = keypad_10bit(2);

        keypad.sample(100);
        keypad.sample(100);
        for _ in 0..10 {
            assert_eq!(keypad.sample(100), None);
        }
    }

    #[test]
    fn test_release_then_press_again() {
        let mut keypad = keypad_10bit(2);

        keypad.sample(700);
        assert_eq!(keypad.sample(700), Some(Button::Select));

        keypad.sample(1023);
        keypad.sample(1023);
        assert_eq!(keypad.held(), None);

        keypad.sample(700);
        assert_eq!(keypad.sample(700), Some(Button::Select));
    }

    #[test]
    fn test_glitch_is_ignored() {
        let mut keypad = keypad_10bit(2);

        assert_eq!(keypad.sample(300), None);
        assert_eq!(keypad.sample(100), None);
        assert_eq!(keypad.sample(300), None);
        assert_eq!(keypad.held(), None);
    }

    #[test]
    fn test_direct_switch_between_buttons() {
        let mut keypad = keypad_10bit(1);

        assert_eq!(keypad.sample(10), Some(Button::Right));
        assert_eq!(keypad.sample(450), Some(Button::Left));
    }

    #[test]
    fn test_default_config_is_12bit() {
        let mut keypad = Keypad::new(&KeypadHwConfig::default());

        // 12-bit 2400 -> 10-bit 600: select
        keypad.sample(2400);
        assert_eq!(keypad.sample(2400), Some(Button::Select));
    }
}
