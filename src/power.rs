//! On/off button state.
//!
//! Cosmetic only: flipping it does not switch anything on the plate.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    On,
    Off,
}

/// Fill style of the power button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Success,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerButton {
    state: PowerState,
}

impl Default for PowerButton {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerButton {
    /// The button starts out showing "On" in the success style.
    pub fn new() -> Self {
        Self { state: PowerState::On }
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn label(&self) -> &'static str {
        match self.state {
            PowerState::On => "On",
            PowerState::Off => "Off",
        }
    }

    pub fn style(&self) -> ButtonStyle {
        match self.state {
            PowerState::On => ButtonStyle::Success,
            PowerState::Off => ButtonStyle::Danger,
        }
    }

    /// Flips the label and swaps the style to match.
    pub fn toggle(&mut self) -> PowerState {
        self.state = if self.label() == "On" {
            PowerState::Off
        } else {
            PowerState::On
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_on_with_success_style() {
        let button = PowerButton::new();
        assert_eq!(button.label(), "On");
        assert_eq!(button.style(), ButtonStyle::Success);
    }

    #[test]
    fn test_single_toggle_goes_off() {
        let mut button = PowerButton::new();
        assert_eq!(button.toggle(), PowerState::Off);
        assert_eq!(button.label(), "Off");
        assert_eq!(button.style(), ButtonStyle::Danger);
    }

    proptest! {
        #[test]
        fn prop_toggle_parity(toggles in 0usize..200) {
            let mut button = PowerButton::new();
            for _ in 0..toggles {
                button.toggle();
            }
            if toggles % 2 == 0 {
                prop_assert_eq!(button.label(), "On");
                prop_assert_eq!(button.style(), ButtonStyle::Success);
            } else {
                prop_assert_eq!(button.label(), "Off");
                prop_assert_eq!(button.style(), ButtonStyle::Danger);
            }
        }
    }
}
