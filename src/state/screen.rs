//! Screen view-models.
//!
//! Each view-model holds the value being edited and turns a user gesture into
//! a single [`ScreenAction`]. They never touch the navigation path.

use super::stepper::{clamp_value, step_value};
use crate::screens::ScreenAction;
use tracing::debug;

/// State for the first screen: picks a value and continues with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstScreenState {
    /// Currently selected value.
    pub selected_value: i32,
}

impl FirstScreenState {
    pub fn new(selected_value: i32) -> Self {
        Self {
            selected_value: clamp_value(selected_value),
        }
    }

    pub fn set_selected_value(&mut self, value: i32) {
        self.selected_value = clamp_value(value);
    }

    pub fn step(&mut self, delta: i32) {
        self.selected_value = step_value(self.selected_value, delta);
    }

    /// The user wants to move on with the current value.
    pub fn continue_tapped(&self) -> ScreenAction {
        debug!("First screen continue with {}", self.selected_value);
        ScreenAction::Continue {
            value: self.selected_value,
        }
    }

    /// Take a value confirmed on a later screen.
    pub fn apply_result(&mut self, value: i32) {
        self.set_selected_value(value);
    }
}

/// State for the second screen: adjusts a value in `[0, 100]` and confirms it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondScreenState {
    /// Currently selected value, always in bounds.
    pub selected_value: i32,
}

impl SecondScreenState {
    pub fn new(selected_value: i32) -> Self {
        Self {
            selected_value: clamp_value(selected_value),
        }
    }

    /// Set the value; out-of-range input is clamped.
    pub fn set_selected_value(&mut self, value: i32) {
        self.selected_value = clamp_value(value);
    }

    pub fn step(&mut self, delta: i32) {
        self.selected_value = step_value(self.selected_value, delta);
    }

    /// The user confirmed the current value.
    ///
    /// Firing this twice is harmless: the coordinator delivers a result
    /// handle only once.
    pub fn confirm_tapped(&self) -> ScreenAction {
        debug!("Second screen confirm with {}", self.selected_value);
        ScreenAction::Confirm {
            value: self.selected_value,
        }
    }
}

/// Union of all screen states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    First(FirstScreenState),
    Second(SecondScreenState),
}

impl ScreenState {
    pub fn selected_value(&self) -> i32 {
        match self {
            Self::First(state) => state.selected_value,
            Self::Second(state) => state.selected_value,
        }
    }

    pub fn set_selected_value(&mut self, value: i32) {
        match self {
            Self::First(state) => state.set_selected_value(value),
            Self::Second(state) => state.set_selected_value(value),
        }
    }

    /// Write a delivered result into this screen.
    pub fn apply_result(&mut self, value: i32) {
        match self {
            Self::First(state) => state.apply_result(value),
            Self::Second(state) => state.set_selected_value(value),
        }
    }

    pub fn as_first(&self) -> Option<&FirstScreenState> {
        if let Self::First(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_first_mut(&mut self) -> Option<&mut FirstScreenState> {
        if let Self::First(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_second(&self) -> Option<&SecondScreenState> {
        if let Self::Second(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_second_mut(&mut self) -> Option<&mut SecondScreenState> {
        if let Self::Second(state) = self {
            Some(state)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_clamps_out_of_range() {
        let mut state = SecondScreenState::new(50);
        state.set_selected_value(150);
        assert_eq!(state.selected_value, 100);
        state.set_selected_value(-1);
        assert_eq!(state.selected_value, 0);
        assert_eq!(SecondScreenState::new(-20).selected_value, 0);
    }

    #[test]
    fn test_second_confirm_can_fire_twice() {
        let state = SecondScreenState::new(7);
        assert_eq!(state.confirm_tapped(), ScreenAction::Confirm { value: 7 });
        assert_eq!(state.confirm_tapped(), ScreenAction::Confirm { value: 7 });
    }

    #[test]
    fn test_first_continue_and_apply_result() {
        let mut state = FirstScreenState::new(5);
        assert_eq!(state.continue_tapped(), ScreenAction::Continue { value: 5 });
        state.apply_result(42);
        assert_eq!(state.selected_value, 42);
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let mut state = FirstScreenState::new(98);
        state.step(5);
        assert_eq!(state.selected_value, 100);
        state.step(-200);
        assert_eq!(state.selected_value, 0);
    }

    #[test]
    fn test_screen_state_accessors() {
        let mut state = ScreenState::Second(SecondScreenState::new(3));
        assert!(state.as_first().is_none());
        state.as_second_mut().unwrap().step(2);
        assert_eq!(state.selected_value(), 5);
        state.apply_result(60);
        assert_eq!(state.selected_value(), 60);
    }
}
