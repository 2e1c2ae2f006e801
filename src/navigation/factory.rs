//! Builds fresh screen state from a descriptor.

use super::descriptor::ScreenDescriptor;
use crate::state::{FirstScreenState, ScreenState, SecondScreenState};

/// Maps descriptors to new screen state.
///
/// `build` has no side effects and never reuses earlier edits; every call
/// returns a new state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenFactory {
    first_initial_value: i32,
}

impl ScreenFactory {
    /// Create a factory whose first screen starts at `first_initial_value`.
    pub fn new(first_initial_value: i32) -> Self {
        Self {
            first_initial_value,
        }
    }

    pub fn first_initial_value(&self) -> i32 {
        self.first_initial_value
    }

    /// Build the state for `descriptor`.
    pub fn build(&self, descriptor: &ScreenDescriptor) -> ScreenState {
        match descriptor {
            ScreenDescriptor::First => {
                ScreenState::First(FirstScreenState::new(self.first_initial_value))
            }
            ScreenDescriptor::Second { initial_value, .. } => {
                ScreenState::Second(SecondScreenState::new(*initial_value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ResultHandle;

    #[test]
    fn test_build_first_uses_factory_value() {
        let factory = ScreenFactory::new(12);
        let state = factory.build(&ScreenDescriptor::First);
        assert_eq!(state.as_first().map(|s| s.selected_value), Some(12));
    }

    #[test]
    fn test_build_is_fresh_every_time() {
        let factory = ScreenFactory::default();
        let descriptor = ScreenDescriptor::Second {
            initial_value: 30,
            reply: ResultHandle::new(0),
        };

        let mut first = factory.build(&descriptor);
        first.set_selected_value(80);
        let second = factory.build(&descriptor);

        assert_eq!(first.selected_value(), 80);
        assert_eq!(second.selected_value(), 30);
    }
}
