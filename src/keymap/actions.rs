//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Value editing ============
    /// Raise the value by one step
    Increment,
    /// Lower the value by one step
    Decrement,
    /// Raise the value by a page step
    PageUp,
    /// Lower the value by a page step
    PageDown,
    /// Jump to the smallest value
    GoToMin,
    /// Jump to the largest value
    GoToMax,

    // ============ Navigation ============
    /// Continue on the first screen, confirm on the second
    Confirm,
    /// Go back without a result
    Cancel,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,
}

impl Action {
    /// Every action, in help display order
    pub const ALL: [Action; 10] = [
        Action::Increment,
        Action::Decrement,
        Action::PageUp,
        Action::PageDown,
        Action::GoToMin,
        Action::GoToMax,
        Action::Confirm,
        Action::Cancel,
        Action::Quit,
        Action::Help,
    ];

    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::Increment => "Increase value",
            Action::Decrement => "Decrease value",
            Action::PageUp => "Increase by page",
            Action::PageDown => "Decrease by page",
            Action::GoToMin => "Jump to minimum",
            Action::GoToMax => "Jump to maximum",
            Action::Confirm => "Continue / Confirm",
            Action::Cancel => "Go back",
            Action::Quit => "Quit",
            Action::Help => "Show help",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::Increment
            | Action::Decrement
            | Action::PageUp
            | Action::PageDown
            | Action::GoToMin
            | Action::GoToMax => "Value",

            Action::Confirm | Action::Cancel => "Navigation",

            Action::Quit | Action::Help => "Global",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::Increment.description(), "Increase value");
        assert_eq!(Action::Quit.description(), "Quit");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::PageDown.category(), "Value");
        assert_eq!(Action::Cancel.category(), "Navigation");
        assert_eq!(Action::Help.category(), "Global");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::GoToMax).unwrap();
        assert_eq!(json, "\"go_to_max\"");

        let action: Action = serde_json::from_str("\"decrement\"").unwrap();
        assert_eq!(action, Action::Decrement);
    }
}
