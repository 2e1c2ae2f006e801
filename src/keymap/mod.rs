//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    ///
    /// Terminals report shifted characters inconsistently ('G' vs 'g' with
    /// Shift, '?' with or without Shift), so a shifted character is also
    /// tried lowercased and with Shift dropped.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let bindings = self.all_bindings();
        let lookup = |code: KeyCode, modifiers: KeyModifiers| {
            bindings
                .iter()
                .find(|b| b.matches(code, modifiers))
                .map(|b| b.action)
        };

        if let Some(action) = lookup(code, modifiers) {
            return Some(action);
        }
        match code {
            KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => {
                lookup(KeyCode::Char(c.to_ascii_lowercase()), modifiers)
                    .or_else(|| lookup(code, modifiers - KeyModifiers::SHIFT))
            }
            _ => None,
        }
    }

    /// Get all bindings (overrides + preset) for display in help
    /// Overrides shadow preset bindings for the same action
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Keys bound to `action`, formatted for display
    pub fn keys_for(&self, action: Action) -> Vec<String> {
        self.all_bindings()
            .iter()
            .filter(|b| b.action == action)
            .map(KeyBinding::display)
            .collect()
    }

    /// Help text for `action`: the first custom description among its
    /// bindings, else the action's own description
    pub fn description_for(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .filter(|b| b.action == action)
            .find(|b| b.description.is_some())
            .map_or_else(|| action.description(), KeyBinding::get_description)
            .to_string()
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "Q")
    /// Returns the first binding, or the action name if nothing is bound.
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.keys_for(action)
            .into_iter()
            .next()
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer text for the first screen
    pub fn footer_first(&self) -> String {
        format!(
            "{}/{}: Adjust | {}: Continue | {}: Quit | {}: Help",
            self.get_key_display_for_action(Action::Increment),
            self.get_key_display_for_action(Action::Decrement),
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Quit),
            self.get_key_display_for_action(Action::Help),
        )
    }

    /// Footer text for the second screen
    pub fn footer_second(&self) -> String {
        format!(
            "{}/{}: Adjust | {}: Confirm | {}: Back | {}: Help",
            self.get_key_display_for_action(Action::Increment),
            self.get_key_display_for_action(Action::Decrement),
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Cancel),
            self.get_key_display_for_action(Action::Help),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_get_action_from_preset() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::Confirm)
        );
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("q", Action::Help)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Help)
        );
        // '?' was the preset Help binding and is now shadowed
        assert_eq!(keymap.get_action(KeyCode::Char('?'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_shifted_chars() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('?'), KeyModifiers::SHIFT),
            Some(Action::Help)
        );

        let vim = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        assert_eq!(
            vim.get_action(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(Action::GoToMax)
        );
        assert_eq!(
            vim.get_action(KeyCode::Char('g'), KeyModifiers::NONE),
            Some(Action::GoToMin)
        );
    }

    #[test]
    fn test_footer_reflects_overrides() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("x", Action::Quit)],
        };
        assert!(keymap.footer_first().contains("X: Quit"));
        assert!(keymap.footer_second().contains("Esc: Back"));
    }
}
