//! Preset keymaps: Standard, Vim, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl plus arrows
    Vim,
    /// Ctrl+N/P plus arrows
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

impl FromStr for KeymapPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(KeymapPreset::Standard),
            "vim" => Ok(KeymapPreset::Vim),
            "emacs" => Ok(KeymapPreset::Emacs),
            other => Err(format!("Unknown keymap preset: {}", other)),
        }
    }
}

/// Bindings every preset shares
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("up", Action::Increment),
        KeyBinding::new("down", Action::Decrement),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::GoToMin),
        KeyBinding::new("end", Action::GoToMax),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("?", Action::Help),
    ]
}

fn standard_bindings() -> Vec<KeyBinding> {
    let mut bindings = common_bindings();
    bindings.extend([
        KeyBinding::new("right", Action::Increment),
        KeyBinding::new("=", Action::Increment),
        KeyBinding::new("left", Action::Decrement),
        KeyBinding::new("-", Action::Decrement),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
    ]);
    bindings
}

fn vim_bindings() -> Vec<KeyBinding> {
    let mut bindings = common_bindings();
    bindings.extend([
        KeyBinding::new("k", Action::Increment),
        KeyBinding::new("l", Action::Increment),
        KeyBinding::new("j", Action::Decrement),
        KeyBinding::new("h", Action::Decrement),
        KeyBinding::new("ctrl+u", Action::PageUp),
        KeyBinding::new("ctrl+d", Action::PageDown),
        KeyBinding::new("g", Action::GoToMin),
        KeyBinding::new("shift+g", Action::GoToMax),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
    ]);
    bindings
}

fn emacs_bindings() -> Vec<KeyBinding> {
    let mut bindings = common_bindings();
    bindings.extend([
        KeyBinding::new("ctrl+p", Action::Increment),
        KeyBinding::new("ctrl+f", Action::Increment),
        KeyBinding::new("ctrl+n", Action::Decrement),
        KeyBinding::new("ctrl+b", Action::Decrement),
        KeyBinding::new("alt+v", Action::PageUp),
        KeyBinding::new("ctrl+v", Action::PageDown),
        KeyBinding::new("alt+<", Action::GoToMin),
        KeyBinding::new("alt+>", Action::GoToMax),
        KeyBinding::new("ctrl+g", Action::Cancel), // C-g is cancel in emacs
        KeyBinding::new("f1", Action::Help),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
    ]);
    bindings
}
