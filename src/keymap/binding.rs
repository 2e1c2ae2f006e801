//! KeyBinding struct for mapping keys to actions
//!
//! Provides parsing of key strings like "ctrl+n", "shift+up", "j"

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+n")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.parse()
            .map(|parsed| parsed.code == code && parsed.modifiers == modifiers)
            .unwrap_or(false)
    }

    /// Parse the key string into KeyCode and KeyModifiers
    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Get the display string for this binding (e.g., "Ctrl+N")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Get the description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    let (modifier_part, key_part) = match key.rsplit_once('+') {
        Some((mods, last)) => (Some(mods), last),
        None => (None, key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_part.into_iter().flat_map(|m| m.split('+')) {
        modifiers |= match part.trim() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" | "command" => KeyModifiers::SUPER,
            other => return Err(format!("Unknown modifier: {}", other)),
        };
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

/// Parse a single key name into KeyCode
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let key = key.trim();

    let code = match key {
        "up" | "arrow_up" => KeyCode::Up,
        "down" | "arrow_down" => KeyCode::Down,
        "left" | "arrow_left" => KeyCode::Left,
        "right" | "arrow_right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "page_up" | "pgup" => KeyCode::PageUp,
        "pagedown" | "page_down" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        _ => {
            if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Ok(KeyCode::F(n));
                }
            }
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", key)),
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+n" -> "Ctrl+N")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" | "command" => "Cmd".to_string(),
                "up" | "arrow_up" => "↑".to_string(),
                "down" | "arrow_down" => "↓".to_string(),
                "left" | "arrow_left" => "←".to_string(),
                "right" | "arrow_right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "pageup" | "page_up" | "pgup" => "PgUp".to_string(),
                "pagedown" | "page_down" | "pgdn" => "PgDn".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                _ => part.to_uppercase(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}
