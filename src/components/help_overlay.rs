//! Help Overlay Component
//!
//! Displays current keybindings when user presses '?' key.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 70, 80);

        frame.render_widget(Clear, popup_area);

        let title = format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());

        let paragraph = Paragraph::new(Self::lines(keymap))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }

    /// Binding lines grouped by category
    pub fn lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = Vec::new();
        let mut current_category = "";

        for action in Action::ALL {
            if action.category() != current_category {
                if !current_category.is_empty() {
                    lines.push(Line::from(""));
                }
                current_category = action.category();
                lines.push(Line::from(Span::styled(
                    current_category,
                    t.title_style().add_modifier(Modifier::UNDERLINED),
                )));
            }
            let keys = keymap.keys_for(action).join(", ");
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<20}", keys), t.emphasis_style()),
                Span::styled(keymap.description_for(action), t.text_style()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press any key to close",
            t.muted_style(),
        )));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeyBinding;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_lists_every_category() {
        let rendered = text(&HelpOverlay::lines(&Keymap::default()));
        for category in ["Value", "Navigation", "Global"] {
            assert!(rendered.contains(category));
        }
        assert!(rendered.contains("Continue / Confirm"));
    }

    #[test]
    fn test_shows_overrides() {
        let keymap = Keymap {
            overrides: vec![KeyBinding::new("ctrl+x", Action::Quit)],
            ..Keymap::default()
        };
        let rendered = text(&HelpOverlay::lines(&keymap));
        assert!(rendered.contains("Ctrl+X"));
    }

    #[test]
    fn test_uses_custom_binding_description() {
        let mut binding = KeyBinding::new("space", Action::Confirm);
        binding.description = Some("Lock it in".to_string());
        let keymap = Keymap {
            overrides: vec![binding],
            ..Keymap::default()
        };
        let rendered = text(&HelpOverlay::lines(&keymap));
        assert!(rendered.contains("Lock it in"));
        assert!(!rendered.contains("Continue / Confirm"));
    }
}
