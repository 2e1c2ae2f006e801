use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render a footer from hint text like `"Enter: Confirm | Esc: Back"`
    ///
    /// # Returns
    /// The height used (2 lines: 1 for border, 1 for text)
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme().border_style());

        let footer_inner = footer_block.inner(area);
        let footer = Paragraph::new(Self::hint_line(text)).alignment(Alignment::Center);

        frame.render_widget(footer_block, area);
        frame.render_widget(footer, footer_inner);

        Ok(2)
    }

    /// Split hint text into styled spans: keys emphasized, labels muted.
    pub fn hint_line(text: &str) -> Line<'static> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            // "keys: label"
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(
                    keys.to_string(),
                    t.emphasis_style().add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(format!(": {}", label), t.text_style()));
            } else {
                spans.push(Span::styled(part.to_string(), t.text_style()));
            }
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_splits_parts() {
        let line = Footer::hint_line("Enter: Confirm | Esc: Back");
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter: Confirm | Esc: Back");
        // key, label, separator, key, label
        assert_eq!(line.spans.len(), 5);
    }
}
