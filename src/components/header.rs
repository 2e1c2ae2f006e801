use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Common header component for all screens
pub struct Header;

impl Header {
    /// Render a header with title and description
    ///
    /// # Returns
    /// The height of the header (for layout calculations)
    pub fn render(frame: &mut Frame, area: Rect, title: &str, description: &str) -> Result<u16> {
        let t = theme();
        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner_area = header_block.inner(area);
        frame.render_widget(header_block, area);

        // Center description vertically
        let desc_lines = description.lines().count() as u16;
        let top_padding = inner_area.height.saturating_sub(desc_lines) / 2;
        let desc_area = Rect {
            y: inner_area.y + top_padding,
            height: inner_area.height - top_padding,
            ..inner_area
        };

        let description_para = Paragraph::new(description)
            .style(t.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(description_para, desc_area);

        Ok(area.height)
    }
}
