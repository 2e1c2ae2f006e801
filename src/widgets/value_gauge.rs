//! Bordered panel showing a bounded value as a number and a gauge.

use crate::state::{clamp_value, value_ratio, VALUE_MAX, VALUE_MIN};
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Widget};

pub struct ValueGauge<'a> {
    value: i32,
    title: &'a str,
    focused: bool,
}

impl<'a> ValueGauge<'a> {
    /// Rows needed: two borders, number, gauge, range.
    pub const HEIGHT: u16 = 5;

    pub fn new(value: i32, title: &'a str) -> Self {
        Self {
            value: clamp_value(value),
            title,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn at_bound(&self) -> bool {
        self.value == VALUE_MIN || self.value == VALUE_MAX
    }
}

impl Widget for ValueGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                t.border_focused_style()
            } else {
                t.border_style()
            })
            .title(format!(" {} ", self.title))
            .title_style(t.title_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let number_style = if self.at_bound() {
            t.bound_style()
        } else {
            t.emphasis_style()
        };
        Paragraph::new(Line::from(Span::styled(self.value.to_string(), number_style)))
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        Gauge::default()
            .gauge_style(t.fill_style())
            .ratio(value_ratio(self.value))
            .label("")
            .render(rows[1], buf);

        Paragraph::new(Line::from(vec![
            Span::styled(VALUE_MIN.to_string(), t.muted_style()),
            Span::styled(" … ", t.muted_style()),
            Span::styled(VALUE_MAX.to_string(), t.muted_style()),
        ]))
        .alignment(Alignment::Center)
        .render(rows[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_value() {
        let area = Rect::new(0, 0, 30, ValueGauge::HEIGHT);
        let mut buf = Buffer::empty(area);
        ValueGauge::new(42, "Value").render(area, &mut buf);

        assert!(row(&buf, 0).contains("Value"));
        assert!(row(&buf, 1).contains("42"));
        assert!(row(&buf, 3).contains("100"));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let area = Rect::new(0, 0, 30, ValueGauge::HEIGHT);
        let mut buf = Buffer::empty(area);
        ValueGauge::new(-7, "Value").render(area, &mut buf);
        assert!(row(&buf, 1).trim_matches(|c| c == ' ' || c == '│').eq("0"));
    }
}
