use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const SEPARATOR: &str = " › ";

/// One-line trail of the navigation path, visible screen last.
pub struct Breadcrumb;

impl Breadcrumb {
    pub fn render(frame: &mut Frame, area: Rect, labels: &[String]) {
        frame.render_widget(Paragraph::new(Self::line(labels)), area);
    }

    pub fn line(labels: &[String]) -> Line<'static> {
        let t = theme();
        let mut spans = vec![Span::raw(" ")];
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, t.muted_style()));
            }
            let style = if i + 1 == labels.len() {
                t.title_style()
            } else {
                t.trail_style()
            };
            spans.push(Span::styled(label.clone(), style));
        }
        Line::from(spans)
    }
}
