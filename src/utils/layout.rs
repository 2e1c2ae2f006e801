use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rectangle centered in `area`, taking the given percentages of it.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y.min(100)) / 100) as u16;
    center_rect(area, width, height)
}

/// Rectangle of at most `width` x `height`, centered in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Standard screen layout: header, body, footer.
///
/// Returns `[header, body, footer]`.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}
