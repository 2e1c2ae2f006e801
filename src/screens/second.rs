//! Second screen: adjust the value within bounds and confirm it.

use crate::components::{Breadcrumb, Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{SecondScreenState, VALUE_MAX, VALUE_MIN};
use crate::utils::{center_rect, create_standard_layout};
use crate::widgets::ValueGauge;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

impl Screen for SecondScreenState {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let description = format!(
            "Adjust the value between {} and {}.\nConfirming sends it back to the previous screen.",
            VALUE_MIN, VALUE_MAX
        );
        let [header, body, footer] = create_standard_layout(area, 5, 2);
        Header::render(frame, header, "stepnav - Adjust and confirm", &description)?;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(body);
        Breadcrumb::render(frame, chunks[0], ctx.path_labels);
        frame.render_widget(
            ValueGauge::new(self.selected_value, "Value to confirm").focused(true),
            center_rect(chunks[1], 48, ValueGauge::HEIGHT),
        );

        Footer::render(frame, footer, &ctx.config.keymap.footer_second())?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(action) = ctx.action_for(&event) else {
            return Ok(ScreenAction::None);
        };
        let result = match action {
            Action::Confirm => self.confirm_tapped(),
            Action::Cancel => ScreenAction::Back,
            Action::Quit => ScreenAction::Quit,
            Action::Help => ScreenAction::ShowHelp,
            other => {
                if let Some(edit) = ctx.value_edit(other) {
                    self.set_selected_value(edit.apply(self.selected_value));
                }
                ScreenAction::None
            }
        };
        Ok(result)
    }
}
