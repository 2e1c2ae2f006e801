//! First screen: pick a value and continue with it.

use crate::components::{Breadcrumb, Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::FirstScreenState;
use crate::utils::{center_rect, create_standard_layout};
use crate::widgets::ValueGauge;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

const DESCRIPTION: &str = "Choose a starting value, then continue to fine-tune it.\n\
The confirmed value comes back here.";

impl Screen for FirstScreenState {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let [header, body, footer] = create_standard_layout(area, 5, 2);
        Header::render(frame, header, "stepnav - Pick a value", DESCRIPTION)?;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(body);
        Breadcrumb::render(frame, chunks[0], ctx.path_labels);
        frame.render_widget(
            ValueGauge::new(self.selected_value, "Selected value").focused(true),
            center_rect(chunks[1], 48, ValueGauge::HEIGHT),
        );

        Footer::render(frame, footer, &ctx.config.keymap.footer_first())?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Some(action) = ctx.action_for(&event) else {
            return Ok(ScreenAction::None);
        };
        let result = match action {
            Action::Confirm => self.continue_tapped(),
            // Nothing to go back to from the root screen
            Action::Cancel | Action::Quit => ScreenAction::Quit,
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
