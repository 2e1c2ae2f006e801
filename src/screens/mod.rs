//! Screen controllers for the application.
//!
//! The view-models in [`crate::state`] implement the [`Screen`] trait here,
//! so each screen owns its state and handles both rendering and events.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                               │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │            NavigationCoordinator               │    │
//! │  │  visible_mut() -> &mut ScreenState             │    │
//! │  │  handle_action(ScreenAction)                   │    │
//! │  └────────────────────────────────────────────────┘    │
//! │                                                        │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Trait                     │    │
//! │  │  - render(frame, area, context)                │    │
//! │  │  - handle_event(event, context) -> Action      │    │
//! │  └────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod first;
pub mod screen_trait;
pub mod second;

pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ValueEdit};

use crate::state::ScreenState;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

impl Screen for ScreenState {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        match self {
            ScreenState::First(state) => state.render(frame, area, ctx),
            ScreenState::Second(state) => state.render(frame, area, ctx),
        }
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match self {
            ScreenState::First(state) => state.handle_event(event, ctx),
            ScreenState::Second(state) => state.handle_event(event, ctx),
        }
    }
}
