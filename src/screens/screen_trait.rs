//! Screen trait and associated types.
//!
//! Screens own their state, render themselves, and answer input with a
//! [`ScreenAction`] instead of mutating the navigation path. Context objects
//! give read-only access to shared resources.

use crate::config::Config;
use crate::keymap::Action;
use crate::state::{clamp_value, step_value, VALUE_MAX, VALUE_MIN};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Labels of the navigation path, bottom to top.
    pub path_labels: &'a [String],
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(config: &'a Config, path_labels: &'a [String]) -> Self {
        Self {
            config,
            path_labels,
        }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    /// Create a new screen context.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Resolve a key press to an action through the configured keymap.
    ///
    /// Key releases and repeats are ignored.
    pub fn action_for(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.config.keymap.get_action(key.code, key.modifiers)
            }
            _ => None,
        }
    }

    /// How `action` changes an edited value, if it is a value action.
    pub fn value_edit(&self, action: Action) -> Option<ValueEdit> {
        let step = self.config.effective_step();
        let page = self.config.effective_page_step();
        match action {
            Action::Increment => Some(ValueEdit::Step(step)),
            Action::Decrement => Some(ValueEdit::Step(-step)),
            Action::PageUp => Some(ValueEdit::Step(page)),
            Action::PageDown => Some(ValueEdit::Step(-page)),
            Action::GoToMin => Some(ValueEdit::Set(VALUE_MIN)),
            Action::GoToMax => Some(ValueEdit::Set(VALUE_MAX)),
            _ => None,
        }
    }
}

/// A change to an edited value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueEdit {
    /// Move by a signed amount.
    Step(i32),
    /// Jump to an absolute value.
    Set(i32),
}

impl ValueEdit {
    /// Apply to `current`, staying in bounds.
    pub fn apply(self, current: i32) -> i32 {
        match self {
            ValueEdit::Step(delta) => step_value(current, delta),
            ValueEdit::Set(value) => clamp_value(value),
        }
    }
}

/// What the app should do after a screen handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Move on to the editor with this value.
    Continue { value: i32 },
    /// Confirm this value and return it to the opener.
    Confirm { value: i32 },
    /// Leave the current screen without a result.
    Back,
    /// Open help overlay.
    ShowHelp,
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         match ctx.action_for(&event) {
///             Some(Action::Confirm) => Ok(ScreenAction::Back),
///             _ => Ok(ScreenAction::None),
///         }
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and say what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;
}
