use crate::components::HelpOverlay;
use crate::config::Config;
use crate::navigation::{NavigationCoordinator, ScreenFactory};
use crate::screens::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info};

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    coordinator: NavigationCoordinator,
    show_help: bool,
    should_quit: bool,
    /// Coordinator revision seen at the last draw, to log screen transitions
    last_revision: Option<u64>,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        let factory = ScreenFactory::new(config.first_initial_value());
        Self {
            coordinator: NavigationCoordinator::with_root(factory),
            config,
            config_path,
            show_help: false,
            should_quit: false,
            last_revision: None,
        }
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!("Starting with config {:?}", self.config_path);

        loop {
            tui.terminal_mut().draw(|frame| self.draw(frame))?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }

        tui.exit()?;
        info!("Exiting");
        Ok(())
    }

    /// Render the visible screen and any overlay.
    pub fn draw(&mut self, frame: &mut Frame) {
        let revision = self.coordinator.revision();
        if self.last_revision != Some(revision) {
            debug!("Path is now {:?}", self.coordinator.path().labels());
            self.last_revision = Some(revision);
        }

        let area = frame.area();
        let labels = self.coordinator.path().labels();
        let ctx = RenderContext::new(&self.config, &labels);

        if let Some(screen) = self.coordinator.visible_mut() {
            if let Err(e) = screen.render(frame, area, &ctx) {
                error!("Error rendering screen: {}", e);
            }
        }

        if self.show_help {
            if let Err(e) = HelpOverlay::render(frame, area, &self.config.keymap) {
                error!("Error rendering help overlay: {}", e);
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if self.show_help {
            // Any key press closes the overlay
            if matches!(&event, Event::Key(key) if key.kind == KeyEventKind::Press) {
                self.show_help = false;
            }
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config);
        let action = match self.coordinator.visible_mut() {
            Some(screen) => screen.handle_event(event, &ctx)?,
            None => ScreenAction::Quit,
        };
        self.apply_action(action);
        Ok(())
    }

    fn apply_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Continue { .. } | ScreenAction::Confirm { .. } | ScreenAction::Back => {
                self.coordinator.handle_action(action);
            }
        }
    }

    pub fn coordinator(&self) -> &NavigationCoordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut NavigationCoordinator {
        &mut self.coordinator
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_help_shown(&self) -> bool {
        self.show_help
    }
}
