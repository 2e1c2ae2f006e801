//! Shared test utilities for the navigation workflow tests.
//!
//! Provides `TestEnv`, an isolated config location backed by `TempDir`, and
//! helpers for building the key events the screens react to.

#![allow(dead_code)]

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use stepnav::app::App;
use stepnav::config::Config;

/// Isolated environment with its own config file.
///
/// The directory is removed when the value is dropped.
pub struct TestEnv {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("stepnav").join("config.toml");
        Ok(Self {
            temp_dir,
            config_path,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write `config` to this environment's config file
    pub fn write_config(&self, config: &Config) -> Result<()> {
        config.save(&self.config_path)
    }

    /// Load (or create) the config and build an app around it
    pub fn app(&self) -> Result<App> {
        let config = Config::load_or_create(&self.config_path)?;
        Ok(App::new(config, self.config_path.clone()))
    }
}

/// A key press with no modifiers
pub fn key(code: KeyCode) -> Event {
    key_with(code, KeyModifiers::NONE)
}

/// A key press with modifiers
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

/// A key release, which screens are expected to ignore
pub fn release(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    })
}

/// Feed a sequence of events to the app
pub fn send(app: &mut App, events: impl IntoIterator<Item = Event>) -> Result<()> {
    for event in events {
        app.handle_event(event)?;
    }
    Ok(())
}

/// Press `code` `times` times
pub fn repeat(code: KeyCode, times: usize) -> Vec<Event> {
    (0..times).map(|_| key(code)).collect()
}

/// Selected value of the visible screen
pub fn visible_value(app: &mut App) -> Option<i32> {
    app.coordinator_mut()
        .visible_mut()
        .map(|state| state.selected_value())
}
