//! stepnav - coordinator-driven navigation between two terminal screens
//!
//! A first screen picks a value, a second screen adjusts and confirms it, and
//! the confirmed value flows back to the first screen. The
//! [`NavigationCoordinator`] owns the screen path and routes results through
//! typed handles instead of callbacks held by the screens.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod navigation;
pub mod screens;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use navigation::{NavigationCoordinator, ResultHandle, Resolution, ScreenDescriptor, ScreenFactory};
pub use state::{FirstScreenState, ScreenState, SecondScreenState};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
