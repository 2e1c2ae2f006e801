//! Command-line interface.
//!
//! Running without a subcommand launches the TUI; the flags here tweak the
//! loaded configuration for that run.

mod completions;

use crate::config::Config;
use crate::keymap::KeymapPreset;
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indoc::indoc;
use std::path::{Path, PathBuf};

const AFTER_HELP: &str = indoc! {"
    Keys (standard preset):
      ↑/↓, ←/→   adjust the value
      PgUp/PgDn  adjust by a page
      Enter      continue / confirm
      Esc        back
      ?          all shortcuts
"};

/// Two-screen value picker demonstrating coordinator-driven navigation
#[derive(Parser, Debug)]
#[command(name = "stepnav", version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/stepnav/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Starting value of the first screen
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub initial_value: Option<i32>,

    /// Keymap preset: standard, vim or emacs
    #[arg(long, value_name = "PRESET")]
    pub keymap: Option<KeymapPreset>,

    /// UI theme: dark, light or nocolor
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Disable all colors (same as NO_COLOR=1)
    #[arg(long)]
    pub no_colors: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved configuration and where it lives
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL if omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file location, honouring `--config`
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(value) = self.initial_value {
            config.initial_value = value;
        }
        if let Some(preset) = self.keymap {
            config.keymap.preset = preset;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if self.no_colors {
            config.theme = "nocolor".to_string();
        }
    }

    /// Config at `path` with overrides applied. A missing file yields the
    /// defaults and is not written.
    pub fn resolved_config(&self, path: &Path) -> Result<Config> {
        let mut config = if path.exists() {
            Config::load_or_create(path)?
        } else {
            Config::default()
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Execute a subcommand. Returns `false` when the TUI should launch.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Config) => {
                let path = self.config_path();
                let config = self.resolved_config(&path)?;
                print_config(&path, &config)?;
                Ok(true)
            }
            Some(Commands::Completions { shell }) => {
                completions::generate(*shell)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn print_config(path: &Path, config: &Config) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}
