use crate::keymap::Keymap;
use crate::state::clamp_value;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Starting value of the first screen (clamped to 0..=100)
    #[serde(default)]
    pub initial_value: i32,
    /// Amount a single increment/decrement moves the value (default: 1)
    #[serde(default = "default_step")]
    pub step: i32,
    /// Amount a page up/down moves the value (default: 10)
    #[serde(default = "default_page_step")]
    pub page_step: i32,
    /// UI theme: "dark", "light" or "nocolor" (default: dark)
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_step() -> i32 {
    1
}

fn default_page_step() -> i32 {
    10
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_value: 0,
            step: default_step(),
            page_step: default_page_step(),
            theme: default_theme(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = self.to_toml()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // 600: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize config")
    }

    /// Starting value for the first screen, in bounds
    pub fn first_initial_value(&self) -> i32 {
        clamp_value(self.initial_value)
    }

    /// Single step, never below 1
    pub fn effective_step(&self) -> i32 {
        self.step.max(1)
    }

    /// Page step, never below the single step
    pub fn effective_page_step(&self) -> i32 {
        self.page_step.max(self.effective_step())
    }

    /// Theme type, honouring `NO_COLOR`
    pub fn theme_type(&self) -> ThemeType {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return ThemeType::NoColor;
        }
        self.theme.parse().unwrap_or_default()
    }
}
