//! Theme and style system
//!
//! Every role in the palette is an optional color. `None` means "leave the
//! terminal default alone", which is how the no-color theme works: each style
//! helper falls back to a text modifier so emphasis survives without color.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Replace the global theme (startup, or when the user switches theme)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Snapshot of the current theme
pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// No colors at all (`NO_COLOR=1` or `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    /// Unknown names fall back to dark.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub theme_type: ThemeType,
    /// Titles and the visible breadcrumb entry
    pub accent: Option<Color>,
    /// Breadcrumb entries under the visible screen
    pub trail: Option<Color>,
    /// Gauge fill
    pub fill: Option<Color>,
    /// A value pinned at 0 or 100
    pub bound: Option<Color>,
    pub text: Option<Color>,
    pub muted: Option<Color>,
    /// Key names in hints and help
    pub emphasis: Option<Color>,
    pub border: Option<Color>,
    pub border_focused: Option<Color>,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            accent: Some(Color::Cyan),
            trail: Some(Color::Magenta),
            fill: Some(Color::Green),
            bound: Some(Color::Yellow),
            text: Some(Color::White),
            muted: Some(Color::DarkGray),
            emphasis: Some(Color::Yellow),
            border: Some(Color::DarkGray),
            border_focused: Some(Color::Cyan),
        }
    }

    /// Darker accents for light terminal backgrounds
    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            accent: Some(Color::Blue),
            trail: Some(Color::Magenta),
            fill: Some(Color::Green),
            bound: Some(Color::Rgb(180, 120, 0)),
            text: Some(Color::Black),
            muted: Some(Color::DarkGray),
            emphasis: Some(Color::Blue),
            border: Some(Color::DarkGray),
            border_focused: Some(Color::Blue),
        }
    }

    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            accent: None,
            trail: None,
            fill: None,
            bound: None,
            text: None,
            muted: None,
            emphasis: None,
            border: None,
            border_focused: None,
        }
    }

    /// Foreground `color`, or `plain` when the role has no color
    fn paint(color: Option<Color>, plain: Modifier) -> Style {
        match color {
            Some(color) => Style::default().fg(color),
            None => Style::default().add_modifier(plain),
        }
    }

    pub fn title_style(&self) -> Style {
        Self::paint(self.accent, Modifier::empty()).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Self::paint(self.text, Modifier::empty())
    }

    pub fn muted_style(&self) -> Style {
        Self::paint(self.muted, Modifier::DIM)
    }

    pub fn emphasis_style(&self) -> Style {
        Self::paint(self.emphasis, Modifier::BOLD)
    }

    pub fn fill_style(&self) -> Style {
        Self::paint(self.fill, Modifier::BOLD)
    }

    pub fn border_focused_style(&self) -> Style {
        Self::paint(self.border_focused, Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Self::paint(self.border, Modifier::empty())
    }

    pub fn bound_style(&self) -> Style {
        match self.bound {
            Some(color) => Style::default().fg(color).add_modifier(Modifier::BOLD),
            None => Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }

    pub fn trail_style(&self) -> Style {
        Self::paint(self.trail, Modifier::DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("Light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("nocolor".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no_color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("solarized".parse::<ThemeType>().unwrap(), ThemeType::Dark);
    }

    #[test]
    fn test_no_color_styles_use_modifiers_only() {
        let t = Theme::new(ThemeType::NoColor);
        let styles = [
            t.title_style(),
            t.muted_style(),
            t.emphasis_style(),
            t.fill_style(),
            t.bound_style(),
            t.trail_style(),
        ];
        for s in styles {
            assert!(s.fg.is_none());
            assert!(s.bg.is_none());
            assert!(!s.add_modifier.is_empty());
        }
    }

    #[test]
    fn test_colored_styles_set_foreground() {
        let t = Theme::dark();
        assert_eq!(t.title_style().fg, Some(Color::Cyan));
        assert!(t.title_style().add_modifier.contains(Modifier::BOLD));
        assert_eq!(t.bound_style().fg, Some(Color::Yellow));
        assert_eq!(Theme::light().border_focused_style().fg, Some(Color::Blue));
    }

    #[test]
    fn test_init_theme_switches_palette() {
        init_theme(ThemeType::Light);
        assert_eq!(theme().theme_type, ThemeType::Light);
        init_theme(ThemeType::Dark);
        assert_eq!(theme(), Theme::dark());
    }
}
