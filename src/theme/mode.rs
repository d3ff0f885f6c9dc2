//! Light/dark mode selector.

use serde::{Deserialize, Serialize};

use crate::platform::ColorScheme;

/// The visual mode a token set represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Both modes, light first.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Returns the other mode.
    pub fn opposite(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Lowercase name, matching the canonical token set names.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Status bar content style readable on this mode's background.
    pub fn status_bar(self) -> StatusBarStyle {
        match self {
            ThemeMode::Light => StatusBarStyle::DarkContent,
            ThemeMode::Dark => StatusBarStyle::LightContent,
        }
    }
}

impl From<ColorScheme> for ThemeMode {
    /// `Unknown` is treated as light.
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => ThemeMode::Dark,
            ColorScheme::Light | ColorScheme::Unknown => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Foreground style for platform status bar icons and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    DarkContent,
    LightContent,
}
