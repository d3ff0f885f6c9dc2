//! Projection of a token set into a navigation layer's theme shape.
//!
//! Navigation containers take a much smaller theme than screens do: six
//! colors, four font presets and a dark flag. [`NavigationThemeAdapter`]
//! derives that shape from a full [`TokenSet`].
//!
//! | Navigation field | Token            |
//! |------------------|------------------|
//! | `primary`        | `colors.primary` |
//! | `background`     | `colors.background` |
//! | `card`           | `colors.surface` |
//! | `text`           | `colors.text`    |
//! | `border`         | `colors.border`  |
//! | `notification`   | `colors.error`   |
//! | `fonts.regular`  | `fontWeight.normal` |
//! | `fonts.medium`   | `fontWeight.medium` |
//! | `fonts.bold`     | `fontWeight.bold` |
//! | `fonts.heavy`    | `fontWeight.extraBold` |

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::ThemeError;
use super::mode::ThemeMode;
use super::tokens::TokenSet;

/// Font family used when none is configured.
pub const DEFAULT_FONT_FAMILY: &str = "System";

/// The six colors a navigation container styles itself with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationColors {
    pub primary: Color,
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub border: Color,
    pub notification: Color,
}

/// A font family and weight pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontPreset {
    pub font_family: String,
    pub font_weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationFonts {
    pub regular: FontPreset,
    pub medium: FontPreset,
    pub bold: FontPreset,
    pub heavy: FontPreset,
}

/// Read-only theme handed to the navigation layer.
///
/// Always derived from the active token set; never stored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationTokenSet {
    pub dark: bool,
    pub colors: NavigationColors,
    pub fonts: NavigationFonts,
}

/// Maps token sets into [`NavigationTokenSet`]s.
///
/// # Example
///
/// ```rust
/// use tinted::{NavigationThemeAdapter, ThemeMode, ThemeRegistry};
///
/// let registry = ThemeRegistry::canonical();
/// let adapter = NavigationThemeAdapter::new();
/// let nav = adapter.adapt(registry.get(ThemeMode::Dark), ThemeMode::Dark).unwrap();
///
/// assert!(nav.dark);
/// assert_eq!(nav.fonts.bold.font_weight, "700");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationThemeAdapter {
    font_family: String,
}

impl NavigationThemeAdapter {
    pub fn new() -> Self {
        Self::with_font_family(DEFAULT_FONT_FAMILY)
    }

    /// Creates an adapter that emits `family` for every font preset.
    pub fn with_font_family(family: impl Into<String>) -> Self {
        Self {
            font_family: family.into(),
        }
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Projects `tokens` (representing `mode`) into the navigation shape.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingToken`] if `tokens` lacks any mapped key.
    /// Missing tokens are never substituted with defaults.
    pub fn adapt(
        &self,
        tokens: &TokenSet,
        mode: ThemeMode,
    ) -> Result<NavigationTokenSet, ThemeError> {
        let color = |key: &str| tokens.require_color(key).copied();
        let font = |key: &str| -> Result<FontPreset, ThemeError> {
            Ok(FontPreset {
                font_family: self.font_family.clone(),
                font_weight: tokens.require_font_weight(key)?.to_string(),
            })
        };

        Ok(NavigationTokenSet {
            dark: mode.is_dark(),
            colors: NavigationColors {
                primary: color("primary")?,
                background: color("background")?,
                card: color("surface")?,
                text: color("text")?,
                border: color("border")?,
                notification: color("error")?,
            },
            fonts: NavigationFonts {
                regular: font("normal")?,
                medium: font("medium")?,
                bold: font("bold")?,
                heavy: font("extraBold")?,
            },
        })
    }
}

impl Default for NavigationThemeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeRegistry, TokenGroup};

    #[test]
    fn test_adapt_dark_uses_dark_tokens() {
        let registry = ThemeRegistry::canonical();
        let dark = registry.get(ThemeMode::Dark);
        let nav = NavigationThemeAdapter::new().adapt(dark, ThemeMode::Dark).unwrap();

        assert!(nav.dark);
        assert_eq!(Some(&nav.colors.background), dark.color("background"));
        assert_eq!(Some(&nav.colors.card), dark.color("surface"));
        assert_eq!(Some(&nav.colors.notification), dark.color("error"));
    }

    #[test]
    fn test_adapt_light_flag_and_fonts() {
        let registry = ThemeRegistry::canonical();
        let nav = NavigationThemeAdapter::new()
            .adapt(registry.get(ThemeMode::Light), ThemeMode::Light)
            .unwrap();

        assert!(!nav.dark);
        assert_eq!(nav.fonts.regular.font_weight, "400");
        assert_eq!(nav.fonts.medium.font_weight, "500");
        assert_eq!(nav.fonts.bold.font_weight, "700");
        assert_eq!(nav.fonts.heavy.font_weight, "800");
        assert_eq!(nav.fonts.heavy.font_family, DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_custom_font_family() {
        let registry = ThemeRegistry::canonical();
        let adapter = NavigationThemeAdapter::with_font_family("Inter");
        let nav = adapter
            .adapt(registry.get(ThemeMode::Light), ThemeMode::Light)
            .unwrap();
        assert_eq!(nav.fonts.regular.font_family, "Inter");
        assert_eq!(adapter.font_family(), "Inter");
    }

    #[test]
    fn test_adapt_is_deterministic_and_leaves_input_untouched() {
        let tokens = ThemeRegistry::canonical().get(ThemeMode::Dark).clone();
        let snapshot = tokens.clone();
        let adapter = NavigationThemeAdapter::new();

        let first = adapter.adapt(&tokens, ThemeMode::Dark).unwrap();
        let second = adapter.adapt(&tokens, ThemeMode::Dark).unwrap();
        assert_eq!(first, second);
        assert_eq!(tokens, snapshot);
    }

    #[test]
    fn test_missing_color_is_an_error() {
        let tokens = ThemeRegistry::canonical().get(ThemeMode::Light).clone();
        let stripped = TokenSet::new("broken")
            .add_color("primary", *tokens.color("primary").unwrap())
            .add_color("background", *tokens.color("background").unwrap());

        let err = NavigationThemeAdapter::new()
            .adapt(&stripped, ThemeMode::Light)
            .unwrap_err();
        assert_eq!(
            err,
            ThemeError::MissingToken {
                theme: "broken".into(),
                group: TokenGroup::Colors,
                key: "surface".into(),
            }
        );
    }

    #[test]
    fn test_missing_font_weight_is_an_error() {
        let mut tokens = TokenSet::new("partial");
        for key in ["primary", "background", "surface", "text", "border", "error"] {
            tokens = tokens.add_color(key, Color::hex(0x000000));
        }
        let tokens = tokens
            .add_font_weight("normal", "400")
            .add_font_weight("medium", "500")
            .add_font_weight("bold", "700");

        let err = NavigationThemeAdapter::new()
            .adapt(&tokens, ThemeMode::Dark)
            .unwrap_err();
        match err {
            ThemeError::MissingToken { group, key, .. } => {
                assert_eq!(group, TokenGroup::FontWeight);
                assert_eq!(key, "extraBold");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_serializes_navigation_shape() {
        let nav = NavigationThemeAdapter::new()
            .adapt(ThemeRegistry::canonical().get(ThemeMode::Dark), ThemeMode::Dark)
            .unwrap();
        let json = serde_json::to_value(&nav).unwrap();
        assert_eq!(json["dark"], true);
        assert_eq!(json["colors"]["background"], "#121212");
        assert_eq!(json["fonts"]["bold"]["fontFamily"], "System");
        assert_eq!(json["fonts"]["bold"]["fontWeight"], "700");
    }
}
