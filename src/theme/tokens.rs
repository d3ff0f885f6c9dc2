//! Token sets: the semantic design values for one visual mode.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::ThemeError;

/// The named groups a token set is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenGroup {
    Colors,
    Spacing,
    BorderRadius,
    FontSize,
    FontWeight,
    LineHeight,
    Opacity,
    Shadow,
    Animation,
    Breakpoints,
}

impl TokenGroup {
    pub const ALL: [TokenGroup; 10] = [
        TokenGroup::Colors,
        TokenGroup::Spacing,
        TokenGroup::BorderRadius,
        TokenGroup::FontSize,
        TokenGroup::FontWeight,
        TokenGroup::LineHeight,
        TokenGroup::Opacity,
        TokenGroup::Shadow,
        TokenGroup::Animation,
        TokenGroup::Breakpoints,
    ];

    /// The group's name as it appears in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenGroup::Colors => "colors",
            TokenGroup::Spacing => "spacing",
            TokenGroup::BorderRadius => "borderRadius",
            TokenGroup::FontSize => "fontSize",
            TokenGroup::FontWeight => "fontWeight",
            TokenGroup::LineHeight => "lineHeight",
            TokenGroup::Opacity => "opacity",
            TokenGroup::Shadow => "shadow",
            TokenGroup::Animation => "animation",
            TokenGroup::Breakpoints => "breakpoints",
        }
    }
}

impl fmt::Display for TokenGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offset of a drop shadow from its element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowOffset {
    pub width: f32,
    pub height: f32,
}

/// Platform shadow parameters for one elevation preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub shadow_color: Color,
    pub shadow_offset: ShadowOffset,
    pub shadow_opacity: f32,
    pub shadow_radius: f32,
    pub elevation: u32,
}

impl Shadow {
    /// A shadow that draws nothing.
    pub const NONE: Shadow = Shadow {
        shadow_color: Color::Rgba(0, 0, 0, 0.0),
        shadow_offset: ShadowOffset {
            width: 0.0,
            height: 0.0,
        },
        shadow_opacity: 0.0,
        shadow_radius: 0.0,
        elevation: 0,
    };

    pub fn new(
        color: Color,
        offset_height: f32,
        opacity: f32,
        radius: f32,
        elevation: u32,
    ) -> Self {
        Self {
            shadow_color: color,
            shadow_offset: ShadowOffset {
                width: 0.0,
                height: offset_height,
            },
            shadow_opacity: opacity,
            shadow_radius: radius,
            elevation,
        }
    }
}

/// An immutable bundle of design tokens for one visual mode.
///
/// Token sets are built once with the fluent `add_*` methods and then only
/// read. Every token set handed to a [`ThemeRegistry`](super::ThemeRegistry)
/// must expose the same keys as its sibling, since consumers index by key
/// without checking which mode is active.
///
/// # Example
///
/// ```rust
/// use tinted::{Color, TokenSet};
///
/// let tokens = TokenSet::new("light")
///     .add_color("primary", Color::hex(0xE53935))
///     .add_spacing("md", 16.0)
///     .add_font_weight("bold", "700");
///
/// assert_eq!(tokens.color("primary"), Some(&Color::hex(0xE53935)));
/// assert!(tokens.color("missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    name: String,
    colors: BTreeMap<String, Color>,
    spacing: BTreeMap<String, f32>,
    border_radius: BTreeMap<String, f32>,
    font_size: BTreeMap<String, f32>,
    font_weight: BTreeMap<String, String>,
    line_height: BTreeMap<String, f32>,
    opacity: BTreeMap<String, f32>,
    shadow: BTreeMap<String, Shadow>,
    /// Durations in milliseconds.
    animation: BTreeMap<String, u32>,
    breakpoints: BTreeMap<String, u32>,
}

impl TokenSet {
    /// Creates an empty token set with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: BTreeMap::new(),
            spacing: BTreeMap::new(),
            border_radius: BTreeMap::new(),
            font_size: BTreeMap::new(),
            font_weight: BTreeMap::new(),
            line_height: BTreeMap::new(),
            opacity: BTreeMap::new(),
            shadow: BTreeMap::new(),
            animation: BTreeMap::new(),
            breakpoints: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_color(mut self, key: &str, value: Color) -> Self {
        self.colors.insert(key.to_string(), value);
        self
    }

    pub fn add_spacing(mut self, key: &str, value: f32) -> Self {
        self.spacing.insert(key.to_string(), value);
        self
    }

    pub fn add_border_radius(mut self, key: &str, value: f32) -> Self {
        self.border_radius.insert(key.to_string(), value);
        self
    }

    pub fn add_font_size(mut self, key: &str, value: f32) -> Self {
        self.font_size.insert(key.to_string(), value);
        self
    }

    /// Adds a font weight as a string code (`"400"`, `"700"`, ...).
    pub fn add_font_weight(mut self, key: &str, value: impl Into<String>) -> Self {
        self.font_weight.insert(key.to_string(), value.into());
        self
    }

    pub fn add_line_height(mut self, key: &str, value: f32) -> Self {
        self.line_height.insert(key.to_string(), value);
        self
    }

    pub fn add_opacity(mut self, key: &str, value: f32) -> Self {
        self.opacity.insert(key.to_string(), value);
        self
    }

    pub fn add_shadow(mut self, key: &str, value: Shadow) -> Self {
        self.shadow.insert(key.to_string(), value);
        self
    }

    pub fn add_animation(mut self, key: &str, millis: u32) -> Self {
        self.animation.insert(key.to_string(), millis);
        self
    }

    pub fn add_breakpoint(mut self, key: &str, width: u32) -> Self {
        self.breakpoints.insert(key.to_string(), width);
        self
    }

    pub fn color(&self, key: &str) -> Option<&Color> {
        self.colors.get(key)
    }

    pub fn spacing(&self, key: &str) -> Option<f32> {
        self.spacing.get(key).copied()
    }

    pub fn border_radius(&self, key: &str) -> Option<f32> {
        self.border_radius.get(key).copied()
    }

    pub fn font_size(&self, key: &str) -> Option<f32> {
        self.font_size.get(key).copied()
    }

    pub fn font_weight(&self, key: &str) -> Option<&str> {
        self.font_weight.get(key).map(String::as_str)
    }

    pub fn line_height(&self, key: &str) -> Option<f32> {
        self.line_height.get(key).copied()
    }

    pub fn opacity(&self, key: &str) -> Option<f32> {
        self.opacity.get(key).copied()
    }

    pub fn shadow(&self, key: &str) -> Option<&Shadow> {
        self.shadow.get(key)
    }

    pub fn animation(&self, key: &str) -> Option<u32> {
        self.animation.get(key).copied()
    }

    pub fn breakpoint(&self, key: &str) -> Option<u32> {
        self.breakpoints.get(key).copied()
    }

    /// Iterates colors in key order.
    pub fn colors(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up a color, failing with [`ThemeError::MissingToken`].
    pub fn require_color(&self, key: &str) -> Result<&Color, ThemeError> {
        self.color(key)
            .ok_or_else(|| self.missing(TokenGroup::Colors, key))
    }

    /// Looks up a font weight, failing with [`ThemeError::MissingToken`].
    pub fn require_font_weight(&self, key: &str) -> Result<&str, ThemeError> {
        self.font_weight(key)
            .ok_or_else(|| self.missing(TokenGroup::FontWeight, key))
    }

    fn missing(&self, group: TokenGroup, key: &str) -> ThemeError {
        ThemeError::MissingToken {
            theme: self.name.clone(),
            group,
            key: key.to_string(),
        }
    }

    /// Keys defined in one group.
    pub fn group_keys(&self, group: TokenGroup) -> BTreeSet<&str> {
        fn keys<V>(map: &BTreeMap<String, V>) -> BTreeSet<&str> {
            map.keys().map(String::as_str).collect()
        }
        match group {
            TokenGroup::Colors => keys(&self.colors),
            TokenGroup::Spacing => keys(&self.spacing),
            TokenGroup::BorderRadius => keys(&self.border_radius),
            TokenGroup::FontSize => keys(&self.font_size),
            TokenGroup::FontWeight => keys(&self.font_weight),
            TokenGroup::LineHeight => keys(&self.line_height),
            TokenGroup::Opacity => keys(&self.opacity),
            TokenGroup::Shadow => keys(&self.shadow),
            TokenGroup::Animation => keys(&self.animation),
            TokenGroup::Breakpoints => keys(&self.breakpoints),
        }
    }

    /// Every key in the set, qualified as `group.key`.
    pub fn key_set(&self) -> BTreeSet<String> {
        TokenGroup::ALL
            .iter()
            .flat_map(|&group| {
                self.group_keys(group)
                    .into_iter()
                    .map(move |key| format!("{}.{}", group, key))
            })
            .collect()
    }

    /// Qualified keys present in exactly one of `self` and `other`.
    ///
    /// Empty when both sets have the same shape.
    pub fn shape_drift(&self, other: &TokenSet) -> Vec<String> {
        let mine = self.key_set();
        let theirs = other.key_set();
        mine.symmetric_difference(&theirs).cloned().collect()
    }

    /// Fails with [`ThemeError::ShapeMismatch`] unless both sets share a key set.
    pub fn ensure_same_shape(&self, other: &TokenSet) -> Result<(), ThemeError> {
        let drift = self.shape_drift(other);
        if drift.is_empty() {
            Ok(())
        } else {
            Err(ThemeError::ShapeMismatch {
                left: self.name.clone(),
                right: other.name.clone(),
                drift,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> TokenSet {
        TokenSet::new(name)
            .add_color("primary", Color::hex(0x1976D2))
            .add_color("background", Color::hex(0xFFFFFF))
            .add_spacing("md", 16.0)
            .add_font_weight("bold", "700")
            .add_shadow("none", Shadow::NONE)
    }

    #[test]
    fn test_lookup_present_and_missing() {
        let tokens = sample("light");
        assert_eq!(tokens.spacing("md"), Some(16.0));
        assert_eq!(tokens.font_weight("bold"), Some("700"));
        assert_eq!(tokens.shadow("none"), Some(&Shadow::NONE));
        assert!(tokens.spacing("xl").is_none());
    }

    #[test]
    fn test_require_color_reports_missing() {
        let tokens = sample("light");
        let err = tokens.require_color("card").unwrap_err();
        assert_eq!(
            err,
            ThemeError::MissingToken {
                theme: "light".into(),
                group: TokenGroup::Colors,
                key: "card".into(),
            }
        );
    }

    #[test]
    fn test_key_set_is_qualified() {
        let keys = sample("light").key_set();
        assert!(keys.contains("colors.primary"));
        assert!(keys.contains("spacing.md"));
        assert!(keys.contains("fontWeight.bold"));
        assert!(keys.contains("shadow.none"));
        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn test_same_shape_different_values() {
        let light = sample("light");
        let dark = sample("dark").add_color("background", Color::hex(0x121212));
        assert!(light.shape_drift(&dark).is_empty());
        assert!(light.ensure_same_shape(&dark).is_ok());
    }

    #[test]
    fn test_shape_drift_is_symmetric() {
        let light = sample("light").add_color("surfaceVariant", Color::hex(0xF5F5F5));
        let dark = sample("dark").add_spacing("xxl", 48.0);

        let drift = light.shape_drift(&dark);
        assert_eq!(drift, vec!["colors.surfaceVariant", "spacing.xxl"]);
        assert_eq!(dark.shape_drift(&light), drift);
    }

    #[test]
    fn test_same_key_in_different_groups_is_distinct() {
        let a = TokenSet::new("a").add_spacing("xs", 4.0);
        let b = TokenSet::new("b").add_border_radius("xs", 4.0);
        assert_eq!(a.shape_drift(&b).len(), 2);
    }

    #[test]
    fn test_serializes_camel_case_groups() {
        let json = serde_json::to_value(sample("light")).unwrap();
        assert_eq!(json["name"], "light");
        assert_eq!(json["colors"]["primary"], "#1976D2");
        assert!(json.get("borderRadius").is_some());
        assert_eq!(json["shadow"]["none"]["elevation"], 0);
        assert!(json["shadow"]["none"].get("shadowOffset").is_some());
    }
}
