//! Lookup of the light and dark token sets by mode.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::error::ThemeError;
use super::mode::ThemeMode;
use super::palette;
use super::tokens::TokenSet;

static CANONICAL: Lazy<ThemeRegistry> = Lazy::new(|| ThemeRegistry {
    light: Arc::new(palette::light()),
    dark: Arc::new(palette::dark()),
});

/// Owns one token set per [`ThemeMode`].
///
/// Token sets are held behind `Arc` and never handed out mutably, so cloning
/// a registry is cheap and every clone observes the same values.
///
/// # Example
///
/// ```rust
/// use tinted::{ThemeMode, ThemeRegistry};
///
/// let registry = ThemeRegistry::canonical();
/// let dark = registry.get(ThemeMode::Dark);
/// assert_eq!(dark.name(), "dark");
/// ```
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    light: Arc<TokenSet>,
    dark: Arc<TokenSet>,
}

impl ThemeRegistry {
    /// The built-in light and dark token sets.
    pub fn canonical() -> Self {
        CANONICAL.clone()
    }

    /// Builds a registry from a custom pair of token sets.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ShapeMismatch`] if the two sets do not define
    /// exactly the same keys.
    pub fn new(light: TokenSet, dark: TokenSet) -> Result<Self, ThemeError> {
        light.ensure_same_shape(&dark)?;
        Ok(Self {
            light: Arc::new(light),
            dark: Arc::new(dark),
        })
    }

    /// Returns the token set for `mode`.
    pub fn get(&self, mode: ThemeMode) -> &TokenSet {
        match mode {
            ThemeMode::Light => self.light.as_ref(),
            ThemeMode::Dark => self.dark.as_ref(),
        }
    }

    /// Returns a shared handle to the token set for `mode`.
    pub fn shared(&self, mode: ThemeMode) -> Arc<TokenSet> {
        match mode {
            ThemeMode::Light => Arc::clone(&self.light),
            ThemeMode::Dark => Arc::clone(&self.dark),
        }
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::canonical()
    }
}
