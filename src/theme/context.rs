//! The resolved theme value passed down the component tree.

use std::sync::Arc;

use serde::Serialize;

use super::error::ThemeError;
use super::mode::{StatusBarStyle, ThemeMode};
use super::navigation::{NavigationThemeAdapter, NavigationTokenSet};
use super::resolver::ThemeResolver;
use super::tokens::TokenSet;

/// Everything a render pass needs to style itself.
///
/// One value is produced per mode change and shared with every screen, so
/// screens never look up or thread the mode themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTheme {
    pub mode: ThemeMode,
    pub pinned: bool,
    pub status_bar: StatusBarStyle,
    pub tokens: Arc<TokenSet>,
    pub navigation: NavigationTokenSet,
}

impl ResolvedTheme {
    /// Resolves the resolver's active mode into a full theme.
    ///
    /// # Errors
    ///
    /// Propagates [`ThemeError::MissingToken`] from the adapter.
    pub fn resolve(
        resolver: &ThemeResolver,
        adapter: &NavigationThemeAdapter,
    ) -> Result<Self, ThemeError> {
        let mode = resolver.active_mode();
        let tokens = resolver.active_shared();
        let navigation = adapter.adapt(&tokens, mode)?;
        Ok(Self {
            mode,
            pinned: resolver.is_pinned(),
            status_bar: mode.status_bar(),
            tokens,
            navigation,
        })
    }

    /// The theme name, `"light"` or `"dark"` for the built-in sets.
    pub fn name(&self) -> &str {
        self.tokens.name()
    }
}
