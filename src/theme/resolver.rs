//! Active-mode resolution: platform preference with a sticky manual override.

use std::sync::Arc;

use super::mode::ThemeMode;
use super::registry::ThemeRegistry;
use super::tokens::TokenSet;
use crate::platform::ColorScheme;

/// Whether the active mode tracks the platform or has been pinned by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    /// Mirrors the platform-reported scheme.
    Following(ThemeMode),
    /// Set by a manual toggle; platform changes are ignored until teardown.
    Pinned(ThemeMode),
}

impl ResolverState {
    pub fn mode(self) -> ThemeMode {
        match self {
            ResolverState::Following(mode) | ResolverState::Pinned(mode) => mode,
        }
    }
}

/// Single source of truth for the active [`ThemeMode`].
///
/// The resolver starts out following the platform. The first manual toggle
/// pins it, after which platform notifications (including stale ones that
/// were already in flight) can no longer change the mode. Nothing is
/// persisted: a new resolver always starts out following.
///
/// # Example
///
/// ```rust
/// use tinted::platform::ColorScheme;
/// use tinted::{ThemeMode, ThemeRegistry, ThemeResolver};
///
/// let mut resolver = ThemeResolver::new(ThemeRegistry::canonical(), ColorScheme::Light);
/// resolver.on_platform_change(ColorScheme::Dark);
/// assert_eq!(resolver.active_mode(), ThemeMode::Dark);
///
/// resolver.on_manual_toggle();
/// resolver.on_platform_change(ColorScheme::Dark);
/// assert_eq!(resolver.active_mode(), ThemeMode::Light);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    state: ResolverState,
    registry: ThemeRegistry,
}

impl ThemeResolver {
    /// Creates a resolver following `initial`; `Unknown` resolves to light.
    pub fn new(registry: ThemeRegistry, initial: ColorScheme) -> Self {
        if initial == ColorScheme::Unknown {
            log::warn!("platform reported no color scheme, defaulting to light");
        }
        Self {
            state: ResolverState::Following(initial.into()),
            registry,
        }
    }

    /// Applies a platform notification.
    ///
    /// Returns `true` if the active mode changed. Always `false` once pinned.
    pub fn on_platform_change(&mut self, scheme: ColorScheme) -> bool {
        match self.state {
            ResolverState::Pinned(mode) => {
                log::debug!(
                    "ignoring platform scheme {:?}, pinned to {}",
                    scheme,
                    mode
                );
                false
            }
            ResolverState::Following(previous) => {
                if scheme == ColorScheme::Unknown {
                    log::warn!("platform reported no color scheme, using light");
                }
                let next = ThemeMode::from(scheme);
                self.state = ResolverState::Following(next);
                next != previous
            }
        }
    }

    /// Flips the active mode and pins it.
    ///
    /// Returns the newly active mode.
    pub fn on_manual_toggle(&mut self) -> ThemeMode {
        let next = self.state.mode().opposite();
        self.state = ResolverState::Pinned(next);
        log::debug!("theme pinned to {}", next);
        next
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self.state, ResolverState::Pinned(_))
    }

    pub fn active_mode(&self) -> ThemeMode {
        self.state.mode()
    }

    /// The token set for the active mode.
    pub fn active_token_set(&self) -> &TokenSet {
        self.registry.get(self.active_mode())
    }

    /// Shared handle to the token set for the active mode.
    pub fn active_shared(&self) -> Arc<TokenSet> {
        self.registry.shared(self.active_mode())
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }
}
