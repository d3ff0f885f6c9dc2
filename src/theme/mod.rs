//! Theme tokens, mode resolution and navigation projection.
//!
//! This module provides:
//!
//! - [`TokenSet`]: Immutable design tokens for one mode
//! - [`ThemeRegistry`]: The light and dark token sets, looked up by mode
//! - [`ThemeResolver`]: Platform-following mode with a sticky manual override
//! - [`NavigationThemeAdapter`]: Projection into a navigation layer's theme
//! - [`ResolvedTheme`]: The bundle handed to screens on each mode change
//!
//! Data flows one way: platform scheme → resolver → registry lookup →
//! token set, which is then both used directly and adapted for navigation.

mod color;
mod context;
mod error;
mod mode;
mod navigation;
mod palette;
mod registry;
mod resolver;
mod tokens;

pub use color::{Color, ColorParseError};
pub use context::ResolvedTheme;
pub use error::ThemeError;
pub use mode::{StatusBarStyle, ThemeMode};
pub use navigation::{
    FontPreset, NavigationColors, NavigationFonts, NavigationThemeAdapter, NavigationTokenSet,
    DEFAULT_FONT_FAMILY,
};
pub use registry::ThemeRegistry;
pub use resolver::{ResolverState, ThemeResolver};
pub use tokens::{Shadow, ShadowOffset, TokenGroup, TokenSet};
