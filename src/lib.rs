//! # Tinted - light/dark design tokens for application shells
//!
//! `tinted` picks the active light or dark token set for an application,
//! keeps it in step with the platform's color scheme until the user pins a
//! mode, and derives the smaller theme a navigation container expects.
//!
//! ## Core Concepts
//!
//! - [`TokenSet`]: Immutable colors, spacing, radii, typography and shadows for one mode
//! - [`ThemeRegistry`]: The light and dark token sets, guaranteed to share one shape
//! - [`ThemeResolver`]: Follows the platform scheme until a manual toggle pins it
//! - [`NavigationThemeAdapter`]: Projects a token set into a [`NavigationTokenSet`]
//! - [`ThemeShell`]: Wires a platform [`AppearanceSource`](platform::AppearanceSource)
//!   to the resolver and publishes a [`ResolvedTheme`] on every change
//!
//! ## Quick Start
//!
//! ```rust
//! use tinted::platform::{ColorScheme, ManualAppearance};
//! use tinted::{ThemeMode, ThemeShell};
//!
//! let platform = ManualAppearance::new(ColorScheme::Light);
//! let shell = ThemeShell::start(&platform).unwrap();
//!
//! shell.on_change(|theme| {
//!     // restyle screens and hand `theme.navigation` to the navigator
//!     let _ = (&theme.tokens, &theme.navigation);
//! });
//!
//! platform.notify(ColorScheme::Dark);
//! assert_eq!(shell.mode(), ThemeMode::Dark);
//!
//! shell.shutdown();
//! ```
//!
//! ## Pinning
//!
//! A manual toggle flips the mode and pins it for the life of the shell.
//! Platform notifications that arrive afterwards, including ones already in
//! flight when the user toggled, are ignored. Nothing is persisted; a new
//! shell starts out following the platform again.
//!
//! ## Account screens
//!
//! The [`auth`] module defines the backend contract account screens use, with
//! a closed set of error kinds whose `Display` is always a user-facing
//! message.

pub mod auth;
pub mod platform;
mod preview;
mod shell;
mod theme;

pub use preview::ThemePreview;
pub use shell::{ThemeListener, ThemeShell};
pub use theme::{
    Color, ColorParseError, FontPreset, NavigationColors, NavigationFonts, NavigationThemeAdapter,
    NavigationTokenSet, ResolvedTheme, ResolverState, Shadow, ShadowOffset, StatusBarStyle,
    ThemeError, ThemeMode, ThemeRegistry, ThemeResolver, TokenGroup, TokenSet,
    DEFAULT_FONT_FAMILY,
};
