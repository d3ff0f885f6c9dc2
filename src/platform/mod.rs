//! The host platform's color-scheme signal.
//!
//! This module provides:
//!
//! - [`ColorScheme`]: what the platform reports (light, dark, or no preference)
//! - [`AppearanceSource`]: query plus change subscription
//! - [`Subscription`]: scoped handle that removes its listener exactly once
//! - [`ManualAppearance`]: a source driven in-process, for embedding and tests
//! - [`SystemAppearance`]: a source backed by OS detection
//!
//! Sources are single-threaded: notifications are delivered synchronously,
//! in order, on the thread that triggers them.

mod manual;
mod subscription;
mod system;

pub use manual::ManualAppearance;
pub use subscription::{ListenerSet, SchemeListener, Subscription};
pub use system::{ColorSchemeDetector, SystemAppearance};

use serde::{Deserialize, Serialize};

/// A color scheme as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    /// The platform expresses no preference.
    Unknown,
}

/// A provider of the platform color scheme and its changes.
pub trait AppearanceSource {
    /// The scheme the platform reports right now.
    fn color_scheme(&self) -> ColorScheme;

    /// Registers `listener` for change notifications.
    ///
    /// The listener stays registered until the returned handle is released.
    fn subscribe(&self, listener: SchemeListener) -> Subscription;
}
