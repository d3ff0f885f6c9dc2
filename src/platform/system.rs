//! Appearance source backed by the operating system's theme setting.

use std::cell::Cell;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::{AppearanceSource, ColorScheme, ListenerSet, SchemeListener, Subscription};

/// Function used to read the current scheme.
pub type ColorSchemeDetector = fn() -> ColorScheme;

/// Appearance source that reads the OS light/dark setting.
///
/// Operating systems do not push theme changes through the detector, so the
/// host event loop calls [`poll`](Self::poll) (for example on window focus or
/// a timer); subscribers are notified only when the detected scheme differs
/// from the previous one.
pub struct SystemAppearance {
    detector: ColorSchemeDetector,
    last: Cell<ColorScheme>,
    listeners: ListenerSet,
}

impl SystemAppearance {
    /// Creates a source using OS detection.
    pub fn new() -> Self {
        Self::with_detector(os_scheme_detector)
    }

    /// Creates a source using a custom detector.
    ///
    /// This is useful for testing or when you want to force a specific scheme.
    pub fn with_detector(detector: ColorSchemeDetector) -> Self {
        let initial = detector();
        log::debug!("initial system color scheme: {:?}", initial);
        Self {
            detector,
            last: Cell::new(initial),
            listeners: ListenerSet::new(),
        }
    }

    /// Re-reads the scheme, notifying subscribers if it changed.
    ///
    /// Returns the new scheme when a change was delivered.
    pub fn poll(&self) -> Option<ColorScheme> {
        let current = (self.detector)();
        if current == self.last.replace(current) {
            return None;
        }
        log::debug!("system color scheme changed to {:?}", current);
        self.listeners.emit(current);
        Some(current)
    }
}

impl Default for SystemAppearance {
    fn default() -> Self {
        Self::new()
    }
}

impl AppearanceSource for SystemAppearance {
    fn color_scheme(&self) -> ColorScheme {
        self.last.get()
    }

    fn subscribe(&self, listener: SchemeListener) -> Subscription {
        self.listeners.subscribe(listener)
    }
}

fn os_scheme_detector() -> ColorScheme {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorScheme::Dark,
        OsThemeMode::Light => ColorScheme::Light,
    }
}
