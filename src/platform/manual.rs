//! An appearance source driven by the embedding application.

use std::cell::Cell;

use super::{AppearanceSource, ColorScheme, ListenerSet, SchemeListener, Subscription};

/// Appearance source whose scheme is pushed in by the caller.
///
/// Use it to bridge a host UI framework's appearance callback into the
/// resolver, or to script platform events in tests.
///
/// # Example
///
/// ```rust
/// use tinted::platform::{AppearanceSource, ColorScheme, ManualAppearance};
///
/// let platform = ManualAppearance::new(ColorScheme::Unknown);
/// platform.notify(ColorScheme::Dark);
/// assert_eq!(platform.color_scheme(), ColorScheme::Dark);
/// ```
pub struct ManualAppearance {
    scheme: Cell<ColorScheme>,
    listeners: ListenerSet,
}

impl ManualAppearance {
    pub fn new(initial: ColorScheme) -> Self {
        Self {
            scheme: Cell::new(initial),
            listeners: ListenerSet::new(),
        }
    }

    /// Records `scheme` as current and notifies every subscriber.
    ///
    /// Subscribers are notified even when the scheme is unchanged, matching
    /// platforms that repeat notifications.
    pub fn notify(&self, scheme: ColorScheme) {
        self.scheme.set(scheme);
        self.listeners.emit(scheme);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ManualAppearance {
    fn default() -> Self {
        Self::new(ColorScheme::Unknown)
    }
}

impl AppearanceSource for ManualAppearance {
    fn color_scheme(&self) -> ColorScheme {
        self.scheme.get()
    }

    fn subscribe(&self, listener: SchemeListener) -> Subscription {
        self.listeners.subscribe(listener)
    }
}
