//! Application shell: owns the resolver and fans the resolved theme out.
//!
//! [`ThemeShell`] is constructed once when the application starts. It
//! subscribes to the platform appearance source, keeps a [`ResolvedTheme`]
//! current, and hands it to registered listeners (screens, the navigation
//! container) at registration time and on every mode change. The platform
//! subscription is released exactly once, by [`ThemeShell::shutdown`] or
//! when the shell is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::platform::{AppearanceSource, ColorScheme, Subscription};
use crate::theme::{
    NavigationThemeAdapter, ResolvedTheme, ThemeError, ThemeMode, ThemeRegistry, ThemeResolver,
};

/// Callback receiving the resolved theme.
pub type ThemeListener = Box<dyn FnMut(&ResolvedTheme)>;

struct ShellState {
    resolver: ThemeResolver,
    adapter: NavigationThemeAdapter,
    current: ResolvedTheme,
}

impl ShellState {
    /// Re-resolves after a mode change and returns the new theme.
    fn refresh(&mut self) -> Result<ResolvedTheme, ThemeError> {
        self.current = ResolvedTheme::resolve(&self.resolver, &self.adapter)?;
        log::info!(
            "current app theme: {}{}",
            self.current.name(),
            if self.current.pinned { " (pinned)" } else { "" }
        );
        Ok(self.current.clone())
    }
}

/// The theme half of the top-level application shell.
///
/// Listeners run synchronously on the event-loop thread, in registration
/// order. A listener may register further listeners or call
/// [`toggle`](Self::toggle); listeners added during a change first hear of
/// the theme at registration, and a nested toggle reaches only the
/// listeners not already being notified. Listeners must not trigger
/// further platform notifications from inside the callback.
///
/// # Example
///
/// ```rust
/// use tinted::platform::{ColorScheme, ManualAppearance};
/// use tinted::{ThemeMode, ThemeShell};
///
/// let platform = ManualAppearance::new(ColorScheme::Dark);
/// let shell = ThemeShell::start(&platform).unwrap();
/// assert_eq!(shell.mode(), ThemeMode::Dark);
///
/// shell.toggle().unwrap();
/// platform.notify(ColorScheme::Dark);
/// assert_eq!(shell.mode(), ThemeMode::Light);
///
/// shell.shutdown();
/// assert_eq!(platform.subscriber_count(), 0);
/// ```
pub struct ThemeShell {
    state: Rc<RefCell<ShellState>>,
    listeners: Rc<RefCell<Vec<ThemeListener>>>,
    subscription: Option<Subscription>,
}

impl ThemeShell {
    /// Starts a shell with the built-in token sets and default adapter.
    pub fn start<S: AppearanceSource + ?Sized>(source: &S) -> Result<Self, ThemeError> {
        Self::start_with(source, ThemeRegistry::canonical(), NavigationThemeAdapter::new())
    }

    /// Starts a shell with a custom registry and adapter.
    ///
    /// # Errors
    ///
    /// Both modes are adapted up front, so a registry that cannot produce a
    /// navigation theme fails here with [`ThemeError::MissingToken`] rather
    /// than on a later mode change.
    pub fn start_with<S: AppearanceSource + ?Sized>(
        source: &S,
        registry: ThemeRegistry,
        adapter: NavigationThemeAdapter,
    ) -> Result<Self, ThemeError> {
        for mode in ThemeMode::ALL {
            adapter.adapt(registry.get(mode), mode)?;
        }

        let resolver = ThemeResolver::new(registry, source.color_scheme());
        let current = ResolvedTheme::resolve(&resolver, &adapter)?;
        log::info!("current app theme: {}", current.name());

        let state = Rc::new(RefCell::new(ShellState {
            resolver,
            adapter,
            current,
        }));
        let listeners: Rc<RefCell<Vec<ThemeListener>>> = Rc::new(RefCell::new(Vec::new()));

        let weak_state = Rc::downgrade(&state);
        let weak_listeners = Rc::downgrade(&listeners);
        let subscription = source.subscribe(Box::new(move |scheme| {
            on_platform_scheme(&weak_state, &weak_listeners, scheme);
        }));

        Ok(Self {
            state,
            listeners,
            subscription: Some(subscription),
        })
    }

    /// The theme for the current render pass.
    pub fn current(&self) -> ResolvedTheme {
        self.state.borrow().current.clone()
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.borrow().resolver.active_mode()
    }

    pub fn is_pinned(&self) -> bool {
        self.state.borrow().resolver.is_pinned()
    }

    /// Flips the mode on user request and pins it for the rest of the session.
    pub fn toggle(&self) -> Result<ResolvedTheme, ThemeError> {
        let theme = {
            let mut state = self.state.borrow_mut();
            state.resolver.on_manual_toggle();
            state.refresh()?
        };
        publish(&self.listeners, &theme);
        Ok(theme)
    }

    /// Registers a listener and immediately hands it the current theme.
    pub fn on_change<F>(&self, mut listener: F)
    where
        F: FnMut(&ResolvedTheme) + 'static,
    {
        let current = self.current();
        listener(&current);
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Whether the platform subscription is still held.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Releases the platform subscription and tears the shell down.
    pub fn shutdown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            log::debug!("theme shell released platform subscription");
        }
    }
}

impl Drop for ThemeShell {
    fn drop(&mut self) {
        self.release();
    }
}

fn on_platform_scheme(
    state: &Weak<RefCell<ShellState>>,
    listeners: &Weak<RefCell<Vec<ThemeListener>>>,
    scheme: ColorScheme,
) {
    let (Some(state), Some(listeners)) = (state.upgrade(), listeners.upgrade()) else {
        return;
    };
    let theme = {
        let mut state = state.borrow_mut();
        if !state.resolver.on_platform_change(scheme) {
            return;
        }
        match state.refresh() {
            Ok(theme) => theme,
            Err(err) => {
                log::error!("failed to resolve theme after platform change: {}", err);
                return;
            }
        }
    };
    publish(&listeners, &theme);
}

fn publish(listeners: &RefCell<Vec<ThemeListener>>, theme: &ResolvedTheme) {
    // Run with the list taken out so listeners can register or toggle.
    let mut running = std::mem::take(&mut *listeners.borrow_mut());
    for listener in running.iter_mut() {
        listener(theme);
    }
    let mut slot = listeners.borrow_mut();
    running.append(&mut slot);
    *slot = running;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualAppearance;
    use crate::theme::{Color, TokenSet};

    fn recorder(shell: &ThemeShell) -> Rc<RefCell<Vec<ThemeMode>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        shell.on_change(move |theme| sink.borrow_mut().push(theme.mode));
        seen
    }

    #[test]
    fn test_start_follows_platform() {
        let platform = ManualAppearance::new(ColorScheme::Dark);
        let shell = ThemeShell::start(&platform).unwrap();
        assert_eq!(shell.mode(), ThemeMode::Dark);
        assert!(!shell.is_pinned());
        assert!(shell.is_subscribed());
    }

    #[test]
    fn test_listener_gets_current_then_changes() {
        let platform = ManualAppearance::new(ColorScheme::Light);
        let shell = ThemeShell::start(&platform).unwrap();
        let seen = recorder(&shell);

        platform.notify(ColorScheme::Dark);
        platform.notify(ColorScheme::Dark);
        shell.toggle().unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light]
        );
    }

    #[test]
    fn test_platform_ignored_after_toggle() {
        let platform = ManualAppearance::new(ColorScheme::Light);
        let shell = ThemeShell::start(&platform).unwrap();
        platform.notify(ColorScheme::Dark);
        shell.toggle().unwrap();
        let seen = recorder(&shell);

        platform.notify(ColorScheme::Dark);
        platform.notify(ColorScheme::Light);

        assert_eq!(shell.mode(), ThemeMode::Light);
        assert_eq!(*seen.borrow(), vec![ThemeMode::Light]);
        assert!(shell.current().pinned);
    }

    #[test]
    fn test_shutdown_releases_subscription() {
        let platform = ManualAppearance::new(ColorScheme::Light);
        let shell = ThemeShell::start(&platform).unwrap();
        assert_eq!(platform.subscriber_count(), 1);

        shell.shutdown();
        assert_eq!(platform.subscriber_count(), 0);
        platform.notify(ColorScheme::Dark);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let platform = ManualAppearance::new(ColorScheme::Light);
        {
            let _shell = ThemeShell::start(&platform).unwrap();
            assert_eq!(platform.subscriber_count(), 1);
        }
        assert_eq!(platform.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_can_register_child_during_change() {
        let platform = ManualAppearance::new(ColorScheme::Light);
        let shell = Rc::new(ThemeShell::start(&platform).unwrap());
        let child_seen = Rc::new(RefCell::new(Vec::new()));

        let parent_shell = Rc::downgrade(&shell);
        let child_sink = Rc::clone(&child_seen);
        shell.on_change(move |theme| {
            if theme.mode != ThemeMode::Dark {
                return;
            }
            let Some(shell) = parent_shell.upgrade() else {
                return;
            };
            let sink = Rc::clone(&child_sink);
            shell.on_change(move |theme| sink.borrow_mut().push(theme.mode));
        });

        platform.notify(ColorScheme::Dark);
        assert_eq!(*child_seen.borrow(), vec![ThemeMode::Dark]);

        platform.notify(ColorScheme::Light);
        assert_eq!(*child_seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn test_listener_can_toggle_during_change() {
        let platform = ManualAppearance::new(ColorScheme::Light);
        let shell = Rc::new(ThemeShell::start(&platform).unwrap());

        let handle = Rc::downgrade(&shell);
        shell.on_change(move |theme| {
            if theme.mode == ThemeMode::Dark && !theme.pinned {
                if let Some(shell) = handle.upgrade() {
                    shell.toggle().unwrap();
                }
            }
        });

        platform.notify(ColorScheme::Dark);
        assert_eq!(shell.mode(), ThemeMode::Light);
        assert!(shell.is_pinned());
    }

    #[test]
    fn test_start_rejects_registry_missing_navigation_tokens() {
        let light = TokenSet::new("light").add_color("primary", Color::hex(0xFFFFFF));
        let dark = TokenSet::new("dark").add_color("primary", Color::hex(0x000000));
        let registry = ThemeRegistry::new(light, dark).unwrap();
        let platform = ManualAppearance::new(ColorScheme::Light);

        let result = ThemeShell::start_with(&platform, registry, NavigationThemeAdapter::new());
        assert!(matches!(result, Err(ThemeError::MissingToken { .. })));
        assert_eq!(platform.subscriber_count(), 0);
    }
}
