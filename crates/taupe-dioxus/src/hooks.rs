//! Hooks bridging session stores into Dioxus signals.

use dioxus::prelude::*;
use dioxus_signals::SyncSignal;
use std::rc::Rc;
use taupe_core::{I18nContext, Locale, Store, Theme, ThemeContext, UpdateChannel, UpdateStatus};

/// Mirrors a [`Store`] into a signal for the lifetime of the calling component.
///
/// Every write to the store is forwarded synchronously, so components reading
/// the signal re-render on the next update pass.
pub fn use_store<T>(store: &Store<T>) -> SyncSignal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let signal = use_signal_sync(|| store.get());
    use_hook(|| {
        Rc::new(store.subscribe(move |value: &T| {
            let mut signal = signal;
            signal.set(value.clone());
        }))
    });
    signal
}

/// Theme handle returned by [`use_theme`].
#[derive(Clone)]
pub struct UseTheme {
    theme: SyncSignal<Theme>,
    context: ThemeContext,
}

impl UseTheme {
    pub fn current(&self) -> Theme {
        *self.theme.read()
    }

    pub fn set(&self, theme: Theme) {
        self.context.set_theme(theme);
    }

    pub fn toggle(&self) -> Theme {
        self.context.toggle_theme()
    }
}

/// Reads the session's [`ThemeContext`].
///
/// # Panics
///
/// Panics when called outside a [`SessionProvider`](crate::SessionProvider).
pub fn use_theme() -> UseTheme {
    let context = use_context::<ThemeContext>();
    let theme = use_store(context.store());
    UseTheme { theme, context }
}

/// Localization handle returned by [`use_i18n`].
#[derive(Clone)]
pub struct UseI18n {
    locale: SyncSignal<Locale>,
    context: I18nContext,
}

impl UseI18n {
    pub fn locale(&self) -> Locale {
        *self.locale.read()
    }

    /// Translates `id` in the current locale.
    pub fn t(&self, id: &str) -> String {
        self.context.localizer().translate(self.locale(), id)
    }

    pub fn set_locale(&self, locale: Locale) {
        self.context.set_locale(locale);
    }

    pub fn next_language(&self) -> Locale {
        self.context.next_language()
    }
}

/// Reads the session's [`I18nContext`].
///
/// # Panics
///
/// Panics when called outside a [`SessionProvider`](crate::SessionProvider).
pub fn use_i18n() -> UseI18n {
    let context = use_context::<I18nContext>();
    let locale = use_store(context.store());
    UseI18n { locale, context }
}

/// Update notifications returned by [`use_updates`].
#[derive(Clone)]
pub struct UseUpdates {
    status: SyncSignal<UpdateStatus>,
    channel: UpdateChannel,
}

impl UseUpdates {
    pub fn status(&self) -> UpdateStatus {
        *self.status.read()
    }

    pub fn accept(&self) -> bool {
        self.channel.accept()
    }

    pub fn dismiss(&self) {
        self.channel.dismiss();
    }
}

/// Reads the session's [`UpdateChannel`].
///
/// Outside a provider, a private idle channel is used so the prompt renders
/// nothing.
pub fn use_updates() -> UseUpdates {
    let channel = use_hook(|| try_consume_context::<UpdateChannel>().unwrap_or_default());
    let status = use_store(channel.store());
    UseUpdates { status, channel }
}
