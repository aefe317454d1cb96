use crate::locale::{Locale, next_language};
use crate::localization::Localizer;
use crate::store::{Store, Subscription};
use fluent_bundle::FluentValue;
use std::collections::HashMap;
use std::sync::Arc;

/// Session-scoped localization provider.
///
/// Holds the active [`Locale`] and resolves messages against it; descendant
/// views subscribe to re-resolve their strings when the locale changes.
#[derive(Clone, Debug)]
pub struct I18nContext {
    locale: Store<Locale>,
    localizer: Arc<Localizer>,
}

impl I18nContext {
    pub fn new(initial: Locale, localizer: Arc<Localizer>) -> Self {
        Self {
            locale: Store::new(initial),
            localizer,
        }
    }

    pub fn current_locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        tracing::debug!(%locale, "Setting locale");
        self.locale.set(locale);
    }

    /// Publishes the other locale and returns it.
    pub fn next_language(&self) -> Locale {
        let next = self.locale.update(|locale| next_language(*locale));
        tracing::debug!(locale = %next, "Switched language");
        next
    }

    pub fn localize<'a>(
        &self,
        id: &str,
        args: Option<&HashMap<&str, FluentValue<'a>>>,
    ) -> Option<String> {
        self.localizer.localize(self.current_locale(), id, args)
    }

    /// Translates `id` in the current locale, returning the id when missing.
    pub fn t(&self, id: &str) -> String {
        self.localizer.translate(self.current_locale(), id)
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Locale) + Send + Sync + 'static,
    {
        self.locale.subscribe(callback)
    }

    pub fn store(&self) -> &Store<Locale> {
        &self.locale
    }

    pub fn localizer(&self) -> &Arc<Localizer> {
        &self.localizer
    }
}

impl PartialEq for I18nContext {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale && Arc::ptr_eq(&self.localizer, &other.localizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn context(initial: Locale) -> I18nContext {
        I18nContext::new(initial, Arc::new(Localizer::embedded().unwrap()))
    }

    #[test]
    fn cycles_en_fr_en() {
        let i18n = context(Locale::En);

        assert_eq!(i18n.next_language(), Locale::Fr);
        assert_eq!(i18n.current_locale(), Locale::Fr);
        assert_eq!(i18n.next_language(), Locale::En);
        assert_eq!(i18n.current_locale(), Locale::En);
    }

    #[test]
    fn translations_follow_the_current_locale() {
        let i18n = context(Locale::En);
        assert_eq!(i18n.t("language-name"), "English");

        i18n.next_language();
        assert_eq!(i18n.t("language-name"), "Français");
    }

    #[test]
    fn subscribers_can_re_resolve_strings() {
        let i18n = context(Locale::En);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let reader = i18n.clone();
        let sink = seen.clone();
        let subscription = i18n.subscribe(move |_| sink.lock().push(reader.t("next-language")));

        i18n.set_locale(Locale::Fr);
        i18n.set_locale(Locale::Fr);
        drop(subscription);
        i18n.set_locale(Locale::En);

        assert_eq!(*seen.lock(), vec!["Changer de langue".to_string()]);
    }
}
