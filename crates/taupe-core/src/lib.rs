#![doc = include_str!("../README.md")]

mod fallback;
mod i18n;
mod locale;
mod localization;
mod session;
mod store;
mod theme;
mod update;

pub use fallback::fallback_locales;
pub use i18n::I18nContext;
pub use locale::{Locale, LocaleError, next_language};
pub use localization::{DEFAULT_TITLE, DOMAIN, LocalizationError, Localizer};
pub use session::Session;
pub use store::{Store, Subscription};
pub use theme::{Theme, ThemeContext, ThemeIcon, toggle_theme};
pub use update::{UpdateChannel, UpdateStatus};

/// Re-export commonly used types
pub use fluent_bundle::FluentValue;
pub use unic_langid::{LanguageIdentifier, langid};
