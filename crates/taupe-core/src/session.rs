use crate::i18n::I18nContext;
use crate::locale::Locale;
use crate::localization::{LocalizationError, Localizer};
use crate::theme::{Theme, ThemeContext};
use crate::update::UpdateChannel;
use std::sync::Arc;

/// Everything a view tree shares for one browser session.
///
/// Clones share the same stores.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    i18n: I18nContext,
    theme: ThemeContext,
    updates: UpdateChannel,
}

#[bon::bon]
impl Session {
    /// Starts a session with the given initial (default or persisted) choices.
    ///
    /// The embedded translations are loaded unless a localizer is supplied.
    #[builder]
    pub fn new(
        #[builder(default)] locale: Locale,
        #[builder(default)] theme: Theme,
        localizer: Option<Arc<Localizer>>,
        updates: Option<UpdateChannel>,
    ) -> Result<Self, LocalizationError> {
        let localizer = match localizer {
            Some(localizer) => localizer,
            None => Arc::new(Localizer::embedded()?),
        };

        tracing::debug!(%locale, %theme, "Starting session");

        Ok(Self {
            i18n: I18nContext::new(locale, localizer),
            theme: ThemeContext::new(theme),
            updates: updates.unwrap_or_default(),
        })
    }
}

impl Session {
    pub fn i18n(&self) -> &I18nContext {
        &self.i18n
    }

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    pub fn updates(&self) -> &UpdateChannel {
        &self.updates
    }
}
