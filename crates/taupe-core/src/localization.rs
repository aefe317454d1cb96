//! Fluent resources embedded into the binary.

use crate::locale::Locale;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// File stem of every resource, `i18n/{locale}/{DOMAIN}.ftl`.
pub const DOMAIN: &str = "taupe";

/// Static page title; `page-title` carries it unchanged in every locale.
pub const DEFAULT_TITLE: &str = "taupe";

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct EmbeddedResources;

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("No translation resource embedded for locale '{0}'")]
    MissingResource(Locale),
    #[error("Invalid UTF-8 in embedded file '{path}'")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("Failed to parse fluent resource from '{path}': {errors}")]
    Parse { path: String, errors: String },
}

/// Parsed translations for every supported locale.
#[derive(Clone)]
pub struct Localizer {
    resources: HashMap<Locale, Arc<FluentResource>>,
}

impl Localizer {
    /// Loads and parses the resources compiled into the binary.
    pub fn embedded() -> Result<Self, LocalizationError> {
        let mut resources = HashMap::new();

        for locale in Locale::ALL {
            let path = resource_path(locale);
            let file =
                EmbeddedResources::get(&path).ok_or(LocalizationError::MissingResource(locale))?;
            let content = String::from_utf8(file.data.into_owned()).map_err(|source| {
                LocalizationError::InvalidUtf8 {
                    path: path.clone(),
                    source,
                }
            })?;

            resources.insert(locale, Arc::new(parse_resource(&path, content)?));
        }

        tracing::debug!(locales = resources.len(), "Loaded embedded translations");
        Ok(Self { resources })
    }

    /// Builds a localizer from in-memory FTL sources.
    ///
    /// Every supported locale must be present.
    pub fn from_sources<I, S>(sources: I) -> Result<Self, LocalizationError>
    where
        I: IntoIterator<Item = (Locale, S)>,
        S: Into<String>,
    {
        let mut resources = HashMap::new();
        for (locale, content) in sources {
            let path = resource_path(locale);
            resources.insert(locale, Arc::new(parse_resource(&path, content.into())?));
        }

        if let Some(missing) = Locale::ALL
            .into_iter()
            .find(|locale| !resources.contains_key(locale))
        {
            return Err(LocalizationError::MissingResource(missing));
        }

        Ok(Self { resources })
    }

    /// Formats a message, falling back to [`Locale::FALLBACK`] when the
    /// requested locale lacks it.
    pub fn localize<'a>(
        &self,
        locale: Locale,
        id: &str,
        args: Option<&HashMap<&str, FluentValue<'a>>>,
    ) -> Option<String> {
        if let Some(message) = self.format(locale, id, args) {
            return Some(message);
        }

        if locale == Locale::FALLBACK {
            return None;
        }

        tracing::debug!(%locale, id, "Message missing, trying fallback locale");
        self.format(Locale::FALLBACK, id, args)
    }

    /// Like [`Localizer::localize`] without arguments, returning the id itself
    /// when no translation exists.
    pub fn translate(&self, locale: Locale, id: &str) -> String {
        self.localize(locale, id, None).unwrap_or_else(|| {
            tracing::warn!("Translation for '{}' not found", id);
            id.to_string()
        })
    }

    fn format<'a>(
        &self,
        locale: Locale,
        id: &str,
        args: Option<&HashMap<&str, FluentValue<'a>>>,
    ) -> Option<String> {
        let resource = self.resources.get(&locale)?;

        let mut bundle = FluentBundle::new(vec![locale.language_identifier()]);
        bundle.set_use_isolating(false);
        if let Err(errors) = bundle.add_resource(resource.clone()) {
            tracing::error!("Failed to add resource for '{}': {:?}", locale, errors);
            return None;
        }

        let message = bundle.get_message(id)?;
        let pattern = message.value()?;

        let fluent_args = args.map(|args| {
            let mut fa = FluentArgs::new();
            for (key, value) in args {
                fa.set(*key, value.clone());
            }
            fa
        });

        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);

        if !errors.is_empty() {
            tracing::error!("Fluent formatting errors for id '{}': {:?}", id, errors);
            return None;
        }

        Some(value.into_owned())
    }
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut locales: Vec<_> = self.resources.keys().map(|locale| locale.code()).collect();
        locales.sort_unstable();
        f.debug_struct("Localizer")
            .field("locales", &locales)
            .finish()
    }
}

fn resource_path(locale: Locale) -> String {
    format!("{}/{}.ftl", locale, DOMAIN)
}

fn parse_resource(path: &str, content: String) -> Result<FluentResource, LocalizationError> {
    FluentResource::try_new(content).map_err(|(_, errs)| LocalizationError::Parse {
        path: path.to_string(),
        errors: format!("{:?}", errs),
    })
}
