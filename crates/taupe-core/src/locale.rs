//! Display languages and their two-way cycle.

use crate::fallback;
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError, langid};

#[derive(Debug, Error)]
pub enum LocaleError {
    /// The input is not a BCP 47 language identifier.
    #[error("Invalid language identifier '{name}'")]
    InvalidIdentifier {
        name: String,
        #[source]
        source: LanguageIdentifierError,
    },
    /// The identifier is valid but no supported locale matches it.
    #[error("Language '{0}' is not supported (expected one of: en, fr)")]
    Unsupported(LanguageIdentifier),
}

/// The translated string set shown to the user.
#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, Hash, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    /// The locale whose resources back every other one.
    pub const FALLBACK: Locale = Locale::En;

    /// Returns the other locale.
    pub const fn next(self) -> Self {
        match self {
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }

    /// BCP 47 code, also the directory name of the locale's resources.
    pub fn code(self) -> &'static str {
        self.into()
    }

    pub fn language_identifier(self) -> LanguageIdentifier {
        match self {
            Locale::En => langid!("en"),
            Locale::Fr => langid!("fr"),
        }
    }

    /// Maps an arbitrary language identifier onto a supported locale.
    pub fn negotiate(requested: &LanguageIdentifier) -> Result<Self, LocaleError> {
        fallback::negotiate(requested).ok_or_else(|| LocaleError::Unsupported(requested.clone()))
    }
}

/// Advances to the next display language.
pub const fn next_language(locale: Locale) -> Locale {
    locale.next()
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let requested =
            s.trim()
                .parse::<LanguageIdentifier>()
                .map_err(|source| LocaleError::InvalidIdentifier {
                    name: s.to_string(),
                    source,
                })?;
        Self::negotiate(&requested)
    }
}

impl From<Locale> for LanguageIdentifier {
    fn from(locale: Locale) -> Self {
        locale.language_identifier()
    }
}

impl TryFrom<&LanguageIdentifier> for Locale {
    type Error = LocaleError;

    fn try_from(value: &LanguageIdentifier) -> Result<Self, Self::Error> {
        Self::negotiate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator as _;

    #[test]
    fn next_language_is_an_involution() {
        for locale in Locale::iter() {
            assert_ne!(next_language(locale), locale);
            assert_eq!(next_language(next_language(locale)), locale);
        }
    }

    #[test]
    fn cycles_en_fr_en() {
        let locale = Locale::En;
        let locale = next_language(locale);
        assert_eq!(locale, Locale::Fr);
        assert_eq!(next_language(locale), Locale::En);
    }

    #[test]
    fn all_matches_iteration_order() {
        assert_eq!(Locale::iter().collect::<Vec<_>>(), Locale::ALL.to_vec());
    }

    #[rstest]
    #[case("en", Locale::En)]
    #[case("fr", Locale::Fr)]
    #[case("en-US", Locale::En)]
    #[case("fr-CA", Locale::Fr)]
    #[case(" fr ", Locale::Fr)]
    fn parses_and_negotiates(#[case] input: &str, #[case] expected: Locale) {
        assert_eq!(input.parse::<Locale>().unwrap(), expected);
    }

    #[test]
    fn rejects_unsupported_language() {
        assert!(matches!(
            "de".parse::<Locale>(),
            Err(LocaleError::Unsupported(lang)) if lang == langid!("de")
        ));
    }

    #[test]
    fn rejects_malformed_identifier() {
        assert!(matches!(
            "not a language!".parse::<Locale>(),
            Err(LocaleError::InvalidIdentifier { name, .. }) if name == "not a language!"
        ));
    }

    #[test]
    fn displays_its_code() {
        assert_eq!(Locale::Fr.to_string(), "fr");
        assert_eq!(LanguageIdentifier::from(Locale::En), langid!("en"));
    }
}
