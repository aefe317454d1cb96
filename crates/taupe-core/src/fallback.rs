use crate::locale::Locale;
use fluent_fallback::env::LocalesProvider;
use unic_langid::LanguageIdentifier;

/// Returns a Fluent-style fallback chain for the requested language.
///
/// The requested identifier comes first, followed by its bare language
/// subtag when region, script, or variant subtags are present.
pub fn fallback_locales(requested: &LanguageIdentifier) -> impl LocalesProvider {
    let mut locales = vec![requested.clone()];

    let needs_primary_fallback = requested.script.is_some()
        || requested.region.is_some()
        || requested.variants().next().is_some();

    if needs_primary_fallback
        && let Ok(primary) = requested.language.as_str().parse::<LanguageIdentifier>()
        && !locales.contains(&primary)
    {
        locales.push(primary);
    }

    locales
}

/// Picks the first supported locale along the fallback chain.
pub fn negotiate(requested: &LanguageIdentifier) -> Option<Locale> {
    fallback_locales(requested).locales().find_map(|candidate| {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.language_identifier() == candidate)
    })
}
