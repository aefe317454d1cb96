//! Light/dark theme state and its provider.

use crate::store::{Store, Subscription};
use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator as _, IntoStaticStr};

/// The visual palette of the session.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, Hash, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The icon shown on the toggle button.
    ///
    /// The icon depicts the theme the button switches *to*: a sun while the
    /// dark palette is active, a moon while the light one is.
    pub const fn icon(self) -> ThemeIcon {
        match self {
            Theme::Dark => ThemeIcon::Sun,
            Theme::Light => ThemeIcon::Moon,
        }
    }

    /// Fluent message id describing what the toggle button will do.
    pub const fn toggle_label_id(self) -> &'static str {
        match self {
            Theme::Dark => "switch-to-light",
            Theme::Light => "switch-to-dark",
        }
    }
}

/// Parses `light` or `dark`, ignoring case and surrounding whitespace.
impl FromStr for Theme {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Theme::iter()
            .find(|theme| <&'static str>::from(*theme).eq_ignore_ascii_case(name))
            .ok_or(strum::ParseError::VariantNotFound)
    }
}

/// Flips the theme.
pub const fn toggle_theme(theme: Theme) -> Theme {
    theme.toggled()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    /// Utility class of the icon glyph.
    pub const fn class(self) -> &'static str {
        match self {
            ThemeIcon::Sun => "i-carbon-sun",
            ThemeIcon::Moon => "i-carbon-moon",
        }
    }
}

/// Session-scoped theme provider.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeContext {
    store: Store<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        Self {
            store: Store::new(initial),
        }
    }

    pub fn current_theme(&self) -> Theme {
        self.store.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        tracing::debug!(%theme, "Setting theme");
        self.store.set(theme);
    }

    /// Publishes the flipped theme and returns it.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.store.update(|theme| toggle_theme(*theme));
        tracing::debug!(theme = %next, "Toggled theme");
        next
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Theme) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn store(&self) -> &Store<Theme> {
        &self.store
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use strum::IntoEnumIterator as _;

    #[test]
    fn toggle_is_an_involution() {
        for theme in Theme::iter() {
            assert_ne!(toggle_theme(theme), theme);
            assert_eq!(toggle_theme(toggle_theme(theme)), theme);
        }
    }

    #[rstest]
    #[case(Theme::Dark, ThemeIcon::Sun, "i-carbon-sun")]
    #[case(Theme::Light, ThemeIcon::Moon, "i-carbon-moon")]
    fn icon_depicts_the_target_theme(
        #[case] theme: Theme,
        #[case] icon: ThemeIcon,
        #[case] class: &str,
    ) {
        assert_eq!(theme.icon(), icon);
        assert_eq!(theme.icon().class(), class);
    }

    #[rstest]
    #[case("light", Theme::Light)]
    #[case("dark", Theme::Dark)]
    #[case("DARK", Theme::Dark)]
    #[case(" dark ", Theme::Dark)]
    #[case("\tLight\n", Theme::Light)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: Theme) {
        assert_eq!(input.parse::<Theme>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn context_cycles_light_dark_light() {
        let context = ThemeContext::new(Theme::Light);

        assert_eq!(context.toggle_theme(), Theme::Dark);
        assert_eq!(context.current_theme(), Theme::Dark);
        assert_eq!(context.toggle_theme(), Theme::Light);
        assert_eq!(context.current_theme(), Theme::Light);
    }

    #[test]
    fn toggle_notifies_subscribers() {
        let context = ThemeContext::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let _subscription = context.subscribe(move |theme| {
            assert_eq!(*theme, Theme::Dark);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        context.toggle_theme();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
