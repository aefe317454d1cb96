use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use taupe_core::{Locale, Session, Theme, next_language, toggle_theme};

#[test]
fn theme_toggle_is_total_and_involutive() {
    for theme in [Theme::Light, Theme::Dark] {
        let other = toggle_theme(theme);
        assert_ne!(other, theme);
        assert_eq!(toggle_theme(other), theme);
    }
}

#[test]
fn next_language_is_total_and_involutive() {
    for locale in Locale::ALL {
        let other = next_language(locale);
        assert_ne!(other, locale);
        assert_eq!(next_language(other), locale);
    }
}

#[test]
fn session_theme_scenario() {
    let session = Session::builder().theme(Theme::Light).build().unwrap();
    let theme = session.theme();

    theme.toggle_theme();
    assert_eq!(theme.current_theme(), Theme::Dark);
    assert_eq!(theme.current_theme().icon().class(), "i-carbon-sun");

    theme.toggle_theme();
    assert_eq!(theme.current_theme(), Theme::Light);
    assert_eq!(theme.current_theme().icon().class(), "i-carbon-moon");
}

#[test]
fn session_locale_scenario() {
    let session = Session::builder().locale(Locale::En).build().unwrap();
    let i18n = session.i18n();

    i18n.next_language();
    assert_eq!(i18n.current_locale(), Locale::Fr);

    i18n.next_language();
    assert_eq!(i18n.current_locale(), Locale::En);
}

#[test]
fn every_reader_sees_the_write_before_it_returns() {
    let session = Session::builder().build().unwrap();
    let notified = Arc::new(AtomicUsize::new(0));

    let subscriptions: Vec<_> = (0..3)
        .map(|_| {
            let notified = notified.clone();
            session.theme().subscribe(move |theme| {
                assert_eq!(*theme, Theme::Dark);
                notified.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    session.theme().toggle_theme();

    assert_eq!(notified.load(Ordering::SeqCst), subscriptions.len());
}
