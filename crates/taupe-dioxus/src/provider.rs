use dioxus::prelude::*;
use taupe_core::Session;

/// Supplies the session's localization, theme, and update contexts to every
/// descendant.
#[component]
pub fn SessionProvider(session: Session, children: Element) -> Element {
    use_context_provider(|| session.i18n().clone());
    use_context_provider(|| session.theme().clone());
    use_context_provider(|| session.updates().clone());

    rsx! {
        {children}
    }
}
