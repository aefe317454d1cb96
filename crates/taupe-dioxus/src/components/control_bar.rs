use crate::components::{Button, ReloadPromptCheck};
use crate::hooks::{use_i18n, use_theme};
use crate::mode::RenderMode;
use dioxus::prelude::*;

/// Floating bar with the theme toggle and the language switch.
#[component]
pub fn ControlBar(mode: RenderMode) -> Element {
    let theme = use_theme();
    let i18n = use_i18n();

    let current = theme.current();
    let locale = i18n.locale();
    let icon = current.icon().class();
    let theme_label = i18n.t(current.toggle_label_id());
    let language_label = i18n.t("next-language");
    let language_name = i18n.t("language-name");

    rsx! {
        div {
            class: "full flex-center flex-col bg-gray-100/75 dark:bg-gray-800",
            lang: "{locale}",
            "data-theme": "{current}",
            ReloadPromptCheck { mode }
            div { class: "flex items-end space-x-6",
                Button {
                    label: theme_label,
                    onclick: move |_| {
                        theme.toggle();
                    },
                    div { class: "{icon} w-6 h-6" }
                }
                Button {
                    label: language_label,
                    onclick: move |_| {
                        i18n.next_language();
                    },
                    div { class: "i-carbon-language w-6 h-6" }
                    span { class: "sr-only", "{language_name}" }
                }
            }
        }
    }
}
