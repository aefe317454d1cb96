use crate::components::ClientOnly;
use crate::hooks::{use_i18n, use_updates};
use crate::mode::RenderMode;
use dioxus::prelude::*;
use taupe_core::UpdateStatus;

/// Toast offering to reload when a new version is available, or announcing
/// offline readiness.
#[component]
pub fn ReloadPrompt() -> Element {
    let updates = use_updates();
    let i18n = use_i18n();

    let status = updates.status();
    let message = match status {
        UpdateStatus::Idle => None,
        UpdateStatus::OfflineReady => Some(i18n.t("reload-prompt-offline-ready")),
        UpdateStatus::NeedRefresh => Some(i18n.t("reload-prompt-need-refresh")),
    };
    let reload_label = i18n.t("reload-prompt-reload");
    let close_label = i18n.t("reload-prompt-close");
    let needs_refresh = status == UpdateStatus::NeedRefresh;
    let dismiss = updates.clone();

    rsx! {
        div { class: "reload-prompt-container",
            if let Some(message) = message {
                div { class: "reload-prompt-toast", "role": "alert",
                    div { class: "reload-prompt-message",
                        span { "{message}" }
                    }
                    if needs_refresh {
                        button {
                            class: "reload-prompt-button",
                            onclick: move |_| {
                                updates.accept();
                            },
                            "{reload_label}"
                        }
                    }
                    button {
                        class: "reload-prompt-button",
                        onclick: move |_| dismiss.dismiss(),
                        "{close_label}"
                    }
                }
            }
        }
    }
}

/// Mounts the [`ReloadPrompt`] only when rendering in a browser.
#[component]
pub fn ReloadPromptCheck(mode: RenderMode) -> Element {
    rsx! {
        ClientOnly { mode, ReloadPrompt {} }
    }
}
