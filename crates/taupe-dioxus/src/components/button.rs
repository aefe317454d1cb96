use dioxus::prelude::*;

/// Icon button of the control bar.
///
/// `label` is exposed as tooltip and accessible name since the visible
/// content is a glyph.
#[component]
pub fn Button(label: String, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            class: "icon-btn",
            r#type: "button",
            title: "{label}",
            "aria-label": "{label}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
