use crate::mode::RenderMode;
use dioxus::prelude::*;

/// Renders `children` only in an interactive browsing environment.
///
/// Server passes must not evaluate interactive or installability logic, so
/// they get an empty node instead.
#[component]
pub fn ClientOnly(mode: RenderMode, children: Element) -> Element {
    if !mode.is_browsing() {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
