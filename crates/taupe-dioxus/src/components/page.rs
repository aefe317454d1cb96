use crate::components::ControlBar;
use crate::mode::RenderMode;
use crate::provider::SessionProvider;
use dioxus::prelude::*;
use taupe_core::{DEFAULT_TITLE, Session};

#[derive(Clone, PartialEq, Props)]
pub struct PageProps {
    pub session: Session,
    #[props(default)]
    pub mode: RenderMode,
    #[props(into, default = DEFAULT_TITLE.to_string())]
    pub title: String,
}

/// Page shell: provides the session to the control bar and sets the title.
///
/// The browser title is set through the document; server passes emit it in
/// the document head instead (see [`render_document`](crate::render_document)).
#[allow(non_snake_case)]
pub fn Page(props: PageProps) -> Element {
    let PageProps {
        session,
        mode,
        title,
    } = props;

    rsx! {
        SessionProvider { session,
            if mode.is_browsing() {
                document::Title { "{title}" }
            }
            ControlBar { mode }
        }
    }
}
