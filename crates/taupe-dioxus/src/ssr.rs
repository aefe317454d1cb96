//! Server-side rendering of the page with `dioxus-ssr`.

use crate::components::{Page, PageProps};
use crate::mode::RenderMode;
use dioxus::prelude::*;
use dioxus_core::VirtualDom;
use taupe_core::{DEFAULT_TITLE, Session};

/// Renders the page body for the given mode.
pub fn render_fragment(session: &Session, mode: RenderMode) -> String {
    let mut dom = VirtualDom::new_with_props(
        Page,
        PageProps {
            session: session.clone(),
            mode,
            title: DEFAULT_TITLE.to_string(),
        },
    );
    dom.rebuild_in_place();

    let html = dioxus_ssr::render(&dom);
    tracing::debug!(?mode, bytes = html.len(), "Rendered fragment");
    html
}

#[derive(Clone, PartialEq, Props)]
struct DocumentBodyProps {
    session: Session,
    title: String,
}

/// `head` and `body` of the document; the `html` root is written around them.
#[allow(non_snake_case)]
fn DocumentBody(props: DocumentBodyProps) -> Element {
    let DocumentBodyProps { session, title } = props;

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            title { "{title}" }
        }
        body {
            Page {
                session,
                mode: RenderMode::Server,
                title: title.clone(),
            }
        }
    }
}

/// Renders a complete HTML document for a non-interactive pass.
pub fn render_document(session: &Session, title: &str) -> String {
    let locale = session.i18n().current_locale();
    let theme = session.theme().current_theme();

    let mut dom = VirtualDom::new_with_props(
        DocumentBody,
        DocumentBodyProps {
            session: session.clone(),
            title: title.to_string(),
        },
    );
    dom.rebuild_in_place();

    let html = format!(
        "<!DOCTYPE html><html lang=\"{}\" class=\"{}\" data-theme=\"{}\">{}</html>",
        locale,
        theme,
        theme,
        dioxus_ssr::render(&dom)
    );
    tracing::debug!(bytes = html.len(), "Rendered document");
    html
}
