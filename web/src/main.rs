use dioxus::prelude::*;
use taupe_dioxus::{Page, RenderMode, Session};

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let session = use_hook(|| {
        let session = Session::builder().build().map_err(|err| err.to_string());
        if let Ok(session) = &session {
            session.updates().on_reload(|| {
                tracing::info!("Reloading to activate the new build");
                spawn(async {
                    if let Err(err) = document::eval("window.location.reload()").await {
                        tracing::error!("Failed to reload the page: {}", err);
                    }
                });
            });
        }
        session
    });

    match session {
        Ok(session) => rsx! {
            Page { session, mode: RenderMode::Browser }
        },
        Err(err) => {
            tracing::error!("Failed to load translations: {}", err);
            rsx! {
                p { "{err}" }
            }
        },
    }
}
