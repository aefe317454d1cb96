#![doc = include_str!("../README.md")]

mod components;
mod hooks;
mod mode;
mod provider;
mod ssr;

pub use components::{
    Button, ClientOnly, ControlBar, Page, PageProps, ReloadPrompt, ReloadPromptCheck,
};
pub use hooks::{UseI18n, UseTheme, UseUpdates, use_i18n, use_store, use_theme, use_updates};
pub use mode::RenderMode;
pub use provider::SessionProvider;
pub use ssr::{render_document, render_fragment};

/// Re-export commonly used types
pub use taupe_core::{DEFAULT_TITLE, Locale, Session, Theme, UpdateChannel, UpdateStatus};
