mod button;
mod client_only;
mod control_bar;
mod page;
mod reload_prompt;

pub use button::Button;
pub use client_only::ClientOnly;
pub use control_bar::ControlBar;
pub use page::{Page, PageProps};
pub use reload_prompt::{ReloadPrompt, ReloadPromptCheck};
