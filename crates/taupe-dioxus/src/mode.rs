/// Capability flag telling components which environment they render in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RenderMode {
    /// Interactive rendering with access to the document and window.
    #[default]
    Browser,
    /// Non-interactive pass producing static markup.
    Server,
}

impl RenderMode {
    pub const fn is_browsing(self) -> bool {
        matches!(self, RenderMode::Browser)
    }
}
