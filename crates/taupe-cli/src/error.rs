//! CLI error types rendered as miette diagnostics.

use miette::Diagnostic;
use taupe_core::LocalizationError;
use taupe_toml::ConfigError;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(
        code(taupe::config),
        help(
            "taupe.toml accepts:\n\n  \
              locale = \"en\" | \"fr\"\n  \
              theme = \"light\" | \"dark\"\n  \
              title = \"...\"\n"
        )
    )]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(code(taupe::localization))]
    Localization(#[from] LocalizationError),

    #[error(transparent)]
    #[diagnostic(code(taupe::io))]
    Io(#[from] std::io::Error),
}
