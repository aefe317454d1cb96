use crate::error::CliError;
use clap::Parser;
use fs_err as fs;
use std::path::PathBuf;
use taupe_core::{Locale, Session, Theme, ThemeContext, next_language};
use taupe_dioxus::render_document;
use taupe_toml::{CONFIG_FILE_NAME, TaupeConfig};

/// Location of the configuration file.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Path to taupe.toml
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

/// Arguments for the render command.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Locale to render, overriding the configuration (e.g. "fr", "en-US").
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Theme to render, overriding the configuration ("light" or "dark").
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Write the document to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> Result<(), CliError> {
    let config = TaupeConfig::read_or_default(&args.config.config)?;

    let locale = match args.locale {
        Some(locale) => locale,
        None => config.locale()?,
    };
    let theme = match args.theme {
        Some(theme) => theme,
        None => config.theme()?,
    };

    let session = Session::builder().locale(locale).theme(theme).build()?;
    let html = render_document(&session, config.title());

    match args.output {
        Some(path) => {
            fs::write(&path, html)?;
            tracing::info!(path = %path.display(), %locale, %theme, "Rendered page");
        },
        None => println!("{}", html),
    }

    Ok(())
}

/// Run the toggle-theme command.
pub fn run_toggle_theme(args: ConfigArgs) -> Result<(), CliError> {
    let mut config = TaupeConfig::read_or_default(&args.config)?;

    let context = ThemeContext::new(config.theme()?);
    let theme = context.toggle_theme();

    config.set_theme(theme);
    config.write_to_path(&args.config)?;

    println!("{}", theme);
    Ok(())
}

/// Run the next-language command.
pub fn run_next_language(args: ConfigArgs) -> Result<(), CliError> {
    let mut config = TaupeConfig::read_or_default(&args.config)?;

    let locale = next_language(config.locale()?);

    config.set_locale(locale);
    config.write_to_path(&args.config)?;

    println!("{}", locale);
    Ok(())
}
