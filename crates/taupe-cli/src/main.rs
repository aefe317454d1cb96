use clap::{ArgAction, Parser, Subcommand};
use miette::Result as MietteResult;
use taupe_cli::commands::{
    ConfigArgs, RenderArgs, run_next_language, run_render, run_toggle_theme,
};
use taupe_cli::logging::init_logging;

#[derive(Parser)]
#[command(name = "taupe")]
#[command(about = "Render the taupe page and flip its persisted theme and language")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the server-rendered HTML document
    Render(RenderArgs),

    /// Switch the persisted theme between light and dark
    ToggleTheme(ConfigArgs),

    /// Switch the persisted language between en and fr
    NextLanguage(ConfigArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::ToggleTheme(args) => run_toggle_theme(args),
        Commands::NextLanguage(args) => run_next_language(args),
    };

    result.map_err(miette::Report::new)
}
