//! Wordle Filter - CLI
//!
//! Filters a five-letter dictionary by grey, green and orange letters, either
//! interactively (TUI) or in one shot.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use wordle_filter::{
    commands::{FilterRequest, GreenPattern, OrangeSpec, run_filter},
    config::SourceConfig,
    logging,
    output::print_filter_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Narrow down Wordle candidates from grey, green and orange letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    source: SourceConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Filter once and print the remaining words
    Filter {
        /// Letters not in the word, e.g. "qxz"
        #[arg(short = 'x', long, default_value = "")]
        grey: String,

        /// Known letters by position, '-' for unknown, e.g. "a---e"
        #[arg(short, long, default_value = "-----")]
        green: GreenPattern,

        /// Letters in the word but not at POSITION (0-4), e.g. "0=t" (repeatable)
        #[arg(short, long)]
        orange: Vec<OrangeSpec>,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let runtime = tokio::runtime::Runtime::new()?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(cli.source, &runtime),
        Commands::Filter {
            grey,
            green,
            orange,
            limit,
        } => {
            let request = FilterRequest {
                grey,
                green,
                orange,
            };
            run_filter_command(cli.source, &request, limit, &runtime)
        }
    }
}

fn run_filter_command(
    config: SourceConfig,
    request: &FilterRequest,
    limit: Option<usize>,
    runtime: &tokio::runtime::Runtime,
) -> Result<()> {
    logging::init(LevelFilter::WARN);

    let source = config.into_source()?;
    let origin = source.describe();
    let result = runtime.block_on(run_filter(&source, &origin, request))?;

    print_filter_result(&result, limit);
    Ok(())
}

fn run_play_command(config: SourceConfig, runtime: &tokio::runtime::Runtime) -> Result<()> {
    use wordle_filter::interactive::{App, run_tui};

    // Log output would corrupt the alternate screen unless explicitly requested
    logging::init(LevelFilter::OFF);

    let app = App::new(config.into_source()?, runtime.handle().clone());
    run_tui(app)
}
