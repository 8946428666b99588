//! Terminal Wordle - CLI
//!
//! Wordle in the terminal with TUI and plain CLI play modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_simple, run_stats},
    core::Word,
    stats::StatsStore,
    wordlists::{TARGETS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Where statistics are persisted
    #[arg(short = 's', long, global = true, default_value = "wordle_stats.json")]
    stats_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (no TUI, one guess per line)
    Simple,

    /// Show persisted statistics
    Stats,
}

/// Load target candidates based on the -w flag
fn load_targets(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "builtin" => words_from_slice(TARGETS),
        path => load_from_file(path).with_context(|| format!("reading wordlist {path}"))?,
    };

    anyhow::ensure!(
        !words.is_empty(),
        "wordlist '{wordlist_mode}' contains no valid 5-letter words"
    );

    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let targets = load_targets(&cli.wordlist)?;
    let store = StatsStore::new(&cli.stats_file);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(targets, store),
        Commands::Simple => run_simple(&targets, &store).map_err(|e| anyhow::anyhow!(e)),
        Commands::Stats => {
            run_stats(&store);
            Ok(())
        }
    }
}

fn run_play_command(targets: Vec<Word>, store: StatsStore) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(targets, store).context("candidate word list is empty")?;
    run_tui(app)
}
