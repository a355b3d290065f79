//! Hangman - CLI
//!
//! Terminal Hangman with TUI and simple CLI modes, plus an automated
//! simulation harness.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{GuessPolicy, run_simple, run_simulation},
    core::Word,
    output::print_simulation_result,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal Hangman with TUI and CLI modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file (one word per line)
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for word selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text, no TUI)
    Simple,

    /// Play many automated rounds and print statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Guesser policy: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        policy: String,
    },
}

/// Load the word list based on the -w flag
fn load_wordlist(mode: &str) -> Result<Vec<Word>> {
    match mode {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, seed),
        Commands::Simple => run_simple_command(&words, seed),
        Commands::Simulate { count, policy } => run_simulate_command(&words, count, &policy, seed),
    }
}

fn run_play_command(words: &[Word], seed: u64) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(words, StdRng::seed_from_u64(seed)).map_err(|e| anyhow::anyhow!(e))?;
    run_tui(app)
}

fn run_simple_command(words: &[Word], seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    run_simple(words, &mut rng).map_err(|e| anyhow::anyhow!(e))
}

fn run_simulate_command(words: &[Word], count: usize, policy: &str, seed: u64) -> Result<()> {
    let policy = GuessPolicy::from_name(policy);
    println!("Simulating {count} rounds with the {policy:?} policy (seed {seed})...");

    let result = run_simulation(words, count, policy, seed).map_err(|e| anyhow::anyhow!(e))?;
    print_simulation_result(&result);
    Ok(())
}
