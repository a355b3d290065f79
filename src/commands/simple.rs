//! Simple interactive CLI mode
//!
//! Text-based hangman without the TUI.

use crate::core::{GuessKind, Outcome, Word};
use crate::engine::{GuessEngine, Session};
use crate::output::formatters::{
    gallows_frame, hit_letters, lives_display, miss_letters, spaced_mask,
};
use colored::Colorize;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Single letters are guesses; `new` abandons the round and `quit` exits.
///
/// # Errors
///
/// Returns an error if the word list is empty or reading user input fails.
pub fn run_simple(words: &[Word], rng: &mut StdRng) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Hangman - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word one letter at a time.");
    println!("Seven wrong guesses and the round is lost.\n");
    println!("Commands: 'quit' to exit, 'new' to abandon the round\n");

    let engine = GuessEngine::new(words);
    let mut session = Session::new();

    loop {
        let mut round = engine.start_round(rng).map_err(|e| e.to_string())?;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {}: the word has {} letters",
            session.rounds_played() + 1,
            round.word().len()
        );
        println!("────────────────────────────────────────────────────────────");

        while !round.is_over() {
            println!("\n{}", gallows_frame(round.misses()));
            println!("\nWord:  {}", spaced_mask(&round.masked()).bold());
            println!("Lives: {}", lives_display(round.misses()).red());

            let found = hit_letters(&round);
            if !found.is_empty() {
                println!("Found:  {}", found.green());
            }
            let missed = miss_letters(&round);
            if !missed.is_empty() {
                println!("Missed: {}", missed.red());
            }
            println!("Score: {}", session.score().to_string().bright_yellow());

            let input = get_user_input("\nGuess a letter")?.to_lowercase();

            match input.as_str() {
                "quit" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" => {
                    println!("\n🔄 Round abandoned.\n");
                    break;
                }
                _ => {}
            }

            let mut chars = input.chars();
            let (letter, rest) = (chars.next(), chars.next());
            let Some(letter) = letter else {
                println!("{}", "Type a letter, 'new', or 'quit'.".yellow());
                continue;
            };
            if rest.is_some() {
                println!("{}", "One letter at a time!".yellow());
                continue;
            }

            match round.apply_guess(letter) {
                Ok(report) => match report.kind {
                    GuessKind::Hit => {
                        println!("{}", format!("✓ '{letter}' is in the word!").green());
                    }
                    GuessKind::Miss => {
                        println!("{}", format!("✗ '{letter}' is not in the word.").red());
                    }
                    GuessKind::Repeat => {
                        println!("{}", format!("'{letter}' was already tried.").yellow());
                    }
                },
                Err(e) => {
                    println!("{}", e.to_string().yellow());
                }
            }
        }

        if round.is_over() {
            let summary = GuessEngine::summarize(&round);
            session.record(&summary);

            println!("\n{}", "═".repeat(60).bright_cyan());
            match summary.outcome {
                Outcome::Victory => {
                    println!("{}", "  🎉 You won!".bright_green().bold());
                    println!(
                        "  You managed to guess the word \"{}\"",
                        summary.word.to_uppercase().bright_white().bold()
                    );
                }
                Outcome::Failure => {
                    println!("{}", gallows_frame(round.misses()));
                    println!("{}", "  💀 Game over!".bright_red().bold());
                    println!(
                        "  You ran out of tries to guess the word \"{}\"",
                        summary.word.to_uppercase().bright_white().bold()
                    );
                }
                Outcome::InProgress => {}
            }
            println!(
                "  Score: {}  ({} won, {} lost)",
                session.score().to_string().bright_yellow().bold(),
                session.wins(),
                session.losses()
            );
            println!("{}", "═".repeat(60).bright_cyan());

            match get_user_input("\nPlay again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => println!("\n🔄 New round!\n"),
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
