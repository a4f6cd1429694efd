//! Classic Wordle helper
//!
//! A short prompt loop for ordinary Wordle: after each guess the player types
//! the green mask, the wrong-spot letters and the newly ruled-out letters,
//! and gets back how many words remain and the first few of them.

use crate::error::InputError;
use crate::input::{parse_green_mask, parse_letter_set, parse_wrong_spots};
use crate::output::{print_candidates, print_helper_state};
use crate::solver::{PoolStatus, Session};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Rounds the helper runs; after the last guess there is nothing left to help with
pub const HELPER_ROUNDS: usize = 5;

/// Words listed after each round
pub const HELPER_LISTING: usize = 50;

/// Run the helper until the word is found, the rounds run out, or `quit`
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_helper<R: BufRead>(session: &mut Session, input: &mut R) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle Helper - Classic                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("After each guess, enter:");
    println!("  - Greens as a mask with dots for unknowns, e.g. app..");
    println!("  - Yellows as the positions (1-5) each letter is not in, e.g. 13a,43x");
    println!("  - Letters newly ruled out, e.g. gruea");
    println!("  - Leave a line empty if there is nothing to enter\n");
    println!("Type 'quit' at any prompt to exit\n");

    for round in 1..=HELPER_ROUNDS {
        match session.status() {
            PoolStatus::Solved => {
                println!("🎉 Congratulations! It looks like you won!\n");
                return Ok(());
            }
            PoolStatus::Empty => {
                println!("❌ No words remain; a hint may have been entered wrong.\n");
                return Ok(());
            }
            PoolStatus::Narrow(_) | PoolStatus::Open(_) => {}
        }

        println!("{}", format!("After guess {round}").bright_cyan().bold());
        let Some(mut hints) = ask(input, "Greens", parse_green_mask)? else {
            return Ok(());
        };
        let Some(yellows) = ask(input, "Yellows", parse_wrong_spots)? else {
            return Ok(());
        };
        let Some(greys) = ask(input, "Ruled out", |text| Ok(parse_letter_set(text)))? else {
            return Ok(());
        };
        hints.merge(&yellows);
        hints.add_greys(greys);

        session.apply_hints(&hints);
        print_helper_state(session.hints());
        print_candidates(&session.pool_words(), HELPER_LISTING);
    }

    if session.status() == PoolStatus::Solved {
        println!("🎉 Congratulations! It looks like you won!\n");
    }
    Ok(())
}

/// Prompt until `parse` accepts the line; `None` at end of input or on `quit`
fn ask<R, T, F>(input: &mut R, label: &str, parse: F) -> io::Result<Option<T>>
where
    R: BufRead,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        print!("{label}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Good luck!\n");
            return Ok(None);
        }
        match parse(line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => println!("{} {e}\n", "Invalid input:".red()),
        }
    }
}
