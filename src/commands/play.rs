//! Interactive Don't Wordle mode
//!
//! Text prompt loop: each round the player enters green/yellow hints and
//! grey letters, and gets the remaining pool plus ranked suggestions back.

use crate::error::SolveError;
use crate::input::{parse_hints, parse_letter_set};
use crate::output::{print_pool_summary, print_ranked, print_recommendation};
use crate::solver::{PoolStatus, Session};
use colored::Colorize;
use log::warn;
use std::io::{self, BufRead, Write};

/// Rows in the miss-survivor table
pub const MISS_SURVIVOR_ROWS: usize = 30;

/// What the player typed at a prompt
enum Reply {
    Text(String),
    Quit,
    Undo,
    New,
}

/// Run the interactive loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_play<R: BufRead>(session: &mut Session, input: &mut R) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Don't Wordle - Interactive                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("After each guess, enter the hints you got:");
    println!("  - Green/yellow as g0a,y1b (g or y, position 0-4, letter)");
    println!("  - Then the grey letters, e.g. xyz");
    println!("  - Leave a line empty if there is nothing to enter\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last round\n");

    loop {
        show_round(session);

        if matches!(session.status(), PoolStatus::Empty | PoolStatus::Solved) {
            let Some(reply) = prompt(input, "Command (undo/new/quit)")? else {
                return Ok(());
            };
            if !handle_command(session, reply) {
                return Ok(());
            }
            continue;
        }

        let round = loop {
            match prompt(input, "Green/yellow hints")? {
                None => return Ok(()),
                Some(Reply::Text(text)) => match parse_hints(&text) {
                    Ok(hints) => break Some(hints),
                    Err(e) => println!("{} {e}\n", "Invalid hints:".red()),
                },
                Some(reply) => {
                    if !handle_command(session, reply) {
                        return Ok(());
                    }
                    break None;
                }
            }
        };
        let Some(mut round) = round else {
            continue;
        };

        match prompt(input, "Grey letters")? {
            None => return Ok(()),
            Some(Reply::Text(text)) => round.add_greys(parse_letter_set(&text)),
            Some(reply) => {
                if !handle_command(session, reply) {
                    return Ok(());
                }
                continue;
            }
        }

        session.apply_hints(&round);
    }
}

/// Print the pool and, when there is anything to rank, the suggestions
fn show_round(session: &Session) {
    println!("{}", "─".repeat(60).cyan());
    print_pool_summary(&session.pool_words());

    match session.status() {
        PoolStatus::Empty => {
            println!("\n❌ No words remain! A hint may have been entered wrong.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");
            return;
        }
        PoolStatus::Solved => {
            println!("\n🏁 Only one word left; the game is over.\n");
            return;
        }
        PoolStatus::Narrow(_) => {
            println!("{}", "⚠ Pool nearly exhausted".yellow());
        }
        PoolStatus::Open(_) => {}
    }

    match session.miss_survivors(MISS_SURVIVOR_ROWS) {
        Ok(ranked) => print_ranked("Words surviving an all-grey reply", &ranked),
        Err(e) => warn!("miss-survivor ranking failed: {e}"),
    }
    match session.recommend() {
        Ok(recommendation) => print_recommendation(&recommendation),
        Err(SolveError::EmptyPool) => {}
        Err(e) => warn!("ranking failed: {e}"),
    }
}

/// Apply a command reply; false means quit
fn handle_command(session: &mut Session, reply: Reply) -> bool {
    match reply {
        Reply::Quit => {
            println!("\n👋 Thanks for playing!\n");
            false
        }
        Reply::Undo => {
            if session.undo() {
                println!("✓ Undone! {} rounds played\n", session.rounds());
            } else {
                println!("Nothing to undo!\n");
            }
            true
        }
        Reply::New => {
            session.reset();
            println!("\n🔄 New game started!\n");
            true
        }
        Reply::Text(_) => true,
    }
}

/// Read one line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<Reply>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim();
    Ok(Some(match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Reply::Quit,
        "undo" | "u" => Reply::Undo,
        "new" | "n" => Reply::New,
        _ => Reply::Text(line.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use crate::solver::SolverConfig;
    use std::io::Cursor;

    fn session() -> Session {
        let words = WordList::from_strs(&["crane", "slate", "trace", "grade", "plate"]).unwrap();
        Session::new(words, SolverConfig::default())
    }

    fn play(session: &mut Session, script: &str) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        run_play(session, &mut input).unwrap();
    }

    #[test]
    fn round_narrows_pool() {
        let mut session = session();
        play(&mut session, "g4e\nc\nquit\n");

        assert_eq!(session.pool_words(), vec!["slate", "grade", "plate"]);
        assert_eq!(session.rounds(), 1);
    }

    #[test]
    fn invalid_hints_reprompt() {
        let mut session = session();
        play(&mut session, "g9e\ng4e\n\n");

        // The bad line is rejected, the good one applies with no greys
        assert_eq!(session.rounds(), 1);
        assert_eq!(session.pool().len(), 5);
        assert_eq!(session.hints().green_letters().to_string(), "e");
    }

    #[test]
    fn undo_and_new() {
        let mut session = session();
        play(&mut session, "\nc\n\nr\nundo\nquit\n");
        assert_eq!(session.rounds(), 1);
        assert_eq!(session.pool_words(), vec!["slate", "grade", "plate"]);

        play(&mut session, "new\nquit\n");
        assert_eq!(session.rounds(), 0);
        assert_eq!(session.pool().len(), 5);
    }

    #[test]
    fn empty_pool_offers_commands() {
        let mut session = session();
        play(&mut session, "\nae\nundo\nquit\n");
        assert_eq!(session.rounds(), 0);
        assert_eq!(session.pool().len(), 5);
    }

    #[test]
    fn end_of_input_stops() {
        let mut session = session();
        play(&mut session, "");
        assert_eq!(session.rounds(), 0);
    }
}
