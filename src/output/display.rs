//! Display functions for command results

use super::formatters::{capped_listing, feedback_tally, format_score, phase_line};
use crate::commands::{FindResult, SuggestResult, SurvivorsResult};
use crate::solver::{Hints, NARROW_POOL, RankedGuess, Recommendation};
use colored::Colorize;

/// Print the pool size, and the words themselves when few remain
pub fn print_pool_summary<S: AsRef<str>>(words: &[S]) {
    println!(
        "Current valid words: {}",
        words.len().to_string().bright_yellow().bold()
    );
    if !words.is_empty() && words.len() <= NARROW_POOL {
        let listed: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        println!("Remaining words: {}", listed.join(", ").bright_white());
    }
}

/// Print a numbered list of scored guesses
pub fn print_ranked(title: &str, ranked: &[RankedGuess]) {
    println!("\n📊 {}", title.bright_cyan().bold());
    for (i, guess) in ranked.iter().enumerate() {
        println!(
            "  {:>2}. {}  {}",
            (i + 1).to_string().bright_black(),
            guess.word.to_uppercase().bright_white().bold(),
            format_score(guess.score).bright_yellow()
        );
    }
}

/// Print the phase line and ranked suggestions
pub fn print_recommendation(recommendation: &Recommendation) {
    println!("\n{}", phase_line(&recommendation.plan).cyan());
    print_ranked(
        &format!("Top {} guesses", recommendation.guesses.len()),
        &recommendation.guesses,
    );
}

/// Print the result of a suggestion run
pub fn print_suggest_result(result: &SuggestResult) {
    println!("\n{}", "─".repeat(60).cyan());
    for (word, pattern) in &result.history {
        println!(
            "  {} {}  {}",
            word.to_uppercase(),
            pattern.to_emoji(),
            feedback_tally(*pattern).bright_black()
        );
    }
    print_pool_summary(&result.pool);
    print_recommendation(&result.recommendation);
}

/// Print the exact-survivor table
pub fn print_survivors_result(result: &SurvivorsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SURVIVORS FOR".bright_cyan().bold(),
        result.answer.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("Pool: {} words\n", result.pool_size);

    println!("   Word    Survivors  Unused  Score");
    for (i, (guess, report)) in result.rows.iter().enumerate() {
        println!(
            "{:>2}. {}  {:>9}  {:>6}  {:>5}",
            i + 1,
            guess.word.to_uppercase().bright_white().bold(),
            report.survivors,
            report.unused_letters,
            report.score.to_string().bright_yellow()
        );
    }
}

/// Print the board as the classic helper understood it
pub fn print_helper_state(hints: &Hints) {
    println!("\nGreen positions: {}", hints.green_mask().bright_green().bold());
    println!("Ruled-out letters: {}", hints.greys().to_string().bright_black());
    println!("Wrong-spot letters: {}", hints.yellow_letters().to_string().yellow());
}

/// Print how many words remain and the first `limit` of them
pub fn print_candidates<S: AsRef<str>>(words: &[S], limit: usize) {
    println!("Note: the best next guess may not be one of the remaining words");
    println!(
        "There are only {} possible words left!",
        words.len().to_string().bright_yellow().bold()
    );
    let shown: Vec<&str> = words.iter().take(limit).map(AsRef::as_ref).collect();
    if !shown.is_empty() {
        println!("The first {} are:", shown.len());
        println!("{}\n", shown.join(", ").bright_white());
    }
}

/// Print finder steps and the capped word listing
pub fn print_find_result(result: &FindResult) {
    for step in &result.steps {
        println!("After {}: {} words", step.constraint, step.remaining);
    }
    println!(
        "\n{}",
        format!("FINAL RESULT: {} matching words", result.words.len())
            .green()
            .bold()
    );

    let (shown, truncated) = capped_listing(&result.words);
    if truncated {
        println!("\nToo many words to display. First {}:", shown.len());
    } else if !shown.is_empty() {
        println!("\nMatching words:");
    }
    for word in shown {
        println!("{word}");
    }
    if truncated {
        println!("...");
    }
}
