//! Formatting utilities for terminal output

use crate::core::Pattern;
use crate::solver::SearchPlan;

/// Listings longer than this are cut short
pub const LISTING_LIMIT: usize = 50;

/// Words shown when a listing is cut short
pub const LISTING_PREVIEW: usize = 20;

/// Scores are shown with one decimal
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

/// `Phase = huge (depth 1, sample 1000)`
#[must_use]
pub fn phase_line(plan: &SearchPlan) -> String {
    let guesses = plan
        .sample
        .map_or_else(|| "all guesses".to_string(), |n| format!("sample {n}"));
    format!("Phase = {} (depth {}, {guesses})", plan.phase, plan.depth)
}

/// `2 green, 1 yellow`
#[must_use]
pub fn feedback_tally(pattern: Pattern) -> String {
    format!(
        "{} green, {} yellow",
        pattern.count_greens(),
        pattern.count_yellows()
    )
}

/// Words to print, and whether the listing was cut short
///
/// Up to `LISTING_LIMIT` words are shown in full; longer listings show the
/// first `LISTING_PREVIEW`.
#[must_use]
pub fn capped_listing<'a, S: AsRef<str>>(words: &'a [S]) -> (Vec<&'a str>, bool) {
    let truncated = words.len() > LISTING_LIMIT;
    let shown = if truncated { LISTING_PREVIEW } else { words.len() };
    (words[..shown].iter().map(AsRef::as_ref).collect(), truncated)
}
