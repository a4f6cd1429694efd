//! Advanced word finder
//!
//! Applies letter and position filters one at a time over the whole word
//! list, recording how many words are left after each.

use crate::input::{or_unconstrained, parse_letter_counts, parse_letter_set, parse_positions};
use crate::solver::{Constraint, Session, filter};

/// Finder filters, as typed
#[derive(Debug, Clone, Default)]
pub struct FindQuery {
    pub required: String,
    pub banned: String,
    pub exact: String,
    pub min: String,
    pub positions: String,
}

/// Words remaining after one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterStep {
    pub constraint: Constraint,
    pub remaining: usize,
}

#[derive(Debug, Clone)]
pub struct FindResult {
    pub steps: Vec<FilterStep>,
    pub words: Vec<String>,
}

/// Run the finder over the session's full word list
///
/// Filters apply in the order required, banned, exact counts, minimum
/// counts, positions; empty ones are skipped. Malformed count or position
/// input is reported and ignored.
#[must_use]
pub fn run_find(session: &Session, query: &FindQuery) -> FindResult {
    let constraints = [
        Constraint::Required(parse_letter_set(&query.required)),
        Constraint::Banned(parse_letter_set(&query.banned)),
        Constraint::ExactCounts(or_unconstrained(parse_letter_counts(&query.exact), "exact count")),
        Constraint::MinCounts(or_unconstrained(parse_letter_counts(&query.min), "minimum count")),
        Constraint::Positions(or_unconstrained(parse_positions(&query.positions), "position")),
    ];

    let patterns = session.patterns();
    let mut pool = session.words().all_indices();
    let mut steps = Vec::new();
    for constraint in constraints.into_iter().filter(|c| !c.is_trivial()) {
        pool = filter(patterns, &pool, std::slice::from_ref(&constraint));
        steps.push(FilterStep {
            constraint,
            remaining: pool.len(),
        });
    }

    FindResult {
        steps,
        words: session
            .words()
            .texts(&pool)
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
