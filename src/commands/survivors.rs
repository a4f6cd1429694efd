//! Survivor table for a known answer
//!
//! Given the answer, ranks every pool word by how many candidates would
//! survive playing it. The table also shows how many letters each guess
//! leaves unexplored and the survivors × unused product.

use crate::core::{LetterSet, Word};
use crate::error::{InputError, SolveError};
use crate::input::{or_unconstrained, parse_letter_counts, parse_letter_set, parse_positions};
use crate::solver::{Constraint, Placement, RankedGuess, Session, SurvivorReport};

/// Rows shown in the survivor table
pub const SURVIVOR_ROWS: usize = 30;

/// Auxiliary constraints for the survivors command, as typed
#[derive(Debug, Clone, Default)]
pub struct SurvivorsQuery {
    pub answer: String,
    pub positions: String,
    pub greys: String,
    pub exact: String,
    pub min: String,
}

/// Result of a survivors run
#[derive(Debug, Clone)]
pub struct SurvivorsResult {
    pub answer: String,
    pub pool_size: usize,
    pub rows: Vec<(RankedGuess, SurvivorReport)>,
}

/// Build the survivor table for `query.answer`
///
/// Malformed auxiliary constraints are reported and ignored.
///
/// # Errors
/// - `SolveError::Input` if the answer is not a 5-letter word
/// - `SolveError::EmptyPool` if the constraints leave no candidates
pub fn run_survivors(session: &mut Session, query: &SurvivorsQuery) -> Result<SurvivorsResult, SolveError> {
    let answer = Word::new(query.answer.trim())
        .map_err(|source| InputError::invalid_word(&query.answer, source))?;

    let positions = or_unconstrained(parse_positions(&query.positions), "position");
    let greys = parse_letter_set(&query.greys);
    let exact = or_unconstrained(parse_letter_counts(&query.exact), "exact count");
    let min = or_unconstrained(parse_letter_counts(&query.min), "minimum count");

    let known: LetterSet = positions
        .iter()
        .map(|rule| rule.letter())
        .chain(greys.iter())
        .collect();
    let placed = |placement: Placement| -> LetterSet {
        positions
            .iter()
            .filter(|rule| rule.placement() == placement)
            .map(|rule| rule.letter())
            .collect()
    };
    // A `-` rule means the letter is in the word, just not there
    let greens = placed(Placement::Must);
    let yellows = placed(Placement::MustNot);

    let constraints: Vec<Constraint> = [
        Constraint::Positions(positions),
        Constraint::Required(yellows),
        Constraint::Banned(greys.difference(greens.union(yellows))),
        Constraint::ExactCounts(exact),
        Constraint::MinCounts(min),
    ]
    .into_iter()
    .filter(|c| !c.is_trivial())
    .collect();
    if !constraints.is_empty() {
        session.apply(constraints);
    }

    let rows = session.exact_survivors(&answer, known, SURVIVOR_ROWS)?;
    Ok(SurvivorsResult {
        answer: answer.text().to_string(),
        pool_size: session.pool().len(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use crate::solver::SolverConfig;

    fn session() -> Session {
        let words = WordList::from_strs(&[
            "crane", "slate", "trace", "grade", "plate", "puzzy", "speed", "erase",
        ])
        .unwrap();
        Session::new(words, SolverConfig::default())
    }

    fn query(answer: &str) -> SurvivorsQuery {
        SurvivorsQuery {
            answer: answer.to_string(),
            ..SurvivorsQuery::default()
        }
    }

    #[test]
    fn table_is_sorted_by_survivors() {
        let mut session = session();
        let result = run_survivors(&mut session, &query("slate")).unwrap();

        assert_eq!(result.answer, "slate");
        assert_eq!(result.pool_size, 8);
        assert_eq!(result.rows.len(), 8);
        assert!(
            result
                .rows
                .windows(2)
                .all(|w| w[0].1.survivors >= w[1].1.survivors)
        );
    }

    #[test]
    fn greys_narrow_pool_and_count_as_known() {
        let mut session = session();
        let q = SurvivorsQuery {
            greys: "z".to_string(),
            ..query("slate")
        };
        let result = run_survivors(&mut session, &q).unwrap();

        assert_eq!(result.pool_size, 7);
        let (guess, report) = &result.rows[0];
        let letters = session.words().word(guess.index).letters();
        assert_eq!(report.unused_letters, 26 - letters.union(LetterSet::from_letters("z")).len());
    }

    #[test]
    fn excluded_position_requires_the_letter() {
        let words = WordList::from_strs(&["slate", "crane", "pious"]).unwrap();
        let mut session = Session::new(words, SolverConfig::default());
        let q = SurvivorsQuery {
            positions: "0l-".to_string(),
            ..query("slate")
        };
        let result = run_survivors(&mut session, &q).unwrap();

        assert_eq!(result.pool_size, 1);
        assert_eq!(session.pool_words(), vec!["slate"]);
    }

    #[test]
    fn greys_do_not_ban_placed_letters() {
        let words = WordList::from_strs(&["sassy", "slate", "crane", "stash"]).unwrap();
        let mut session = Session::new(words, SolverConfig::default());
        let q = SurvivorsQuery {
            positions: "0s+".to_string(),
            greys: "s".to_string(),
            ..query("slate")
        };
        let result = run_survivors(&mut session, &q).unwrap();

        assert_eq!(session.pool_words(), vec!["sassy", "slate", "stash"]);
        assert_eq!(result.rows.len(), 3);
    }

    #[test]
    fn malformed_auxiliary_input_is_ignored() {
        let mut session = session();
        let q = SurvivorsQuery {
            exact: "a?".to_string(),
            positions: "9z+".to_string(),
            ..query("crane")
        };
        let result = run_survivors(&mut session, &q).unwrap();
        assert_eq!(result.pool_size, 8);
    }

    #[test]
    fn invalid_answer_fails() {
        let mut session = session();
        assert!(matches!(
            run_survivors(&mut session, &query("cranes")),
            Err(SolveError::Input(InputError::InvalidWord { .. }))
        ));
    }
}
