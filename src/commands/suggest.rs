//! One-shot suggestion command
//!
//! Replays a guess history, applies banned letters and ranks the remaining
//! pool with the phase-selected search.

use crate::core::Pattern;
use crate::error::SolveError;
use crate::input::{parse_history_token, parse_letter_set};
use crate::solver::{Constraint, PoolStatus, Recommendation, Session};

/// Result of a suggestion run
#[derive(Debug, Clone)]
pub struct SuggestResult {
    /// Guesses replayed, in order
    pub history: Vec<(String, Pattern)>,
    pub status: PoolStatus,
    pub pool: Vec<String>,
    pub recommendation: Recommendation,
}

/// Replay `history` tokens (`CRANE:wwywg`) and rank the remaining pool
///
/// # Errors
/// - `SolveError::Input` for a malformed token or a guess not in the word list
/// - `SolveError::EmptyPool` if the history leaves no candidates
pub fn run_suggest(
    session: &mut Session,
    history: &[String],
    banned: &str,
) -> Result<SuggestResult, SolveError> {
    let mut replayed = Vec::with_capacity(history.len());
    for token in history {
        let (word, pattern) = parse_history_token(token)?;
        session.play(&word, pattern)?;
        replayed.push((word, pattern));
    }

    let banned = parse_letter_set(banned);
    if !banned.is_empty() {
        session.apply(vec![Constraint::Banned(banned)]);
    }

    let recommendation = session.recommend()?;
    Ok(SuggestResult {
        history: replayed,
        status: session.status(),
        pool: session.pool_words().into_iter().map(str::to_string).collect(),
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordList;
    use crate::error::InputError;
    use crate::solver::SolverConfig;

    fn session() -> Session {
        let words = WordList::from_strs(&[
            "crane", "slate", "trace", "grade", "plate", "puzzy", "speed",
        ])
        .unwrap();
        Session::new(words, SolverConfig::default())
    }

    #[test]
    fn replays_history_then_ranks() {
        let mut session = session();
        let result = run_suggest(&mut session, &["crane:wwgwg".to_string()], "").unwrap();

        assert_eq!(result.history.len(), 1);
        for word in &result.pool {
            assert_eq!(word.as_bytes()[2], b'a');
        }
        assert_eq!(result.recommendation.pool_size, result.pool.len());
        assert!(!result.recommendation.guesses.is_empty());
    }

    #[test]
    fn banned_letters_narrow_pool() {
        let mut session = session();
        let result = run_suggest(&mut session, &[], "xyz").unwrap();

        assert!(!result.pool.contains(&"puzzy".to_string()));
        assert_eq!(result.pool.len(), 6);
    }

    #[test]
    fn solved_history_reports_solved() {
        let mut session = session();
        let result = run_suggest(&mut session, &["CRANE:ggggg".to_string()], "").unwrap();

        assert_eq!(result.status, PoolStatus::Solved);
        assert_eq!(result.pool, vec!["crane"]);
    }

    #[test]
    fn bad_tokens_fail() {
        let mut session = session();
        assert!(matches!(
            run_suggest(&mut session, &["crane-wwwww".to_string()], ""),
            Err(SolveError::Input(InputError::Malformed { .. }))
        ));
        assert!(matches!(
            run_suggest(&mut session, &["zzzzz:wwwww".to_string()], ""),
            Err(SolveError::Input(InputError::UnknownWord(_)))
        ));
    }

    #[test]
    fn contradictory_history_empties_pool() {
        let mut session = session();
        assert_eq!(
            run_suggest(&mut session, &["crane:gwwww".to_string()], "").unwrap_err(),
            SolveError::EmptyPool
        );
    }
}
