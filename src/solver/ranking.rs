//! Guess ranking
//!
//! Scores every guess in a pool (or a seeded sample of it) in parallel and
//! returns the best ones under the chosen policy.

use super::cache::Patterns;
use super::scoring::{
    Objective, exact_survivors, expected_size, lookahead, miss_survivors, sample_in_order,
};
use crate::core::{LetterSet, Word};
use crate::error::SolveError;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Guess counts below this never show a progress bar
const PROGRESS_MIN_GUESSES: usize = 100;

/// How a single guess is scored
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringPolicy {
    /// Depth-1 expected pool size
    ExpectedSize(Objective),
    /// Depth-2 look-ahead, optionally sampling follow-ups in large buckets;
    /// the objective only orders the results
    Lookahead {
        objective: Objective,
        bucket_sample: Option<usize>,
    },
    /// Words sharing no new letter with the guess; more is better
    MissSurvivors { exempt: LetterSet },
    /// Pool words giving the same feedback as a known answer; more is better
    ExactSurvivors { answer: Word, known: LetterSet },
}

impl ScoringPolicy {
    /// Expected-size policy for a search depth (1 or 2)
    #[must_use]
    pub const fn for_depth(depth: u8, objective: Objective, bucket_sample: Option<usize>) -> Self {
        if depth >= 2 {
            Self::Lookahead {
                objective,
                bucket_sample,
            }
        } else {
            Self::ExpectedSize(objective)
        }
    }

    /// Sort direction for this policy's scores
    #[must_use]
    pub const fn objective(&self) -> Objective {
        match self {
            Self::ExpectedSize(objective) | Self::Lookahead { objective, .. } => *objective,
            Self::MissSurvivors { .. } | Self::ExactSurvivors { .. } => Objective::Maximize,
        }
    }
}

/// What to rank and how many results to keep
#[derive(Debug, Clone, PartialEq)]
pub struct RankRequest {
    pub policy: ScoringPolicy,
    /// Score only a random sample of this many guesses when the pool is larger
    pub sample: Option<usize>,
    /// Number of results to return (0 keeps all)
    pub top_n: usize,
}

/// A scored guess
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub index: usize,
    pub word: String,
    pub score: f64,
}

/// Parallel guess ranker
///
/// Results are deterministic for a given seed regardless of thread count:
/// the guess sample is drawn from the seed, and each guess derives its own
/// look-ahead RNG from the seed and its word index.
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    patterns: Patterns<'a>,
    seed: u64,
    show_progress: bool,
}

impl<'a> Ranker<'a> {
    #[must_use]
    pub const fn new(patterns: Patterns<'a>, seed: u64) -> Self {
        Self {
            patterns,
            seed,
            show_progress: false,
        }
    }

    /// Show a progress bar for large rankings
    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Rank the guesses of `pool`, best first
    ///
    /// Ties keep pool order.
    ///
    /// # Errors
    /// Returns `SolveError::EmptyPool` if `pool` is empty.
    pub fn rank(&self, pool: &[usize], request: &RankRequest) -> Result<Vec<RankedGuess>, SolveError> {
        if pool.is_empty() {
            return Err(SolveError::EmptyPool);
        }

        let guesses = match request.sample {
            Some(k) if k > 0 && pool.len() > k => {
                let mut rng = StdRng::seed_from_u64(self.seed);
                sample_in_order(&mut rng, pool, k)
            }
            _ => pool.to_vec(),
        };
        debug!(
            "ranking {} of {} guesses with {:?}",
            guesses.len(),
            pool.len(),
            request.policy
        );

        let progress = self.progress_bar(guesses.len());
        let mut scored = guesses
            .par_iter()
            .progress_with(progress.clone())
            .map(|&guess| {
                self.score(&request.policy, guess, pool)
                    .map(|score| (guess, score))
            })
            .collect::<Result<Vec<_>, _>>()?;
        progress.finish_and_clear();

        let objective = request.policy.objective();
        scored.sort_by(|a, b| objective.compare(a.1, b.1));
        if request.top_n > 0 {
            scored.truncate(request.top_n);
        }

        let words = self.patterns.words();
        Ok(scored
            .into_iter()
            .map(|(index, score)| RankedGuess {
                index,
                word: words.word(index).text().to_string(),
                score,
            })
            .collect())
    }

    /// Score one guess against `pool`
    ///
    /// # Errors
    /// Returns `SolveError::EmptyPool` if `pool` is empty.
    pub fn score(&self, policy: &ScoringPolicy, guess: usize, pool: &[usize]) -> Result<f64, SolveError> {
        if pool.is_empty() {
            return Err(SolveError::EmptyPool);
        }
        match policy {
            ScoringPolicy::ExpectedSize(_) => expected_size(self.patterns, guess, pool),
            ScoringPolicy::Lookahead { bucket_sample, .. } => {
                let mut rng = StdRng::seed_from_u64(self.guess_seed(guess));
                lookahead(self.patterns, guess, pool, *bucket_sample, &mut rng)
            }
            ScoringPolicy::MissSurvivors { exempt } => {
                Ok(miss_survivors(self.patterns.words(), guess, pool, *exempt) as f64)
            }
            ScoringPolicy::ExactSurvivors { answer, known } => {
                Ok(exact_survivors(self.patterns, guess, answer, pool, *known).survivors as f64)
            }
        }
    }

    /// Per-guess RNG seed, independent of evaluation order
    const fn guess_seed(&self, guess: usize) -> u64 {
        self.seed ^ (guess as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress || len < PROGRESS_MIN_GUESSES {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░")),
        );
        pb.set_message("scoring guesses");
        pb
    }
}
