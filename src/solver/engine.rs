//! Solving session
//!
//! Owns the word list, pattern cache and candidate pool, and coordinates
//! filtering, undo and ranking.

use super::cache::{PatternCache, Patterns};
use super::filter::{Constraint, filter};
use super::hints::Hints;
use super::phase::{PhaseSelector, SearchPlan};
use super::ranking::{RankRequest, RankedGuess, Ranker, ScoringPolicy};
use super::scoring::{Objective, SurvivorReport, exact_survivors};
use crate::core::{LetterSet, Pattern, Word, WordList};
use crate::error::{InputError, SolveError};
use log::{debug, info};

/// Pools at or below this size are listed in full and flagged as narrow
pub const NARROW_POOL: usize = 10;

/// Search settings for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub phases: PhaseSelector,
    pub objective: Objective,
    /// Sample this many follow-up guesses per bucket in depth-2 search
    pub bucket_sample: Option<usize>,
    /// Suggestions returned by `recommend`
    pub top_n: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            phases: PhaseSelector::default(),
            objective: Objective::default(),
            bucket_sample: None,
            top_n: 20,
            seed: 0,
            show_progress: false,
        }
    }
}

/// Informational state of the candidate pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolStatus {
    /// No candidate is consistent with the constraints
    Empty,
    /// Exactly one candidate remains
    Solved,
    /// Few candidates remain
    Narrow(usize),
    Open(usize),
}

impl PoolStatus {
    #[must_use]
    pub const fn of(pool_size: usize) -> Self {
        match pool_size {
            0 => Self::Empty,
            1 => Self::Solved,
            n if n <= NARROW_POOL => Self::Narrow(n),
            n => Self::Open(n),
        }
    }
}

/// Ranked suggestions for the current pool
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub plan: SearchPlan,
    pub pool_size: usize,
    pub guesses: Vec<RankedGuess>,
}

/// State restored by `undo`
#[derive(Debug, Clone)]
struct Snapshot {
    constraints: usize,
    hints: Hints,
    pool: Vec<usize>,
}

/// A solving session over one word list
///
/// The pool only ever shrinks while constraints are applied; `undo` and
/// `reset` restore an earlier pool rather than growing the current one.
#[derive(Debug)]
pub struct Session {
    words: WordList,
    cache: PatternCache,
    config: SolverConfig,
    constraints: Vec<Constraint>,
    hints: Hints,
    pool: Vec<usize>,
    undo_stack: Vec<Snapshot>,
}

impl Session {
    #[must_use]
    pub fn new(words: WordList, config: SolverConfig) -> Self {
        let cache = PatternCache::new(words.len());
        let pool = words.all_indices();
        info!("session started with {} words", words.len());
        Self {
            words,
            cache,
            config,
            constraints: Vec::new(),
            hints: Hints::new(),
            pool,
            undo_stack: Vec::new(),
        }
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn patterns(&self) -> Patterns<'_> {
        Patterns::new(&self.words, &self.cache)
    }

    #[must_use]
    pub fn pool(&self) -> &[usize] {
        &self.pool
    }

    #[must_use]
    pub fn pool_words(&self) -> Vec<&str> {
        self.words.texts(&self.pool)
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Board feedback accumulated through `apply_hints`
    #[must_use]
    pub const fn hints(&self) -> &Hints {
        &self.hints
    }

    #[must_use]
    pub fn status(&self) -> PoolStatus {
        PoolStatus::of(self.pool.len())
    }

    /// Number of rounds that can be undone
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.undo_stack.len()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            constraints: self.constraints.len(),
            hints: self.hints.clone(),
            pool: self.pool.clone(),
        }
    }

    /// Narrow the pool by one round of constraints
    pub fn apply(&mut self, constraints: Vec<Constraint>) -> PoolStatus {
        self.undo_stack.push(self.snapshot());
        self.narrow(constraints)
    }

    fn narrow(&mut self, constraints: Vec<Constraint>) -> PoolStatus {
        let before = self.pool.len();
        self.pool = filter(self.patterns(), &self.pool, &constraints);
        for constraint in &constraints {
            debug!("applied {constraint}");
        }
        info!("pool narrowed from {before} to {}", self.pool.len());
        self.constraints.extend(constraints);
        self.status()
    }

    /// Record that `guess` was played and produced `pattern`
    ///
    /// # Errors
    /// Returns an `InputError` if `guess` is not a word in the list; the
    /// session is left unchanged.
    pub fn play(&mut self, guess: &str, pattern: Pattern) -> Result<PoolStatus, InputError> {
        let constraint = Constraint::played(&self.words, guess, pattern)?;
        Ok(self.apply(vec![constraint]))
    }

    /// Fold one round of board feedback into the session and narrow the pool
    pub fn apply_hints(&mut self, round: &Hints) -> PoolStatus {
        self.undo_stack.push(self.snapshot());
        self.hints.merge(round);
        let constraints = self.hints.constraints();
        self.narrow(constraints)
    }

    /// Restore the state before the last round; false if there is none
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.constraints.truncate(snapshot.constraints);
        self.hints = snapshot.hints;
        self.pool = snapshot.pool;
        info!("undo: pool back to {}", self.pool.len());
        true
    }

    /// Start over with the full word list
    pub fn reset(&mut self) {
        self.constraints.clear();
        self.hints = Hints::new();
        self.pool = self.words.all_indices();
        self.undo_stack.clear();
        info!("session reset");
    }

    #[must_use]
    pub const fn ranker(&self) -> Ranker<'_> {
        Ranker::new(self.patterns(), self.config.seed).with_progress(self.config.show_progress)
    }

    /// Phase-selected ranking of the current pool
    ///
    /// # Errors
    /// Returns `SolveError::EmptyPool` if no candidates remain.
    pub fn recommend(&self) -> Result<Recommendation, SolveError> {
        if self.pool.is_empty() {
            return Err(SolveError::EmptyPool);
        }
        let plan = self.config.phases.plan(self.pool.len());
        debug!("pool {} → {:?}", self.pool.len(), plan);

        let request = RankRequest {
            policy: ScoringPolicy::for_depth(
                plan.depth,
                self.config.objective,
                self.config.bucket_sample,
            ),
            sample: plan.sample,
            top_n: self.config.top_n,
        };
        let guesses = self.ranker().rank(&self.pool, &request)?;

        Ok(Recommendation {
            plan,
            pool_size: self.pool.len(),
            guesses,
        })
    }

    /// Pool words ranked by how many words survive if all their new letters miss
    ///
    /// Letters already known green or yellow are not counted as new.
    ///
    /// # Errors
    /// Returns `SolveError::EmptyPool` if no candidates remain.
    pub fn miss_survivors(&self, top_n: usize) -> Result<Vec<RankedGuess>, SolveError> {
        let request = RankRequest {
            policy: ScoringPolicy::MissSurvivors {
                exempt: self.hints.known_letters(),
            },
            sample: None,
            top_n,
        };
        self.ranker().rank(&self.pool, &request)
    }

    /// Pool words ranked by exact survivors against a known answer
    ///
    /// # Errors
    /// Returns `SolveError::EmptyPool` if no candidates remain.
    pub fn exact_survivors(
        &self,
        answer: &Word,
        known: LetterSet,
        top_n: usize,
    ) -> Result<Vec<(RankedGuess, SurvivorReport)>, SolveError> {
        let request = RankRequest {
            policy: ScoringPolicy::ExactSurvivors {
                answer: answer.clone(),
                known,
            },
            sample: None,
            top_n,
        };
        let ranked = self.ranker().rank(&self.pool, &request)?;
        Ok(ranked
            .into_iter()
            .map(|guess| {
                let report = exact_survivors(self.patterns(), guess.index, answer, &self.pool, known);
                (guess, report)
            })
            .collect())
    }
}
