//! Guess scoring
//!
//! Every score here measures how many candidates a guess tends to leave
//! behind. Which end of the scale is "good" depends on the game: a Wordle
//! player minimizes, a Don't Wordle player maximizes. That choice is the
//! [`Objective`].

use super::cache::Patterns;
use super::partition::{bucket_sizes, partition};
use crate::core::{LetterSet, Pattern, Word, WordList};
use crate::error::{InputError, SolveError};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Which direction of score is better
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Objective {
    /// Smaller pools are better (classic Wordle)
    Minimize,
    /// Larger pools are better (Don't Wordle)
    #[default]
    Maximize,
}

impl Objective {
    /// Order two scores so that the better one comes first
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Self::Minimize => a.total_cmp(&b),
            Self::Maximize => b.total_cmp(&a),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Objective {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minimize" => Ok(Self::Minimize),
            "max" | "maximize" => Ok(Self::Maximize),
            _ => Err(InputError::malformed(s, "maximize or minimize")),
        }
    }
}

/// Pick `k` items of `items` uniformly at random, keeping their original order
pub(crate) fn sample_in_order<R: Rng + ?Sized>(rng: &mut R, items: &[usize], k: usize) -> Vec<usize> {
    if k >= items.len() {
        return items.to_vec();
    }
    let mut picked = rand::seq::index::sample(rng, items.len(), k).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| items[i]).collect()
}

fn expected_size_unchecked(patterns: Patterns<'_>, guess: usize, pool: &[usize]) -> f64 {
    let sizes = bucket_sizes(patterns, guess, pool);
    let sum_squares: u64 = sizes.iter().map(|&s| u64::from(s) * u64::from(s)).sum();
    sum_squares as f64 / pool.len() as f64
}

/// Expected pool size after playing `guess`, assuming every pool word is
/// equally likely to be the answer
///
/// Computed as Σ bucket² / |pool|, so it always lies in `[1, |pool|]`.
///
/// # Errors
/// Returns `SolveError::EmptyPool` if `pool` is empty.
///
/// # Examples
/// ```
/// use dont_wordle::core::WordList;
/// use dont_wordle::solver::{PatternCache, Patterns, expected_size};
///
/// let words = WordList::from_strs(&["crane", "slate", "trace"]).unwrap();
/// let cache = PatternCache::new(words.len());
/// let patterns = Patterns::new(&words, &cache);
///
/// // CRANE tells all three apart
/// let score = expected_size(patterns, 0, &words.all_indices()).unwrap();
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
pub fn expected_size(patterns: Patterns<'_>, guess: usize, pool: &[usize]) -> Result<f64, SolveError> {
    if pool.is_empty() {
        return Err(SolveError::EmptyPool);
    }
    Ok(expected_size_unchecked(patterns, guess, pool))
}

/// Two-guess look-ahead score
///
/// For each bucket `guess` would leave, the follow-up guess drawn from that
/// bucket with the largest depth-1 score over the bucket is assumed to be
/// played. When `bucket_sample` is set and a bucket is larger than it, only
/// a random sample of the bucket is tried as follow-ups. The result is
/// Σ |bucket| · largest follow-up score / |pool|, whatever the objective.
///
/// # Errors
/// Returns `SolveError::EmptyPool` if `pool` is empty.
pub fn lookahead<R: Rng + ?Sized>(
    patterns: Patterns<'_>,
    guess: usize,
    pool: &[usize],
    bucket_sample: Option<usize>,
    rng: &mut R,
) -> Result<f64, SolveError> {
    if pool.is_empty() {
        return Err(SolveError::EmptyPool);
    }

    let mut total = 0.0;
    for (_, bucket) in partition(patterns, guess, pool).iter() {
        let followups = match bucket_sample {
            Some(k) if k > 0 && bucket.len() > k => sample_in_order(rng, bucket, k),
            _ => bucket.to_vec(),
        };
        let worst = followups
            .iter()
            .map(|&second| expected_size_unchecked(patterns, second, bucket))
            .fold(0.0, f64::max);
        total += bucket.len() as f64 * worst;
    }
    Ok(total / pool.len() as f64)
}

/// Pool words that share no letter with `guess`, not counting letters in
/// `exempt`
///
/// A cheap stand-in for "how many words survive if every new letter comes
/// back grey". It ignores yellows and greens entirely.
#[must_use]
pub fn miss_survivors(words: &WordList, guess: usize, pool: &[usize], exempt: LetterSet) -> usize {
    let probe = words.word(guess).letters().difference(exempt);
    pool.iter()
        .filter(|&&w| !words.word(w).letters().intersects(probe))
        .count()
}

/// Outcome of playing a guess against a known answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurvivorReport {
    /// Pool words that give the same feedback as the answer
    pub survivors: usize,
    /// Letters neither in the guess nor already known
    pub unused_letters: usize,
    /// `survivors × unused_letters`
    pub score: usize,
}

/// Exact survivors of `guess` when the answer is known
#[must_use]
pub fn exact_survivors(
    patterns: Patterns<'_>,
    guess: usize,
    answer: &Word,
    pool: &[usize],
    known: LetterSet,
) -> SurvivorReport {
    let guess_word = patterns.words().word(guess);
    let observed = Pattern::calculate(guess_word, answer);
    let row = patterns.row(guess);
    let survivors = pool.iter().filter(|&&w| row[w] == observed).count();
    let unused_letters = 26 - guess_word.letters().union(known).len();

    SurvivorReport {
        survivors,
        unused_letters,
        score: survivors * unused_letters,
    }
}
