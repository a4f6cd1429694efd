//! Outcome partitioning
//!
//! Splits a pool into buckets by the feedback pattern one guess would
//! produce against each word.

use super::cache::Patterns;
use crate::core::{NUM_PATTERNS, Pattern};

/// Pool words grouped by pattern for one guess
///
/// Buckets are non-empty, disjoint, cover the pool, are ordered by ascending
/// pattern code, and keep pool order inside each bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    buckets: Vec<(Pattern, Vec<usize>)>,
}

impl Partition {
    /// Number of non-empty buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets in ascending pattern order
    pub fn iter(&self) -> impl Iterator<Item = (Pattern, &[usize])> {
        self.buckets
            .iter()
            .map(|(pattern, words)| (*pattern, words.as_slice()))
    }

    /// Bucket for `pattern`, if any pool word produces it
    #[must_use]
    pub fn get(&self, pattern: Pattern) -> Option<&[usize]> {
        self.buckets
            .binary_search_by_key(&pattern, |(p, _)| *p)
            .ok()
            .map(|i| self.buckets[i].1.as_slice())
    }

    /// Total number of words across all buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, words)| words.len()).sum()
    }
}

/// Group `pool` by the pattern `guess` produces against each word
#[must_use]
pub fn partition(patterns: Patterns<'_>, guess: usize, pool: &[usize]) -> Partition {
    let row = patterns.row(guess);
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); NUM_PATTERNS];
    for &word in pool {
        buckets[row[word].value() as usize].push(word);
    }

    Partition {
        buckets: buckets
            .into_iter()
            .enumerate()
            .filter(|(_, words)| !words.is_empty())
            .map(|(code, words)| (Pattern::new(code as u8), words))
            .collect(),
    }
}

/// Per-pattern bucket sizes without materializing the buckets
#[must_use]
pub fn bucket_sizes(patterns: Patterns<'_>, guess: usize, pool: &[usize]) -> [u32; NUM_PATTERNS] {
    let row = patterns.row(guess);
    let mut sizes = [0u32; NUM_PATTERNS];
    for &word in pool {
        sizes[row[word].value() as usize] += 1;
    }
    sizes
}
