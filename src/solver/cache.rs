//! Lazily built pattern rows
//!
//! A row holds the feedback pattern of one guess against every word in the
//! word list, indexed by word index. Rows are computed on first request and
//! kept for the lifetime of the cache; the word list never changes after
//! load, so there is nothing to invalidate.

use crate::core::{Pattern, WordList};
use log::trace;
use std::sync::OnceLock;

/// Per-guess memoized pattern rows
///
/// Each row sits behind its own `OnceLock`: concurrent first requests for the
/// same guess compute it once while the others wait, and later reads take no
/// lock at all.
#[derive(Debug, Default)]
pub struct PatternCache {
    rows: Vec<OnceLock<Box<[Pattern]>>>,
}

impl PatternCache {
    /// Create an empty cache sized for a word list of `word_count` words
    #[must_use]
    pub fn new(word_count: usize) -> Self {
        Self {
            rows: (0..word_count).map(|_| OnceLock::new()).collect(),
        }
    }

    /// Pattern row for `guess` against every word in `words`
    ///
    /// # Panics
    /// Panics if `guess` is out of range or `words` is not the list the cache was sized for.
    pub fn row<'c>(&'c self, words: &WordList, guess: usize) -> &'c [Pattern] {
        assert_eq!(
            self.rows.len(),
            words.len(),
            "pattern cache used with a different word list"
        );
        self.rows[guess].get_or_init(|| {
            trace!("building pattern row for {}", words.word(guess));
            let guess = words.word(guess);
            words
                .words()
                .iter()
                .map(|target| Pattern::calculate(guess, target))
                .collect()
        })
    }

    /// Number of rows built so far
    #[must_use]
    pub fn cached_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.get().is_some()).count()
    }
}

/// A word list paired with its pattern cache
///
/// This is the read-only view every scoring and filtering routine works
/// against. It is `Copy`, so it can be handed to parallel workers freely.
#[derive(Debug, Clone, Copy)]
pub struct Patterns<'a> {
    words: &'a WordList,
    cache: &'a PatternCache,
}

impl<'a> Patterns<'a> {
    #[must_use]
    pub const fn new(words: &'a WordList, cache: &'a PatternCache) -> Self {
        Self { words, cache }
    }

    #[inline]
    #[must_use]
    pub const fn words(self) -> &'a WordList {
        self.words
    }

    #[inline]
    #[must_use]
    pub fn row(self, guess: usize) -> &'a [Pattern] {
        self.cache.row(self.words, guess)
    }

    /// Pattern of `guess` against `target`, both word indices
    #[inline]
    #[must_use]
    pub fn pattern(self, guess: usize, target: usize) -> Pattern {
        self.row(guess)[target]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rayon::prelude::*;

    fn words() -> WordList {
        WordList::from_strs(&["crane", "slate", "trace", "speed", "erase"]).unwrap()
    }

    #[test]
    fn row_matches_direct_calculation() {
        let words = words();
        let cache = PatternCache::new(words.len());
        let row = cache.row(&words, 3);

        assert_eq!(row.len(), words.len());
        for (target, &pattern) in words.words().iter().zip(row) {
            assert_eq!(pattern, Pattern::calculate(words.word(3), target));
        }
        assert_eq!(row[3], Pattern::PERFECT);
        assert_eq!(row[4].value(), 37);
    }

    #[test]
    fn rows_are_built_lazily_and_reused() {
        let words = words();
        let cache = PatternCache::new(words.len());
        assert_eq!(cache.cached_rows(), 0);

        let first = cache.row(&words, 0).as_ptr();
        assert_eq!(cache.cached_rows(), 1);

        let second = cache.row(&words, 0).as_ptr();
        assert_eq!(first, second);
        assert_eq!(cache.cached_rows(), 1);

        let _ = cache.row(&words, 2);
        assert_eq!(cache.cached_rows(), 2);
    }

    #[test]
    fn concurrent_requests_agree() {
        let words = words();
        let cache = PatternCache::new(words.len());
        let patterns = Patterns::new(&words, &cache);

        let rows: Vec<Vec<Pattern>> = (0..64)
            .into_par_iter()
            .map(|i| patterns.row(i % words.len()).to_vec())
            .collect();

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.as_slice(), patterns.row(i % words.len()));
        }
        assert_eq!(cache.cached_rows(), words.len());
    }

    #[test]
    fn pattern_lookup() {
        let words = words();
        let cache = PatternCache::new(words.len());
        let patterns = Patterns::new(&words, &cache);

        let expected = Pattern::calculate(
            &Word::new("crane").unwrap(),
            &Word::new("trace").unwrap(),
        );
        assert_eq!(patterns.pattern(0, 2), expected);
    }

    #[test]
    #[should_panic(expected = "different word list")]
    fn mismatched_word_list_panics() {
        let words = words();
        let cache = PatternCache::new(2);
        let _ = cache.row(&words, 0);
    }
}
