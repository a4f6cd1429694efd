//! The active word list
//!
//! An ordered, deduplicated list of words. Everything downstream refers to
//! words by their dense index into this list.

use super::Word;
use crate::error::InputError;
use rustc_hash::FxHashMap;

/// Ordered collection of unique words with index ↔ text lookup
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl WordList {
    /// Build a word list, dropping repeated words (first occurrence wins)
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if list.index.contains_key(word.text()) {
                continue;
            }
            list.index.insert(word.text().to_string(), list.words.len());
            list.words.push(word);
        }
        list
    }

    /// Build a word list from string slices
    ///
    /// # Errors
    /// Returns `InputError::InvalidWord` for the first entry that is not a valid word.
    ///
    /// # Examples
    /// ```
    /// use dont_wordle::core::WordList;
    ///
    /// let list = WordList::from_strs(&["crane", "SLATE", "crane"]).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.index_of("slate"), Some(1));
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, InputError> {
        let words = words
            .iter()
            .map(|&text| Word::new(text).map_err(|source| InputError::invalid_word(text, source)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(words))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Index of a word, case-insensitively
    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.index.get(&text.trim().to_lowercase()).copied()
    }

    /// Index of a word that must be in the list
    ///
    /// # Errors
    /// - `InputError::InvalidWord` if `text` is not a 5-letter word
    /// - `InputError::UnknownWord` if it is valid but not in the list
    pub fn resolve(&self, text: &str) -> Result<usize, InputError> {
        let word = Word::new(text.trim()).map_err(|source| InputError::invalid_word(text, source))?;
        self.index_of(word.text())
            .ok_or_else(|| InputError::UnknownWord(word.text().to_string()))
    }

    /// Every index, in list order (the initial candidate pool)
    #[must_use]
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.words.len()).collect()
    }

    /// Texts for a set of indices, in the given order
    #[must_use]
    pub fn texts(&self, indices: &[usize]) -> Vec<&str> {
        indices.iter().map(|&i| self.words[i].text()).collect()
    }
}
