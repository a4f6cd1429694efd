//! Compact sets of lowercase ASCII letters
//!
//! Each letter a-z maps to one bit of a `u32`, so set algebra is a single
//! integer operation. Used for banned/required letters and the miss-only
//! survivor heuristic.

use std::fmt;

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a set from the letters of a string
    ///
    /// Input is lowercased; anything that is not an ASCII letter is ignored.
    ///
    /// # Examples
    /// ```
    /// use dont_wordle::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("XyZ 1");
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(b'x'));
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Self {
        text.bytes()
            .map(|b| b.to_ascii_lowercase())
            .filter(u8::is_ascii_lowercase)
            .collect()
    }

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }

    /// Insert a letter; non-letters are ignored
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.0 |= Self::bit(letter);
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True when every letter of `other` is in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
