//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Grey (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. This encoding is stable and
//! safe to persist.

use super::{WORD_LEN, Word};
use crate::error::InputError;
use std::fmt;

/// Number of distinct feedback patterns (3^5)
pub const NUM_PATTERNS: usize = 243;

/// Feedback pattern for a Wordle guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All greys
    pub const MISS: Self = Self(0);

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Pack per-position digits (least-significant position first)
    #[must_use]
    pub fn from_digits(digits: [u8; WORD_LEN]) -> Self {
        Self::new(digits.iter().rev().fold(0, |code, &digit| code * 3 + digit))
    }

    /// Per-position digits, position 0 first
    #[must_use]
    pub fn digits(self) -> [u8; WORD_LEN] {
        let mut digits = [0u8; WORD_LEN];
        let mut val = self.0;
        for digit in &mut digits {
            *digit = val % 3;
            val /= 3;
        }
        digits
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// Follows Wordle's feedback rules exactly, including repeated letters:
    /// 1. Greens: every exact position match, consuming that target position
    /// 2. Yellows: for each remaining guess letter, the leftmost unconsumed
    ///    target position holding the same letter is consumed
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use dont_wordle::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    ///
    /// // C(grey) R(grey) A(green) N(grey) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(Pattern::calculate(&guess, &target).value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.chars();
        let target = target.chars();
        let mut digits = [0u8; WORD_LEN];
        let mut consumed = [false; WORD_LEN];

        for (i, (g, t)) in guess.iter().zip(target).enumerate() {
            if g == t {
                digits[i] = 2;
                consumed[i] = true;
            }
        }

        for (i, &letter) in guess.iter().enumerate() {
            if digits[i] == 2 {
                continue;
            }
            if let Some(j) = (0..WORD_LEN).find(|&j| !consumed[j] && target[j] == letter) {
                digits[i] = 1;
                consumed[j] = true;
            }
        }

        Self::from_digits(digits)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.digits().iter().filter(|&&d| d == 2).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.digits().iter().filter(|&&d| d == 1).count()
    }

    /// Parse a feedback string like "wwywg" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - 'W'/'w'/'B'/'b'/'-'/'_'/⬜/⬛ for grey
    ///
    /// # Examples
    /// ```
    /// use dont_wordle::core::Pattern;
    ///
    /// let p1 = Pattern::from_feedback("gyWgy").unwrap();
    /// let p2 = Pattern::from_feedback("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn from_feedback(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LEN {
            return None;
        }

        let mut digits = [0u8; WORD_LEN];
        for (digit, ch) in digits.iter_mut().zip(chars) {
            *digit = match ch {
                'G' | 'g' | '🟩' => 2,
                'Y' | 'y' | '🟨' => 1,
                'W' | 'w' | 'B' | 'b' | '-' | '_' | '⬜' | '⬛' => 0,
                _ => return None,
            };
        }

        Some(Self::from_digits(digits))
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.digits()
            .iter()
            .map(|digit| match digit {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}

/// Renders as g/y/w letters, the same alphabet the parser accepts
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            let ch = match digit {
                2 => 'g',
                1 => 'y',
                _ => 'w',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_feedback(s).ok_or_else(|| InputError::InvalidPattern(s.to_string()))
    }
}
