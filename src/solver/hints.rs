//! Don't Wordle board state
//!
//! Tracks greens, yellows and greys as the player reports them and compiles
//! them into filter constraints.

use super::filter::{Constraint, Placement, PositionRule};
use crate::core::{LetterSet, WORD_LEN};
use crate::error::InputError;
use std::collections::{BTreeMap, BTreeSet};

/// Accumulated green / yellow / grey feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    greens: BTreeMap<usize, u8>,
    yellows: BTreeSet<(u8, usize)>,
    greys: LetterSet,
}

impl Hints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letter `letter` is at `position`
    ///
    /// # Errors
    /// Returns an `InputError` for an out-of-range position or a non-letter.
    pub fn add_green(&mut self, position: usize, letter: u8) -> Result<(), InputError> {
        let rule = PositionRule::new(position, letter, Placement::Must)?;
        self.greens.insert(rule.position(), rule.letter());
        Ok(())
    }

    /// Letter `letter` is in the word but not at `position`
    ///
    /// # Errors
    /// Returns an `InputError` for an out-of-range position or a non-letter.
    pub fn add_yellow(&mut self, position: usize, letter: u8) -> Result<(), InputError> {
        let rule = PositionRule::new(position, letter, Placement::MustNot)?;
        self.yellows.insert((rule.letter(), rule.position()));
        Ok(())
    }

    pub fn add_greys(&mut self, letters: LetterSet) {
        self.greys = self.greys.union(letters);
    }

    /// Fold another round of feedback into this one
    pub fn merge(&mut self, other: &Self) {
        self.greens.extend(other.greens.iter());
        self.yellows.extend(other.yellows.iter().copied());
        self.greys = self.greys.union(other.greys);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.greens.is_empty() && self.yellows.is_empty() && self.greys.is_empty()
    }

    #[must_use]
    pub fn green_letters(&self) -> LetterSet {
        self.greens.values().copied().collect()
    }

    #[must_use]
    pub fn yellow_letters(&self) -> LetterSet {
        self.yellows.iter().map(|&(letter, _)| letter).collect()
    }

    #[must_use]
    pub const fn greys(&self) -> LetterSet {
        self.greys
    }

    /// Greens as a classic mask, `app..`
    #[must_use]
    pub fn green_mask(&self) -> String {
        (0..WORD_LEN)
            .map(|position| self.greens.get(&position).map_or('.', |&letter| char::from(letter)))
            .collect()
    }

    /// Letters known to be in the word (green or yellow)
    #[must_use]
    pub fn known_letters(&self) -> LetterSet {
        self.green_letters().union(self.yellow_letters())
    }

    /// Compile into filter constraints
    ///
    /// - greens pin their letter to the position
    /// - yellows require the letter and forbid the position
    /// - a grey letter that is neither green nor yellow is banned
    /// - a grey letter that is only green may not appear outside its green
    ///   positions, so its count is pinned to the number of greens
    /// - a grey letter that is also yellow adds nothing
    #[must_use]
    pub fn constraints(&self) -> Vec<Constraint> {
        let mut rules: Vec<PositionRule> = self
            .greens
            .iter()
            .filter_map(|(&position, &letter)| {
                PositionRule::new(position, letter, Placement::Must).ok()
            })
            .collect();
        rules.extend(self.yellows.iter().filter_map(|&(letter, position)| {
            PositionRule::new(position, letter, Placement::MustNot).ok()
        }));

        let greens = self.green_letters();
        let yellows = self.yellow_letters();
        let banned = self.greys.difference(greens.union(yellows));
        let pinned: BTreeMap<u8, u8> = self
            .greys
            .difference(banned)
            .difference(yellows)
            .iter()
            .map(|letter| {
                let count = self.greens.values().filter(|&&g| g == letter).count();
                (letter, count as u8)
            })
            .collect();

        [
            Constraint::Positions(rules),
            Constraint::Required(yellows),
            Constraint::Banned(banned),
            Constraint::ExactCounts(pinned),
        ]
        .into_iter()
        .filter(|c| !c.is_trivial())
        .collect()
    }
}
