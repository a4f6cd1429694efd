//! Candidate filtering
//!
//! A pool is narrowed by a conjunction of constraints. Every constraint is a
//! pure predicate on a single word, so filters commute and re-applying them
//! is a no-op.

use super::cache::Patterns;
use crate::core::{LetterSet, Pattern, WORD_LEN, Word, WordList};
use crate::error::InputError;
use std::collections::BTreeMap;
use std::fmt;

/// Whether a positional letter must or must not be there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Green: the letter is at this position
    Must,
    /// Yellow-style: the letter is not at this position
    MustNot,
}

/// A single positional rule like `0a+` or `1b-`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionRule {
    position: usize,
    letter: u8,
    placement: Placement,
}

impl PositionRule {
    /// # Errors
    /// Returns `InputError::PositionOutOfRange` if `position >= 5`, or
    /// `InputError::Malformed` if `letter` is not an ASCII letter.
    pub fn new(position: usize, letter: u8, placement: Placement) -> Result<Self, InputError> {
        if position >= WORD_LEN {
            return Err(InputError::PositionOutOfRange(position));
        }
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(InputError::malformed(
                &(letter as char).to_string(),
                "a letter a-z",
            ));
        }
        Ok(Self {
            position,
            letter,
            placement,
        })
    }

    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    #[must_use]
    pub const fn placement(self) -> Placement {
        self.placement
    }

    #[must_use]
    pub const fn matches(self, word: &Word) -> bool {
        let here = word.char_at(self.position) == self.letter;
        match self.placement {
            Placement::Must => here,
            Placement::MustNot => !here,
        }
    }
}

impl fmt::Display for PositionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.placement {
            Placement::Must => '+',
            Placement::MustNot => '-',
        };
        write!(f, "{}{}{sign}", self.position, self.letter as char)
    }
}

/// One condition a candidate word must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// `guess` was played and produced `pattern`
    Played { guess: usize, pattern: Pattern },
    /// None of these letters may appear
    Banned(LetterSet),
    /// All of these letters must appear
    Required(LetterSet),
    /// Each letter appears exactly this many times
    ExactCounts(BTreeMap<u8, u8>),
    /// Each letter appears at least this many times
    MinCounts(BTreeMap<u8, u8>),
    /// Positional must-be / must-not-be letters
    Positions(Vec<PositionRule>),
}

impl Constraint {
    /// A played-guess constraint, resolving the guess text against the word list
    ///
    /// # Errors
    /// Returns an `InputError` if the guess is not a valid word or not in `words`.
    pub fn played(words: &WordList, guess: &str, pattern: Pattern) -> Result<Self, InputError> {
        Ok(Self::Played {
            guess: words.resolve(guess)?,
            pattern,
        })
    }

    /// True if the word at `index` satisfies this constraint
    #[must_use]
    pub fn matches(&self, patterns: Patterns<'_>, index: usize) -> bool {
        let word = patterns.words().word(index);
        match self {
            Self::Played { guess, pattern } => patterns.pattern(*guess, index) == *pattern,
            Self::Banned(letters) => !word.letters().intersects(*letters),
            Self::Required(letters) => word.letters().is_superset(*letters),
            Self::ExactCounts(counts) => counts
                .iter()
                .all(|(&letter, &count)| word.count_of(letter) == count),
            Self::MinCounts(counts) => counts
                .iter()
                .all(|(&letter, &count)| word.count_of(letter) >= count),
            Self::Positions(rules) => rules.iter().all(|rule| rule.matches(word)),
        }
    }

    /// True if the constraint can never remove a word
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        match self {
            Self::Played { .. } => false,
            Self::Banned(letters) | Self::Required(letters) => letters.is_empty(),
            Self::ExactCounts(counts) | Self::MinCounts(counts) => counts.is_empty(),
            Self::Positions(rules) => rules.is_empty(),
        }
    }
}

/// Render a count map as `a2,b1`
fn fmt_counts(f: &mut fmt::Formatter<'_>, counts: &BTreeMap<u8, u8>) -> fmt::Result {
    let parts: Vec<String> = counts
        .iter()
        .map(|(&letter, count)| format!("{}{count}", letter as char))
        .collect();
    write!(f, "{}", parts.join(","))
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Played { guess, pattern } => write!(f, "played #{guess} → {pattern}"),
            Self::Banned(letters) => write!(f, "banned letters {letters}"),
            Self::Required(letters) => write!(f, "required letters {letters}"),
            Self::ExactCounts(counts) => {
                write!(f, "exact counts ")?;
                fmt_counts(f, counts)
            }
            Self::MinCounts(counts) => {
                write!(f, "minimum counts ")?;
                fmt_counts(f, counts)
            }
            Self::Positions(rules) => {
                let parts: Vec<String> = rules.iter().map(ToString::to_string).collect();
                write!(f, "positions {}", parts.join(","))
            }
        }
    }
}

/// Keep the words of `pool` that satisfy every constraint, in pool order
///
/// # Examples
/// ```
/// use dont_wordle::core::{LetterSet, WordList};
/// use dont_wordle::solver::{Constraint, PatternCache, Patterns, filter};
///
/// let words = WordList::from_strs(&["puzzy", "crane", "boxer"]).unwrap();
/// let cache = PatternCache::new(words.len());
/// let patterns = Patterns::new(&words, &cache);
///
/// let banned = Constraint::Banned(LetterSet::from_letters("xyz"));
/// assert_eq!(filter(patterns, &words.all_indices(), &[banned]), vec![1]);
/// ```
#[must_use]
pub fn filter(patterns: Patterns<'_>, pool: &[usize], constraints: &[Constraint]) -> Vec<usize> {
    pool.iter()
        .copied()
        .filter(|&index| constraints.iter().all(|c| c.matches(patterns, index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::cache::PatternCache;
    use proptest::prelude::*;

    const POOL: &[&str] = &[
        "crane", "slate", "trace", "grade", "plate", "puzzy", "comma", "llama", "speed",
        "erase", "banal", "abbey",
    ];

    fn setup() -> (WordList, PatternCache) {
        let words = WordList::from_strs(POOL).unwrap();
        let cache = PatternCache::new(words.len());
        (words, cache)
    }

    fn texts(words: &WordList, pool: &[usize]) -> Vec<String> {
        words.texts(pool).into_iter().map(str::to_string).collect()
    }

    fn counts(pairs: &[(u8, u8)]) -> BTreeMap<u8, u8> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn played_constraint_uses_pattern_rows() {
        let words = WordList::from_strs(&["crane", "slate", "trace", "grade", "plate"]).unwrap();
        let cache = PatternCache::new(words.len());
        let patterns = Patterns::new(&words, &cache);
        let pool = words.all_indices();

        let solved = Constraint::played(&words, "CRANE", Pattern::PERFECT).unwrap();
        assert_eq!(texts(&words, &filter(patterns, &pool, &[solved])), vec!["crane"]);

        // C green, everything else grey: no word here starts with C and avoids R, A, N, E.
        let c_only = Pattern::from_feedback("gwwww").unwrap();
        let constraint = Constraint::played(&words, "crane", c_only).unwrap();
        assert!(filter(patterns, &pool, &[constraint]).is_empty());
    }

    #[test]
    fn played_constraint_matches_encoder() {
        let (words, cache) = setup();
        let patterns = Patterns::new(&words, &cache);
        let pool = words.all_indices();

        let observed = Pattern::calculate(
            &Word::new("slate").unwrap(),
            &Word::new("plate").unwrap(),
        );
        let constraint = Constraint::played(&words, "slate", observed).unwrap();
        let kept = filter(patterns, &pool, &[constraint]);

        assert!(texts(&words, &kept).contains(&"plate".to_string()));
        for &index in &kept {
            assert_eq!(
                Pattern::calculate(&Word::new("slate").unwrap(), words.word(index)),
                observed
            );
        }
    }

    #[test]
    fn played_constraint_rejects_unknown_guess() {
        let (words, _) = setup();
        assert_eq!(
            Constraint::played(&words, "zzzzz", Pattern::MISS),
            Err(InputError::UnknownWord("zzzzz".to_string()))
        );
    }

    #[test]
    fn banned_letters_remove_puzzy() {
        let (words, cache) = setup();
        let patterns = Patterns::new(&words, &cache);
        let banned = Constraint::Banned(LetterSet::from_letters("xyz"));

        let kept = texts(&words, &filter(patterns, &words.all_indices(), &[banned]));
        assert!(!kept.contains(&"puzzy".to_string()));
        assert!(!kept.contains(&"abbey".to_string()));
        assert!(kept.contains(&"crane".to_string()));
        assert_eq!(kept.len(), POOL.len() - 2);
    }

    #[test]
    fn required_letters() {
        let (words, cache) = setup();
        let patterns = Patterns::new(&words, &cache);
        let required = Constraint::Required(LetterSet::from_letters("lt"));

        let kept = texts(&words, &filter(patterns, &words.all_indices(), &[required]));
        assert_eq!(kept, vec!["slate", "plate"]);
    }

    #[test]
    fn exact_counts_compare_strictly() {
        let (words, cache) = setup();
        let patterns = Patterns::new(&words, &cache);
        let exact = Constraint::ExactCounts(counts(&[(b'a', 2)]));

        let kept = texts(&words, &filter(patterns, &words.all_indices(), &[exact]));
        // "comma" has a single 'a'; "llama" and "banal" have two
        assert_eq!(kept, vec!["llama", "banal"]);
    }

    #[test]
    fn exact_count_of_zero_excludes_letter() {
        let (words, cache) = setup();
        let patterns = Patterns::new(&words, &cache);
        let exact = Constraint::ExactCounts(counts(&[(b'e', 0), (b'a', 1)]));

        let kept = texts(&words, &filter(patterns, &words.all_indices(), &[exact]));
        assert_eq!(kept, vec!["comma"]);
    }

    #[test]
    fn min_counts() {
        let (words, cache) = setup();
        let patterns = Patterns::new(&words, &cache);
        let min = Constraint::MinCounts(counts(&[(b'e', 2)]));

        let kept = texts(&words, &filter(patterns, &words.all_indices(), &[min]));
        assert_eq!(kept, vec!["speed", "erase"]);
    }

    #[test]
    fn position_rules() {
        let (words, cache) = setup();
        let patterns = Patterns::new(&words, &cache);
        let rules = Constraint::Positions(vec![
            PositionRule::new(4, b'e', Placement::Must).unwrap(),
            PositionRule::new(0, b's', Placement::MustNot).unwrap(),
            PositionRule::new(1, b'L', Placement::Must).unwrap(),
        ]);

        let kept = texts(&words, &filter(patterns, &words.all_indices(), &[rules]));
        assert_eq!(kept, vec!["plate"]);
    }

    #[test]
    fn position_rule_validation() {
        assert_eq!(
            PositionRule::new(5, b'a', Placement::Must),
            Err(InputError::PositionOutOfRange(5))
        );
        assert!(PositionRule::new(0, b'1', Placement::Must).is_err());
        assert_eq!(
            PositionRule::new(2, b'a', Placement::MustNot).unwrap().to_string(),
            "2a-"
        );
    }

    #[test]
    fn trivial_constraints_keep_everything() {
        let (words, cache) = setup();
        let patterns = Patterns::new(&words, &cache);
        let pool = words.all_indices();
        let trivial = [
            Constraint::Banned(LetterSet::EMPTY),
            Constraint::Required(LetterSet::EMPTY),
            Constraint::ExactCounts(BTreeMap::new()),
            Constraint::MinCounts(BTreeMap::new()),
            Constraint::Positions(Vec::new()),
        ];

        assert!(trivial.iter().all(Constraint::is_trivial));
        assert_eq!(filter(patterns, &pool, &trivial), pool);
    }

    #[test]
    fn display_forms() {
        assert_eq!(
            Constraint::ExactCounts(counts(&[(b'b', 1), (b'a', 2)])).to_string(),
            "exact counts a2,b1"
        );
        assert_eq!(
            Constraint::Banned(LetterSet::from_letters("zyx")).to_string(),
            "banned letters xyz"
        );
    }

    fn arb_constraint() -> impl Strategy<Value = Constraint> {
        let letter = prop::sample::select(b"abcdeilmnprstyz".to_vec());
        let position = 0..WORD_LEN;
        prop_oneof![
            (0..POOL.len(), 0..243u8).prop_map(|(guess, code)| Constraint::Played {
                guess,
                pattern: Pattern::new(code),
            }),
            (0..POOL.len(), 0..POOL.len()).prop_map(|(guess, target)| {
                let words = WordList::from_strs(POOL).unwrap();
                Constraint::Played {
                    guess,
                    pattern: Pattern::calculate(words.word(guess), words.word(target)),
                }
            }),
            "[a-z]{0,4}".prop_map(|s| Constraint::Banned(LetterSet::from_letters(&s))),
            "[a-z]{0,2}".prop_map(|s| Constraint::Required(LetterSet::from_letters(&s))),
            prop::collection::btree_map(letter.clone(), 0..3u8, 0..3)
                .prop_map(Constraint::ExactCounts),
            prop::collection::btree_map(letter.clone(), 0..3u8, 0..3)
                .prop_map(Constraint::MinCounts),
            prop::collection::vec((position, letter, any::<bool>()), 0..3).prop_map(|rules| {
                Constraint::Positions(
                    rules
                        .into_iter()
                        .map(|(position, letter, must)| {
                            let placement = if must { Placement::Must } else { Placement::MustNot };
                            PositionRule::new(position, letter, placement).unwrap()
                        })
                        .collect(),
                )
            }),
        ]
    }

    proptest! {
        #[test]
        fn filter_is_idempotent(constraints in prop::collection::vec(arb_constraint(), 0..4)) {
            let (words, cache) = setup();
            let patterns = Patterns::new(&words, &cache);

            let once = filter(patterns, &words.all_indices(), &constraints);
            let twice = filter(patterns, &once, &constraints);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn filter_is_order_independent(a in arb_constraint(), b in arb_constraint()) {
            let (words, cache) = setup();
            let patterns = Patterns::new(&words, &cache);
            let pool = words.all_indices();

            let ab = filter(patterns, &filter(patterns, &pool, &[a.clone()]), &[b.clone()]);
            let ba = filter(patterns, &filter(patterns, &pool, &[b.clone()]), &[a.clone()]);
            prop_assert_eq!(&ab, &ba);
            prop_assert_eq!(ab, filter(patterns, &pool, &[a, b]));
        }

        #[test]
        fn filter_result_is_subset(constraints in prop::collection::vec(arb_constraint(), 0..4)) {
            let (words, cache) = setup();
            let patterns = Patterns::new(&words, &cache);
            let pool = words.all_indices();

            let kept = filter(patterns, &pool, &constraints);
            prop_assert!(kept.iter().all(|i| pool.contains(i)));
            prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
