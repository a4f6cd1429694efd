//! Parsers for the small textual constraint grammars
//!
//! Every parser is all-or-nothing: one bad token rejects the whole input.
//! Empty input (and empty tokens between commas) means "no constraint".

use crate::core::{LetterSet, Pattern, WORD_LEN, Word};
use crate::error::InputError;
use crate::solver::{Hints, Placement, PositionRule};
use colored::Colorize;
use log::warn;
use std::collections::BTreeMap;

const COUNTS_FORMAT: &str = "letter counts like a2,b1";
const POSITIONS_FORMAT: &str = "position rules like 0a+,1b- (position, letter, + or -)";
const HINTS_FORMAT: &str = "hints like g0a,y1b (g or y, position, letter)";
const HISTORY_FORMAT: &str = "WORD:PATTERN like CRANE:wwywg";
const MASK_FORMAT: &str = "five letters or dots like app..";
const WRONG_SPOTS_FORMAT: &str = "excluded positions 1-5 then the letter, like 13a,43x";

fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Letters of `input`; anything that is not a letter is ignored
#[must_use]
pub fn parse_letter_set(input: &str) -> LetterSet {
    LetterSet::from_letters(input)
}

/// Parse `a2,b1` into a letter → count map
///
/// # Errors
/// Returns `InputError::Malformed` if any token is not a letter followed by a count.
///
/// # Examples
/// ```
/// use dont_wordle::input::parse_letter_counts;
///
/// let counts = parse_letter_counts("a2, b1").unwrap();
/// assert_eq!(counts.get(&b'a'), Some(&2));
/// assert!(parse_letter_counts("a2,bb").is_err());
/// ```
pub fn parse_letter_counts(input: &str) -> Result<BTreeMap<u8, u8>, InputError> {
    tokens(input)
        .map(|token| {
            let letter = token.as_bytes()[0].to_ascii_lowercase();
            let count = token.get(1..).and_then(|rest| rest.parse::<u8>().ok());
            match count {
                Some(count) if letter.is_ascii_lowercase() => Ok((letter, count)),
                _ => Err(InputError::malformed(input, COUNTS_FORMAT)),
            }
        })
        .collect()
}

/// Parse `0a+,1b-` into position rules
///
/// # Errors
/// Returns `InputError::Malformed` for a badly shaped token and
/// `InputError::PositionOutOfRange` for a position of 5 or more.
pub fn parse_positions(input: &str) -> Result<Vec<PositionRule>, InputError> {
    tokens(input)
        .map(|token| {
            let &[position, letter, sign] = token.as_bytes() else {
                return Err(InputError::malformed(input, POSITIONS_FORMAT));
            };
            let placement = match sign {
                b'+' => Placement::Must,
                b'-' => Placement::MustNot,
                _ => return Err(InputError::malformed(input, POSITIONS_FORMAT)),
            };
            if !position.is_ascii_digit() {
                return Err(InputError::malformed(input, POSITIONS_FORMAT));
            }
            PositionRule::new(usize::from(position - b'0'), letter, placement)
        })
        .collect()
}

/// Parse one round of board hints, `g0a,y1b`
///
/// # Errors
/// Returns `InputError::Malformed` for a badly shaped token and
/// `InputError::PositionOutOfRange` for a position of 5 or more.
pub fn parse_hints(input: &str) -> Result<Hints, InputError> {
    let mut hints = Hints::new();
    for token in tokens(input) {
        let &[kind, position, letter] = token.as_bytes() else {
            return Err(InputError::malformed(input, HINTS_FORMAT));
        };
        if !position.is_ascii_digit() {
            return Err(InputError::malformed(input, HINTS_FORMAT));
        }
        let position = usize::from(position - b'0');
        match kind.to_ascii_lowercase() {
            b'g' => hints.add_green(position, letter)?,
            b'y' => hints.add_yellow(position, letter)?,
            _ => return Err(InputError::malformed(input, HINTS_FORMAT)),
        }
    }
    Ok(hints)
}

/// Parse a classic green mask, `app..`, one character per position
///
/// Empty input means no greens.
///
/// # Errors
/// Returns `InputError::Malformed` unless the mask is five letters or dots.
///
/// # Examples
/// ```
/// use dont_wordle::input::parse_green_mask;
///
/// let hints = parse_green_mask("app..").unwrap();
/// assert_eq!(hints.green_mask(), "app..");
/// assert!(parse_green_mask("app").is_err());
/// ```
pub fn parse_green_mask(input: &str) -> Result<Hints, InputError> {
    let mut hints = Hints::new();
    let mask = input.trim();
    if mask.is_empty() {
        return Ok(hints);
    }
    if mask.len() != WORD_LEN {
        return Err(InputError::malformed(input, MASK_FORMAT));
    }
    for (position, ch) in mask.bytes().enumerate() {
        match ch {
            b'.' => {}
            ch if ch.is_ascii_alphabetic() => hints.add_green(position, ch)?,
            _ => return Err(InputError::malformed(input, MASK_FORMAT)),
        }
    }
    Ok(hints)
}

/// Parse classic wrong-spot letters, `13a,43x`
///
/// Each token lists the 1-based positions the letter is known not to occupy,
/// followed by the letter itself.
///
/// # Errors
/// Returns `InputError::Malformed` for a token without positions, with a
/// position outside 1-5, or not ending in a letter.
pub fn parse_wrong_spots(input: &str) -> Result<Hints, InputError> {
    let mut hints = Hints::new();
    for token in tokens(input) {
        let Some((&letter, positions)) = token.as_bytes().split_last() else {
            return Err(InputError::malformed(input, WRONG_SPOTS_FORMAT));
        };
        if positions.is_empty() || !letter.is_ascii_alphabetic() {
            return Err(InputError::malformed(input, WRONG_SPOTS_FORMAT));
        }
        for &digit in positions {
            if !(b'1'..=b'5').contains(&digit) {
                return Err(InputError::malformed(input, WRONG_SPOTS_FORMAT));
            }
            hints.add_yellow(usize::from(digit - b'1'), letter)?;
        }
    }
    Ok(hints)
}

/// Parse a played guess, `CRANE:wwywg`
///
/// # Errors
/// - `InputError::Malformed` if there is no `:`
/// - `InputError::InvalidWord` if the guess is not a 5-letter word
/// - `InputError::InvalidPattern` if the feedback is not five of g/y/w
pub fn parse_history_token(token: &str) -> Result<(String, Pattern), InputError> {
    let Some((word, feedback)) = token.trim().split_once(':') else {
        return Err(InputError::malformed(token, HISTORY_FORMAT));
    };
    let word = Word::new(word.trim()).map_err(|source| InputError::invalid_word(word, source))?;
    let pattern: Pattern = feedback.trim().parse()?;
    Ok((word.text().to_string(), pattern))
}

/// Use a parsed auxiliary constraint, or fall back to no constraint
///
/// Malformed auxiliary input does not abort a command: it is reported and
/// ignored.
pub fn or_unconstrained<T: Default>(parsed: Result<T, InputError>, what: &str) -> T {
    parsed.unwrap_or_else(|e| {
        warn!("ignoring {what}: {e}");
        println!("{} {e}; no {what} constraint applied", "Warning:".yellow().bold());
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_sets_ignore_noise() {
        assert_eq!(parse_letter_set("x, Y z!").to_string(), "xyz");
        assert!(parse_letter_set("").is_empty());
    }

    #[test]
    fn letter_counts() {
        let counts = parse_letter_counts("a2,b1,,").unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&b'a'], 2);
        assert_eq!(counts[&b'b'], 1);
        assert!(parse_letter_counts("").unwrap().is_empty());
    }

    #[test]
    fn letter_counts_all_or_nothing() {
        assert!(matches!(
            parse_letter_counts("a2,b"),
            Err(InputError::Malformed { .. })
        ));
        assert!(parse_letter_counts("2a").is_err());
        assert!(parse_letter_counts("a-1").is_err());
    }

    #[test]
    fn positions() {
        let rules = parse_positions("0a+, 1B-").unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].to_string(), "0a+");
        assert_eq!(rules[1].to_string(), "1b-");
        assert_eq!(rules[1].placement(), Placement::MustNot);
    }

    #[test]
    fn positions_reject_bad_tokens() {
        assert_eq!(
            parse_positions("0a+,5b-"),
            Err(InputError::PositionOutOfRange(5))
        );
        assert!(parse_positions("0a*").is_err());
        assert!(parse_positions("xa+").is_err());
        assert!(parse_positions("0ab+").is_err());
    }

    #[test]
    fn hints() {
        let hints = parse_hints("g0s,y1a").unwrap();
        assert_eq!(hints.green_letters().to_string(), "s");
        assert_eq!(hints.yellow_letters().to_string(), "a");
        assert!(parse_hints("").unwrap().is_empty());
    }

    #[test]
    fn hints_all_or_nothing() {
        assert!(parse_hints("g0s,x1a").is_err());
        assert!(parse_hints("g0s,y9a").is_err());
        assert!(parse_hints("g0").is_err());
    }

    #[test]
    fn green_masks() {
        let hints = parse_green_mask("App..").unwrap();
        assert_eq!(hints.green_mask(), "app..");
        assert_eq!(hints.green_letters().to_string(), "ap");
        assert!(parse_green_mask("  ").unwrap().is_empty());

        assert!(parse_green_mask("app.").is_err());
        assert!(parse_green_mask("app.1").is_err());
    }

    #[test]
    fn wrong_spots() {
        let hints = parse_wrong_spots("13a, 4x").unwrap();
        assert_eq!(hints.yellow_letters().to_string(), "ax");
        assert_eq!(hints.constraints().len(), 2);
        assert!(parse_wrong_spots("").unwrap().is_empty());

        assert!(parse_wrong_spots("a").is_err());
        assert!(parse_wrong_spots("06a").is_err());
        assert!(parse_wrong_spots("13a,2?").is_err());
    }

    #[test]
    fn history_tokens() {
        let (word, pattern) = parse_history_token("CRANE:wwywg").unwrap();
        assert_eq!(word, "crane");
        assert_eq!(pattern.digits(), [0, 0, 1, 0, 2]);

        assert!(matches!(
            parse_history_token("crane"),
            Err(InputError::Malformed { .. })
        ));
        assert!(matches!(
            parse_history_token("cranes:wwwww"),
            Err(InputError::InvalidWord { .. })
        ));
        assert!(matches!(
            parse_history_token("crane:wwxww"),
            Err(InputError::InvalidPattern(_))
        ));
    }

    #[test]
    fn fallback_yields_default() {
        let counts = or_unconstrained(parse_letter_counts("a2,?"), "exact count");
        assert!(counts.is_empty());
        let kept = or_unconstrained(parse_letter_counts("a2"), "exact count");
        assert_eq!(kept.len(), 1);
    }
}
