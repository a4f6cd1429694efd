//! Core domain types for Wordle-like games
//!
//! Words, letter sets, feedback patterns and the word list. Everything here is
//! pure data with no knowledge of search or scoring.

mod letters;
mod pattern;
mod word;
mod word_list;

pub use letters::LetterSet;
pub use pattern::{NUM_PATTERNS, Pattern};
pub use word::{WORD_LEN, Word, WordError};
pub use word_list::WordList;
