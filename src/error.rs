//! Error types
//!
//! `InputError` covers anything the user typed or supplied that cannot be
//! used; the round is rejected and the caller may resubmit. `SolveError`
//! adds the terminal empty-pool condition. `LoadError` covers word list files.

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed or unusable input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid word \"{text}\": {source}")]
    InvalidWord { text: String, source: WordError },

    #[error("\"{0}\" is not in the word list")]
    UnknownWord(String),

    #[error("invalid feedback pattern \"{0}\": use five of g/y/w")]
    InvalidPattern(String),

    #[error("position {0} is out of range (0-4)")]
    PositionOutOfRange(usize),

    #[error("malformed input \"{input}\": expected {expected}")]
    Malformed {
        input: String,
        expected: &'static str,
    },
}

impl InputError {
    pub(crate) fn invalid_word(text: &str, source: WordError) -> Self {
        Self::InvalidWord {
            text: text.to_string(),
            source,
        }
    }

    pub(crate) fn malformed(input: &str, expected: &'static str) -> Self {
        Self::Malformed {
            input: input.to_string(),
            expected,
        }
    }
}

/// Errors that end a search
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// The candidate pool has shrunk to zero
    #[error("no candidates remain")]
    EmptyPool,
}

/// Failure to build a word list from files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no valid 5-letter words found in the given word lists")]
    NoWords,
}
