//! Word lists for Wordle-like games
//!
//! Lists are read from flat text files at startup; nothing is embedded.

pub mod loader;

pub use loader::load_from_files;

/// Word list files read when no `--words` path is given, in load order
pub const DEFAULT_FILES: &[&str] = &[
    "wordle-answers-alphabetical.txt",
    "wordle-allowed-guesses.txt",
];
