//! Don't Wordle
//!
//! Helpers for Wordle-like games: feedback encoding, candidate filtering, and
//! a depth-limited, sampled search that ranks guesses by how many candidates
//! they tend to leave. The default objective keeps the pool as large as
//! possible, which is how Don't Wordle is won.
//!
//! # Quick Start
//!
//! ```rust
//! use dont_wordle::core::{Pattern, WordList};
//! use dont_wordle::solver::{Session, SolverConfig};
//!
//! let words = WordList::from_strs(&["crane", "slate", "trace", "grade", "plate"]).unwrap();
//! let mut session = Session::new(words, SolverConfig::default());
//!
//! let feedback = Pattern::from_feedback("wwgwg").unwrap();
//! session.play("crane", feedback).unwrap();
//! assert_eq!(session.pool_words(), vec!["slate", "plate"]);
//!
//! let recommendation = session.recommend().unwrap();
//! println!("best: {}", recommendation.guesses[0].word);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Constraint grammars
pub mod input;

// Search engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
