//! Terminal output formatting
//!
//! Display utilities for command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_candidates, print_find_result, print_helper_state, print_pool_summary, print_ranked,
    print_recommendation, print_suggest_result, print_survivors_result,
};
