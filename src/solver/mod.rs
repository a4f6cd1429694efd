//! Don't Wordle search engine
//!
//! Pattern caching, candidate filtering, outcome partitioning, guess scoring
//! and ranking, plus the session that ties them together.

mod cache;
mod engine;
mod filter;
mod hints;
mod partition;
mod phase;
mod ranking;
mod scoring;

pub use cache::{PatternCache, Patterns};
pub use engine::{NARROW_POOL, PoolStatus, Recommendation, Session, SolverConfig};
pub use filter::{Constraint, Placement, PositionRule, filter};
pub use hints::Hints;
pub use partition::{Partition, bucket_sizes, partition};
pub use phase::{Phase, PhaseSelector, SearchPlan};
pub use ranking::{RankRequest, RankedGuess, Ranker, ScoringPolicy};
pub use scoring::{
    Objective, SurvivorReport, exact_survivors, expected_size, lookahead, miss_survivors,
};
