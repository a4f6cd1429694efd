//! Command implementations

pub mod find;
pub mod helper;
pub mod play;
pub mod suggest;
pub mod survivors;

pub use find::{FilterStep, FindQuery, FindResult, run_find};
pub use helper::run_helper;
pub use play::run_play;
pub use suggest::{SuggestResult, run_suggest};
pub use survivors::{SurvivorsQuery, SurvivorsResult, run_survivors};
