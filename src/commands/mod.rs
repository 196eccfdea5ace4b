//! Command implementations

pub mod score;
pub mod simple;
pub mod stats;

pub use score::{ScoreResult, score_codes, score_words};
pub use simple::{play_simple, run_simple};
pub use stats::show_stats;
