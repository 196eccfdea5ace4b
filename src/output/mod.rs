//! Terminal output formatting
//!
//! Coloured printing for the text mode and the one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_record, print_score, print_stats_book, print_submission};
