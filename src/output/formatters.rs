//! Formatting utilities for terminal output

use crate::core::{Feedback, Score};
use colored::{ColoredString, Colorize};
use std::fmt::Display;

/// One tile with its feedback colour as background
#[must_use]
pub fn colored_tile(symbol: impl Display, feedback: Feedback) -> ColoredString {
    let text = format!(" {symbol} ").black().bold();
    match feedback {
        Feedback::Correct => text.on_green(),
        Feedback::Present => text.on_yellow(),
        Feedback::Absent => text.on_bright_black(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn colored_guess<S: Display>(guess: &[S], score: &Score) -> String {
    guess
        .iter()
        .zip(score.feedback())
        .map(|(symbol, &feedback)| colored_tile(symbol, feedback).to_string())
        .collect()
}

/// Digit-game labels, e.g. `near perfect absent absent`
#[must_use]
pub fn code_labels(score: &Score) -> String {
    score
        .feedback()
        .iter()
        .map(|f| f.code_label())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
