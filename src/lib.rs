//! Termo
//!
//! Two terminal guessing games sharing one core: a Wordle-style word game
//! played on 1, 2 or 4 boards at once, and a Mastermind-style digit code.
//!
//! # Quick Start
//!
//! ```rust
//! use termo::core::{Feedback, evaluate};
//!
//! let guess: Vec<char> = "REACT".chars().collect();
//! let secret: Vec<char> = "CRANE".chars().collect();
//!
//! let score = evaluate(&guess, &secret);
//! assert_eq!(score.feedback()[2], Feedback::Correct);
//! assert_eq!(score.to_emoji(), "🟨🟨🟩🟨⬛");
//! ```

// Core domain types
pub mod core;

// Sessions, modes and presentation helpers
pub mod game;

// Cross-session statistics and preferences
pub mod stats;

// Word lists
pub mod wordlists;

// Data directory and persistence switches
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
