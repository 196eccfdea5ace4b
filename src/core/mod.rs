//! Core domain types shared by both games
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and deterministic.

mod code;
mod feedback;
mod symbol;
mod word;

pub use code::{Code, CodeError, Digit};
pub use feedback::{Feedback, Score, evaluate};
pub use symbol::{Symbol, normalize, strip_accent};
pub use word::{WORD_LENGTH, Word, WordError};
