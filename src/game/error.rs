//! Guess rejection reasons

use std::fmt;

/// Why a submitted guess was rejected
///
/// Both cases are recoverable: the session is left untouched and the player
/// can keep editing the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The row still has empty cells
    IncompleteInput,
    /// The word is not in the dictionary
    UnrecognizedGuess(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteInput => write!(f, "Palpite incompleto"),
            Self::UnrecognizedGuess(word) => write!(f, "Palavra não reconhecida: {word}"),
        }
    }
}

impl std::error::Error for GuessError {}
