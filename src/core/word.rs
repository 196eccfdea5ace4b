//! Word game word representation
//!
//! A Word keeps the spelling shown to the player (accents included) next to
//! its normalized form, which is what scoring and dictionary lookups use.

use super::symbol::{Symbol, normalize};
use std::fmt;

/// Letters in every word game word
pub const WORD_LENGTH: usize = 5;

/// A five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
    normalized: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is upper-cased. Accented letters are kept for display.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - A letter does not normalize to `A-Z`
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    ///
    /// let word = Word::new("órfão").unwrap();
    /// assert_eq!(word.text(), "ÓRFÃO");
    /// assert_eq!(word.normalized(), "ORFAO");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        let letters: Vec<char> = text.chars().collect();
        let letters: [char; WORD_LENGTH] = letters
            .try_into()
            .map_err(|rejected: Vec<char>| WordError::InvalidLength(rejected.len()))?;

        if !letters
            .iter()
            .all(|&c| c.normalized().is_ascii_uppercase())
        {
            return Err(WordError::InvalidCharacters);
        }

        let normalized = normalize(&text);

        Ok(Self {
            text,
            letters,
            normalized,
        })
    }

    /// Get the word as shown to the player
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the displayed letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the accent-free, upper-case form
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Check whether two words are the same once normalized
    #[inline]
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
