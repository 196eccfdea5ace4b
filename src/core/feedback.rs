//! Guess feedback calculation and representation
//!
//! Every position of a guess is classified as:
//! - `Correct` (right symbol, right position)
//! - `Present` (symbol occurs elsewhere in the secret)
//! - `Absent` (symbol not in the secret, or all of its occurrences are used up)

use std::fmt;

/// Tri-state feedback for one guess position
///
/// Ordered `Absent < Present < Correct` so the best feedback for a symbol is
/// its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji used in shared results
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Label used by the code game
    #[must_use]
    pub const fn code_label(self) -> &'static str {
        match self {
            Self::Correct => "perfect",
            Self::Present => "near",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(label)
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score(Vec<Feedback>);

impl Score {
    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Repeated symbols are credited at most as many times as they occur in
    /// the secret, with exact matches taking priority.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume both slots
    /// 2. Second pass: for each unconsumed guess slot, consume the leftmost
    ///    unconsumed secret slot holding the same symbol and mark it present
    ///
    /// # Examples
    /// ```
    /// use termo::core::{Feedback, Score};
    ///
    /// // guess 2255 against secret 1223
    /// let score = Score::calculate(&[2, 2, 5, 5], &[1, 2, 2, 3]);
    /// assert_eq!(
    ///     score.feedback(),
    ///     &[Feedback::Present, Feedback::Correct, Feedback::Absent, Feedback::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn calculate<S: PartialEq>(guess: &[S], secret: &[S]) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let len = guess.len().min(secret.len());
        let mut result = vec![Feedback::Absent; len];
        let mut guess_used = vec![false; len];
        let mut secret_used = vec![false; len];

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i] and both used flags
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess[i] == secret[i] {
                result[i] = Feedback::Correct;
                guess_used[i] = true;
                secret_used[i] = true;
            }
        }

        // Second pass: leftmost unconsumed occurrence elsewhere
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess_used[i] {
                continue;
            }
            if let Some(j) = (0..len).find(|&j| !secret_used[j] && guess[i] == secret[j]) {
                result[i] = Feedback::Present;
                secret_used[j] = true;
            }
        }

        Self(result)
    }

    /// Per-position feedback
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Correct)
    }

    /// Count the correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Correct).count()
    }

    /// Count the present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Present).count()
    }

    /// Convert to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }
}

/// Score `guess` against `secret`
///
/// Shorthand for [`Score::calculate`].
#[must_use]
pub fn evaluate<S: PartialEq>(guess: &[S], secret: &[S]) -> Score {
    Score::calculate(guess, secret)
}
