//! A single board: one secret and the guesses scored against it

use crate::core::{Score, Symbol, evaluate};

/// One secret with its feedback history
#[derive(Debug, Clone)]
pub struct Board<S> {
    secret: Vec<S>,
    normalized_secret: Vec<S>,
    history: Vec<(Vec<S>, Score)>,
    solved_at: Option<usize>,
}

impl<S: Symbol> Board<S> {
    #[must_use]
    pub fn new(secret: Vec<S>) -> Self {
        let normalized_secret = secret.iter().map(|s| s.normalized()).collect();
        Self {
            secret,
            normalized_secret,
            history: Vec::new(),
            solved_at: None,
        }
    }

    #[must_use]
    pub fn secret(&self) -> &[S] {
        &self.secret
    }

    /// Submitted guesses and their scores, oldest first
    ///
    /// A solved board stops receiving guesses, so its history ends with the
    /// winning guess.
    #[must_use]
    pub fn history(&self) -> &[(Vec<S>, Score)] {
        &self.history
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved_at.is_some()
    }

    /// Attempt number (1-based) on which the board was solved
    #[must_use]
    pub const fn solved_at(&self) -> Option<usize> {
        self.solved_at
    }

    /// Score a guess made on the given attempt and record it
    pub(crate) fn record(&mut self, guess: &[S], attempt: usize) -> Score {
        let normalized: Vec<S> = guess.iter().map(|s| s.normalized()).collect();
        let score = evaluate(&normalized, &self.normalized_secret);

        if score.is_perfect() {
            self.solved_at = Some(attempt);
        }
        self.history.push((guess.to_vec(), score.clone()));
        score
    }
}
