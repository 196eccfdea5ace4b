//! Aggregated per-key feedback for the on-screen keyboard

use crate::core::{Feedback, Score, Symbol};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Best feedback seen for each symbol
///
/// A key shown as correct never goes back to present or absent, and a present
/// key never goes back to absent.
#[derive(Debug, Clone)]
pub struct KeyboardState<S> {
    keys: FxHashMap<S, Feedback>,
}

impl<S> Default for KeyboardState<S> {
    fn default() -> Self {
        Self {
            keys: FxHashMap::default(),
        }
    }
}

impl<S: Symbol + Hash> KeyboardState<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record feedback for one key, keeping the best state
    pub fn record(&mut self, symbol: S, feedback: Feedback) {
        self.keys
            .entry(symbol)
            .and_modify(|current| *current = (*current).max(feedback))
            .or_insert(feedback);
    }

    /// Record a whole scored guess
    pub fn record_guess(&mut self, guess: &[S], score: &Score) {
        for (&symbol, &feedback) in guess.iter().zip(score.feedback()) {
            self.record(symbol, feedback);
        }
    }

    #[must_use]
    pub fn get(&self, symbol: S) -> Option<Feedback> {
        self.keys.get(&symbol).copied()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardState::new();
        keyboard.record('A', Feedback::Correct);
        keyboard.record('A', Feedback::Present);
        keyboard.record('A', Feedback::Absent);
        assert_eq!(keyboard.get('A'), Some(Feedback::Correct));
    }

    #[test]
    fn present_is_not_downgraded_but_upgrades() {
        let mut keyboard = KeyboardState::new();
        keyboard.record('E', Feedback::Present);
        keyboard.record('E', Feedback::Absent);
        assert_eq!(keyboard.get('E'), Some(Feedback::Present));
        keyboard.record('E', Feedback::Correct);
        assert_eq!(keyboard.get('E'), Some(Feedback::Correct));
    }

    #[test]
    fn record_guess_with_repeated_letters() {
        // The second O of ROBOT is exact, the first is merely present
        let mut keyboard = KeyboardState::new();
        let guess: Vec<char> = "ROBOT".chars().collect();
        let score = crate::core::evaluate(&guess, &"FLOOR".chars().collect::<Vec<_>>());
        keyboard.record_guess(&guess, &score);

        assert_eq!(keyboard.get('O'), Some(Feedback::Correct));
        assert_eq!(keyboard.get('R'), Some(Feedback::Present));
        assert_eq!(keyboard.get('B'), Some(Feedback::Absent));
        assert_eq!(keyboard.get('Z'), None);

        keyboard.clear();
        assert_eq!(keyboard.get('O'), None);
    }
}
