//! Word lists for the word game
//!
//! Provides the embedded list compiled into the binary and the [`Dictionary`]
//! used to draw secrets and validate guesses.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use log::debug;
use rand::Rng;
use rand::seq::index;
use rustc_hash::FxHashSet;

/// Fixed vocabulary of the word game
///
/// Guesses are accepted when their normalized form is in the set; nothing
/// fuzzier than accent stripping is applied.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first spelling of each normalized word
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let total = words.len();
        let mut accepted = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| accepted.insert(w.normalized().to_string()))
            .collect();

        if words.len() < total {
            debug!("Dropped {} repeated words", total - words.len());
        }
        Self { words, accepted }
    }

    /// Dictionary built from the embedded list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a guess is an accepted word
    ///
    /// The lookup is case and accent insensitive.
    ///
    /// # Examples
    /// ```
    /// use termo::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.accepts("pátio"));
    /// assert!(dictionary.accepts("PATIO"));
    /// assert!(!dictionary.accepts("qwxyz"));
    /// ```
    #[must_use]
    pub fn accepts(&self, guess: &str) -> bool {
        self.accepted.contains(&crate::core::normalize(guess))
    }

    /// Draw `count` distinct words without replacement
    ///
    /// Returns fewer words if the dictionary is smaller than `count`.
    pub fn draw<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Word> {
        let amount = count.min(self.words.len());
        index::sample(rng, self.words.len(), amount)
            .into_iter()
            .map(|i| self.words[i].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid word");
        }
    }

    #[test]
    fn embedded_words_are_unique_once_normalized() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.len(), WORDS_COUNT);
        assert_eq!(dictionary.accepted.len(), WORDS_COUNT);
    }

    #[test]
    fn accepts_ignores_case_and_accents() {
        let dictionary = Dictionary::new(loader::words_from_slice(&["órfão", "livro"]));
        assert!(dictionary.accepts("ORFAO"));
        assert!(dictionary.accepts("órfão"));
        assert!(dictionary.accepts("Órfao"));
        assert!(dictionary.accepts("livro"));
        assert!(!dictionary.accepts("livra"));
    }

    #[test]
    fn accepts_unlisted_spelling_with_listed_normalized_form() {
        // Only the normalized form matters, even for spellings that are not words
        let dictionary = Dictionary::new(loader::words_from_slice(&["pátio"]));
        assert!(dictionary.accepts("PÂTÌO"));
    }

    #[test]
    fn draw_is_without_replacement() {
        let dictionary = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let drawn = dictionary.draw(4, &mut rng);
            assert_eq!(drawn.len(), 4);
            for i in 0..drawn.len() {
                for j in i + 1..drawn.len() {
                    assert_ne!(drawn[i].normalized(), drawn[j].normalized());
                }
            }
        }
    }

    #[test]
    fn repeated_words_collapse_to_first_spelling() {
        let dictionary =
            Dictionary::new(loader::words_from_slice(&["pátio", "patio", "livro", "livro"]));
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "PÁTIO");
        assert!(dictionary.accepts("patio"));

        let mut rng = StdRng::seed_from_u64(7);
        let drawn = dictionary.draw(4, &mut rng);
        assert_eq!(drawn.len(), 2);
        assert_ne!(drawn[0].normalized(), drawn[1].normalized());
    }

    #[test]
    fn draw_caps_at_dictionary_size() {
        let dictionary = Dictionary::new(loader::words_from_slice(&["livro", "pátio"]));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(dictionary.draw(4, &mut rng).len(), 2);
    }
}
