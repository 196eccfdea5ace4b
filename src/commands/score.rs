//! Score a single guess against a known secret

use crate::core::{Code, Digit, Score, Word, evaluate};

/// A guess, its secret and the feedback between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult<S> {
    pub guess: Vec<S>,
    pub secret: Vec<S>,
    pub score: Score,
}

/// Score two five-letter words, ignoring accents
///
/// # Errors
///
/// Returns an error if either word is not five letters.
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreResult<char>, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;

    let normalized_guess: Vec<char> = guess.normalized().chars().collect();
    let normalized_secret: Vec<char> = secret.normalized().chars().collect();

    Ok(ScoreResult {
        guess: guess.letters().to_vec(),
        secret: secret.letters().to_vec(),
        score: evaluate(&normalized_guess, &normalized_secret),
    })
}

/// Score two digit codes of equal length
///
/// # Errors
///
/// Returns an error if either code has a non-digit or their lengths differ.
pub fn score_codes(guess: &str, secret: &str) -> Result<ScoreResult<Digit>, String> {
    let secret = secret.trim();
    let secret = Code::parse(secret, secret.chars().count())
        .map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Code::parse(guess, secret.len()).map_err(|e| format!("Invalid guess: {e}"))?;

    let score = evaluate(guess.digits(), secret.digits());
    Ok(ScoreResult {
        guess: guess.into(),
        secret: secret.into(),
        score,
    })
}
