//! Word game: one guess played on 1, 2 or 4 boards at once

use super::error::GuessError;
use super::mode::WordMode;
use super::session::{InputOutcome, Session, Status, Submission};
use crate::core::Word;
use crate::wordlists::Dictionary;
use log::{debug, info};
use rand::Rng;

/// Notice shown when a row is submitted with empty cells
pub const INCOMPLETE_NOTICE: &str = "Letras insuficientes";
/// Notice shown when the guess is not in the dictionary
pub const UNRECOGNIZED_NOTICE: &str = "Palavra não reconhecida";

/// A word game session bound to its dictionary
pub struct WordGame<'d> {
    dictionary: &'d Dictionary,
    mode: WordMode,
    secrets: Vec<Word>,
    session: Session<char>,
}

impl<'d> WordGame<'d> {
    /// Start a game drawing `mode.boards()` distinct secrets
    pub fn new<R: Rng + ?Sized>(dictionary: &'d Dictionary, mode: WordMode, rng: &mut R) -> Self {
        let secrets = dictionary.draw(mode.boards(), rng);
        Self::with_secrets(dictionary, mode, secrets)
    }

    /// Start a game with known secrets
    #[must_use]
    pub fn with_secrets(dictionary: &'d Dictionary, mode: WordMode, secrets: Vec<Word>) -> Self {
        debug!(
            "new {mode} game, secrets: {:?}",
            secrets.iter().map(Word::text).collect::<Vec<_>>()
        );

        let session = Session::new(
            secrets.iter().map(|w| w.letters().to_vec()).collect(),
            mode.max_attempts(),
        );

        Self {
            dictionary,
            mode,
            secrets,
            session,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> WordMode {
        self.mode
    }

    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    #[must_use]
    pub const fn session(&self) -> &Session<char> {
        &self.session
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.session.status()
    }

    /// Secrets of the boards left unsolved, for the loss reveal
    #[must_use]
    pub fn unsolved_secrets(&self) -> Vec<&Word> {
        self.session.unsolved().map(|i| &self.secrets[i]).collect()
    }

    /// Apply a raw key name (`ENTER`, `BKSP`, or a letter)
    pub fn handle_input(&mut self, key: &str) -> InputOutcome<char> {
        let dictionary = self.dictionary;
        let outcome = self
            .session
            .handle_input_with(key, |guess| Self::validate(dictionary, guess));
        if let InputOutcome::Submitted(submission) = &outcome {
            self.log_submission(submission);
        }
        outcome
    }

    /// Type a letter at the cursor
    pub fn enter(&mut self, letter: char) -> bool {
        self.session.enter(letter)
    }

    pub fn delete(&mut self) -> bool {
        self.session.delete()
    }

    /// Discard the row being composed
    pub fn clear_row(&mut self) -> bool {
        self.session.clear_row()
    }

    /// Move the cursor to a tile; only tiles of the current row are selectable
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        self.session.select(row, col)
    }

    /// Submit the current row
    ///
    /// # Errors
    /// `GuessError::IncompleteInput` for a partial row,
    /// `GuessError::UnrecognizedGuess` for a word outside the dictionary.
    pub fn submit(&mut self) -> Result<Option<Submission<char>>, GuessError> {
        let dictionary = self.dictionary;
        let result = self
            .session
            .submit_with(|guess| Self::validate(dictionary, guess));
        if let Ok(Some(submission)) = &result {
            self.log_submission(submission);
        }
        result
    }

    /// User-facing notice for a rejected guess
    #[must_use]
    pub const fn notice(err: &GuessError) -> &'static str {
        match err {
            GuessError::IncompleteInput => INCOMPLETE_NOTICE,
            GuessError::UnrecognizedGuess(_) => UNRECOGNIZED_NOTICE,
        }
    }

    fn validate(dictionary: &Dictionary, guess: &[char]) -> Result<(), GuessError> {
        let text: String = guess.iter().collect();
        if dictionary.accepts(&text) {
            Ok(())
        } else {
            Err(GuessError::UnrecognizedGuess(text))
        }
    }

    fn log_submission(&self, submission: &Submission<char>) {
        if submission.status.is_terminal() {
            info!(
                "{} game over: {:?} after {} attempt(s)",
                self.mode,
                submission.status,
                self.session.current_row()
            );
        }
    }
}
