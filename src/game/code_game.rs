//! Code game: crack a 4 or 5 digit code

use super::error::GuessError;
use super::mode::Difficulty;
use super::session::{InputOutcome, Session, Status, Submission};
use crate::core::{Code, Digit};
use log::{debug, info};
use rand::Rng;

/// Notice shown when a code is submitted with empty cells
pub const INCOMPLETE_NOTICE: &str = "Número incompleto";

/// A code game session
pub struct CodeGame {
    difficulty: Difficulty,
    secret: Code,
    session: Session<Digit>,
}

impl CodeGame {
    /// Start a game with a random code of `difficulty.digits()` digits
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        Self::with_secret(difficulty, Code::random(difficulty.digits(), rng))
    }

    /// Start a game with a known code
    #[must_use]
    pub fn with_secret(difficulty: Difficulty, secret: Code) -> Self {
        debug!("new {difficulty} code game, secret {secret}");
        let session = Session::new(vec![secret.digits().to_vec()], difficulty.max_attempts());
        Self {
            difficulty,
            secret,
            session,
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn session(&self) -> &Session<Digit> {
        &self.session
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.session.status()
    }

    /// Apply a raw key name (`ENTER`, `DEL`/`BACKSPACE`, or a digit)
    pub fn handle_input(&mut self, key: &str) -> InputOutcome<Digit> {
        let outcome = self.session.handle_input_with(key, |_| Ok(()));
        if let InputOutcome::Submitted(submission) = &outcome {
            self.log_submission(submission);
        }
        outcome
    }

    pub fn enter(&mut self, digit: Digit) -> bool {
        self.session.enter(digit)
    }

    pub fn delete(&mut self) -> bool {
        self.session.delete()
    }

    pub fn select(&mut self, row: usize, col: usize) -> bool {
        self.session.select(row, col)
    }

    /// Submit the current row
    ///
    /// # Errors
    /// `GuessError::IncompleteInput` if a digit is missing.
    pub fn submit(&mut self) -> Result<Option<Submission<Digit>>, GuessError> {
        let result = self.session.submit();
        if let Ok(Some(submission)) = &result {
            self.log_submission(submission);
        }
        result
    }

    fn log_submission(&self, submission: &Submission<Digit>) {
        if submission.status.is_terminal() {
            info!(
                "{} code game over: {:?} after {} attempt(s)",
                self.difficulty,
                submission.status,
                self.session.current_row()
            );
        }
    }
}
