//! Session state machine
//!
//! A session owns the boards, the shared row buffer and cursor, and the
//! attempt counter. One input drives every unsolved board in lockstep.
//!
//! ```text
//! Playing --submit--> Playing   (attempts left, some board unsolved)
//! Playing --submit--> Won       (every board solved)
//! Playing --submit--> Lost      (attempt budget exhausted)
//! ```
//!
//! `Won` and `Lost` are terminal: every further action is a no-op.

use super::board::Board;
use super::error::GuessError;
use crate::core::{Score, Symbol};
use log::debug;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission<S> {
    /// Row the guess was played on (0-based)
    pub row: usize,
    pub guess: Vec<S>,
    /// Score per board that was still unsolved, as `(board index, score)`
    pub scores: Vec<(usize, Score)>,
    /// Boards solved by this guess
    pub solved: Vec<usize>,
    /// Status after the guess
    pub status: Status,
}

/// A decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<S> {
    Submit,
    Delete,
    Symbol(S),
}

impl<S: Symbol> Key<S> {
    /// Decode a raw key name
    ///
    /// `ENTER` submits, `BKSP`, `BACKSPACE` and `DEL` delete (any case), and a
    /// single character of the alphabet is entered.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_uppercase().as_str() {
            "ENTER" => Some(Self::Submit),
            "BKSP" | "BACKSPACE" | "DEL" => Some(Self::Delete),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => S::from_key(ch).map(Self::Symbol),
                    _ => None,
                }
            }
        }
    }
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome<S> {
    /// Unknown key, or the session is over
    Ignored,
    /// The row buffer or cursor changed
    Edited,
    /// Submission refused; nothing changed
    Rejected(GuessError),
    Submitted(Submission<S>),
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct Session<S> {
    boards: Vec<Board<S>>,
    buffer: Vec<Option<S>>,
    current_row: usize,
    current_col: usize,
    max_rows: usize,
    status: Status,
}

impl<S: Symbol> Session<S> {
    /// Start a session over the given secrets
    ///
    /// All secrets must have the same length.
    #[must_use]
    pub fn new(secrets: Vec<Vec<S>>, max_rows: usize) -> Self {
        let cols = secrets.first().map_or(0, Vec::len);
        debug_assert!(
            secrets.iter().all(|s| s.len() == cols),
            "secrets must share one length"
        );

        Self {
            boards: secrets.into_iter().map(Board::new).collect(),
            buffer: vec![None; cols],
            current_row: 0,
            current_col: 0,
            max_rows,
            status: Status::Playing,
        }
    }

    #[must_use]
    pub fn boards(&self) -> &[Board<S>] {
        &self.boards
    }

    /// Current attempt index; also the number of attempts used so far
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Symbols per row
    #[must_use]
    pub fn cols(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The row being composed
    #[must_use]
    pub fn buffer(&self) -> &[Option<S>] {
        &self.buffer
    }

    #[must_use]
    pub fn is_row_full(&self) -> bool {
        self.buffer.iter().all(Option::is_some)
    }

    /// Indices of boards not solved yet
    pub fn unsolved(&self) -> impl Iterator<Item = usize> + '_ {
        self.boards
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_solved())
            .map(|(i, _)| i)
    }

    /// Write a symbol at the cursor and advance it
    ///
    /// The cursor moves to the next empty cell on the right, wrapping to the
    /// lowest-index empty cell; on a full row it stays put.
    pub fn enter(&mut self, symbol: S) -> bool {
        if self.status.is_terminal() || self.buffer.is_empty() {
            return false;
        }

        self.buffer[self.current_col] = Some(symbol);

        let cols = self.cols();
        let col = self.current_col;
        if let Some(next) = (col + 1..cols)
            .chain(0..col)
            .find(|&i| self.buffer[i].is_none())
        {
            self.current_col = next;
        }
        true
    }

    /// Clear the cell under the cursor
    ///
    /// If that cell is already empty the cursor first steps back one cell.
    pub fn delete(&mut self) -> bool {
        if self.status.is_terminal() || self.buffer.is_empty() {
            return false;
        }

        let mut changed = false;
        if self.buffer[self.current_col].is_none() && self.current_col > 0 {
            self.current_col -= 1;
            changed = true;
        }
        self.buffer[self.current_col].take().is_some() || changed
    }

    /// Empty the row being composed and put the cursor back at column 0
    pub fn clear_row(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.buffer.fill(None);
        self.current_col = 0;
        true
    }

    /// Move the cursor to a cell of the current row
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        if self.status.is_terminal() || row != self.current_row || col >= self.cols() {
            return false;
        }
        self.current_col = col;
        true
    }

    /// Submit the current row with no extra validation
    ///
    /// # Errors
    /// `GuessError::IncompleteInput` if the row has empty cells.
    pub fn submit(&mut self) -> Result<Option<Submission<S>>, GuessError> {
        self.submit_with(|_| Ok(()))
    }

    /// Submit the current row after `validate` accepts it
    ///
    /// Returns `Ok(None)` once the session is over. A rejected guess leaves
    /// the session untouched.
    ///
    /// # Errors
    /// `GuessError::IncompleteInput` if the row has empty cells, or whatever
    /// `validate` returns.
    pub fn submit_with<F>(&mut self, validate: F) -> Result<Option<Submission<S>>, GuessError>
    where
        F: FnOnce(&[S]) -> Result<(), GuessError>,
    {
        if self.status.is_terminal() {
            return Ok(None);
        }

        let guess: Vec<S> = self
            .buffer
            .iter()
            .copied()
            .collect::<Option<_>>()
            .ok_or(GuessError::IncompleteInput)?;
        validate(&guess)?;

        let row = self.current_row;
        let attempt = row + 1;
        let mut scores = Vec::new();
        let mut solved = Vec::new();

        for (index, board) in self.boards.iter_mut().enumerate() {
            if board.is_solved() {
                continue;
            }
            let score = board.record(&guess, attempt);
            if board.is_solved() {
                solved.push(index);
            }
            scores.push((index, score));
        }

        self.current_row = attempt;
        self.current_col = 0;
        self.buffer.fill(None);

        if self.boards.iter().all(Board::is_solved) {
            self.status = Status::Won;
        } else if self.current_row >= self.max_rows {
            self.status = Status::Lost;
        }

        debug!(
            "row {row} scored on {} board(s), solved {solved:?}, status {:?}",
            scores.len(),
            self.status
        );

        Ok(Some(Submission {
            row,
            guess,
            scores,
            solved,
            status: self.status,
        }))
    }

    /// Apply a raw key press, running `validate` before any submission
    pub fn handle_input_with<F>(&mut self, key: &str, validate: F) -> InputOutcome<S>
    where
        F: FnOnce(&[S]) -> Result<(), GuessError>,
    {
        if self.status.is_terminal() {
            return InputOutcome::Ignored;
        }

        let edited = |changed: bool| {
            if changed {
                InputOutcome::Edited
            } else {
                InputOutcome::Ignored
            }
        };

        match Key::parse(key) {
            Some(Key::Submit) => match self.submit_with(validate) {
                Ok(Some(submission)) => InputOutcome::Submitted(submission),
                Ok(None) => InputOutcome::Ignored,
                Err(err) => InputOutcome::Rejected(err),
            },
            Some(Key::Delete) => edited(self.delete()),
            Some(Key::Symbol(symbol)) => edited(self.enter(symbol)),
            None => InputOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Feedback};

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn session(secrets: &[&str], max_rows: usize) -> Session<char> {
        Session::new(secrets.iter().map(|s| letters(s)).collect(), max_rows)
    }

    fn type_word(session: &mut Session<char>, word: &str) {
        for ch in word.chars() {
            session.enter(ch);
        }
    }

    fn play(session: &mut Session<char>, word: &str) -> Submission<char> {
        type_word(session, word);
        session.submit().unwrap().unwrap()
    }

    #[test]
    fn entering_advances_cursor() {
        let mut s = session(&["CRANE"], 6);
        s.enter('A');
        s.enter('B');
        assert_eq!(s.current_col(), 2);
        assert_eq!(s.buffer()[..2], [Some('A'), Some('B')]);
    }

    #[test]
    fn full_row_keeps_cursor_and_overwrites() {
        let mut s = session(&["CRANE"], 6);
        type_word(&mut s, "ABCDE");
        assert!(s.is_row_full());
        assert_eq!(s.current_col(), 4);

        s.enter('Z');
        assert_eq!(s.buffer()[4], Some('Z'));
        assert_eq!(s.current_col(), 4);
    }

    #[test]
    fn cursor_wraps_to_lowest_empty_cell() {
        let mut s = session(&["CRANE"], 6);
        assert!(s.select(0, 3));
        s.enter('X');
        assert_eq!(s.current_col(), 4);
        s.enter('Y');
        // Nothing empty to the right: wrap to column 0
        assert_eq!(s.current_col(), 0);
        s.enter('A');
        assert_eq!(s.current_col(), 1);
    }

    #[test]
    fn delete_clears_then_steps_back() {
        let mut s = session(&["CRANE"], 6);
        type_word(&mut s, "AB");
        assert_eq!(s.current_col(), 2);

        // Cell 2 is empty: step back and clear B
        assert!(s.delete());
        assert_eq!(s.current_col(), 1);
        assert_eq!(s.buffer()[1], None);

        assert!(s.delete());
        assert_eq!(s.current_col(), 0);
        assert_eq!(s.buffer()[0], None);

        // Nothing left to delete
        assert!(!s.delete());
        assert_eq!(s.current_col(), 0);
    }

    #[test]
    fn delete_clears_selected_filled_cell_in_place() {
        let mut s = session(&["CRANE"], 6);
        type_word(&mut s, "ABC");
        s.select(0, 1);
        assert!(s.delete());
        assert_eq!(s.current_col(), 1);
        assert_eq!(s.buffer()[..3], [Some('A'), None, Some('C')]);
    }

    #[test]
    fn clear_row_resets_buffer_and_cursor() {
        let mut session = session(&["CRANE"], 6);
        type_word(&mut session, "CRA");
        assert!(session.clear_row());
        assert!(session.buffer().iter().all(Option::is_none));
        assert_eq!(session.current_col(), 0);
        assert_eq!(session.current_row(), 0);
    }

    #[test]
    fn select_only_on_current_row() {
        let mut s = session(&["CRANE"], 6);
        assert!(!s.select(1, 0));
        assert!(!s.select(0, 5));
        assert!(s.select(0, 4));
        assert_eq!(s.current_col(), 4);
    }

    #[test]
    fn incomplete_row_is_rejected_without_change() {
        let mut s = session(&["CRANE"], 6);
        type_word(&mut s, "CRA");
        assert_eq!(s.submit(), Err(GuessError::IncompleteInput));
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.current_col(), 3);
        assert_eq!(s.status(), Status::Playing);
    }

    #[test]
    fn validator_rejection_leaves_state_alone() {
        let mut s = session(&["CRANE"], 6);
        type_word(&mut s, "ZZZZZ");
        let result = s.submit_with(|_| Err(GuessError::UnrecognizedGuess("ZZZZZ".into())));
        assert_eq!(result, Err(GuessError::UnrecognizedGuess("ZZZZZ".into())));
        assert_eq!(s.current_row(), 0);
        assert!(s.is_row_full());
    }

    #[test]
    fn accepted_guess_advances_row() {
        let mut s = session(&["CRANE"], 6);
        let submission = play(&mut s, "REACT");

        assert_eq!(submission.row, 0);
        assert_eq!(submission.scores.len(), 1);
        assert_eq!(
            submission.scores[0].1.feedback(),
            &[
                Feedback::Present,
                Feedback::Present,
                Feedback::Correct,
                Feedback::Present,
                Feedback::Absent
            ]
        );
        assert_eq!(s.current_row(), 1);
        assert_eq!(s.current_col(), 0);
        assert!(s.buffer().iter().all(Option::is_none));
        assert_eq!(s.status(), Status::Playing);
    }

    #[test]
    fn winning_single_board() {
        let mut s = session(&["CRANE"], 6);
        play(&mut s, "REACT");
        let submission = play(&mut s, "CRANE");

        assert_eq!(submission.status, Status::Won);
        assert_eq!(submission.solved, vec![0]);
        assert_eq!(s.boards()[0].solved_at(), Some(2));
        assert_eq!(s.current_row(), 2);
    }

    #[test]
    fn losing_when_budget_exhausted() {
        let mut s = session(&["CRANE"], 3);
        play(&mut s, "ABCDE");
        play(&mut s, "ABCDE");
        let submission = play(&mut s, "ABCDE");

        assert_eq!(submission.status, Status::Lost);
        assert_eq!(s.current_row(), s.max_rows());
    }

    #[test]
    fn winning_on_last_row_is_a_win() {
        let mut s = session(&["CRANE"], 2);
        play(&mut s, "ABCDE");
        assert_eq!(play(&mut s, "CRANE").status, Status::Won);
    }

    #[test]
    fn terminal_state_ignores_everything() {
        let mut s = session(&["CRANE"], 1);
        play(&mut s, "CRANE");
        assert_eq!(s.status(), Status::Won);

        assert!(!s.enter('A'));
        assert!(!s.delete());
        assert!(!s.select(1, 0));
        assert_eq!(s.submit(), Ok(None));
        assert_eq!(s.handle_input_with("A", |_| Ok(())), InputOutcome::Ignored);
        assert!(s.buffer().iter().all(Option::is_none));
    }

    #[test]
    fn multi_board_lockstep() {
        let mut s = session(&["CRANE", "LIVRO"], 7);
        let first = play(&mut s, "LIVRO");

        assert_eq!(first.scores.len(), 2);
        assert_eq!(first.solved, vec![1]);
        assert_eq!(first.status, Status::Playing);
        assert_eq!(s.unsolved().collect::<Vec<_>>(), vec![0]);

        // Solved board no longer receives guesses
        let second = play(&mut s, "CRANE");
        assert_eq!(second.scores.len(), 1);
        assert_eq!(second.scores[0].0, 0);
        assert_eq!(second.status, Status::Won);
        assert_eq!(s.boards()[1].history().len(), 1);
        assert_eq!(s.boards()[0].history().len(), 2);
    }

    #[test]
    fn multi_board_loses_with_one_unsolved() {
        let mut s = session(&["CRANE", "LIVRO"], 2);
        play(&mut s, "LIVRO");
        let last = play(&mut s, "ABCDE");
        assert_eq!(last.status, Status::Lost);
        assert!(s.boards()[1].is_solved());
        assert!(!s.boards()[0].is_solved());
    }

    #[test]
    fn termination_law_holds_throughout() {
        let mut s = session(&["CRANE", "LIVRO"], 4);
        for guess in ["ABCDE", "LIVRO", "FGHIJ", "KLMNO"] {
            play(&mut s, guess);
            let all_solved = s.boards().iter().all(Board::is_solved);
            let expected = if all_solved {
                Status::Won
            } else if s.current_row() == s.max_rows() {
                Status::Lost
            } else {
                Status::Playing
            };
            assert_eq!(s.status(), expected);
        }
        assert_eq!(s.status(), Status::Lost);
    }

    #[test]
    fn key_parsing() {
        assert_eq!(Key::<char>::parse("enter"), Some(Key::Submit));
        assert_eq!(Key::<char>::parse("Backspace"), Some(Key::Delete));
        assert_eq!(Key::<char>::parse("BKSP"), Some(Key::Delete));
        assert_eq!(Key::<char>::parse("del"), Some(Key::Delete));
        assert_eq!(Key::<char>::parse("q"), Some(Key::Symbol('Q')));
        assert_eq!(Key::<char>::parse("Shift"), None);
        assert_eq!(Key::<Digit>::parse("7"), Digit::new(7).map(Key::Symbol));
        assert_eq!(Key::<Digit>::parse("a"), None);
    }

    #[test]
    fn handle_input_drives_session() {
        let mut s = session(&["CRANE"], 6);
        assert_eq!(s.handle_input_with("c", |_| Ok(())), InputOutcome::Edited);
        assert_eq!(s.handle_input_with("F5", |_| Ok(())), InputOutcome::Ignored);
        assert_eq!(
            s.handle_input_with("ENTER", |_| Ok(())),
            InputOutcome::Rejected(GuessError::IncompleteInput)
        );
        for key in ["R", "A", "N", "E"] {
            s.handle_input_with(key, |_| Ok(()));
        }
        match s.handle_input_with("ENTER", |_| Ok(())) {
            InputOutcome::Submitted(submission) => assert_eq!(submission.status, Status::Won),
            other => panic!("expected submission, got {other:?}"),
        }
    }
}
