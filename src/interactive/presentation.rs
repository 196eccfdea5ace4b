//! Visible state built from due effects
//!
//! The session already holds the truth; this is what the player has been
//! shown of it so far (revealed tiles, keyboard colours, the toast).

use crate::core::{Feedback, Symbol};
use crate::game::{Effect, KeyboardState, Status};
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

type TileKey = (usize, usize, usize);

/// How a submitted tile is drawn right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    /// Scored but not turned yet
    Hidden,
    Flipping,
    Shown(Feedback),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Presentation<S> {
    shown: FxHashMap<TileKey, Feedback>,
    flipping: FxHashSet<TileKey>,
    solved: FxHashSet<usize>,
    shaking: Option<usize>,
    notice: Option<Notice>,
    keyboard: KeyboardState<S>,
    settled: Status,
    summary_due: bool,
}

impl<S> Default for Presentation<S> {
    fn default() -> Self {
        Self {
            shown: FxHashMap::default(),
            flipping: FxHashSet::default(),
            solved: FxHashSet::default(),
            shaking: None,
            notice: None,
            keyboard: KeyboardState::default(),
            settled: Status::Playing,
            summary_due: false,
        }
    }
}

impl<S: Symbol + Hash> Presentation<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, effect: Effect<S>) {
        match effect {
            Effect::Flip { board, row, col } => {
                self.flipping.insert((board, row, col));
            }
            Effect::Reveal {
                board,
                row,
                col,
                symbol,
                feedback,
            } => {
                self.flipping.remove(&(board, row, col));
                self.shown.insert((board, row, col), feedback);
                self.keyboard.record(symbol, feedback);
            }
            Effect::BoardSolved { board } => {
                self.solved.insert(board);
            }
            Effect::Shake { row } => self.shaking = Some(row),
            Effect::Unshake { row } => {
                if self.shaking == Some(row) {
                    self.shaking = None;
                }
            }
            Effect::DismissNotice { id } => {
                if self.notice.as_ref().is_some_and(|n| n.id == id) {
                    self.notice = None;
                }
            }
            Effect::Settled { status } => self.settled = status,
            Effect::ShowSummary => self.summary_due = true,
        }
    }

    /// Replace the toast
    pub fn show_notice(&mut self, id: u64, text: impl Into<String>) {
        self.notice = Some(Notice {
            id,
            text: text.into(),
        });
    }

    #[must_use]
    pub fn tile(&self, board: usize, row: usize, col: usize) -> TileState {
        let key = (board, row, col);
        if let Some(&feedback) = self.shown.get(&key) {
            TileState::Shown(feedback)
        } else if self.flipping.contains(&key) {
            TileState::Flipping
        } else {
            TileState::Hidden
        }
    }

    #[must_use]
    pub fn is_board_solved(&self, board: usize) -> bool {
        self.solved.contains(&board)
    }

    #[must_use]
    pub const fn shaking_row(&self) -> Option<usize> {
        self.shaking
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState<S> {
        &self.keyboard
    }

    /// Status as far as the reveal has got
    #[must_use]
    pub const fn settled(&self) -> Status {
        self.settled
    }

    /// True once after the summary fell due
    pub fn take_summary(&mut self) -> bool {
        std::mem::take(&mut self.summary_due)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
