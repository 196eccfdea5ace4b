//! Scheduled cosmetic effects
//!
//! Game state changes synchronously when a guess is submitted. The staggered
//! tile reveal, shakes and toast dismissal are queued here as timed effects
//! that the front-end applies as they fall due. They never touch the session.
//!
//! Times are offsets from an origin owned by the caller (for the TUI, the
//! `Instant` it started at), which keeps the queue clock-free and testable.

use super::session::{Status, Submission};
use crate::core::Feedback;
use std::time::Duration;

/// How long a toast stays visible
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);
/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// A visual change to apply at some point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<S> {
    /// Tile starts turning over
    Flip { board: usize, row: usize, col: usize },
    /// Tile shows its feedback; the keyboard key is updated with it
    Reveal {
        board: usize,
        row: usize,
        col: usize,
        symbol: S,
        feedback: Feedback,
    },
    /// Board gets its solved highlight
    BoardSolved { board: usize },
    Shake { row: usize },
    Unshake { row: usize },
    /// Hide the toast with this id, unless a newer one replaced it
    DismissNotice { id: u64 },
    /// Reveal finished; the outcome can be announced
    Settled { status: Status },
    /// Open the statistics panel after a finished game
    ShowSummary,
}

/// An effect and the time it falls due
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEffect<S> {
    pub due: Duration,
    pub effect: Effect<S>,
}

/// Reveal choreography delays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Delay between consecutive tiles
    pub stagger: Duration,
    /// Flip to reveal delay for one tile
    pub flip: Duration,
    /// After the last tile starts, delay before solved boards light up
    pub solved: Duration,
    /// After the last tile starts, delay before the outcome is settled
    pub settle: Duration,
    /// After settling a finished game, delay before the summary opens
    pub summary: Duration,
}

impl RevealTiming {
    pub const WORD: Self = Self {
        stagger: Duration::from_millis(150),
        flip: Duration::from_millis(300),
        solved: Duration::from_millis(400),
        settle: Duration::from_millis(500),
        summary: Duration::from_millis(1500),
    };

    pub const CODE: Self = Self {
        stagger: Duration::from_millis(150),
        flip: Duration::from_millis(250),
        solved: Duration::from_millis(400),
        settle: Duration::from_millis(600),
        summary: Duration::from_millis(1500),
    };
}

/// Pending effects, in no particular order
#[derive(Debug, Clone)]
pub struct EffectQueue<S> {
    pending: Vec<ScheduledEffect<S>>,
    next_notice: u64,
}

impl<S> Default for EffectQueue<S> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_notice: 0,
        }
    }
}

impl<S: Copy> EffectQueue<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Duration, delay: Duration, effect: Effect<S>) {
        self.pending.push(ScheduledEffect {
            due: now + delay,
            effect,
        });
    }

    /// Queue the tile-by-tile reveal of an accepted guess
    pub fn schedule_reveal(&mut self, now: Duration, submission: &Submission<S>, timing: RevealTiming) {
        let row = submission.row;
        let cols = submission.guess.len() as u32;

        for (board, score) in &submission.scores {
            for (col, (&symbol, &feedback)) in submission
                .guess
                .iter()
                .zip(score.feedback())
                .enumerate()
            {
                let start = timing.stagger * col as u32;
                self.schedule(now, start, Effect::Flip { board: *board, row, col });
                self.schedule(
                    now,
                    start + timing.flip,
                    Effect::Reveal {
                        board: *board,
                        row,
                        col,
                        symbol,
                        feedback,
                    },
                );
            }
        }

        let last = timing.stagger * cols;
        for &board in &submission.solved {
            self.schedule(now, last + timing.solved, Effect::BoardSolved { board });
        }

        let settle = last + timing.settle;
        self.schedule(
            now,
            settle,
            Effect::Settled {
                status: submission.status,
            },
        );
        if submission.status.is_terminal() {
            self.schedule(now, settle + timing.summary, Effect::ShowSummary);
        }
    }

    /// Shake a rejected row
    pub fn schedule_shake(&mut self, now: Duration, row: usize) {
        self.schedule(now, Duration::ZERO, Effect::Shake { row });
        self.schedule(now, SHAKE_DURATION, Effect::Unshake { row });
    }

    /// Queue the dismissal of a new toast and return its id
    pub fn schedule_notice(&mut self, now: Duration) -> u64 {
        self.next_notice += 1;
        let id = self.next_notice;
        self.schedule(now, NOTICE_DURATION, Effect::DismissNotice { id });
        id
    }

    /// Remove and return the effects due at `now`, earliest first
    pub fn drain_due(&mut self, now: Duration) -> Vec<Effect<S>> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|e| e.due <= now);
        self.pending = pending;
        due.sort_by_key(|e| e.due);
        due.into_iter().map(|e| e.effect).collect()
    }

    /// Drop every pending effect (new game)
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// When the next effect falls due
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|e| e.due).min()
    }
}
