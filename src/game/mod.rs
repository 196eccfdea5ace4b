//! Game sessions
//!
//! The session state machine shared by both games, the two game front-doors
//! that configure it, and the presentation helpers that project its state.

mod board;
pub mod code_game;
pub mod effects;
mod error;
pub mod keyboard;
mod mode;
mod session;
pub mod share;
pub mod word_game;

pub use board::Board;
pub use code_game::CodeGame;
pub use effects::{Effect, EffectQueue, RevealTiming, ScheduledEffect};
pub use error::GuessError;
pub use keyboard::KeyboardState;
pub use mode::{Difficulty, WordMode};
pub use session::{InputOutcome, Key, Session, Status, Submission};
pub use word_game::WordGame;
