//! Cross-session statistics
//!
//! Counters are kept per game key (word mode or code difficulty), loaded once
//! at start-up and saved as a whole after every finished game.

mod preferences;
mod record;
mod store;

pub use preferences::Preferences;
pub use record::{GameKey, Outcome, StatsBook, StatsRecord};
pub use store::{JsonFileStore, MemoryStore, StatsStore, StatsTracker};
