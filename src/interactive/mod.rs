//! Interactive terminal UI for both games

mod app;
mod presentation;
mod rendering;

pub use app::{ActiveGame, App, Overlay, run_tui};
pub use presentation::{Notice, Presentation, TileState};
