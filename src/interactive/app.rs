//! TUI application state and logic

use super::presentation::Presentation;
use crate::config::Config;
use crate::core::{Digit, Symbol, Word};
use crate::game::{
    CodeGame, Difficulty, Effect, EffectQueue, GuessError, InputOutcome, RevealTiming, Status,
    Submission, WordGame, WordMode, code_game, share::share_text,
};
use crate::stats::{GameKey, Outcome, Preferences, StatsTracker};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::hash::Hash;
use std::io;
use std::time::{Duration, Instant};

/// Key poll timeout; effects are drained at least this often
const TICK: Duration = Duration::from_millis(50);
const WIN_NOTICE: &str = "Excelente!";
const SHARE_UNAVAILABLE: &str = "Termine uma partida de palavras para compartilhar";
/// Asked before a difficulty change throws away a code game in progress
pub const RESTART_QUESTION: &str = "Isso reiniciará o jogo atual. Continuar?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveGame {
    Word,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    Stats,
    Share,
    /// Waiting for the player to accept a restart at this difficulty
    ConfirmRestart(Difficulty),
}

/// Pending effects and visible state of one game
pub struct Table<S> {
    pub view: Presentation<S>,
    effects: EffectQueue<S>,
}

impl<S: Symbol + Hash> Table<S> {
    fn new() -> Self {
        Self {
            view: Presentation::new(),
            effects: EffectQueue::new(),
        }
    }

    /// Forget the previous game, including effects still pending
    fn reset(&mut self) {
        self.effects.clear();
        self.view.reset();
    }

    fn notify(&mut self, now: Duration, text: impl Into<String>) {
        let id = self.effects.schedule_notice(now);
        self.view.show_notice(id, text);
    }

    /// Schedule the effects of a key press, returning the accepted guess
    fn absorb(
        &mut self,
        now: Duration,
        outcome: InputOutcome<S>,
        row: usize,
        notice: impl Fn(&GuessError) -> &'static str,
        timing: RevealTiming,
    ) -> Option<Submission<S>> {
        match outcome {
            InputOutcome::Rejected(err) => {
                debug!("guess rejected: {err}");
                self.notify(now, notice(&err));
                self.effects.schedule_shake(now, row);
                None
            }
            InputOutcome::Submitted(submission) => {
                self.effects.schedule_reveal(now, &submission, timing);
                Some(submission)
            }
            InputOutcome::Ignored | InputOutcome::Edited => None,
        }
    }

    /// Apply due effects; returns the final status once its reveal settles
    fn tick(&mut self, now: Duration) -> Option<Status> {
        let mut finished = None;
        for effect in self.effects.drain_due(now) {
            if let Effect::Settled { status } = effect
                && status.is_terminal()
            {
                finished = Some(status);
            }
            self.view.apply(effect);
        }
        finished
    }
}

fn record_result<K: GameKey>(tracker: &mut StatsTracker<K>, key: K, status: Status, attempts: usize) {
    if let Some(outcome) = Outcome::from_status(status, attempts)
        && let Err(e) = tracker.record(key, outcome)
    {
        warn!("Could not save {key} statistics: {e}");
    }
}

/// Application state
pub struct App<'a> {
    config: Config,
    rng: StdRng,
    dictionary: &'a Dictionary,
    preferences: Preferences,
    word_stats: StatsTracker<WordMode>,
    code_stats: StatsTracker<Difficulty>,
    pub word: WordGame<'a>,
    pub word_table: Table<char>,
    pub code: CodeGame,
    pub code_table: Table<Digit>,
    pub active: ActiveGame,
    pub overlay: Option<Overlay>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Start both games with the remembered mode and difficulty
    pub fn new(config: Config, dictionary: &'a Dictionary, mut rng: StdRng, active: ActiveGame) -> Self {
        let preferences = config.load_preferences();
        let word = WordGame::new(dictionary, preferences.word_mode, &mut rng);
        let code = CodeGame::new(preferences.difficulty, &mut rng);
        let word_stats = config.stats_tracker();
        let code_stats = config.stats_tracker();

        let mut app = Self {
            config,
            rng,
            dictionary,
            preferences,
            word_stats,
            code_stats,
            word,
            word_table: Table::new(),
            code,
            code_table: Table::new(),
            active,
            overlay: None,
            should_quit: false,
        };
        app.show_help_once();
        app
    }

    #[must_use]
    pub const fn word_stats(&self) -> &StatsTracker<WordMode> {
        &self.word_stats
    }

    #[must_use]
    pub const fn code_stats(&self) -> &StatsTracker<Difficulty> {
        &self.code_stats
    }

    /// Status of the game on screen
    #[must_use]
    pub const fn status(&self) -> Status {
        match self.active {
            ActiveGame::Word => self.word.status(),
            ActiveGame::Code => self.code.status(),
        }
    }

    /// Share text of the finished word game
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.word
            .status()
            .is_terminal()
            .then(|| share_text(self.word.mode(), self.word.session()))
    }

    /// Feed a raw key name to the active game
    pub fn press(&mut self, key: &str, now: Duration) {
        match self.active {
            ActiveGame::Word => {
                let row = self.word.session().current_row();
                let outcome = self.word.handle_input(key);
                if let Some(submission) =
                    self.word_table
                        .absorb(now, outcome, row, WordGame::notice, RevealTiming::WORD)
                    && submission.status.is_terminal()
                {
                    let attempts = self.word.session().current_row();
                    record_result(&mut self.word_stats, self.word.mode(), submission.status, attempts);
                }
            }
            ActiveGame::Code => {
                let row = self.code.session().current_row();
                let outcome = self.code.handle_input(key);
                if let Some(submission) = self.code_table.absorb(
                    now,
                    outcome,
                    row,
                    |_| code_game::INCOMPLETE_NOTICE,
                    RevealTiming::CODE,
                ) && submission.status.is_terminal()
                {
                    let attempts = self.code.session().current_row();
                    record_result(
                        &mut self.code_stats,
                        self.code.difficulty(),
                        submission.status,
                        attempts,
                    );
                }
            }
        }
    }

    /// Apply every effect due at `now`
    pub fn tick(&mut self, now: Duration) {
        if let Some(status) = self.word_table.tick(now) {
            let text = if status == Status::Won {
                WIN_NOTICE.to_string()
            } else {
                let words: Vec<&str> = self
                    .word
                    .unsolved_secrets()
                    .into_iter()
                    .map(Word::text)
                    .collect();
                format!("As palavras eram: {}", words.join(", "))
            };
            self.word_table.notify(now, text);
        }
        if let Some(status) = self.code_table.tick(now) {
            let text = if status == Status::Won {
                WIN_NOTICE.to_string()
            } else {
                format!("O código era: {}", self.code.secret())
            };
            self.code_table.notify(now, text);
        }

        let word_summary = self.word_table.view.take_summary();
        let code_summary = self.code_table.view.take_summary();
        let summary_due = match self.active {
            ActiveGame::Word => word_summary,
            ActiveGame::Code => code_summary,
        };
        if summary_due && self.overlay.is_none() {
            self.overlay = Some(Overlay::Stats);
        }
    }

    /// Replace the active game with a fresh one
    pub fn new_game(&mut self) {
        match self.active {
            ActiveGame::Word => self.restart_word(),
            ActiveGame::Code => self.restart_code(),
        }
        self.overlay = None;
    }

    pub fn switch_game(&mut self) {
        self.active = match self.active {
            ActiveGame::Word => ActiveGame::Code,
            ActiveGame::Code => ActiveGame::Word,
        };
        self.overlay = None;
        self.show_help_once();
    }

    /// Play `mode` from now on, starting a new word game
    pub fn set_word_mode(&mut self, mode: WordMode) {
        if self.preferences.word_mode != mode {
            self.preferences.word_mode = mode;
            self.config.save_preferences(&self.preferences);
        }
        self.restart_word();
    }

    /// Play `difficulty` from now on, starting a new code game
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.preferences.difficulty != difficulty {
            self.preferences.difficulty = difficulty;
            self.config.save_preferences(&self.preferences);
        }
        self.restart_code();
    }

    /// Change difficulty, asking first if a started code game would be lost
    pub fn request_difficulty(&mut self, difficulty: Difficulty) {
        let in_progress =
            self.code.status() == Status::Playing && self.code.session().current_row() > 0;
        if in_progress {
            self.overlay = Some(Overlay::ConfirmRestart(difficulty));
        } else {
            self.set_difficulty(difficulty);
            self.overlay = None;
        }
    }

    /// Move to the next mode or difficulty and start over
    pub fn cycle_mode(&mut self) {
        match self.active {
            ActiveGame::Word => {
                self.set_word_mode(next_of(&WordMode::ALL, self.preferences.word_mode));
                self.overlay = None;
            }
            ActiveGame::Code => {
                self.request_difficulty(next_of(&Difficulty::ALL, self.preferences.difficulty));
            }
        }
    }

    fn restart_word(&mut self) {
        self.word = WordGame::new(self.dictionary, self.preferences.word_mode, &mut self.rng);
        self.word_table.reset();
    }

    fn restart_code(&mut self) {
        self.code = CodeGame::new(self.preferences.difficulty, &mut self.rng);
        self.code_table.reset();
    }

    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == Some(overlay) {
            None
        } else {
            Some(overlay)
        };
    }

    /// Open the share text, or explain why there is none
    pub fn share(&mut self, now: Duration) {
        if self.active == ActiveGame::Word && self.share_text().is_some() {
            self.overlay = Some(Overlay::Share);
        } else {
            match self.active {
                ActiveGame::Word => self.word_table.notify(now, SHARE_UNAVAILABLE),
                ActiveGame::Code => self.code_table.notify(now, SHARE_UNAVAILABLE),
            }
        }
    }

    /// Move the cursor within the current row
    pub fn move_cursor(&mut self, forward: bool) {
        let (row, col) = match self.active {
            ActiveGame::Word => (self.word.session().current_row(), self.word.session().current_col()),
            ActiveGame::Code => (self.code.session().current_row(), self.code.session().current_col()),
        };
        let Some(target) = (if forward { col.checked_add(1) } else { col.checked_sub(1) }) else {
            return;
        };
        match self.active {
            ActiveGame::Word => self.word.select(row, target),
            ActiveGame::Code => self.code.select(row, target),
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Duration) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('s') => self.share(now),
                _ => {}
            }
            return;
        }

        if let Some(Overlay::ConfirmRestart(difficulty)) = self.overlay {
            match key.code {
                KeyCode::Enter | KeyCode::Char('s' | 'S' | 'y' | 'Y') => {
                    self.set_difficulty(difficulty);
                    self.overlay = None;
                }
                KeyCode::Esc | KeyCode::Char('n' | 'N') => self.overlay = None,
                _ => {}
            }
            return;
        }

        if let Some(overlay) = self.overlay {
            match key.code {
                KeyCode::Esc => self.overlay = None,
                KeyCode::Enter if overlay == Overlay::Stats && self.status().is_terminal() => {
                    self.new_game();
                }
                KeyCode::Enter => self.overlay = None,
                KeyCode::F(1) => self.toggle_overlay(Overlay::Help),
                KeyCode::F(2) => self.toggle_overlay(Overlay::Stats),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.switch_game(),
            KeyCode::F(1) => self.toggle_overlay(Overlay::Help),
            KeyCode::F(2) => self.toggle_overlay(Overlay::Stats),
            KeyCode::F(3) => self.cycle_mode(),
            KeyCode::F(5) => self.new_game(),
            KeyCode::Left => self.move_cursor(false),
            KeyCode::Right => self.move_cursor(true),
            KeyCode::Enter if self.status().is_terminal() => self.new_game(),
            KeyCode::Enter => self.press("ENTER", now),
            KeyCode::Backspace | KeyCode::Delete => self.press("BKSP", now),
            KeyCode::Char(c) => self.press(&c.to_string(), now),
            _ => {}
        }
    }

    fn show_help_once(&mut self) {
        let seen = match self.active {
            ActiveGame::Word => &mut self.preferences.word_help_seen,
            ActiveGame::Code => &mut self.preferences.code_help_seen,
        };
        if !*seen {
            *seen = true;
            self.overlay = Some(Overlay::Help);
            self.config.save_preferences(&self.preferences);
        }
    }
}

fn next_of<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let index = all.iter().position(|&x| x == current).unwrap_or(0);
    all[(index + 1) % all.len()]
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let start = Instant::now();

    loop {
        app.tick(start.elapsed());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, start.elapsed());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::word_game::UNRECOGNIZED_NOTICE;
    use rand::SeedableRng;

    fn app(dictionary: &Dictionary, active: ActiveGame) -> App<'_> {
        let config = Config::new(std::env::temp_dir().join("termo-unused"), false);
        let mut app = App::new(config, dictionary, StdRng::seed_from_u64(11), active);
        app.overlay = None;
        app
    }

    fn type_word(app: &mut App, word: &str, now: Duration) {
        for ch in word.chars() {
            app.press(&ch.to_string(), now);
        }
        app.press("ENTER", now);
    }

    fn press_key(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), secs(0));
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn first_visit_shows_help() {
        let dictionary = Dictionary::embedded();
        let config = Config::new(std::env::temp_dir().join("termo-unused"), false);
        let mut app = App::new(config, &dictionary, StdRng::seed_from_u64(1), ActiveGame::Word);
        assert_eq!(app.overlay, Some(Overlay::Help));

        app.overlay = None;
        app.switch_game();
        assert_eq!(app.overlay, Some(Overlay::Help));

        app.switch_game();
        assert_eq!(app.overlay, None);
    }

    #[test]
    fn winning_word_game_records_once_and_opens_summary() {
        let dictionary = Dictionary::embedded();
        let mut app = app(&dictionary, ActiveGame::Word);
        let secret = app.word.secrets()[0].normalized().to_string();

        type_word(&mut app, &secret, secs(0));
        assert_eq!(app.word.status(), Status::Won);
        assert_eq!(app.word_stats().get(WordMode::Mono).wins, 1);

        // Further input after the end changes nothing
        type_word(&mut app, &secret, secs(0));
        assert_eq!(app.word_stats().get(WordMode::Mono).played, 1);

        // Reveal settles at 5 * 150 + 500 ms, the summary 1500 ms later
        app.tick(secs(2));
        assert_eq!(app.word_table.view.notice(), Some(WIN_NOTICE));
        assert_eq!(app.overlay, None);

        app.tick(secs(3));
        assert_eq!(app.overlay, Some(Overlay::Stats));
        assert!(app.share_text().unwrap().contains("1/6"));
    }

    #[test]
    fn unknown_word_shakes_with_notice() {
        let dictionary = Dictionary::embedded();
        let mut app = app(&dictionary, ActiveGame::Word);

        type_word(&mut app, "ZZZZZ", secs(0));
        app.tick(secs(0));
        assert_eq!(app.word_table.view.notice(), Some(UNRECOGNIZED_NOTICE));
        assert_eq!(app.word_table.view.shaking_row(), Some(0));
        assert_eq!(app.word.session().current_row(), 0);

        app.tick(secs(3));
        assert_eq!(app.word_table.view.notice(), None);
        assert_eq!(app.word_table.view.shaking_row(), None);
    }

    #[test]
    fn lost_code_game_reveals_code() {
        let dictionary = Dictionary::embedded();
        let mut app = app(&dictionary, ActiveGame::Code);
        let secret = app.code.secret().to_string();
        let wrong: String = secret
            .chars()
            .map(|c| {
                let d = c.to_digit(10).unwrap();
                char::from_digit((d + 1) % 10, 10).unwrap()
            })
            .collect();

        for _ in 0..Difficulty::Easy.max_attempts() {
            type_word(&mut app, &wrong, secs(0));
        }
        assert_eq!(app.code.status(), Status::Lost);
        assert_eq!(app.code_stats().get(Difficulty::Easy).played, 1);

        app.tick(secs(2));
        assert_eq!(
            app.code_table.view.notice(),
            Some(format!("O código era: {secret}").as_str())
        );
    }

    #[test]
    fn new_game_drops_pending_reveal() {
        let dictionary = Dictionary::embedded();
        let mut app = app(&dictionary, ActiveGame::Word);
        let guess = dictionary.words()[0].normalized().to_string();

        type_word(&mut app, &guess, secs(0));
        assert_eq!(app.word.session().current_row(), 1);

        app.new_game();
        app.tick(secs(10));
        assert_eq!(app.word.session().current_row(), 0);
        assert_eq!(
            app.word_table.view.tile(0, 0, 0),
            super::super::presentation::TileState::Hidden
        );
        assert!(app.word_table.view.keyboard().get(guess.chars().next().unwrap()).is_none());
    }

    #[test]
    fn cycling_mode_starts_bigger_game() {
        let dictionary = Dictionary::embedded();
        let mut app = app(&dictionary, ActiveGame::Word);
        app.cycle_mode();
        assert_eq!(app.word.mode(), WordMode::Duo);
        assert_eq!(app.word.session().boards().len(), 2);

        app.switch_game();
        app.overlay = None;
        app.cycle_mode();
        assert_eq!(app.code.difficulty(), Difficulty::Medium);
        assert_eq!(app.code.secret().len(), 5);
    }

    #[test]
    fn difficulty_change_mid_game_asks_first() {
        let dictionary = Dictionary::embedded();
        let mut app = app(&dictionary, ActiveGame::Code);

        type_word(&mut app, "0000", secs(0));
        if app.code.status() == Status::Won {
            return;
        }
        let secret = app.code.secret().to_string();

        press_key(&mut app, KeyCode::F(3));
        assert_eq!(app.overlay, Some(Overlay::ConfirmRestart(Difficulty::Medium)));

        // Declining keeps the game and its guesses
        press_key(&mut app, KeyCode::Char('n'));
        assert_eq!(app.overlay, None);
        assert_eq!(app.code.difficulty(), Difficulty::Easy);
        assert_eq!(app.code.session().current_row(), 1);
        assert_eq!(app.code.secret().to_string(), secret);

        press_key(&mut app, KeyCode::F(3));
        press_key(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, None);
        assert_eq!(app.code.difficulty(), Difficulty::Medium);
        assert_eq!(app.code.session().current_row(), 0);
    }

    #[test]
    fn explicit_mode_keeps_help_open() {
        let dictionary = Dictionary::embedded();
        let config = Config::new(std::env::temp_dir().join("termo-unused"), false);
        let mut app = App::new(config, &dictionary, StdRng::seed_from_u64(2), ActiveGame::Word);
        app.set_word_mode(WordMode::Quartet);

        assert_eq!(app.overlay, Some(Overlay::Help));
        assert_eq!(app.word.secrets().len(), 4);
        assert_eq!(app.word.session().max_rows(), 9);
    }

    #[test]
    fn share_needs_finished_word_game() {
        let dictionary = Dictionary::embedded();
        let mut app = app(&dictionary, ActiveGame::Word);
        app.share(secs(0));
        assert_eq!(app.overlay, None);
        assert_eq!(app.word_table.view.notice(), Some(SHARE_UNAVAILABLE));
    }
}
