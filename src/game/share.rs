//! Shareable summary of a finished word game

use super::mode::WordMode;
use super::session::{Session, Status};
use crate::core::Symbol;

/// Build the text a player shares after a game
///
/// The title carries the mode and the attempt count (`X` unless won). Mono
/// games add one emoji line per attempt; multi-board games only say whether
/// the player won.
///
/// # Examples
/// ```
/// use termo::game::{Session, WordMode, share::share_text};
///
/// let mut session = Session::new(vec!["LIVRO".chars().collect()], 6);
/// for ch in "LIVRO".chars() {
///     session.enter(ch);
/// }
/// session.submit().unwrap();
///
/// assert_eq!(
///     share_text(WordMode::Mono, &session),
///     "Termo Infinito (Mono) 1/6\n\n🟩🟩🟩🟩🟩\n"
/// );
/// ```
#[must_use]
pub fn share_text<S: Symbol>(mode: WordMode, session: &Session<S>) -> String {
    let won = session.status() == Status::Won;
    let attempts = if won {
        session.current_row().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!(
        "Termo Infinito ({}) {attempts}/{}\n\n",
        mode.name(),
        mode.max_attempts()
    );

    if mode == WordMode::Mono {
        if let Some(board) = session.boards().first() {
            for (_, score) in board.history() {
                text.push_str(&score.to_emoji());
                text.push('\n');
            }
        }
    } else {
        let verdict = if won { "venci" } else { "perdi" };
        text.push_str(&format!("Joguei o modo {} e {verdict}!", mode.name()));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(secrets: &[&str], guesses: &[&str], max_rows: usize) -> Session<char> {
        let mut session = Session::new(
            secrets.iter().map(|s| s.chars().collect()).collect(),
            max_rows,
        );
        for guess in guesses {
            for ch in guess.chars() {
                session.enter(ch);
            }
            session.submit().unwrap();
        }
        session
    }

    #[test]
    fn mono_win_lists_rows() {
        let session = play(&["CRANE"], &["REACT", "CRANE"], 6);
        assert_eq!(
            share_text(WordMode::Mono, &session),
            "Termo Infinito (Mono) 2/6\n\n🟨🟨🟩🟨⬛\n🟩🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn mono_loss_uses_x() {
        let session = play(&["CRANE"], &["ABCDE", "ABCDE"], 2);
        let text = share_text(WordMode::Mono, &session);
        assert!(text.starts_with("Termo Infinito (Mono) X/6\n\n"));
        assert_eq!(text.lines().filter(|l| !l.is_empty()).count(), 3);
    }

    #[test]
    fn multi_board_degrades_to_sentence() {
        let session = play(&["CRANE", "LIVRO"], &["LIVRO", "CRANE"], 7);
        assert_eq!(
            share_text(WordMode::Duo, &session),
            "Termo Infinito (Dueto) 2/7\n\nJoguei o modo Dueto e venci!"
        );

        let session = play(&["CRANE", "LIVRO", "NUVEM", "PATIO"], &["LIVRO"], 1);
        assert_eq!(
            share_text(WordMode::Quartet, &session),
            "Termo Infinito (Quarteto) X/9\n\nJoguei o modo Quarteto e perdi!"
        );
    }
}
