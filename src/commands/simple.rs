//! Simple interactive CLI mode
//!
//! Line-based word game without TUI

use crate::core::{Word, WordError};
use crate::game::word_game::{INCOMPLETE_NOTICE, UNRECOGNIZED_NOTICE};
use crate::game::{InputOutcome, Status, WordGame, WordMode, share::share_text};
use crate::output::{print_record, print_submission};
use crate::stats::{Outcome, StatsTracker};
use crate::wordlists::Dictionary;
use colored::Colorize;
use log::{debug, warn};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    NewGame,
    Quit,
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    mode: WordMode,
    rng: &mut R,
    stats: &mut StatsTracker<WordMode>,
) -> Result<(), String> {
    let stdin = io::stdin();
    play_simple(&mut stdin.lock(), dictionary, mode, rng, stats)
}

/// Play rounds reading guesses and commands from `input`
///
/// # Errors
///
/// Returns an error if reading `input` or flushing stdout fails.
pub fn play_simple<I: BufRead, R: Rng + ?Sized>(
    input: &mut I,
    dictionary: &Dictionary,
    mode: WordMode,
    rng: &mut R,
    stats: &mut StatsTracker<WordMode>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Termo - Modo Texto                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Digite uma palavra de cinco letras e tecle Enter. Acentos são opcionais.");
    println!("Comandos: 'sair' para terminar, 'novo' para um novo jogo\n");

    loop {
        let mut game = WordGame::new(dictionary, mode, rng);

        match play_round(input, &mut game, stats)? {
            RoundEnd::Quit => {
                println!("\n👋 Obrigado por jogar!\n");
                return Ok(());
            }
            RoundEnd::NewGame => println!("\n🔄 Novo jogo!\n"),
            RoundEnd::Finished => {
                let answer = get_user_input(input, "Jogar de novo? (s/n)")?.map(|a| a.to_lowercase());
                if !matches!(answer.as_deref(), Some("sim" | "s" | "yes" | "y")) {
                    println!("\n👋 Obrigado por jogar!\n");
                    return Ok(());
                }
                println!("\n🔄 Novo jogo!\n");
            }
        }
    }
}

fn play_round<I: BufRead>(
    input: &mut I,
    game: &mut WordGame,
    stats: &mut StatsTracker<WordMode>,
) -> Result<RoundEnd, String> {
    let mode = game.mode();
    println!(
        "{} - descubra {} em {} tentativas",
        format!("Termo {}", mode.name()).bright_cyan().bold(),
        if mode.boards() == 1 {
            "a palavra".to_string()
        } else {
            format!("as {} palavras", mode.boards())
        },
        mode.max_attempts()
    );

    loop {
        let session = game.session();
        let prompt = format!("Palpite {}/{}", session.current_row() + 1, session.max_rows());

        let Some(line) = get_user_input(input, &prompt)? else {
            return Ok(RoundEnd::Quit);
        };
        match line.to_lowercase().as_str() {
            "sair" | "quit" | "q" | "exit" => return Ok(RoundEnd::Quit),
            "novo" | "new" | "n" => return Ok(RoundEnd::NewGame),
            _ => {}
        }

        let word = match Word::new(&line) {
            Ok(word) => word,
            Err(e) => {
                debug!("rejected {line:?}: {e}");
                let notice = match e {
                    WordError::InvalidLength(_) => INCOMPLETE_NOTICE,
                    WordError::InvalidCharacters => UNRECOGNIZED_NOTICE,
                };
                println!("❌ {notice}\n");
                continue;
            }
        };

        game.clear_row();
        for ch in word.normalized().chars() {
            game.handle_input(&ch.to_string());
        }

        match game.handle_input("ENTER") {
            InputOutcome::Submitted(submission) => {
                print_submission(&submission, mode.boards());
                println!();
                if submission.status.is_terminal() {
                    finish(game, stats);
                    return Ok(RoundEnd::Finished);
                }
            }
            InputOutcome::Rejected(err) => println!("❌ {}\n", WordGame::notice(&err)),
            InputOutcome::Ignored | InputOutcome::Edited => {}
        }
    }
}

fn finish(game: &WordGame, stats: &mut StatsTracker<WordMode>) {
    let mode = game.mode();
    let status = game.status();
    let attempts = game.session().current_row();

    if status == Status::Won {
        println!("{}", "🎉 Excelente!".bright_green().bold());
    } else {
        let words: Vec<&str> = game.unsolved_secrets().into_iter().map(Word::text).collect();
        println!("{} {}", "As palavras eram:".red().bold(), words.join(", ").bright_white().bold());
    }

    if let Some(outcome) = Outcome::from_status(status, attempts)
        && let Err(e) = stats.record(mode, outcome)
    {
        warn!("Could not save statistics: {e}");
    }

    println!("\n{}", share_text(mode, game.session()));
    println!();
    print_record(mode.name(), &stats.get(mode));
    println!();
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<I: BufRead>(input: &mut I, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| line.trim().to_string()))
}
