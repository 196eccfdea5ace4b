//! Termo - CLI
//!
//! Word and code guessing games with a TUI, a text mode and one-shot commands.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use termo::{
    commands::{run_simple, score_codes, score_words, show_stats},
    config::Config,
    game::{Difficulty, WordMode},
    interactive::{ActiveGame, App, run_tui},
    output::print_score,
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "termo",
    about = "Guess five-letter words on 1, 2 or 4 boards, or crack a digit code",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for statistics and preferences [default: $XDG_DATA_HOME/termo]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Keep statistics and preferences in memory only
    #[arg(long, global = true)]
    no_save: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Word game TUI (default)
    Play {
        /// Boards: 1 (mono), 2 (dueto) or 4 (quarteto) [default: last used]
        #[arg(short, long)]
        mode: Option<WordMode>,
    },

    /// Code game TUI
    Code {
        /// easy (4 digits, 6 tries), medium (5, 8) or hard (5, 6) [default: last used]
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Word game in plain text mode
    Simple {
        /// Boards: 1, 2 or 4 [default: last used]
        #[arg(short, long)]
        mode: Option<WordMode>,
    },

    /// Score a guess against a secret
    Score {
        guess: String,
        secret: String,

        /// Treat both as digit codes
        #[arg(short, long)]
        digits: bool,
    },

    /// Show saved statistics
    Stats,
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded(),
        path => Dictionary::new(
            load_from_file(path).with_context(|| format!("Could not read word list {path}"))?,
        ),
    };

    let needed = WordMode::Quartet.boards();
    if dictionary.len() < needed {
        bail!(
            "Word list needs at least {needed} distinct five-letter words, found {}",
            dictionary.len()
        );
    }
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(Config::default_data_dir);
    let config = Config::new(data_dir, !cli.no_save);
    let rng = cli
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    match cli.command.unwrap_or(Commands::Play { mode: None }) {
        Commands::Play { mode } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let mut app = App::new(config, &dictionary, rng, ActiveGame::Word);
            if let Some(mode) = mode {
                app.set_word_mode(mode);
            }
            run_tui(app)
        }
        Commands::Code { difficulty } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let mut app = App::new(config, &dictionary, rng, ActiveGame::Code);
            if let Some(difficulty) = difficulty {
                app.set_difficulty(difficulty);
            }
            run_tui(app)
        }
        Commands::Simple { mode } => run_simple_command(&config, &cli.wordlist, mode, rng),
        Commands::Score {
            guess,
            secret,
            digits,
        } => run_score_command(&guess, &secret, digits),
        Commands::Stats => {
            show_stats(&config);
            Ok(())
        }
    }
}

fn run_simple_command(
    config: &Config,
    wordlist: &str,
    mode: Option<WordMode>,
    mut rng: StdRng,
) -> Result<()> {
    let dictionary = load_dictionary(wordlist)?;
    let mut preferences = config.load_preferences();
    if let Some(mode) = mode {
        preferences.word_mode = mode;
        config.save_preferences(&preferences);
    }

    let mut stats = config.stats_tracker();
    run_simple(&dictionary, preferences.word_mode, &mut rng, &mut stats)
        .map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(guess: &str, secret: &str, digits: bool) -> Result<()> {
    if digits {
        let result = score_codes(guess, secret).map_err(|e| anyhow::anyhow!(e))?;
        print_score(&result.guess, &result.secret, &result.score, true);
    } else {
        let result = score_words(guess, secret).map_err(|e| anyhow::anyhow!(e))?;
        print_score(&result.guess, &result.secret, &result.score, false);
    }
    Ok(())
}
