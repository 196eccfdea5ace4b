//! Display functions for command results

use super::formatters::{code_labels, colored_guess, create_progress_bar};
use crate::core::{Score, Symbol};
use crate::game::Submission;
use crate::stats::{GameKey, StatsBook, StatsRecord};
use colored::Colorize;

/// Print the score of one guess against a secret
pub fn print_score<S: Symbol>(guess: &[S], secret: &[S], score: &Score, digits: bool) {
    let secret_text: String = secret.iter().map(ToString::to_string).collect();
    println!("\n{}", "─".repeat(40).cyan());
    println!("Segredo: {}", secret_text.bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_guess(guess, score));
    println!("  {}", score.to_emoji());
    if digits {
        println!("  {}", code_labels(score));
    }

    println!();
    if score.is_perfect() {
        println!("{}", "✅ Acerto exato".green().bold());
    } else {
        println!(
            "{} certas, {} presentes",
            score.count_correct().to_string().green().bold(),
            score.count_present().to_string().yellow().bold()
        );
    }
}

/// Print each board's score for an accepted guess
pub fn print_submission<S: Symbol>(submission: &Submission<S>, boards: usize) {
    for (board, score) in &submission.scores {
        let label = if boards > 1 {
            format!("{}: ", board + 1)
        } else {
            String::new()
        };
        let solved = if submission.solved.contains(board) {
            " ✓".green().bold().to_string()
        } else {
            String::new()
        };
        println!("  {label}{}{solved}", colored_guess(&submission.guess, score));
    }
}

/// One-line summary of a record
pub fn print_record(label: &str, record: &StatsRecord) {
    println!(
        "   {:<10} jogos {:>4} | vitórias {:>3}% | sequência {:>3} | melhor {:>3}",
        label.bright_white().bold(),
        record.played,
        record.win_percentage(),
        record.current_streak,
        record.max_streak
    );
}

/// Print every record of a statistics book
pub fn print_stats_book<K: GameKey>(title: &str, book: &StatsBook<K>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (key, record) in book.iter() {
        print_record(&key.to_string(), record);

        if record.distribution.is_empty() {
            continue;
        }
        let most = record.distribution.values().copied().max().unwrap_or(0);
        for (attempts, &count) in &record.distribution {
            let bar = create_progress_bar(f64::from(count), f64::from(most), 30);
            println!("      {attempts:>2}: {} {count}", bar.green());
        }
    }
}
