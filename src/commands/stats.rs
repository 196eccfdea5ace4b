//! Print saved statistics for both games

use crate::config::Config;
use crate::game::{Difficulty, WordMode};
use crate::output::print_stats_book;

pub fn show_stats(config: &Config) {
    let words = config.stats_tracker::<WordMode>();
    let codes = config.stats_tracker::<Difficulty>();

    println!("Diretório de dados: {}", config.data_dir().display());
    print_stats_book("TERMO", words.book());
    print_stats_book("CRACK THE CODE", codes.book());
    println!();
}
