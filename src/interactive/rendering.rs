//! TUI rendering with ratatui

use super::app::{ActiveGame, App, Overlay, RESTART_QUESTION, Table};
use super::presentation::TileState;
use crate::core::{Feedback, Symbol};
use crate::game::{Difficulty, Session, Status};
use crate::stats::StatsRecord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use std::hash::Hash;

const WORD_KEYBOARD: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L", "Ç"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "BKSP"],
];

const CODE_KEYBOARD: [&[&str]; 2] = [
    &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"],
    &["ENTER", "BKSP"],
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Boards
            Constraint::Length(1), // Toast
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match app.active {
        ActiveGame::Word => {
            render_boards(f, app.word.session(), &app.word_table, chunks[1]);
            render_notice(f, &app.word_table, chunks[2]);
            render_keyboard(f, &app.word_table, &WORD_KEYBOARD, chunks[3]);
        }
        ActiveGame::Code => {
            render_boards(f, app.code.session(), &app.code_table, chunks[1]);
            render_notice(f, &app.code_table, chunks[2]);
            render_keyboard(f, &app.code_table, &CODE_KEYBOARD, chunks[3]);
        }
    }
    render_status(f, chunks[4]);

    match app.overlay {
        Some(Overlay::Help) => render_help(f, app),
        Some(Overlay::Stats) => render_stats(f, app),
        Some(Overlay::Share) => render_share(f, app),
        Some(Overlay::ConfirmRestart(difficulty)) => render_confirm(f, difficulty),
        None => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let (title, attempts, max) = match app.active {
        ActiveGame::Word => (
            format!("TERMO - {}", app.word.mode().name()),
            app.word.session().current_row(),
            app.word.session().max_rows(),
        ),
        ActiveGame::Code => (
            format!("CRACK THE CODE - {}", difficulty_label(app.code.difficulty())),
            app.code.session().current_row(),
            app.code.session().max_rows(),
        ),
    };

    let header = Paragraph::new(format!("{title}   {attempts}/{max}"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Fácil",
        Difficulty::Medium => "Médio",
        Difficulty::Hard => "Difícil",
    }
}

const fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Correct => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::DarkGray,
    }
}

fn tile_span(text: String, style: Style) -> Span<'static> {
    Span::styled(format!(" {text} "), style)
}

fn render_boards<S: Symbol + Hash>(f: &mut Frame, session: &Session<S>, table: &Table<S>, area: Rect) {
    let count = session.boards().len().max(1);
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, board) in session.boards().iter().enumerate() {
        let view = &table.view;
        let mut lines = Vec::with_capacity(session.max_rows());

        for row in 0..session.max_rows() {
            let mut spans = Vec::with_capacity(session.cols());

            if let Some((guess, _)) = board.history().get(row) {
                for (col, symbol) in guess.iter().enumerate() {
                    let style = match view.tile(index, row, col) {
                        TileState::Shown(feedback) => Style::default()
                            .fg(Color::Black)
                            .bg(feedback_color(feedback))
                            .add_modifier(Modifier::BOLD),
                        TileState::Flipping => Style::default().bg(Color::Gray),
                        TileState::Hidden => Style::default().fg(Color::White),
                    };
                    spans.push(tile_span(symbol.to_string(), style));
                }
            } else if row == session.current_row()
                && session.status() == Status::Playing
                && !board.is_solved()
            {
                let shaking = view.shaking_row() == Some(row);
                for (col, cell) in session.buffer().iter().enumerate() {
                    let mut style = Style::default().fg(if shaking { Color::Red } else { Color::White });
                    if col == session.current_col() {
                        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
                    }
                    let text = cell.map_or_else(|| "_".to_string(), |s| s.to_string());
                    spans.push(tile_span(text, style));
                }
            } else {
                for _ in 0..session.cols() {
                    spans.push(tile_span("·".to_string(), Style::default().fg(Color::DarkGray)));
                }
            }

            lines.push(Line::from(spans));
        }

        let border = if view.is_board_solved(index) {
            Color::Green
        } else {
            Color::White
        };
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(format!(" {} ", index + 1))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border)),
        );
        f.render_widget(paragraph, columns[index]);
    }
}

fn render_notice<S: Symbol + Hash>(f: &mut Frame, table: &Table<S>, area: Rect) {
    if let Some(text) = table.view.notice() {
        let notice = Paragraph::new(text.to_string())
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(notice, area);
    }
}

fn render_keyboard<S: Symbol + Hash>(f: &mut Frame, table: &Table<S>, rows: &[&[&str]], area: Rect) {
    let keyboard = table.view.keyboard();
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&key| {
                    let mut chars = key.chars();
                    let feedback = match (chars.next(), chars.next()) {
                        (Some(ch), None) => S::from_key(ch).and_then(|s| keyboard.get(s)),
                        _ => None,
                    };
                    let style = feedback.map_or_else(Style::default, |fb| {
                        Style::default().fg(Color::Black).bg(feedback_color(fb))
                    });
                    Span::styled(format!(" {key} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(widget, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Esc: Sair | Tab: Trocar jogo | F1: Ajuda | F2: Estatísticas | F3: Modo | F5: Novo jogo | Ctrl+S: Compartilhar",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Centered rectangle of the given percentage size
fn centered(area: Rect, width_pct: u16, height_pct: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height_pct) / 2),
            Constraint::Percentage(height_pct),
            Constraint::Percentage((100 - height_pct) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_pct) / 2),
            Constraint::Percentage(width_pct),
            Constraint::Percentage((100 - width_pct) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_popup(f: &mut Frame, title: &str, lines: Vec<Line>, color: Color) {
    let area = centered(f.area(), 60, 70);
    let popup = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_help(f: &mut Frame, app: &App) {
    let mut lines = match app.active {
        ActiveGame::Word => vec![
            Line::from(format!(
                "Descubra {} em {} tentativas.",
                if app.word.mode().boards() == 1 {
                    "a palavra".to_string()
                } else {
                    format!("as {} palavras", app.word.mode().boards())
                },
                app.word.mode().max_attempts()
            )),
            Line::from("Cada palpite deve ser uma palavra válida de cinco letras. Acentos são opcionais."),
        ],
        ActiveGame::Code => vec![
            Line::from(format!(
                "Descubra o código de {} dígitos em {} tentativas.",
                app.code.difficulty().digits(),
                app.code.difficulty().max_attempts()
            )),
            Line::from("Os dígitos podem se repetir."),
        ],
    };

    let (correct, present) = match app.active {
        ActiveGame::Word => ("letra certa no lugar certo", "está na palavra, em outro lugar"),
        ActiveGame::Code => ("dígito certo no lugar certo", "está no código, em outro lugar"),
    };
    lines.extend([
        Line::default(),
        Line::from(vec![
            Span::styled("   ", Style::default().bg(Color::Green)),
            Span::raw(format!(" {correct}")),
        ]),
        Line::from(vec![
            Span::styled("   ", Style::default().bg(Color::Yellow)),
            Span::raw(format!(" {present}")),
        ]),
        Line::from(vec![
            Span::styled("   ", Style::default().bg(Color::DarkGray)),
            Span::raw(" não está"),
        ]),
        Line::default(),
        Line::from("Setas movem o cursor. Enter envia, Backspace apaga."),
        Line::from("Esc fecha."),
    ]);

    render_popup(f, "Como jogar", lines, Color::Cyan);
}

fn record_lines(record: &StatsRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(format!(
            "Jogos: {}   Vitórias: {}%   Sequência: {}   Melhor: {}",
            record.played,
            record.win_percentage(),
            record.current_streak,
            record.max_streak
        )),
        Line::default(),
    ];

    if !record.distribution.is_empty() {
        let most = record.distribution.values().copied().max().unwrap_or(1).max(1);
        for (attempts, &count) in &record.distribution {
            let width = (count * 20 / most).max(1) as usize;
            lines.push(Line::from(vec![
                Span::raw(format!("{attempts:>2} ")),
                Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ]));
        }
    }
    lines
}

fn render_stats(f: &mut Frame, app: &App) {
    let (title, record) = match app.active {
        ActiveGame::Word => (
            format!("Estatísticas - {}", app.word.mode().name()),
            app.word_stats().get(app.word.mode()),
        ),
        ActiveGame::Code => (
            format!("Estatísticas - {}", difficulty_label(app.code.difficulty())),
            app.code_stats().get(app.code.difficulty()),
        ),
    };

    let mut lines = record_lines(&record);
    if app.status().is_terminal() {
        lines.push(Line::default());
        lines.push(Line::from("Enter: Novo jogo | Ctrl+S: Compartilhar"));
    }
    render_popup(f, &title, lines, Color::Green);
}

fn render_share(f: &mut Frame, app: &App) {
    let text = app.share_text().unwrap_or_default();
    let lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
    render_popup(f, "Compartilhar", lines, Color::Magenta);
}

fn render_confirm(f: &mut Frame, difficulty: Difficulty) {
    let lines = vec![
        Line::from(RESTART_QUESTION),
        Line::default(),
        Line::from(format!("Nova dificuldade: {}", difficulty_label(difficulty))),
        Line::default(),
        Line::from("S/Enter: Sim | N/Esc: Não"),
    ];
    render_popup(f, "Reiniciar", lines, Color::Yellow);
}
