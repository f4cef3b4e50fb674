//! Terminal output for the match runner.
//!
//! Progress goes through an indicatif bar; finished games are printed above
//! it so the bar stays at the bottom of the terminal.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use othello6_core::board::Board;
use othello6_core::constants::BOARD_SIZE;
use othello6_core::disc::{Cell, Side};
use othello6_core::square::Square;

use crate::statistics::{GameHistory, MatchStatistics, MatchWinner};

const PROGRESS_TEMPLATE: &str = "{spinner:.cyan} [{bar:40.cyan}] {pos}/{len} ({percent}%) {msg}";
const MAX_OPENING_DISPLAY_LEN: usize = 16;

/// Manages terminal display for match visualization.
pub struct DisplayManager {
    progress_bar: ProgressBar,
}

impl DisplayManager {
    /// Creates the display with a progress bar over `total_games`.
    pub fn new(total_games: u64) -> Self {
        let progress_bar = ProgressBar::new(total_games);
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        progress_bar.set_style(style);
        Self { progress_bar }
    }

    /// Prints the match header above the progress bar.
    pub fn show_match_header(&self, engine1_name: &str, engine2_name: &str) {
        self.progress_bar.println(format!(
            "{} vs {}",
            engine1_name.bright_cyan().bold(),
            engine2_name.bright_cyan().bold()
        ));
        self.progress_bar
            .println("─".repeat(60).bright_black().to_string());
    }

    /// Reports a finished game and advances the bar.
    pub fn game_finished(&self, game_number: usize, statistics: &MatchStatistics) {
        if let Some(game) = statistics.recent_results.last() {
            self.progress_bar
                .println(format_game_line(game_number, game));
        }
        self.progress_bar.set_message(format!(
            "{}-{}-{} ({:+})",
            statistics.engine1_wins, statistics.draws, statistics.engine2_wins, statistics.total_score
        ));
        self.progress_bar.inc(1);
    }

    /// Prints a board above the progress bar.
    pub fn show_board(&self, board: &Board, last_move: Option<Square>) {
        self.progress_bar.println(render_board(board, last_move));
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

fn format_game_line(game_number: usize, game: &GameHistory) -> String {
    let symbol = match game.winner {
        MatchWinner::Engine1 => "W".bright_green().bold(),
        MatchWinner::Engine2 => "L".bright_red().bold(),
        MatchWinner::Draw => "D".bright_blue().bold(),
    };
    let side = match game.engine1_side {
        Side::PlayerA => "● Engine1 vs Engine2 ○",
        Side::PlayerB => "○ Engine1 vs Engine2 ●",
    };
    format!(
        "{:>5}: {} {} {} {}",
        game_number.to_string().bright_white(),
        symbol,
        format_score(game.score),
        format_opening(&game.opening).bright_black(),
        side.bright_black()
    )
}

fn format_score(score: i32) -> ColoredString {
    let score_str = format!("{score:+3}");
    match score.cmp(&0) {
        std::cmp::Ordering::Greater => score_str.bright_green(),
        std::cmp::Ordering::Less => score_str.bright_red(),
        std::cmp::Ordering::Equal => score_str.bright_blue(),
    }
}

fn format_opening(opening: &str) -> String {
    if opening.len() > MAX_OPENING_DISPLAY_LEN {
        format!("{}...", &opening[..MAX_OPENING_DISPLAY_LEN])
    } else {
        opening.to_string()
    }
}

/// Renders a board with coordinates; the last move is highlighted.
pub fn render_board(board: &Board, last_move: Option<Square>) -> String {
    let mut out = String::from("  a b c d e f\n");
    for (y, row) in Square::ALL.chunks(BOARD_SIZE).enumerate() {
        out.push_str(&(y + 1).to_string());
        for &sq in row {
            let glyph = match board.cell_at(sq) {
                Cell::Empty => "·".bright_black(),
                Cell::PlayerA => "●".bright_white(),
                Cell::PlayerB => "○".bright_yellow(),
            };
            let glyph = if last_move == Some(sq) {
                glyph.on_blue()
            } else {
                glyph
            };
            out.push(' ');
            out.push_str(&glyph.to_string());
        }
        out.push('\n');
    }
    out
}
