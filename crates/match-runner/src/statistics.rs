//! Match result bookkeeping and the final report.

use std::cmp::Ordering;

use colored::*;
use othello6_core::disc::Side;

const ELO_K: f64 = 400.0;
const RECENT_GAMES: usize = 5;

/// Which engine won a game or a pair of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWinner {
    Engine1,
    Engine2,
    Draw,
}

impl MatchWinner {
    /// Winner given the disc difference from engine 1's point of view.
    pub fn from_score(score: i32) -> Self {
        match score.cmp(&0) {
            Ordering::Greater => MatchWinner::Engine1,
            Ordering::Less => MatchWinner::Engine2,
            Ordering::Equal => MatchWinner::Draw,
        }
    }
}

/// Summary of one finished game.
#[derive(Debug, Clone)]
pub struct GameHistory {
    pub winner: MatchWinner,
    /// Disc difference from engine 1's point of view.
    pub score: i32,
    pub opening: String,
    pub engine1_side: Side,
}

#[derive(Debug, Clone, Default)]
pub struct MatchStatistics {
    pub engine1_wins: u32,
    pub engine2_wins: u32,
    pub draws: u32,
    /// Sum of disc differences from engine 1's point of view.
    pub total_score: i32,
    pub games_played: u32,
    /// Opening pairs won by engine 1, drawn, and won by engine 2.
    pub pairs: [u32; 3],
    pub recent_results: Vec<GameHistory>,
}

impl MatchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, score: i32, opening: String, engine1_side: Side) -> MatchWinner {
        let winner = MatchWinner::from_score(score);
        match winner {
            MatchWinner::Engine1 => self.engine1_wins += 1,
            MatchWinner::Engine2 => self.engine2_wins += 1,
            MatchWinner::Draw => self.draws += 1,
        }
        self.total_score += score;
        self.games_played += 1;

        self.recent_results.push(GameHistory {
            winner,
            score,
            opening,
            engine1_side,
        });
        if self.recent_results.len() > RECENT_GAMES {
            self.recent_results.remove(0);
        }
        winner
    }

    /// Records the combined outcome of an opening played from both sides.
    pub fn add_paired_result(&mut self, first_score: i32, second_score: i32) {
        let idx = match MatchWinner::from_score(first_score + second_score) {
            MatchWinner::Engine1 => 0,
            MatchWinner::Draw => 1,
            MatchWinner::Engine2 => 2,
        };
        self.pairs[idx] += 1;
    }

    pub fn total_games(&self) -> u32 {
        self.engine1_wins + self.engine2_wins + self.draws
    }

    pub fn engine1_win_rate(&self) -> f64 {
        percentage(self.engine1_wins, self.total_games())
    }

    pub fn engine2_win_rate(&self) -> f64 {
        percentage(self.engine2_wins, self.total_games())
    }

    pub fn draw_rate(&self) -> f64 {
        percentage(self.draws, self.total_games())
    }

    pub fn print_final_results(&self, engine1_name: &str, engine2_name: &str) {
        let total_games = self.total_games();
        if total_games == 0 {
            println!("No games were played.");
            return;
        }

        println!("{}", "═".repeat(72).bright_cyan());
        println!("{:^72}", "MATCH RESULTS".bright_white().bold());
        println!("{}", "═".repeat(72).bright_cyan());
        println!();

        println!(
            "{} {}",
            "Total Games:".bright_white(),
            total_games.to_string().bright_yellow().bold()
        );
        println!(
            "{} {} / {} / {}",
            "Results:".bright_white(),
            format!("{} wins", self.engine1_wins).bright_green(),
            format!("{} draws", self.draws).bright_blue(),
            format!("{} losses", self.engine2_wins).bright_red()
        );
        println!(
            "{} {} / {} / {}",
            "Pairs:".bright_white(),
            self.pairs[0].to_string().bright_green(),
            self.pairs[1].to_string().bright_blue(),
            self.pairs[2].to_string().bright_red()
        );
        println!();

        let name_width = engine1_name.chars().count().max(engine2_name.chars().count());
        for (name, rate, score) in [
            (engine1_name, self.engine1_win_rate(), self.total_score),
            (engine2_name, self.engine2_win_rate(), -self.total_score),
        ] {
            println!(
                "{:>width$}  {:>5.1}%  {}",
                name.bright_cyan().bold(),
                rate,
                colored_score(score),
                width = name_width
            );
        }
        println!(
            "{:>width$}  {:>5.1}%",
            "Draws".bright_white(),
            self.draw_rate(),
            width = name_width
        );
        println!();

        let elo = EloStats::calculate(self.engine1_wins, self.engine2_wins, self.draws);
        let elo_display = if elo.elo_diff.is_infinite() {
            let sign = if elo.elo_diff > 0.0 { "+∞" } else { "-∞" };
            sign.bright_yellow().bold().to_string()
        } else {
            format!(
                "{} {}",
                format!("{:+.1}", elo.elo_diff).bright_yellow().bold(),
                format!("± {:.1} (95%)", elo.confidence_interval).bright_black()
            )
        };
        println!("{} {}", "ELO Difference:".bright_white(), elo_display);
        println!("{}", "═".repeat(72).bright_cyan());
    }
}

fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn colored_score(score: i32) -> ColoredString {
    let text = format!("{score:+}");
    match score.cmp(&0) {
        Ordering::Greater => text.bright_green(),
        Ordering::Less => text.bright_red(),
        Ordering::Equal => text.bright_yellow(),
    }
}

/// Elo difference of engine 1 over engine 2 with a 95% confidence interval.
#[derive(Debug, Clone, Copy)]
pub struct EloStats {
    pub elo_diff: f64,
    pub confidence_interval: f64,
}

impl EloStats {
    pub fn calculate(wins: u32, losses: u32, draws: u32) -> Self {
        let n = (wins + losses + draws) as f64;
        if n == 0.0 {
            return EloStats {
                elo_diff: 0.0,
                confidence_interval: 0.0,
            };
        }

        let (w, l, d) = (wins as f64, losses as f64, draws as f64);
        let p = (w + 0.5 * d) / n;
        if p <= 0.0 || p >= 1.0 {
            return EloStats {
                elo_diff: if p > 0.5 {
                    f64::INFINITY
                } else {
                    f64::NEG_INFINITY
                },
                confidence_interval: f64::INFINITY,
            };
        }

        let elo_diff = ELO_K * (p / (1.0 - p)).log10();
        let variance = (w * (1.0 - p).powi(2) + l * p.powi(2) + d * (0.5 - p).powi(2)) / n;
        let std_error = (variance / n).sqrt();
        let confidence_interval =
            1.96 * ELO_K * std_error / (std::f64::consts::LN_10 * p * (1.0 - p));

        EloStats {
            elo_diff,
            confidence_interval,
        }
    }
}
