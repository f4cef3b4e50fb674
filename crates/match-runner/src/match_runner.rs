//! Match execution and game management.
//!
//! Every opening is played as a pair of games with the engines swapping
//! sides, so neither engine profits from a lopsided opening.

use log::info;

use othello6_core::disc::Side;
use othello6_core::game_state::GameState;
use othello6_core::square::Square;

use crate::config::Config;
use crate::display::DisplayManager;
use crate::engine::Engine;
use crate::error::{MatchRunnerError, Result};
use crate::statistics::MatchStatistics;

/// Outcome of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Final disc counts `(player_a, player_b)`.
    pub discs: (u32, u32),
    /// Disc difference from PlayerA's point of view, empty squares going to
    /// the winner.
    pub score: i32,
}

/// Plays one game from the initial position after `opening`.
///
/// `engines[0]` plays PlayerA and `engines[1]` plays PlayerB.
///
/// # Errors
///
/// Returns an error if the opening is illegal or an engine fails to move
/// while it has legal moves.
pub fn play_game(
    mut engines: [&mut Engine; 2],
    opening: &[Square],
    display: Option<&DisplayManager>,
) -> Result<MatchResult> {
    let mut game = GameState::new();
    for &sq in opening {
        game.make_move(sq)?;
    }

    while !game.is_game_over() {
        let side = game.side_to_move();
        let engine = &mut engines[side.index()];
        let sq = engine.genmove(game.board(), side).ok_or_else(|| {
            MatchRunnerError::Engine(format!(
                "{} passed with legal moves available",
                engine.name()
            ))
        })?;
        game.make_move(sq)?;

        if let Some(display) = display {
            display.show_board(game.board(), game.last_move());
        }
    }

    let discs = game.get_score();
    Ok(MatchResult {
        discs,
        score: calculate_score(discs.0, discs.1),
    })
}

/// Disc difference with the empty squares credited to the winner.
pub fn calculate_score(player_a: u32, player_b: u32) -> i32 {
    let total = 36;
    match player_a.cmp(&player_b) {
        std::cmp::Ordering::Greater => total - (player_b as i32) * 2,
        std::cmp::Ordering::Less => (player_a as i32) * 2 - total,
        std::cmp::Ordering::Equal => 0,
    }
}

/// Orchestrates a complete match between two engines.
pub struct MatchRunner {
    engine1: Engine,
    engine2: Engine,
    statistics: MatchStatistics,
}

impl MatchRunner {
    /// # Errors
    ///
    /// Returns a configuration error for an invalid depth override.
    pub fn new(config: &Config) -> Result<Self> {
        let (p1, p2) = config.personalities()?;
        Ok(Self {
            engine1: Engine::new(p1, config.parallel),
            engine2: Engine::new(p2, config.parallel),
            statistics: MatchStatistics::new(),
        })
    }

    /// Execute a complete match using the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no openings to play or a game fails.
    pub fn run_match(&mut self, config: &Config) -> Result<()> {
        let openings = config.load_openings()?;
        if openings.is_empty() {
            return Err(MatchRunnerError::Config("No openings to play.".to_string()));
        }

        let display = DisplayManager::new(openings.len() as u64 * 2);
        let names = (self.engine1.name(), self.engine2.name());
        display.show_match_header(&names.0, &names.1);

        for (idx, opening) in openings.iter().enumerate() {
            if let Err(e) = self.play_opening_pair(opening, idx, &display, config.verbose) {
                display.finish();
                return Err(e);
            }
        }

        display.finish();
        self.statistics.print_final_results(&names.0, &names.1);
        for engine in [&self.engine1, &self.engine2] {
            println!(
                "{}: {} nodes, {:.0} nodes/move, {:.0} nps",
                engine.name(),
                engine.nodes(),
                engine.nodes_per_move(),
                engine.nps()
            );
        }

        Ok(())
    }

    /// Plays `opening` twice, once with each engine as PlayerA.
    fn play_opening_pair(
        &mut self,
        opening: &[Square],
        opening_idx: usize,
        display: &DisplayManager,
        show_boards: bool,
    ) -> Result<()> {
        let opening_str: String = opening.iter().map(|sq| sq.to_string()).collect();
        let mut scores = [0; 2];

        for (round, score) in scores.iter_mut().enumerate() {
            let game_number = opening_idx * 2 + round + 1;
            let is_swapped = round == 1;
            let engines = if is_swapped {
                [&mut self.engine2, &mut self.engine1]
            } else {
                [&mut self.engine1, &mut self.engine2]
            };

            let result = play_game(engines, opening, show_boards.then_some(display)).map_err(|e| {
                MatchRunnerError::Game(format!("Fatal error in game {game_number}: {e}"))
            })?;

            *score = if is_swapped { -result.score } else { result.score };
            let engine1_side = if is_swapped { Side::PlayerB } else { Side::PlayerA };
            let winner = self
                .statistics
                .add_result(*score, opening_str.clone(), engine1_side);
            info!(
                "game {game_number} [{opening_str}] {}-{} {winner:?}",
                result.discs.0, result.discs.1
            );
            display.game_finished(game_number, &self.statistics);
        }

        self.statistics.add_paired_result(scores[0], scores[1]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello6_core::personality::{DRAGON, EAGLE, GORILLA};

    #[test]
    fn test_calculate_score() {
        assert_eq!(calculate_score(24, 12), 12);
        assert_eq!(calculate_score(20, 10), 16);
        assert_eq!(calculate_score(10, 20), -16);
        assert_eq!(calculate_score(18, 18), 0);
    }

    #[test]
    fn test_play_game_finishes() {
        let mut shallow = GORILLA;
        shallow.config = shallow.config.with_depth(2).unwrap();
        let mut gorilla = Engine::new(shallow, false);
        let mut eagle = Engine::new(EAGLE, false);

        let result = play_game([&mut gorilla, &mut eagle], &[Square::D2], None).unwrap();
        let (a, b) = result.discs;
        assert!(a + b <= 36);
        assert_eq!(result.score.signum(), (a as i32 - b as i32).signum());
        assert!(gorilla.nodes() > 0);
        assert!(eagle.nodes() > 0);
    }

    #[test]
    fn test_play_game_rejects_illegal_opening() {
        let mut dragon = Engine::new(DRAGON, false);
        let mut eagle = Engine::new(EAGLE, false);
        let result = play_game([&mut dragon, &mut eagle], &[Square::A1], None);
        assert!(matches!(result, Err(MatchRunnerError::Game(_))));
    }

    #[test]
    fn test_run_match_plays_pairs() {
        let config = Config {
            engine1: crate::config::PersonalityArg::Dragon,
            engine2: crate::config::PersonalityArg::Eagle,
            depth: Some(1),
            games: 2,
            random_plies: 2,
            seed: 7,
            opening_file: None,
            parallel: false,
            verbose: false,
        };
        let mut runner = MatchRunner::new(&config).unwrap();
        runner.run_match(&config).unwrap();

        let stats = &runner.statistics;
        assert_eq!(stats.total_games(), 4);
        assert_eq!(stats.pairs.iter().sum::<u32>(), 2);
    }
}
