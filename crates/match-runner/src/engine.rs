//! In-process engine wrapper.
//!
//! An [`Engine`] drives one personality through the search and keeps
//! per-match counters of what the search cost.

use std::time::{Duration, Instant};

use log::debug;

use othello6_core::agent::Agent;
use othello6_core::board::Board;
use othello6_core::disc::Side;
use othello6_core::personality::Personality;
use othello6_core::search;
use othello6_core::square::Square;

/// A personality playing in a match.
pub struct Engine {
    personality: Personality,
    parallel: bool,
    n_nodes: u64,
    n_searches: u64,
    elapsed: Duration,
}

impl Engine {
    pub fn new(personality: Personality, parallel: bool) -> Self {
        Self {
            personality,
            parallel,
            n_nodes: 0,
            n_searches: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Display name including the face, e.g. `"🦍 GorillaAI"`.
    pub fn name(&self) -> String {
        format!("{} {}", self.personality.face(), self.personality.name())
    }

    /// Asks the engine for a move.
    ///
    /// # Returns
    ///
    /// `None` if `side` has no legal move.
    pub fn genmove(&mut self, board: &Board, side: Side) -> Option<Square> {
        let config = &self.personality.config;
        let start = Instant::now();
        let result = if self.parallel {
            search::search_parallel(board, side, config)
        } else {
            search::search(board, side, config)
        };
        self.elapsed += start.elapsed();

        let result = result?;
        self.n_nodes += result.n_nodes;
        self.n_searches += 1;
        debug!(
            "{} ({side}) -> {} score {} nodes {}",
            self.personality.name, result.best_move, result.score, result.n_nodes
        );
        Some(result.best_move)
    }

    /// Total nodes searched so far.
    pub fn nodes(&self) -> u64 {
        self.n_nodes
    }

    /// Average nodes per second over all searches.
    pub fn nps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.n_nodes as f64 / secs
        } else {
            0.0
        }
    }

    /// Average nodes per search.
    pub fn nodes_per_move(&self) -> f64 {
        if self.n_searches == 0 {
            0.0
        } else {
            self.n_nodes as f64 / self.n_searches as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello6_core::personality::{DRAGON, GORILLA};

    #[test]
    fn test_genmove_matches_agent() {
        let board = Board::new();
        let mut engine = Engine::new(GORILLA, false);
        assert_eq!(
            engine.genmove(&board, Side::PlayerA),
            GORILLA.place(&board, Side::PlayerA)
        );
        assert!(engine.nodes() > 0);
        assert_eq!(engine.nodes_per_move(), engine.nodes() as f64);
    }

    #[test]
    fn test_parallel_engine_agrees() {
        let board = Board::new().apply(Side::PlayerA, Square::D2).unwrap();
        let mut sequential = Engine::new(DRAGON, false);
        let mut parallel = Engine::new(DRAGON, true);
        assert_eq!(
            sequential.genmove(&board, Side::PlayerB),
            parallel.genmove(&board, Side::PlayerB)
        );
        assert_eq!(sequential.nodes(), parallel.nodes());
    }

    #[test]
    fn test_name_has_face() {
        assert_eq!(Engine::new(DRAGON, false).name(), "🐉 DragonAI");
    }
}
