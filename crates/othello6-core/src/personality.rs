//! Built-in playing styles.
//!
//! Every personality runs the same search; they differ only in the weight
//! table and the evaluation terms switched on in their [`SearchConfig`].

use crate::agent::Agent;
use crate::board::Board;
use crate::config::{MobilityKind, MoveOrdering, SearchConfig};
use crate::constants::SCORE_INF;
use crate::disc::Side;
use crate::search;
use crate::square::Square;
use crate::types::{Depth, WeightTable};

/// Default search depth of the built-in personalities.
pub const DEFAULT_DEPTH: Depth = 5;

/// Strongly rewards corners and punishes the squares diagonally next to them.
#[rustfmt::skip]
pub const CORNER_WEIGHTS: WeightTable = [
    [100, -10, 10, 10, -10, 100],
    [-10, -50, -2, -2, -50, -10],
    [ 10,  -2,  5,  5,  -2,  10],
    [ 10,  -2,  5,  5,  -2,  10],
    [-10, -50, -2, -2, -50, -10],
    [100, -10, 10, 10, -10, 100],
];

/// Gently favours the border without any negative squares.
#[rustfmt::skip]
pub const MILD_WEIGHTS: WeightTable = [
    [10, 5, 5, 5, 5, 10],
    [ 5, 1, 2, 2, 1,  5],
    [ 5, 2, 0, 0, 2,  5],
    [ 5, 2, 0, 0, 2,  5],
    [ 5, 1, 2, 2, 1,  5],
    [10, 5, 5, 5, 5, 10],
];

/// A named search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Personality {
    pub name: &'static str,
    pub face: &'static str,
    pub config: SearchConfig,
}

/// Mobility-heavy player that values stable discs and plays sharper near the
/// horizon.
pub const GORILLA: Personality = Personality {
    name: "GorillaAI",
    face: "🦍",
    config: SearchConfig::preset(DEFAULT_DEPTH, CORNER_WEIGHTS)
        .endgame_term(3, 2)
        .mobility_term(MobilityKind::Differential, 10)
        .stability_term(20)
        .frontier_term(5),
};

/// Positional player that stays off the inner ring.
pub const EAGLE: Personality = Personality {
    name: "EagleAI",
    face: "🐓",
    config: SearchConfig::preset(DEFAULT_DEPTH, CORNER_WEIGHTS)
        .mobility_term(MobilityKind::Differential, 1)
        .frontier_term(1)
        .edge_term(20),
};

/// Corner hunter with a flat table.
pub const DRAGON: Personality = Personality {
    name: "DragonAI",
    face: "🐉",
    config: SearchConfig::preset(DEFAULT_DEPTH, MILD_WEIGHTS)
        .corner_term(25)
        .mobility_term(MobilityKind::OwnMoves, 2)
        .with_ordering(MoveOrdering::NodeRelative),
};

const _: () = {
    let mut i = 0;
    while i < Personality::ALL.len() {
        assert!(Personality::ALL[i].config.score_bound() < SCORE_INF as i64);
        i += 1;
    }
};

impl Personality {
    /// All built-in personalities.
    pub const ALL: [Personality; 3] = [GORILLA, EAGLE, DRAGON];
}

impl Agent for Personality {
    fn name(&self) -> &str {
        self.name
    }

    fn face(&self) -> &str {
        self.face
    }

    fn place(&self, board: &Board, side: Side) -> Option<Square> {
        search::select_move(board, side, &self.config)
    }
}
