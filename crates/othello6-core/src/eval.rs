//! Heuristic position evaluation.
//!
//! The score is a sum of independent terms, each enabled and weighted by the
//! [`SearchConfig`]:
//!
//! - positional weights of the evaluated side's discs (optionally multiplied
//!   near the search horizon),
//! - mobility,
//! - stable discs,
//! - frontier discs (penalty),
//! - discs on the ring one square in from the border (penalty),
//! - corner ownership.
//!
//! Scores are from the evaluated side's perspective and are not zero-sum:
//! `evaluate(b, PlayerA)` is in general not `-evaluate(b, PlayerB)`.

use crate::bitboard::{Bitboard, CORNER_MASK, INSET_RING_MASK};
use crate::board::Board;
use crate::config::{MobilityKind, SearchConfig};
use crate::disc::Side;
use crate::stability;
use crate::types::{Depth, Score, WeightTable};

/// Evaluates `board` for `side`.
///
/// # Arguments
///
/// * `board` - The position to score.
/// * `side` - The side whose desirability is measured.
/// * `remaining_depth` - Plies left to search below this position; drives
///   the endgame boost.
/// * `config` - Active terms and their constants.
///
/// # Returns
///
/// The heuristic score; higher is better for `side`.
pub fn evaluate(board: &Board, side: Side, remaining_depth: Depth, config: &SearchConfig) -> Score {
    let mut positional = positional_score(board, side, config.weights());
    if let Some(boost) = config
        .endgame_boost()
        .filter(|boost| remaining_depth <= boost.threshold)
    {
        positional *= boost.factor;
    }

    let mut score = positional;

    if let Some(mobility) = config.mobility() {
        let own = board.generate_moves(side).count() as Score;
        let count = match mobility.kind {
            MobilityKind::Differential => {
                own - board.generate_moves(side.opponent()).count() as Score
            }
            MobilityKind::OwnMoves => own,
        };
        score += count * mobility.scale;
    }

    if let Some(bonus) = config.stability_bonus() {
        score += stability::count_stable_discs(board, side) as Score * bonus;
    }

    if let Some(penalty) = config.frontier_penalty() {
        score -= frontier_count(board, side) as Score * penalty;
    }

    if let Some(penalty) = config.edge_penalty() {
        score -= inset_count(board, side) as Score * penalty;
    }

    if let Some(bonus) = config.corner_bonus() {
        score += corner_balance(board, side) * bonus;
    }

    score
}

/// Sum of `weights[y][x]` over the squares occupied by `side`.
pub fn positional_score(board: &Board, side: Side, weights: &WeightTable) -> Score {
    board
        .discs(side)
        .iter()
        .map(|sq| weights[sq.y()][sq.x()])
        .sum()
}

/// Number of `side` discs with an orthogonally adjacent empty square.
pub fn frontier_count(board: &Board, side: Side) -> u32 {
    let exposed = board.get_empty().orthogonal_neighbours();
    (board.discs(side) & exposed).count()
}

/// Number of `side` discs on the ring one square in from the border.
pub fn inset_count(board: &Board, side: Side) -> u32 {
    (board.discs(side) & Bitboard::new(INSET_RING_MASK)).count()
}

/// Corners held by `side` minus corners held by the opponent.
pub fn corner_balance(board: &Board, side: Side) -> Score {
    let corners = Bitboard::new(CORNER_MASK);
    let own = (board.discs(side) & corners).count() as Score;
    let theirs = (board.discs(side.opponent()) & corners).count() as Score;
    own - theirs
}
