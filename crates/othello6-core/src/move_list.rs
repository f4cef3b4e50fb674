//! Move generation, evaluation, and ordering.

use arrayvec::ArrayVec;
use std::slice;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::config::SearchConfig;
use crate::constants::MAX_MOVES;
use crate::disc::Side;
use crate::eval;
use crate::flip;
use crate::square::Square;
use crate::types::{Depth, Score};

/// Represents a single legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Bitboard representing all opponent discs flipped by this move.
    pub flipped: Bitboard,
    /// Evaluation score for move ordering.
    pub value: Score,
}

impl Move {
    /// Creates a new move with the specified square and flipped discs.
    #[inline]
    pub fn new(sq: Square, flipped: Bitboard) -> Move {
        debug_assert!(!flipped.is_empty(), "Move must flip at least one disc");

        Move {
            sq,
            flipped,
            value: 0,
        }
    }
}

/// Container for all legal moves of one side in a position.
///
/// Moves are generated in ascending square order (A1, B1, ... F6). That
/// order is the tie-break for every sort performed on the list.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: ArrayVec<Move, MAX_MOVES>,
}

impl MoveList {
    /// Generates all legal moves for `side`.
    #[inline]
    pub fn new(board: &Board, side: Side) -> MoveList {
        Self::with_moves(board, side, board.generate_moves(side))
    }

    /// Creates a MoveList from a precomputed legal moves bitboard.
    ///
    /// # Arguments
    ///
    /// * `board` - Current position.
    /// * `side` - Side to move.
    /// * `moves_bb` - Legal moves of `side` (from [`Board::generate_moves`]).
    #[inline]
    pub fn with_moves(board: &Board, side: Side, moves_bb: Bitboard) -> MoveList {
        let player = board.discs(side);
        let opponent = board.discs(side.opponent());
        let moves = moves_bb
            .iter()
            .map(|sq| Move::new(sq, flip::flip(sq, player, opponent)))
            .collect();
        MoveList { moves }
    }

    /// Scores every move by evaluating the resulting position for `side`.
    ///
    /// # Arguments
    ///
    /// * `board` - The position the moves were generated from.
    /// * `side` - The side making the moves; also the evaluation perspective.
    /// * `depth` - Remaining depth passed to the evaluator.
    /// * `config` - Evaluation terms.
    pub fn evaluate_moves(&mut self, board: &Board, side: Side, depth: Depth, config: &SearchConfig) {
        for mv in self.moves.iter_mut() {
            let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
            mv.value = eval::evaluate(&next, side, depth, config);
        }
    }

    /// Sorts by descending value. Equal values keep generation order.
    #[inline]
    pub fn sort_descending(&mut self) {
        self.moves.sort_by(|a, b| b.value.cmp(&a.value));
    }

    /// Sorts by ascending value. Equal values keep generation order.
    #[inline]
    pub fn sort_ascending(&mut self) {
        self.moves.sort_by(|a, b| a.value.cmp(&b.value));
    }

    /// Returns the number of moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Checks whether the side has no legal move.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns an iterator over the moves in their current order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns the moves as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the squares of the moves in their current order.
    pub fn squares(&self) -> Vec<Square> {
        self.moves.iter().map(|mv| mv.sq).collect()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Orders the legal moves of `side` best-first by one-ply lookahead.
///
/// Each move is scored by [`eval::evaluate`] on the resulting board from
/// `side`'s perspective with `depth` as the remaining depth. The sort is
/// stable, so equally scored moves stay in generation order.
pub fn order(board: &Board, side: Side, depth: Depth, config: &SearchConfig) -> MoveList {
    let mut move_list = MoveList::new(board, side);
    move_list.evaluate_moves(board, side, depth, config);
    move_list.sort_descending();
    move_list
}
