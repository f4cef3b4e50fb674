//! Move path enumeration for validating move generation.

use crate::board::Board;
use crate::disc::Side;
use crate::move_list::MoveList;

/// Executes a perft run starting from the initial position with PlayerA to
/// move.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand. A depth of `1` counts the
///   immediate legal moves.
///
/// # Returns
///
/// The number of leaf nodes reached.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Side::PlayerA, depth)
}

/// Counts the leaf nodes of the move tree below `board`.
///
/// A forced pass hands the move to the opponent without using up a ply. A
/// position where neither side can move counts as a single leaf.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let move_list = MoveList::new(board, side);
    if move_list.is_empty() {
        return if board.has_legal_moves(side.opponent()) {
            perft(board, side.opponent(), depth)
        } else {
            1
        };
    }

    if depth == 1 {
        return move_list.count() as u64;
    }

    move_list
        .iter()
        .map(|mv| {
            let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
            perft(&next, side.opponent(), depth - 1)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_shallow() {
        assert_eq!(perft_root(0), 1);
        assert_eq!(perft_root(1), 4);
        assert_eq!(perft_root(2), 12);
        assert_eq!(perft_root(3), 56);
    }

    #[test]
    fn test_perft_game_over_is_one_leaf() {
        let board = Board::from_string(
            "X-----
             ------
             ------
             ------
             ------
             -----O",
        )
        .unwrap();
        assert_eq!(perft(&board, Side::PlayerA, 4), 1);
    }

    #[test]
    fn test_perft_pass_keeps_depth() {
        // PlayerA is stuck; PlayerB has exactly one move (F6).
        let board = Board::from_string(
            "OXXXXX
             XXXXXX
             XXXXXX
             XXXXXX
             XXXXXX
             XXXXX-",
        )
        .unwrap();
        assert_eq!(perft(&board, Side::PlayerA, 1), 1);
        assert_eq!(perft(&board, Side::PlayerA, 3), 1);
    }
}
