//! Game tree search engine.
//!
//! [`search`] runs a depth-limited alpha-beta minimax below every root move
//! and keeps the first move with the strictly greatest value. Each root
//! branch is searched with a full window, so root values are exact and
//! independent of one another; [`search_parallel`] exploits this to search
//! the branches on the rayon thread pool with identical results.

pub mod minimax;
pub mod search_context;
pub mod search_result;

use log::debug;
use rayon::prelude::*;

use crate::board::Board;
use crate::config::{MoveOrdering, SearchConfig};
use crate::constants::SCORE_INF;
use crate::disc::Side;
use crate::move_list::{self, Move, MoveList};
use crate::search::search_context::SearchContext;
use crate::search::search_result::{RootMove, SearchResult};
use crate::square::Square;

/// Selects a move for `side`.
///
/// # Returns
///
/// `None` when `side` has no legal move and must pass.
pub fn select_move(board: &Board, side: Side, config: &SearchConfig) -> Option<Square> {
    search(board, side, config).map(|result| result.best_move)
}

/// Searches every root move in turn.
///
/// # Returns
///
/// The chosen move with its value and search statistics, or `None` when
/// `side` has no legal move.
pub fn search(board: &Board, side: Side, config: &SearchConfig) -> Option<SearchResult> {
    let move_list = root_move_list(board, side, config);
    if move_list.is_empty() {
        debug!("{side} has no legal move");
        return None;
    }

    let mut n_nodes = 1;
    let root_moves: Vec<RootMove> = move_list
        .iter()
        .map(|mv| {
            let (root_move, nodes) = search_root_move(board, side, mv, config);
            n_nodes += nodes;
            root_move
        })
        .collect();

    finish(side, root_moves, n_nodes, config)
}

/// Searches the root moves concurrently.
///
/// Produces the same move, score and node count as [`search`].
pub fn search_parallel(board: &Board, side: Side, config: &SearchConfig) -> Option<SearchResult> {
    let move_list = root_move_list(board, side, config);
    if move_list.is_empty() {
        debug!("{side} has no legal move");
        return None;
    }

    let results: Vec<(RootMove, u64)> = move_list
        .as_slice()
        .par_iter()
        .map(|mv| search_root_move(board, side, mv, config))
        .collect();

    let n_nodes = 1 + results.iter().map(|(_, nodes)| nodes).sum::<u64>();
    let root_moves = results.into_iter().map(|(root_move, _)| root_move).collect();

    finish(side, root_moves, n_nodes, config)
}

/// Root moves in the order they are searched.
///
/// With [`MoveOrdering::Descending`] the root is ordered like any other
/// node (remaining depth = the configured depth); with
/// [`MoveOrdering::NodeRelative`] it keeps generation order.
pub fn root_move_list(board: &Board, side: Side, config: &SearchConfig) -> MoveList {
    match config.ordering() {
        MoveOrdering::Descending => move_list::order(board, side, config.depth(), config),
        MoveOrdering::NodeRelative => MoveList::new(board, side),
    }
}

/// Scores one root move: the opponent replies, minimizing, with the full
/// configured depth still to search.
fn search_root_move(board: &Board, side: Side, mv: &Move, config: &SearchConfig) -> (RootMove, u64) {
    let mut ctx = SearchContext::new(config);
    let next = board.make_move_with_flipped(side, mv.sq, mv.flipped);
    let score = minimax::minimax(
        &mut ctx,
        &next,
        side.opponent(),
        config.depth(),
        false,
        -SCORE_INF,
        SCORE_INF,
    );
    debug!("{side} {}: score {score} ({} nodes)", mv.sq, ctx.n_nodes);
    (RootMove { sq: mv.sq, score }, ctx.n_nodes)
}

fn finish(side: Side, root_moves: Vec<RootMove>, n_nodes: u64, config: &SearchConfig) -> Option<SearchResult> {
    let result = SearchResult::from_root_moves(root_moves, n_nodes, config.depth())?;
    debug!(
        "{side} plays {} (score {}, depth {}, {} nodes)",
        result.best_move, result.score, result.depth, result.n_nodes
    );
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personality::{CORNER_WEIGHTS, DRAGON, EAGLE, GORILLA};

    fn corner_grab_board() -> Board {
        // PlayerA can take A1 by flipping B1.
        Board::from_string(
            "-OX---
             ------
             --XO--
             --OX--
             ------
             ------",
        )
        .unwrap()
    }

    #[test]
    fn test_no_legal_moves_returns_none() {
        let board = Board::from_string(
            "XXXXXX
             XXXXXX
             XXXXXX
             XXXXXX
             XXXXXX
             XXXXX-",
        )
        .unwrap();
        for personality in [GORILLA, EAGLE, DRAGON] {
            assert_eq!(select_move(&board, Side::PlayerA, &personality.config), None);
            assert_eq!(select_move(&board, Side::PlayerB, &personality.config), None);
            assert!(search_parallel(&board, Side::PlayerB, &personality.config).is_none());
        }
    }

    #[test]
    fn test_single_legal_move_is_selected() {
        // PlayerB's only move is F6, flipping the long diagonal back to A1.
        let board = Board::from_string(
            "OXXXXX
             XXXXXX
             XXXXXX
             XXXXXX
             XXXXXX
             XXXXX-",
        )
        .unwrap();
        assert!(!board.has_legal_moves(Side::PlayerA));
        for personality in [GORILLA, EAGLE, DRAGON] {
            assert_eq!(
                select_move(&board, Side::PlayerB, &personality.config),
                Some(Square::F6)
            );
        }
    }

    #[test]
    fn test_result_is_among_legal_moves() {
        let board = Board::new();
        for personality in [GORILLA, EAGLE, DRAGON] {
            let result = search(&board, Side::PlayerA, &personality.config).unwrap();
            assert!(board.is_legal(Side::PlayerA, result.best_move));
            assert_eq!(result.root_moves.len(), 4);
            assert_eq!(result.depth, 5);
            assert!(result.n_nodes > 4);
        }
    }

    #[test]
    fn test_symmetric_opening_keeps_first_ordered_move() {
        // The four opening moves are symmetric, so every root value ties and
        // the first move searched wins.
        let board = Board::new();
        for personality in [GORILLA, EAGLE, DRAGON] {
            let result = search(&board, Side::PlayerA, &personality.config).unwrap();
            let first = result.root_moves[0];
            assert!(result.root_moves.iter().all(|rm| rm.score == first.score));
            assert_eq!(result.best_move, first.sq);
            assert_eq!(result.best_move, Square::D2);
        }
    }

    #[test]
    fn test_takes_corner() {
        let config = SearchConfig::new(1, CORNER_WEIGHTS).unwrap();
        let result = search(&corner_grab_board(), Side::PlayerA, &config).unwrap();
        assert_eq!(result.best_move, Square::A1);
        assert_eq!(result.score, 105);

        for personality in [GORILLA, EAGLE, DRAGON] {
            assert_eq!(
                select_move(&corner_grab_board(), Side::PlayerA, &personality.config),
                Some(Square::A1)
            );
        }
    }

    #[test]
    fn test_node_relative_root_keeps_generation_order() {
        let result = search(&corner_grab_board(), Side::PlayerA, &DRAGON.config).unwrap();
        let searched: Vec<Square> = result.root_moves.iter().map(|rm| rm.sq).collect();
        let generated = MoveList::new(&corner_grab_board(), Side::PlayerA).squares();
        assert_eq!(searched, generated);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut board = Board::new();
        let mut side = Side::PlayerA;
        for _ in 0..6 {
            for personality in [GORILLA, EAGLE, DRAGON] {
                let config = personality.config.with_depth(3).unwrap();
                assert_eq!(
                    search(&board, side, &config),
                    search_parallel(&board, side, &config)
                );
            }
            let Some(sq) = board.generate_moves(side).iter().next() else {
                break;
            };
            board = board.apply(side, sq).unwrap();
            side = side.opponent();
        }
    }
}
