//! Search result types.

use crate::square::Square;
use crate::types::{Depth, Score};

/// A root move with the minimax value of its subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootMove {
    pub sq: Square,
    pub score: Score,
}

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move.
    pub best_move: Square,
    /// Value of the chosen move.
    pub score: Score,
    /// Total nodes visited, the root included.
    pub n_nodes: u64,
    /// Plies searched below each root move.
    pub depth: Depth,
    /// Every root move in the order it was searched, with its value.
    pub root_moves: Vec<RootMove>,
}

impl SearchResult {
    /// Picks the best root move: the first one with the strictly greatest
    /// value, so earlier (better ordered) moves win ties.
    ///
    /// # Returns
    ///
    /// `None` if `root_moves` is empty.
    pub fn from_root_moves(root_moves: Vec<RootMove>, n_nodes: u64, depth: Depth) -> Option<Self> {
        let best = root_moves
            .iter()
            .copied()
            .reduce(|best, rm| if rm.score > best.score { rm } else { best })?;

        Some(SearchResult {
            best_move: best.sq,
            score: best.score,
            n_nodes,
            depth,
            root_moves,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_best_move_wins_ties() {
        let root_moves = vec![
            RootMove { sq: Square::D2, score: 3 },
            RootMove { sq: Square::E3, score: 9 },
            RootMove { sq: Square::B4, score: 9 },
            RootMove { sq: Square::C5, score: -1 },
        ];
        let result = SearchResult::from_root_moves(root_moves, 42, 5).unwrap();
        assert_eq!(result.best_move, Square::E3);
        assert_eq!(result.score, 9);
        assert_eq!(result.n_nodes, 42);
        assert_eq!(result.root_moves.len(), 4);
    }

    #[test]
    fn test_no_root_moves() {
        assert!(SearchResult::from_root_moves(Vec::new(), 1, 5).is_none());
    }
}
