//! Board geometry and search bounds.

use crate::types::Score;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 6;

/// Number of squares on the board.
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Upper bound on the number of legal moves in any position.
///
/// A move lands on an empty square next to an opponent disc. With four or
/// more discs on the board at most 32 squares are empty. With fewer, a
/// position with any move holds at most two opponent discs, which have at
/// most 16 neighbours.
pub const MAX_MOVES: usize = TOTAL_SQUARES - 4;

/// Sentinel bound for alpha-beta windows. Larger than any heuristic score.
pub const SCORE_INF: Score = 1 << 24;
