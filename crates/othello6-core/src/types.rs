//! Common type aliases used throughout the engine.

use crate::constants::BOARD_SIZE;

/// Search depth in plies.
pub type Depth = u32;

/// Heuristic score, from the perspective of the side being evaluated.
pub type Score = i32;

/// Positional weight per square, indexed as `weights[y][x]`.
pub type WeightTable = [[Score; BOARD_SIZE]; BOARD_SIZE];
