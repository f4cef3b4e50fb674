//! Error types for the engine crate.

use thiserror::Error;

use crate::constants::SCORE_INF;
use crate::square::Square;

/// Errors raised by board-indexed operations and configuration.
///
/// None of these occur during a search over a well-formed position; they
/// signal misuse by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinates outside `0..6`.
    #[error("coordinates ({x}, {y}) are outside the 6x6 board")]
    OutOfBounds { x: usize, y: usize },

    /// A move that does not flip any opponent disc, or targets an occupied square.
    #[error("illegal move: {0}")]
    InvalidMove(Square),

    /// Search depth must be at least one ply.
    #[error("search depth must be a positive integer")]
    InvalidDepth,

    /// Weights or term constants that let an evaluation reach the search
    /// bound.
    #[error("evaluation can reach {bound}, scores must stay below {limit}", limit = SCORE_INF)]
    InvalidWeights { bound: i64 },

    /// Malformed textual input (square names, board strings).
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
