//! Move-search engine for 6×6 Othello.
//!
//! The engine is a pure function of a [`board::Board`], the [`disc::Side`] to
//! move and a [`config::SearchConfig`]: it enumerates legal moves, orders them
//! by a one-ply heuristic evaluation and runs a depth-limited alpha-beta
//! minimax search to pick one. Playing styles are expressed as
//! [`personality::Personality`] values, all driven by the same engine.

pub mod agent;
pub mod bitboard;
pub mod board;
pub mod config;
pub mod constants;
pub mod disc;
pub mod error;
pub mod eval;
pub mod flip;
pub mod game_state;
pub mod move_list;
pub mod perft;
pub mod personality;
pub mod search;
pub mod square;
pub mod stability;
pub mod types;
