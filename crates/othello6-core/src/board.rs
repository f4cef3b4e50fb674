//! 6×6 Othello board representation using bitboards.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::constants::{BOARD_SIZE, TOTAL_SQUARES};
use crate::disc::{Cell, Side};
use crate::error::{EngineError, Result};
use crate::flip;
use crate::square::Square;

/// Represents a 6×6 board with one bitboard per side.
///
/// A `Board` is an immutable value: placing a disc produces a new board and
/// leaves the original untouched. The two bitboards never overlap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Discs of each side, indexed by [`Side::index`].
    discs: [Bitboard; 2],
}

impl Default for Board {
    /// Creates a board with the starting position.
    ///
    /// The initial position has:
    /// - `PlayerA` discs on C3 and D4
    /// - `PlayerB` discs on D3 and C4
    fn default() -> Self {
        Board {
            discs: [
                Bitboard::from_square(Square::C3) | Bitboard::from_square(Square::D4),
                Bitboard::from_square(Square::D3) | Bitboard::from_square(Square::C4),
            ],
        }
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no discs.
    pub fn empty() -> Board {
        Board {
            discs: [Bitboard::default(); 2],
        }
    }

    /// Creates a `Board` from the discs of each side.
    ///
    /// # Arguments
    ///
    /// * `player_a` - Discs of `PlayerA`.
    /// * `player_b` - Discs of `PlayerB`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Parse`] if a square is claimed by both sides.
    pub fn from_bitboards(player_a: impl Into<Bitboard>, player_b: impl Into<Bitboard>) -> Result<Board> {
        let player_a = player_a.into();
        let player_b = player_b.into();
        if !(player_a & player_b).is_empty() {
            return Err(EngineError::Parse(
                "a square cannot hold discs of both sides".to_string(),
            ));
        }
        Ok(Board {
            discs: [player_a, player_b],
        })
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string holds 36 cells from A1 to F6, row by row. `X` is a
    /// `PlayerA` disc, `O` a `PlayerB` disc and `-` an empty square.
    /// Whitespace is ignored so boards can be written one row per line.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Parse`] for an unknown character or a cell
    /// count other than 36.
    pub fn from_string(board_string: &str) -> Result<Board> {
        let mut board = Board::empty();
        let mut n_cells = 0;
        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            let Some(sq) = Square::from_index(n_cells) else {
                return Err(EngineError::Parse(format!(
                    "board string has more than {TOTAL_SQUARES} cells"
                )));
            };
            match c {
                'X' | 'x' => board.discs[Side::PlayerA.index()] = board.discs[Side::PlayerA.index()].set(sq),
                'O' | 'o' => board.discs[Side::PlayerB.index()] = board.discs[Side::PlayerB.index()].set(sq),
                '-' | '.' => {}
                _ => {
                    return Err(EngineError::Parse(format!(
                        "unexpected character '{c}' at {sq}"
                    )));
                }
            }
            n_cells += 1;
        }
        if n_cells != TOTAL_SQUARES {
            return Err(EngineError::Parse(format!(
                "board string has {n_cells} cells, expected {TOTAL_SQUARES}"
            )));
        }
        Ok(board)
    }

    /// Gets the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if either coordinate is 6 or more.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell> {
        Ok(self.cell_at(Square::from_xy(x, y)?))
    }

    /// Gets the cell at a specific square.
    #[inline]
    pub fn cell_at(&self, sq: Square) -> Cell {
        if self.discs[Side::PlayerA.index()].contains(sq) {
            Cell::PlayerA
        } else if self.discs[Side::PlayerB.index()].contains(sq) {
            Cell::PlayerB
        } else {
            Cell::Empty
        }
    }

    /// Returns the discs of `side`.
    #[inline(always)]
    pub fn discs(&self, side: Side) -> Bitboard {
        self.discs[side.index()]
    }

    /// Returns the empty squares.
    #[inline(always)]
    pub fn get_empty(&self) -> Bitboard {
        (self.discs[0] | self.discs[1]).complement()
    }

    /// Returns the number of discs `side` has on the board.
    #[inline(always)]
    pub fn count(&self, side: Side) -> u32 {
        self.discs(side).count()
    }

    /// Returns the number of discs of both sides.
    #[inline(always)]
    pub fn disc_count(&self) -> u32 {
        self.discs[0].count() + self.discs[1].count()
    }

    /// Returns the number of empty squares on the board.
    #[inline(always)]
    pub fn get_empty_count(&self) -> u32 {
        self.get_empty().count()
    }

    /// Checks whether every square is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.get_empty().is_empty()
    }

    /// Checks whether `side` may place a disc on `sq`.
    ///
    /// The square must be empty and the placement must close at least one run
    /// of opponent discs in one of the eight directions.
    #[inline]
    pub fn is_legal(&self, side: Side, sq: Square) -> bool {
        self.cell_at(sq) == Cell::Empty
            && !flip::flip(sq, self.discs(side), self.discs(side.opponent())).is_empty()
    }

    /// Coordinate form of [`Board::is_legal`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if either coordinate is 6 or more.
    pub fn is_legal_xy(&self, side: Side, x: usize, y: usize) -> Result<bool> {
        Ok(self.is_legal(side, Square::from_xy(x, y)?))
    }

    /// Generates every legal placement for `side`.
    ///
    /// An empty result means `side` must pass.
    #[inline]
    pub fn generate_moves(&self, side: Side) -> Bitboard {
        self.discs(side).get_moves(self.discs(side.opponent()))
    }

    /// Checks if `side` has at least one legal move.
    #[inline]
    pub fn has_legal_moves(&self, side: Side) -> bool {
        !self.generate_moves(side).is_empty()
    }

    /// Checks if the game is over (neither side can move).
    #[inline]
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves(Side::PlayerA) && !self.has_legal_moves(Side::PlayerB)
    }

    /// Places a disc of `side` on `sq` and flips every closed run.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMove`] if the move is not legal.
    pub fn apply(&self, side: Side, sq: Square) -> Result<Board> {
        if self.cell_at(sq) != Cell::Empty {
            return Err(EngineError::InvalidMove(sq));
        }
        let flipped = flip::flip(sq, self.discs(side), self.discs(side.opponent()));
        if flipped.is_empty() {
            return Err(EngineError::InvalidMove(sq));
        }
        Ok(self.make_move_with_flipped(side, sq, flipped))
    }

    /// Coordinate form of [`Board::apply`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] for bad coordinates and
    /// [`EngineError::InvalidMove`] for an illegal placement.
    pub fn apply_xy(&self, side: Side, x: usize, y: usize) -> Result<Board> {
        self.apply(side, Square::from_xy(x, y)?)
    }

    /// Places a disc using a precomputed flip mask.
    ///
    /// `flipped` must come from [`flip::flip`] for the same board, side and
    /// square; the move list does this once per candidate move.
    #[inline(always)]
    pub fn make_move_with_flipped(&self, side: Side, sq: Square, flipped: Bitboard) -> Board {
        debug_assert!(self.cell_at(sq) == Cell::Empty);
        debug_assert!(!flipped.is_empty());

        let mut discs = self.discs;
        discs[side.index()] = discs[side.index()] | flipped | Bitboard::from_square(sq);
        discs[side.opponent().index()] = discs[side.opponent().index()] ^ flipped;
        Board { discs }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f")?;
        for y in 0..BOARD_SIZE {
            write!(f, "{}", y + 1)?;
            for x in 0..BOARD_SIZE {
                let sq = Square::ALL[y * BOARD_SIZE + x];
                write!(f, " {}", self.cell_at(sq).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
