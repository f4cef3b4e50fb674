use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, TOTAL_SQUARES};
use crate::error::{EngineError, Result};

/// Represents a square on the 6×6 board, ranging from A1 to F6.
///
/// Files (columns, the `x` coordinate) are labeled A-F and ranks (rows, the
/// `y` coordinate) are labeled 1-6. The board is indexed as follows:
///
/// ```text
///   A  B  C  D  E  F
/// 1 00 01 02 03 04 05
/// 2 06 07 08 09 10 11
/// 3 12 13 14 15 16 17
/// 4 18 19 20 21 22 23
/// 5 24 25 26 27 28 29
/// 6 30 31 32 33 34 35
/// ```
///
/// A square doubles as a move: placing a disc of the side to move on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1,
    A2, B2, C2, D2, E2, F2,
    A3, B3, C3, D3, E3, F3,
    A4, B4, C4, D4, E4, F4,
    A5, B5, C5, D5, E5, F5,
    A6, B6, C6, D6, E6, F6,
}

impl Square {
    /// All squares in index order.
    #[rustfmt::skip]
    pub const ALL: [Square; TOTAL_SQUARES] = [
        Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1,
        Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2,
        Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3,
        Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4,
        Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5,
        Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6,
    ];

    /// Returns a `u64` with a single bit set at this square's index.
    #[inline]
    pub const fn bitboard(self) -> u64 {
        1 << self as u8
    }

    /// Returns the index of the square (0-35).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts an index into a `Square`.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if `index < 36`, `None` otherwise.
    #[inline]
    pub fn from_index(index: usize) -> Option<Square> {
        Square::ALL.get(index).copied()
    }

    /// Creates a `Square` from board coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - Column, 0 is file A.
    /// * `y` - Row, 0 is rank 1.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if either coordinate is 6 or more.
    pub fn from_xy(x: usize, y: usize) -> Result<Square> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(EngineError::OutOfBounds { x, y });
        }
        Ok(Square::ALL[y * BOARD_SIZE + x])
    }

    /// Column of this square (0-5).
    #[inline]
    pub const fn x(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Row of this square (0-5).
    #[inline]
    pub const fn y(self) -> usize {
        self.index() / BOARD_SIZE
    }
}

impl FromStr for Square {
    type Err = EngineError;

    /// Parses algebraic notation such as `"c2"` or `"F6"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(EngineError::Parse(format!(
                "invalid square '{s}': must be 2 characters (e.g. 'c2')"
            )));
        };

        let file_char = file_char.to_ascii_lowercase();
        if !('a'..='f').contains(&file_char) {
            return Err(EngineError::Parse(format!(
                "invalid file '{file_char}': must be a-f"
            )));
        }
        if !('1'..='6').contains(&rank_char) {
            return Err(EngineError::Parse(format!(
                "invalid rank '{rank_char}': must be 1-6"
            )));
        }

        let x = (file_char as u8 - b'a') as usize;
        let y = (rank_char as u8 - b'1') as usize;
        Square::from_xy(x, y)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.x() as u8 + b'a') as char;
        let rank = (self.y() as u8 + b'1') as char;
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bitboard() {
        assert_eq!(Square::A1.bitboard(), 1);
        assert_eq!(Square::F6.bitboard(), 1 << 35);
    }

    #[test]
    fn test_from_xy() {
        assert_eq!(Square::from_xy(0, 0).unwrap(), Square::A1);
        assert_eq!(Square::from_xy(2, 1).unwrap(), Square::C2);
        assert_eq!(Square::from_xy(5, 5).unwrap(), Square::F6);
        assert_eq!(
            Square::from_xy(6, 0),
            Err(EngineError::OutOfBounds { x: 6, y: 0 })
        );
        assert_eq!(
            Square::from_xy(0, 6),
            Err(EngineError::OutOfBounds { x: 0, y: 6 })
        );
    }

    #[test]
    fn test_coordinates_round_trip_through_index() {
        for sq in Square::ALL {
            assert_eq!(Square::from_xy(sq.x(), sq.y()).unwrap(), sq);
            assert_eq!(Square::from_index(sq.index()), Some(sq));
        }
        assert_eq!(Square::from_index(36), None);
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!("a1".parse::<Square>().unwrap(), Square::A1);
        assert_eq!("F6".parse::<Square>().unwrap(), Square::F6);
        assert_eq!(" c2 ".parse::<Square>().unwrap(), Square::C2);
        assert!("g1".parse::<Square>().is_err());
        assert!("a7".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a12".parse::<Square>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::D5.to_string(), "d5");
        assert_eq!(Square::F6.to_string(), "f6");
    }
}
