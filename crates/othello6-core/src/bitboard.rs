//! Bitboard operations and types.
//!
//! This module provides a [`Bitboard`] type that represents the 36 squares of a
//! 6×6 board in the low bits of a `u64`, where bit `y * 6 + x` corresponds to
//! square `(x, y)` (bit 0 = A1, bit 35 = F6).

use crate::square::Square;

/// All 36 board squares.
pub const FULL_MASK: u64 = 0xF_FFFF_FFFF;

/// Squares on file A.
const FILE_A: u64 = 0x0_4104_1041;

/// Squares on file F.
const FILE_F: u64 = 0x8_2082_0820;

/// Bitboard mask representing the four corner squares (A1, F1, A6, F6).
pub const CORNER_MASK: u64 = 0x8_4000_0021;

/// The ring one square in from the border (B2-E2, B5-E5, B3, B4, E3, E4).
pub const INSET_RING_MASK: u64 = 0x0_1E49_2780;

/// One of the eight compass directions on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four orthogonal directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
}

/// Newtype wrapper for a 36-square bitboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Creates a new bitboard from raw bits. Bits above square F6 are dropped.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits & FULL_MASK)
    }

    /// Returns the raw bits.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Creates a bitboard with a single bit set at the given square.
    #[inline(always)]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(sq.bitboard())
    }

    /// Returns a new bitboard with the bit at the given square set.
    #[inline(always)]
    pub const fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bitboard())
    }

    /// Checks whether the given square is set.
    #[inline(always)]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & sq.bitboard() != 0
    }

    /// Number of set squares.
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Checks whether no square is set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the set squares complemented within the board.
    #[inline(always)]
    pub const fn complement(self) -> Self {
        Bitboard(!self.0 & FULL_MASK)
    }

    /// Returns the lowest set square, if any.
    #[inline]
    pub fn lsb_square(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Square::from_index(self.0.trailing_zeros() as usize)
        }
    }

    /// Shifts every set square one step in `dir`, dropping squares that would
    /// leave the board.
    #[inline(always)]
    pub const fn shift(self, dir: Direction) -> Self {
        let b = self.0;
        let shifted = match dir {
            Direction::North => b >> 6,
            Direction::NorthEast => (b >> 5) & !FILE_A,
            Direction::East => (b << 1) & !FILE_A,
            Direction::SouthEast => (b << 7) & !FILE_A,
            Direction::South => b << 6,
            Direction::SouthWest => (b << 5) & !FILE_F,
            Direction::West => (b >> 1) & !FILE_F,
            Direction::NorthWest => (b >> 7) & !FILE_F,
        };
        Bitboard(shifted & FULL_MASK)
    }

    /// Squares orthogonally adjacent to at least one set square.
    #[inline]
    pub fn orthogonal_neighbours(self) -> Self {
        Direction::ORTHOGONAL
            .iter()
            .fold(Bitboard(0), |acc, &dir| acc | self.shift(dir))
    }

    /// Computes the legal moves for the side owning `self` against `opponent`.
    ///
    /// A move is an empty square from which, in some direction, a run of one
    /// or more opponent discs is closed by one of our discs. On a 6-wide board
    /// such a run is at most four discs long.
    ///
    /// # Arguments
    ///
    /// * `opponent` - The opponent's discs.
    ///
    /// # Returns
    ///
    /// A bitboard of every legal placement.
    #[inline]
    pub fn get_moves(self, opponent: Bitboard) -> Bitboard {
        let empty = (self | opponent).complement();
        let mut moves = Bitboard(0);
        for dir in Direction::ALL {
            let mut run = self.shift(dir) & opponent;
            for _ in 0..3 {
                run |= run.shift(dir) & opponent;
            }
            moves |= run.shift(dir) & empty;
        }
        moves
    }

    /// Returns an iterator over the set squares in ascending index order.
    #[inline]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        self.complement()
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        Bitboard::new(bits)
    }
}

impl From<Bitboard> for u64 {
    #[inline(always)]
    fn from(bb: Bitboard) -> Self {
        bb.0
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        Bitboard::from_square(sq)
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIterator::new(self)
    }
}

impl std::fmt::Display for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  a b c d e f")?;
        for y in 0..6 {
            write!(f, "{}", y + 1)?;
            for x in 0..6 {
                let bit = 1u64 << (y * 6 + x);
                let c = if self.0 & bit != 0 { '*' } else { '.' };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set squares of a [`Bitboard`], lowest index first.
pub struct BitboardIterator {
    remaining: u64,
}

impl BitboardIterator {
    /// Creates an iterator over `bitboard`.
    #[inline]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator {
            remaining: bitboard.0,
        }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        Square::from_index(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}
