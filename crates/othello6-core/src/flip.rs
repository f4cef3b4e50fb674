//! Flip computation for disc placement.

use crate::bitboard::{Bitboard, Direction};
use crate::square::Square;

/// Computes the opponent discs flipped by placing a disc on `sq`.
///
/// Each of the eight directions is scanned independently: a run of opponent
/// discs starting next to `sq` is flipped when it is closed by one of the
/// player's discs. Runs that reach an empty square or the edge flip nothing.
///
/// # Arguments
///
/// * `sq` - The square where the disc is placed.
/// * `player` - The discs of the side placing the disc.
/// * `opponent` - The discs of the other side.
///
/// # Returns
///
/// The union of all flipped runs. Empty if the placement flips nothing.
#[inline]
pub fn flip(sq: Square, player: Bitboard, opponent: Bitboard) -> Bitboard {
    let origin = Bitboard::from_square(sq);
    let mut flipped = Bitboard::default();

    for dir in Direction::ALL {
        let mut run = Bitboard::default();
        let mut cursor = origin.shift(dir);
        while !(cursor & opponent).is_empty() {
            run |= cursor;
            cursor = cursor.shift(dir);
        }
        if !(cursor & player).is_empty() {
            flipped |= run;
        }
    }

    flipped
}
