//! Stable disc detection.
//!
//! A disc is treated as stable when its whole row and whole column are
//! occupied: no empty square remains on any of its four orthogonal rays, so
//! the opponent has no placement that could flank it along those lines.
//! Diagonals are not considered.

use crate::bitboard::{Bitboard, FULL_MASK};
use crate::board::Board;
use crate::constants::{BOARD_SIZE, TOTAL_SQUARES};
use crate::disc::Side;

/// For each square, the other squares of its row and column.
const ORTHOGONAL_LINES: [u64; TOTAL_SQUARES] = build_orthogonal_lines();

const fn build_orthogonal_lines() -> [u64; TOTAL_SQUARES] {
    const ROW_1: u64 = (1 << BOARD_SIZE) - 1;
    const FILE_A: u64 = 0x0_4104_1041;

    let mut lines = [0u64; TOTAL_SQUARES];
    let mut sq = 0;
    while sq < TOTAL_SQUARES {
        let x = sq % BOARD_SIZE;
        let y = sq / BOARD_SIZE;
        let row = ROW_1 << (y * BOARD_SIZE);
        let column = FILE_A << x;
        lines[sq] = (row | column) & !(1u64 << sq) & FULL_MASK;
        sq += 1;
    }
    lines
}

/// Returns the discs of `side` that are stable.
pub fn get_stable_discs(board: &Board, side: Side) -> Bitboard {
    let empty = board.get_empty().bits();
    board
        .discs(side)
        .iter()
        .filter(|sq| ORTHOGONAL_LINES[sq.index()] & empty == 0)
        .fold(Bitboard::default(), |acc, sq| acc.set(sq))
}

/// Returns the number of stable discs of `side`.
#[inline]
pub fn count_stable_discs(board: &Board, side: Side) -> u32 {
    get_stable_discs(board, side).count()
}
