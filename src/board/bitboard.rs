//! Bitboard shift and fill primitives.
//!
//! Sliding-piece attacks use occluded fills: the piece set is shifted one step
//! at a time in a direction, masked to the empty-square set, for seven
//! iterations (the board diameter minus one), then a final unmasked step adds
//! the first blocking piece of either color as an attacked square. East/west
//! components pre-mask with a file exclusion so shifts never wrap between the
//! a and h files.

use crate::board::chess_types::Color;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = FILE_A << 7;

pub const RANK_1: u64 = 0xff;
pub const RANK_2: u64 = RANK_1 << 8;
pub const RANK_4: u64 = RANK_1 << 24;
pub const RANK_5: u64 = RANK_1 << 32;
pub const RANK_7: u64 = RANK_1 << 48;
pub const RANK_8: u64 = RANK_1 << 56;

// Single-step shifts.

#[inline]
pub const fn north_one(bb: u64) -> u64 {
    bb << 8
}

#[inline]
pub const fn south_one(bb: u64) -> u64 {
    bb >> 8
}

#[inline]
pub const fn east_one(bb: u64) -> u64 {
    (bb << 1) & !FILE_A
}

#[inline]
pub const fn west_one(bb: u64) -> u64 {
    (bb >> 1) & !FILE_H
}

#[inline]
pub const fn north_east_one(bb: u64) -> u64 {
    (bb << 9) & !FILE_A
}

#[inline]
pub const fn north_west_one(bb: u64) -> u64 {
    (bb << 7) & !FILE_H
}

#[inline]
pub const fn south_east_one(bb: u64) -> u64 {
    (bb >> 7) & !FILE_A
}

#[inline]
pub const fn south_west_one(bb: u64) -> u64 {
    (bb >> 9) & !FILE_H
}

// Occluded fills. Each returns the piece set plus every empty square reached
// in its direction; the matching `*_attacks` function takes the terminal step
// that includes the first blocker.

#[inline]
fn north_occluded(mut gen: u64, empty: u64) -> u64 {
    let mut cycle = 0;
    while cycle < 7 {
        gen |= empty & (gen << 8);
        cycle += 1;
    }
    gen
}

#[inline]
fn south_occluded(mut gen: u64, empty: u64) -> u64 {
    let mut cycle = 0;
    while cycle < 7 {
        gen |= empty & (gen >> 8);
        cycle += 1;
    }
    gen
}

#[inline]
fn east_occluded(mut gen: u64, empty: u64) -> u64 {
    let empty = empty & !FILE_A;
    let mut cycle = 0;
    while cycle < 7 {
        gen |= empty & (gen << 1);
        cycle += 1;
    }
    gen
}

#[inline]
fn west_occluded(mut gen: u64, empty: u64) -> u64 {
    let empty = empty & !FILE_H;
    let mut cycle = 0;
    while cycle < 7 {
        gen |= empty & (gen >> 1);
        cycle += 1;
    }
    gen
}

#[inline]
fn north_east_occluded(mut gen: u64, empty: u64) -> u64 {
    let empty = empty & !FILE_A;
    let mut cycle = 0;
    while cycle < 7 {
        gen |= empty & (gen << 9);
        cycle += 1;
    }
    gen
}

#[inline]
fn north_west_occluded(mut gen: u64, empty: u64) -> u64 {
    let empty = empty & !FILE_H;
    let mut cycle = 0;
    while cycle < 7 {
        gen |= empty & (gen << 7);
        cycle += 1;
    }
    gen
}

#[inline]
fn south_east_occluded(mut gen: u64, empty: u64) -> u64 {
    let empty = empty & !FILE_A;
    let mut cycle = 0;
    while cycle < 7 {
        gen |= empty & (gen >> 7);
        cycle += 1;
    }
    gen
}

#[inline]
fn south_west_occluded(mut gen: u64, empty: u64) -> u64 {
    let empty = empty & !FILE_H;
    let mut cycle = 0;
    while cycle < 7 {
        gen |= empty & (gen >> 9);
        cycle += 1;
    }
    gen
}

#[inline]
pub fn north_attacks(gen: u64, empty: u64) -> u64 {
    north_one(north_occluded(gen, empty))
}

#[inline]
pub fn south_attacks(gen: u64, empty: u64) -> u64 {
    south_one(south_occluded(gen, empty))
}

#[inline]
pub fn east_attacks(gen: u64, empty: u64) -> u64 {
    east_one(east_occluded(gen, empty))
}

#[inline]
pub fn west_attacks(gen: u64, empty: u64) -> u64 {
    west_one(west_occluded(gen, empty))
}

#[inline]
pub fn north_east_attacks(gen: u64, empty: u64) -> u64 {
    north_east_one(north_east_occluded(gen, empty))
}

#[inline]
pub fn north_west_attacks(gen: u64, empty: u64) -> u64 {
    north_west_one(north_west_occluded(gen, empty))
}

#[inline]
pub fn south_east_attacks(gen: u64, empty: u64) -> u64 {
    south_east_one(south_east_occluded(gen, empty))
}

#[inline]
pub fn south_west_attacks(gen: u64, empty: u64) -> u64 {
    south_west_one(south_west_occluded(gen, empty))
}

/// All squares a rook set attacks, first blockers included.
#[inline]
pub fn rook_attacks(rooks: u64, empty: u64) -> u64 {
    north_attacks(rooks, empty)
        | south_attacks(rooks, empty)
        | east_attacks(rooks, empty)
        | west_attacks(rooks, empty)
}

/// All squares a bishop set attacks, first blockers included.
#[inline]
pub fn bishop_attacks(bishops: u64, empty: u64) -> u64 {
    north_east_attacks(bishops, empty)
        | north_west_attacks(bishops, empty)
        | south_east_attacks(bishops, empty)
        | south_west_attacks(bishops, empty)
}

/// All squares a queen set attacks, first blockers included.
#[inline]
pub fn queen_attacks(queens: u64, empty: u64) -> u64 {
    rook_attacks(queens, empty) | bishop_attacks(queens, empty)
}

/// All squares a knight set attacks.
#[inline]
pub fn knight_attacks(knights: u64) -> u64 {
    let east = east_one(knights);
    let west = west_one(knights);
    let mut pattern = (east | west) << 16;
    pattern |= (east | west) >> 16;

    let east = east_one(east);
    let west = west_one(west);
    pattern |= (east | west) << 8;
    pattern |= (east | west) >> 8;

    pattern
}

/// All squares a king set attacks.
#[inline]
pub fn king_attacks(king: u64) -> u64 {
    let mut pattern = east_one(king) | west_one(king);
    let king = king | pattern;
    pattern |= north_one(king) | south_one(king);
    pattern
}

/// Diagonal attack squares of a pawn set, own-occupied squares included.
#[inline]
pub fn pawn_any_attacks(pawns: u64, color: Color) -> u64 {
    match color {
        Color::White => north_east_one(pawns) | north_west_one(pawns),
        Color::Black => south_east_one(pawns) | south_west_one(pawns),
    }
}
