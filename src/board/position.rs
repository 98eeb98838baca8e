//! Packed bitboard position.
//!
//! `Position` stores one 64-bit occupancy mask per (color, piece kind) pair,
//! the side to move, and the history stack consumed by make/unmake. All
//! derived quantities (occupancy, attack patterns, mobility, check status)
//! are computed from the masks with bit operations only.
//!
//! Invariants: no two masks of the same color share a bit, white and black
//! occupancy are disjoint, and `history.len()` equals the number of moves
//! applied and not yet undone.

use crate::board::bitboard::{
    bishop_attacks, king_attacks, knight_attacks, north_one, pawn_any_attacks, queen_attacks,
    rook_attacks, south_one, RANK_4, RANK_5,
};
use crate::board::chess_types::{Color, PieceKind, Square};
use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone)]
pub struct Position {
    /// Occupancy masks indexed `[color][piece_kind]`.
    pub pieces: [[u64; 6]; 2],
    pub side_to_move: Color,
    /// Applied moves, most recent last. Drives exact undo.
    pub history: Vec<Move>,
}

impl Position {
    pub fn new_empty() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }

    /// Deep-copies an existing packed representation. Fails if any two masks
    /// overlap, since every derived pattern depends on disjoint occupancy.
    pub fn from_bitboards(pieces: [[u64; 6]; 2], side_to_move: Color) -> ChessResult<Self> {
        let mut seen = 0u64;
        for color_masks in &pieces {
            for mask in color_masks {
                if seen & mask != 0 {
                    return Err(ChessError::InvalidPlacement(
                        "two pieces occupy the same square".to_owned(),
                    ));
                }
                seen |= mask;
            }
        }
        Ok(Self {
            pieces,
            side_to_move,
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn bitboard(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.pieces[color.index()]
            .iter()
            .fold(0u64, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy(Color::White) | self.occupancy(Color::Black)
    }

    #[inline]
    pub fn empty_squares(&self) -> u64 {
        !self.occupancy_all()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = self.bitboard(color, PieceKind::King);
        if king == 0 {
            None
        } else {
            Some(king.trailing_zeros() as Square)
        }
    }

    /// Attack set of one piece class, own-occupied squares included.
    pub fn class_attacks(&self, color: Color, kind: PieceKind) -> u64 {
        let bb = self.bitboard(color, kind);
        if bb == 0 {
            return 0;
        }
        let empty = self.empty_squares();
        match kind {
            PieceKind::King => king_attacks(bb),
            PieceKind::Knight => knight_attacks(bb),
            PieceKind::Rook => rook_attacks(bb, empty),
            PieceKind::Bishop => bishop_attacks(bb, empty),
            PieceKind::Queen => queen_attacks(bb, empty),
            PieceKind::Pawn => pawn_any_attacks(bb, color),
        }
    }

    /// Every square attacked by `color`, squares occupied by its own pieces
    /// included. This is the variant check detection needs: a defended square
    /// still gives check when the enemy king stands on it.
    pub fn attack_pattern(&self, color: Color) -> u64 {
        PieceKind::ALL
            .iter()
            .fold(0u64, |acc, kind| acc | self.class_attacks(color, *kind))
    }

    /// Every square a piece of `color` could move to: the attack union minus
    /// own occupancy, with pawns contributing pushes plus real captures
    /// instead of raw diagonal attacks.
    pub fn move_pattern(&self, color: Color) -> u64 {
        let own = self.occupancy(color);
        let mut pattern = 0u64;
        for kind in [
            PieceKind::King,
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
        ] {
            pattern |= self.class_attacks(color, kind) & !own;
        }
        pattern | self.pawn_move_targets(color)
    }

    /// True iff the opponent's attack pattern covers this color's king.
    ///
    /// Meaningful only after a candidate move has been fully applied; the
    /// legality filter calls it post-hoc, never speculatively.
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = self.bitboard(color, PieceKind::King);
        king != 0 && self.attack_pattern(color.opposite()) & king != 0
    }

    #[inline]
    pub fn piece_count(&self, color: Color, kind: PieceKind) -> u32 {
        self.bitboard(color, kind).count_ones()
    }

    /// Number of destination squares available to one piece class.
    pub fn class_mobility(&self, color: Color, kind: PieceKind) -> u32 {
        match kind {
            PieceKind::Pawn => self.pawn_move_targets(color).count_ones(),
            _ => (self.class_attacks(color, kind) & !self.occupancy(color)).count_ones(),
        }
    }

    /// Total destination-square count across all classes, consumed by
    /// mobility-aware evaluations.
    pub fn mobility(&self, color: Color) -> u32 {
        PieceKind::ALL
            .iter()
            .map(|kind| self.class_mobility(color, *kind))
            .sum()
    }

    /// Push, double-push and capture targets of the whole pawn set.
    pub fn pawn_move_targets(&self, color: Color) -> u64 {
        let pawns = self.bitboard(color, PieceKind::Pawn);
        if pawns == 0 {
            return 0;
        }
        let empty = self.empty_squares();
        let enemy = self.occupancy(color.opposite());
        match color {
            Color::White => {
                let single = north_one(pawns) & empty;
                let double = north_one(single) & empty & RANK_4;
                single | double | (pawn_any_attacks(pawns, color) & enemy)
            }
            Color::Black => {
                let single = south_one(pawns) & empty;
                let double = south_one(single) & empty & RANK_5;
                single | double | (pawn_any_attacks(pawns, color) & enemy)
            }
        }
    }

    /// Pawns with an empty square directly ahead.
    pub fn pawns_able_to_push(&self, color: Color) -> u64 {
        let pawns = self.bitboard(color, PieceKind::Pawn);
        let empty = self.empty_squares();
        match color {
            Color::White => south_one(empty) & pawns,
            Color::Black => north_one(empty) & pawns,
        }
    }

    /// Pawns on their starting rank with both squares ahead empty.
    pub fn pawns_able_to_double_push(&self, color: Color) -> u64 {
        let pawns = self.bitboard(color, PieceKind::Pawn);
        let empty = self.empty_squares();
        match color {
            Color::White => {
                let empty_rank3 = south_one(empty & RANK_4) & empty;
                south_one(empty_rank3) & pawns
            }
            Color::Black => {
                let empty_rank6 = north_one(empty & RANK_5) & empty;
                north_one(empty_rank6) & pawns
            }
        }
    }
}
