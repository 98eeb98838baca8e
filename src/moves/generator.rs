//! Pseudo-legal move generation and the legality filter.
//!
//! Generation walks each class bitboard with a scan-and-clear loop, computes
//! the per-piece pattern, masks out own occupancy, and emits one `Move` per
//! destination bit. Legality is settled afterwards: apply the candidate,
//! test the mover's king for check, undo.

use crate::board::apply::{apply_move, undo_move};
use crate::board::bitboard::{
    bishop_attacks, king_attacks, knight_attacks, north_one, pawn_any_attacks, queen_attacks,
    rook_attacks, south_one, RANK_2, RANK_7,
};
use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::position::Position;
use crate::errors::ChessResult;
use crate::moves::chess_move::{king_origin, Move};

/// Emits one move per set bit of `targets`.
fn push_targets(moves: &mut Vec<Move>, from: Square, mut targets: u64, piece: PieceKind, side: Color) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        moves.push(Move::new(from, to, piece, side));
        targets &= targets - 1;
    }
}

fn generate_for_class(moves: &mut Vec<Move>, position: &Position, side: Color, kind: PieceKind) {
    let own = position.occupancy(side);
    let empty = position.empty_squares();
    let mut pieces = position.bitboard(side, kind);
    while pieces != 0 {
        let from = pieces.trailing_zeros() as Square;
        let bit = 1u64 << from;
        let pattern = match kind {
            PieceKind::King => king_attacks(bit),
            PieceKind::Queen => queen_attacks(bit, empty),
            PieceKind::Rook => rook_attacks(bit, empty),
            PieceKind::Knight => knight_attacks(bit),
            PieceKind::Bishop => bishop_attacks(bit, empty),
            PieceKind::Pawn => unreachable!("pawns are generated separately"),
        };
        push_targets(moves, from, pattern & !own, kind, side);
        pieces &= pieces - 1;
    }
}

fn generate_pawn_moves(moves: &mut Vec<Move>, position: &Position, side: Color) {
    let empty = position.empty_squares();
    let enemy = position.occupancy(side.opposite());
    let mut pawns = position.bitboard(side, PieceKind::Pawn);
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;
        let bit = 1u64 << from;
        let (single, start_rank) = match side {
            Color::White => (north_one(bit) & empty, RANK_2),
            Color::Black => (south_one(bit) & empty, RANK_7),
        };
        let double = if single != 0 && bit & start_rank != 0 {
            match side {
                Color::White => north_one(single) & empty,
                Color::Black => south_one(single) & empty,
            }
        } else {
            0
        };
        let captures = pawn_any_attacks(bit, side) & enemy;
        push_targets(moves, from, single | double | captures, PieceKind::Pawn, side);
        pawns &= pawns - 1;
    }
}

/// Both castle prerequisites checked here are structural: king and rook on
/// their origin squares and nothing standing between them. The squares the
/// king crosses are not tested for enemy attack.
fn is_kingside_castle_allowed(position: &Position, side: Color) -> bool {
    let king = king_origin(side);
    let rook = king + 3;
    let between = (1u64 << (king + 1)) | (1u64 << (king + 2));
    position.bitboard(side, PieceKind::King) & (1u64 << king) != 0
        && position.bitboard(side, PieceKind::Rook) & (1u64 << rook) != 0
        && position.occupancy_all() & between == 0
}

fn is_queenside_castle_allowed(position: &Position, side: Color) -> bool {
    let king = king_origin(side);
    let rook = king - 4;
    let between = (1u64 << (king - 1)) | (1u64 << (king - 2)) | (1u64 << (king - 3));
    position.bitboard(side, PieceKind::King) & (1u64 << king) != 0
        && position.bitboard(side, PieceKind::Rook) & (1u64 << rook) != 0
        && position.occupancy_all() & between == 0
}

/// All pseudo-legal moves for `side`, kings first. Moves that leave the
/// mover's king in check are included; `generate_legal_moves` filters them.
pub fn generate_moves(position: &Position, side: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for kind in [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
    ] {
        generate_for_class(&mut moves, position, side, kind);
    }
    generate_pawn_moves(&mut moves, position, side);
    if is_kingside_castle_allowed(position, side) {
        moves.push(Move::kingside_castle(side));
    }
    if is_queenside_castle_allowed(position, side) {
        moves.push(Move::queenside_castle(side));
    }
    moves
}

/// Pseudo-legal generation plus the apply/check/undo filter, for the side to
/// move. The position is mutated during filtering but restored before return.
pub fn generate_legal_moves(position: &mut Position) -> ChessResult<Vec<Move>> {
    let side = position.side_to_move;
    let candidates = generate_moves(position, side);
    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        apply_move(position, mv)?;
        let safe = !position.is_in_check(side);
        undo_move(position)?;
        if safe {
            legal.push(mv);
        }
    }
    Ok(legal)
}
