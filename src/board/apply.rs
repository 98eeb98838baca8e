//! In-place move application and exact undo.
//!
//! `apply_move` and `undo_move` are strict inverses: applying any move and
//! undoing it restores every bitboard, the side to move, and the history
//! stack bit for bit. The search leans on this to explore millions of nodes
//! on a single `Position` without copying.

use crate::board::chess_types::{square_name, Color, PieceKind, Square};
use crate::board::position::Position;
use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::{king_origin, Move, MoveTarget};

/// King and rook (from, to) square pairs for a castle.
fn castle_squares(side: Color, target: MoveTarget) -> ((Square, Square), (Square, Square)) {
    let king = king_origin(side);
    match (side, target) {
        (Color::White, MoveTarget::KingsideCastle) => ((king, 6), (7, 5)),
        (Color::White, MoveTarget::QueensideCastle) => ((king, 2), (0, 3)),
        (Color::Black, MoveTarget::KingsideCastle) => ((king, 62), (63, 61)),
        (Color::Black, MoveTarget::QueensideCastle) => ((king, 58), (56, 59)),
        _ => unreachable!("castle_squares called with a plain square target"),
    }
}

#[inline]
fn transfer(position: &mut Position, color: Color, kind: PieceKind, from: Square, to: Square) {
    let bb = &mut position.pieces[color.index()][kind.index()];
    *bb &= !(1u64 << from);
    *bb |= 1u64 << to;
}

/// Removes any enemy piece on `square`, returning its class. The disjointness
/// invariant guarantees at most one bitboard can match.
fn clear_capture(position: &mut Position, enemy: Color, square: Square) -> Option<PieceKind> {
    let bit = 1u64 << square;
    for kind in PieceKind::ALL {
        let bb = &mut position.pieces[enemy.index()][kind.index()];
        if *bb & bit != 0 {
            *bb &= !bit;
            return Some(kind);
        }
    }
    None
}

/// Applies `mv` to the position, resolving any capture, flipping the side to
/// move, and pushing the resolved move onto the history stack.
///
/// Fails with `IllegalMove` when the move's side is not the side to move or
/// the source square does not hold the stated piece; the position is left
/// untouched on failure.
pub fn apply_move(position: &mut Position, mv: Move) -> ChessResult<Move> {
    if mv.side != position.side_to_move {
        return Err(ChessError::IllegalMove(format!(
            "{mv} applied when it is not that side's turn"
        )));
    }
    if position.bitboard(mv.side, mv.piece) & (1u64 << mv.from) == 0 {
        return Err(ChessError::IllegalMove(format!(
            "{mv} has no {:?} on {}",
            mv.piece,
            square_name(mv.from)
        )));
    }

    let resolved = match mv.to {
        MoveTarget::KingsideCastle | MoveTarget::QueensideCastle => {
            let ((king_from, king_to), (rook_from, rook_to)) = castle_squares(mv.side, mv.to);
            transfer(position, mv.side, PieceKind::King, king_from, king_to);
            transfer(position, mv.side, PieceKind::Rook, rook_from, rook_to);
            mv
        }
        MoveTarget::Square(to) => {
            let captured = clear_capture(position, mv.side.opposite(), to);
            transfer(position, mv.side, mv.piece, mv.from, to);
            Move { captured, ..mv }
        }
    };

    position.side_to_move = position.side_to_move.opposite();
    position.history.push(resolved);
    Ok(resolved)
}

/// Pops the most recent move off the history stack and inverts it exactly,
/// restoring any captured piece. Fails with `EmptyHistory` when nothing has
/// been applied.
pub fn undo_move(position: &mut Position) -> ChessResult<Move> {
    let mv = position.history.pop().ok_or(ChessError::EmptyHistory)?;

    match mv.to {
        MoveTarget::KingsideCastle | MoveTarget::QueensideCastle => {
            let ((king_from, king_to), (rook_from, rook_to)) = castle_squares(mv.side, mv.to);
            transfer(position, mv.side, PieceKind::King, king_to, king_from);
            transfer(position, mv.side, PieceKind::Rook, rook_to, rook_from);
        }
        MoveTarget::Square(to) => {
            transfer(position, mv.side, mv.piece, to, mv.from);
            if let Some(kind) = mv.captured {
                position.pieces[mv.side.opposite().index()][kind.index()] |= 1u64 << to;
            }
        }
    }

    position.side_to_move = position.side_to_move.opposite();
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::{apply_move, undo_move};
    use crate::board::chess_types::{square_from_name, Color, PieceKind};
    use crate::board::placement::{load_position, starting_placement};
    use crate::board::position::Position;
    use crate::errors::ChessError;
    use crate::moves::chess_move::Move;

    fn sq(name: &str) -> u8 {
        square_from_name(name).expect("test square")
    }

    fn set(position: &mut Position, color: Color, kind: PieceKind, square: u8) {
        position.pieces[color.index()][kind.index()] |= 1u64 << square;
    }

    #[test]
    fn pawn_push_apply_then_undo_restores_every_bitboard() {
        let mut position = load_position(&starting_placement()).expect("standard position");
        let snapshot = position.pieces;

        let mv = Move::new(sq("e2"), sq("e4"), PieceKind::Pawn, Color::White);
        apply_move(&mut position, mv).expect("legal push");
        assert_eq!(position.side_to_move, Color::Black);
        assert_ne!(position.pieces, snapshot);
        assert_eq!(position.history.len(), 1);

        undo_move(&mut position).expect("one move to undo");
        assert_eq!(position.pieces, snapshot);
        assert_eq!(position.side_to_move, Color::White);
        assert!(position.history.is_empty());
    }

    #[test]
    fn capture_is_resolved_and_restored() {
        let mut position = Position::new_empty();
        set(&mut position, Color::White, PieceKind::Rook, sq("a1"));
        set(&mut position, Color::Black, PieceKind::Knight, sq("a8"));
        let snapshot = position.pieces;

        let mv = Move::new(sq("a1"), sq("a8"), PieceKind::Rook, Color::White);
        let resolved = apply_move(&mut position, mv).expect("capture");
        assert_eq!(resolved.captured, Some(PieceKind::Knight));
        assert_eq!(position.piece_count(Color::Black, PieceKind::Knight), 0);

        undo_move(&mut position).expect("undo capture");
        assert_eq!(position.pieces, snapshot);
    }

    #[test]
    fn kingside_castle_moves_both_pieces_and_undoes() {
        let mut position = Position::new_empty();
        set(&mut position, Color::White, PieceKind::King, sq("e1"));
        set(&mut position, Color::White, PieceKind::Rook, sq("h1"));
        let snapshot = position.pieces;

        apply_move(&mut position, Move::kingside_castle(Color::White)).expect("castle");
        assert_eq!(position.king_square(Color::White), Some(sq("g1")));
        assert_ne!(
            position.bitboard(Color::White, PieceKind::Rook) & (1u64 << sq("f1")),
            0
        );

        undo_move(&mut position).expect("undo castle");
        assert_eq!(position.pieces, snapshot);
    }

    #[test]
    fn queenside_castle_for_black_round_trips() {
        let mut position = Position::new_empty();
        position.side_to_move = Color::Black;
        set(&mut position, Color::Black, PieceKind::King, sq("e8"));
        set(&mut position, Color::Black, PieceKind::Rook, sq("a8"));
        let snapshot = position.pieces;

        apply_move(&mut position, Move::queenside_castle(Color::Black)).expect("castle");
        assert_eq!(position.king_square(Color::Black), Some(sq("c8")));
        assert_ne!(
            position.bitboard(Color::Black, PieceKind::Rook) & (1u64 << sq("d8")),
            0
        );

        undo_move(&mut position).expect("undo castle");
        assert_eq!(position.pieces, snapshot);
    }

    #[test]
    fn wrong_side_to_move_is_rejected_without_mutation() {
        let mut position = load_position(&starting_placement()).expect("standard position");
        let snapshot = position.pieces;
        let mv = Move::new(sq("e7"), sq("e5"), PieceKind::Pawn, Color::Black);
        assert!(matches!(
            apply_move(&mut position, mv),
            Err(ChessError::IllegalMove(_))
        ));
        assert_eq!(position.pieces, snapshot);
        assert_eq!(position.side_to_move, Color::White);
    }

    #[test]
    fn missing_source_piece_is_rejected() {
        let mut position = load_position(&starting_placement()).expect("standard position");
        let mv = Move::new(sq("e4"), sq("e5"), PieceKind::Pawn, Color::White);
        assert!(matches!(
            apply_move(&mut position, mv),
            Err(ChessError::IllegalMove(_))
        ));
    }

    #[test]
    fn undo_on_fresh_position_reports_empty_history() {
        let mut position = Position::new_empty();
        assert_eq!(undo_move(&mut position), Err(ChessError::EmptyHistory));
    }

    #[test]
    fn long_sequence_round_trips_to_identity() {
        let mut position = load_position(&starting_placement()).expect("standard position");
        let snapshot = position.pieces;

        let sequence = [
            Move::new(sq("e2"), sq("e4"), PieceKind::Pawn, Color::White),
            Move::new(sq("d7"), sq("d5"), PieceKind::Pawn, Color::Black),
            Move::new(sq("e4"), sq("d5"), PieceKind::Pawn, Color::White),
            Move::new(sq("d8"), sq("d5"), PieceKind::Queen, Color::Black),
            Move::new(sq("b1"), sq("c3"), PieceKind::Knight, Color::White),
        ];
        for mv in sequence {
            apply_move(&mut position, mv).expect("scripted move");
        }
        assert_eq!(position.history.len(), sequence.len());

        for _ in 0..sequence.len() {
            undo_move(&mut position).expect("scripted undo");
        }
        assert_eq!(position.pieces, snapshot);
        assert_eq!(position.side_to_move, Color::White);
        assert!(position.history.is_empty());
    }
}
