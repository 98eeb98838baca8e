//! Move value type shared by generation, application, and search.

use std::fmt;

use crate::board::chess_types::{square_name, Color, PieceKind, Square};

/// Destination of a move. Castling relocates two pieces atomically, so it is
/// encoded as a sentinel target instead of a destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    Square(Square),
    KingsideCastle,
    QueensideCastle,
}

/// A single move. `captured` is `None` as generated and is resolved by
/// `apply_move`; once resolved the value is treated as immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: MoveTarget,
    pub piece: PieceKind,
    pub side: Color,
    pub captured: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: PieceKind, side: Color) -> Self {
        Self {
            from,
            to: MoveTarget::Square(to),
            piece,
            side,
            captured: None,
        }
    }

    pub fn kingside_castle(side: Color) -> Self {
        Self {
            from: king_origin(side),
            to: MoveTarget::KingsideCastle,
            piece: PieceKind::King,
            side,
            captured: None,
        }
    }

    pub fn queenside_castle(side: Color) -> Self {
        Self {
            from: king_origin(side),
            to: MoveTarget::QueensideCastle,
            piece: PieceKind::King,
            side,
            captured: None,
        }
    }

    /// Square the king ends up on, for castles; the plain destination
    /// otherwise.
    pub fn destination_square(&self) -> Square {
        match self.to {
            MoveTarget::Square(sq) => sq,
            MoveTarget::KingsideCastle => match self.side {
                Color::White => 6,  // g1
                Color::Black => 62, // g8
            },
            MoveTarget::QueensideCastle => match self.side {
                Color::White => 2,  // c1
                Color::Black => 58, // c8
            },
        }
    }
}

#[inline]
pub const fn king_origin(side: Color) -> Square {
    match side {
        Color::White => 4,  // e1
        Color::Black => 60, // e8
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            Color::White => "White",
            Color::Black => "Black",
        };
        match self.to {
            MoveTarget::KingsideCastle => write!(f, "{side} O-O"),
            MoveTarget::QueensideCastle => write!(f, "{side} O-O-O"),
            MoveTarget::Square(_) => write!(
                f,
                "{side} {:?}: {}-{}",
                self.piece,
                square_name(self.from),
                square_name(self.destination_square())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveTarget};
    use crate::board::chess_types::{Color, PieceKind};

    #[test]
    fn castle_sentinels_resolve_to_king_destinations() {
        assert_eq!(Move::kingside_castle(Color::White).destination_square(), 6);
        assert_eq!(Move::queenside_castle(Color::White).destination_square(), 2);
        assert_eq!(Move::kingside_castle(Color::Black).destination_square(), 62);
        assert_eq!(
            Move::queenside_castle(Color::Black).destination_square(),
            58
        );
    }

    #[test]
    fn generated_moves_carry_no_capture() {
        let mv = Move::new(12, 28, PieceKind::Pawn, Color::White);
        assert_eq!(mv.captured, None);
        assert_eq!(mv.to, MoveTarget::Square(28));
    }
}
