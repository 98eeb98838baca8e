/// Shared primitive types for the board and search subsystems.

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece class (color is represented separately so bitboards can be indexed
/// `[color][kind]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Board square index, `0..=63`, little-endian rank-file: a1 = 0, h1 = 7,
/// a8 = 56, h8 = 63.
pub type Square = u8;

/// Algebraic name ("e4") for a square index.
pub fn square_name(square: Square) -> String {
    let file = (b'a' + square % 8) as char;
    let rank = (b'1' + square / 8) as char;
    format!("{file}{rank}")
}

/// Square index for an algebraic name, if well-formed.
pub fn square_from_name(name: &str) -> Option<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'a')?;
    let rank = bytes[1].checked_sub(b'1')?;
    if file > 7 || rank > 7 {
        return None;
    }
    Some(rank * 8 + file)
}

#[cfg(test)]
mod tests {
    use super::{square_from_name, square_name};

    #[test]
    fn square_names_round_trip() {
        for sq in 0..64u8 {
            let name = square_name(sq);
            assert_eq!(square_from_name(&name), Some(sq));
        }
        assert_eq!(square_name(0), "a1");
        assert_eq!(square_name(4), "e1");
        assert_eq!(square_name(63), "h8");
    }

    #[test]
    fn malformed_square_names_are_rejected() {
        assert_eq!(square_from_name("i1"), None);
        assert_eq!(square_from_name("a9"), None);
        assert_eq!(square_from_name("e44"), None);
    }
}
