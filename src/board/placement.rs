//! Construction of a `Position` from the host controller's placement array.
//!
//! The controller delivers 64 signed integers ordered rank 8 to rank 1, file
//! a to h. Positive codes are White pieces, negative Black; the magnitude
//! names the class. Internally squares are little-endian rank-file, so the
//! input index is remapped during loading.

use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::position::Position;
use crate::errors::{ChessError, ChessResult};

/// Class for one placement-code magnitude. Pawns and the paired pieces carry
/// per-instance codes on the wire (10/21/22/31/32); those distinctions do not
/// survive loading.
fn kind_from_code(magnitude: i32) -> Option<PieceKind> {
    match magnitude {
        1 | 10 => Some(PieceKind::Pawn),
        21 | 22 => Some(PieceKind::Rook),
        31 | 32 => Some(PieceKind::Knight),
        4 => Some(PieceKind::Bishop),
        5 => Some(PieceKind::Queen),
        6 => Some(PieceKind::King),
        _ => None,
    }
}

/// Internal square index for a placement-array index (rank 8 first on the
/// wire, rank 1 first internally).
#[inline]
fn square_for_input_index(index: usize) -> Square {
    let rank = 7 - (index / 8) as u8;
    let file = (index % 8) as u8;
    rank * 8 + file
}

/// Builds a `Position` from a 64-code placement array with White to move.
///
/// Rejects unknown codes and duplicate kings. Square collisions cannot occur
/// here (one code per square), but the resulting masks are still routed
/// through `from_bitboards` so its disjointness check stays the single
/// authority on well-formedness.
pub fn load_position(placement: &[i32; 64]) -> ChessResult<Position> {
    let mut pieces = [[0u64; 6]; 2];
    for (index, &code) in placement.iter().enumerate() {
        if code == 0 {
            continue;
        }
        let color = if code > 0 { Color::White } else { Color::Black };
        let kind = kind_from_code(code.abs()).ok_or_else(|| {
            ChessError::InvalidPlacement(format!("unknown piece code {code} at index {index}"))
        })?;
        pieces[color.index()][kind.index()] |= 1u64 << square_for_input_index(index);
    }
    for color in [Color::White, Color::Black] {
        let kings = pieces[color.index()][PieceKind::King.index()].count_ones();
        if kings > 1 {
            return Err(ChessError::InvalidPlacement(format!(
                "{kings} kings of one color"
            )));
        }
    }
    Position::from_bitboards(pieces, Color::White)
}

/// Renders a position back into wire order, the inverse of `load_position`.
/// The per-instance pawn/rook/knight code variants are collapsed to one
/// representative magnitude each.
pub fn placement_from_position(position: &Position) -> [i32; 64] {
    let mut placement = [0i32; 64];
    for (index, slot) in placement.iter_mut().enumerate() {
        let bit = 1u64 << square_for_input_index(index);
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                if position.bitboard(color, kind) & bit != 0 {
                    let magnitude = match kind {
                        PieceKind::Pawn => 10,
                        PieceKind::Rook => 21,
                        PieceKind::Knight => 31,
                        PieceKind::Bishop => 4,
                        PieceKind::Queen => 5,
                        PieceKind::King => 6,
                    };
                    *slot = match color {
                        Color::White => magnitude,
                        Color::Black => -magnitude,
                    };
                }
            }
        }
    }
    placement
}

/// The standard initial placement in wire order.
pub fn starting_placement() -> [i32; 64] {
    let mut placement = [0i32; 64];
    let back_rank = [21, 31, 4, 5, 6, 4, 32, 22];
    for file in 0..8 {
        placement[file] = -back_rank[file]; // rank 8
        placement[8 + file] = -if file == 0 { 1 } else { 10 }; // rank 7
        placement[48 + file] = if file == 0 { 1 } else { 10 }; // rank 2
        placement[56 + file] = back_rank[file]; // rank 1
    }
    placement
}

#[cfg(test)]
mod tests {
    use super::{
        load_position, placement_from_position, square_for_input_index, starting_placement,
    };
    use crate::board::chess_types::{square_from_name, Color, PieceKind};

    #[test]
    fn wire_index_zero_is_a8_and_last_is_h1() {
        assert_eq!(
            square_for_input_index(0),
            square_from_name("a8").unwrap()
        );
        assert_eq!(
            square_for_input_index(63),
            square_from_name("h1").unwrap()
        );
        assert_eq!(
            square_for_input_index(60),
            square_from_name("e1").unwrap()
        );
    }

    #[test]
    fn starting_placement_loads_the_standard_position() {
        let position = load_position(&starting_placement()).expect("standard position");
        assert_eq!(position.piece_count(Color::White, PieceKind::Pawn), 8);
        assert_eq!(position.piece_count(Color::Black, PieceKind::Pawn), 8);
        assert_eq!(position.piece_count(Color::White, PieceKind::Rook), 2);
        assert_eq!(position.piece_count(Color::White, PieceKind::Queen), 1);
        assert_eq!(
            position.king_square(Color::White),
            square_from_name("e1")
        );
        assert_eq!(
            position.king_square(Color::Black),
            square_from_name("e8")
        );
        assert_eq!(position.side_to_move, Color::White);
    }

    #[test]
    fn placement_rendering_round_trips() {
        let position = load_position(&starting_placement()).expect("standard position");
        let rendered = placement_from_position(&position);
        let reloaded = load_position(&rendered).expect("rendered placement loads");
        assert_eq!(reloaded.pieces, position.pieces);
    }

    #[test]
    fn unknown_piece_codes_are_rejected() {
        let mut placement = [0i32; 64];
        placement[0] = 7;
        assert!(load_position(&placement).is_err());
        placement[0] = -99;
        assert!(load_position(&placement).is_err());
    }

    #[test]
    fn duplicate_kings_are_rejected() {
        let mut placement = [0i32; 64];
        placement[0] = 6;
        placement[1] = 6;
        placement[8] = -6;
        assert!(load_position(&placement).is_err());
    }
}
