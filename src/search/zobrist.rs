//! Zobrist position fingerprints.
//!
//! Keys come from a seeded `StdRng` so fingerprints are deterministic across
//! runs and across independently constructed engines, which keeps tests and
//! debugging sessions reproducible. The fingerprint is recomputed from
//! scratch on every call rather than maintained incrementally; the packed
//! representation makes the full scan a handful of bit loops.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::position::Position;

const KEY_SEED: u64 = 0x5EED_C0DE_2024_0001;

#[derive(Debug, Clone)]
pub struct ZobristTable {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
}

impl ZobristTable {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(KEY_SEED);
        let mut piece_square = [[[0u64; 64]; 6]; 2];
        for color in &mut piece_square {
            for piece in color {
                for square in piece.iter_mut() {
                    *square = rng.random();
                }
            }
        }
        Self {
            piece_square,
            side_to_move: rng.random(),
        }
    }

    #[inline]
    pub fn piece_square_key(&self, color: Color, piece: PieceKind, square: Square) -> u64 {
        self.piece_square[color.index()][piece.index()][square as usize]
    }

    /// Full fingerprint of a position: XOR of one key per occupied
    /// (color, piece, square) plus the side-to-move toggle when Black moves.
    pub fn fingerprint(&self, position: &Position) -> u64 {
        let mut key = 0u64;
        for color in [Color::White, Color::Black] {
            for piece in PieceKind::ALL {
                let mut bb = position.bitboard(color, piece);
                while bb != 0 {
                    let square = bb.trailing_zeros() as Square;
                    key ^= self.piece_square_key(color, piece, square);
                    bb &= bb - 1;
                }
            }
        }
        if position.side_to_move == Color::Black {
            key ^= self.side_to_move;
        }
        key
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
