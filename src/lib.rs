//! Crate root module declarations for the chess agent decision core.
//!
//! This file exposes the board representation, move generation, search, and
//! the host-facing agent facade so binaries, tests, and benches can import
//! stable module paths.

pub mod errors;

pub mod board {
    pub mod apply;
    pub mod bitboard;
    pub mod chess_types;
    pub mod placement;
    pub mod position;
}

pub mod moves {
    pub mod chess_move;
    pub mod generator;
}

pub mod search {
    pub mod engine;
    pub mod evaluation;
    pub mod transposition;
    pub mod zobrist;
}

pub mod agent;
