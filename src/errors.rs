use std::error::Error;
use std::fmt;

pub type ChessResult<T> = Result<T, ChessError>;

/// Error taxonomy for the agent core.
///
/// Anything that would corrupt bitboard state fails loudly instead of being
/// silently ignored. Transposition-table slot collisions are deliberately not
/// errors; they are filtered by the exact fingerprint match on probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The board snapshot handed to `load_position` is malformed.
    InvalidPlacement(String),
    /// A move was applied whose side or source square does not match the
    /// position it was applied to.
    IllegalMove(String),
    /// Undo was requested on a position with no move history.
    EmptyHistory,
    /// The search budget expired before even depth 1 completed.
    NoMoveFound,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidPlacement(msg) => write!(f, "invalid piece placement: {msg}"),
            ChessError::IllegalMove(msg) => write!(f, "illegal move: {msg}"),
            ChessError::EmptyHistory => write!(f, "no move to undo: history is empty"),
            ChessError::NoMoveFound => {
                write!(f, "search budget expired before any depth completed")
            }
        }
    }
}

impl Error for ChessError {}
