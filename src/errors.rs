use thiserror::Error;

use crate::GRID_SIZE;

/// The failure taxonomy shared by all engine operations
///
/// Every variant is local and recoverable: an operation that fails leaves
/// the engine state exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A coordinate fell outside the board; rejected, never clamped
    #[error("cell ({x}, {y}) is outside the {size}x{size} board", size = GRID_SIZE)]
    OutOfRange { x: usize, y: usize },

    /// A placement targeted a cell that already holds a stone
    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: usize, y: usize },

    /// A move was requested but no empty cell remains
    #[error("no empty cell left on the board")]
    BoardFull,
}
