//! Error types for the chess match API.
//!
//! Rule-level rejections (an illegal move) are not errors; they surface as
//! outcomes and leave the state untouched. Errors are reserved for malformed
//! input that no board position could make meaningful.

use thiserror::Error;

/// Errors from the chess match API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinate outside the 8x8 board
    #[error("coordinate ({row}, {col}) is off the board (must be 0-7)")]
    OffBoard { row: u8, col: u8 },
}

/// Result type alias for chess operations
pub type ChessResult<T> = Result<T, ChessError>;
