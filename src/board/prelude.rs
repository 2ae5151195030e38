//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert!(!board.is_in_checkmate(Color::White));
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, Color, FenError, LegalMoves, MoveOutcome, Piece, PieceKind,
    Square, SquareError,
};
