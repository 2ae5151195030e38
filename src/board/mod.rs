//! Chess board representation and rules.
//!
//! The board is a 10x12 padded mailbox: the 8x8 playing area sits inside a
//! border of sentinel cells, so every piece offset either lands on a real
//! square or on the border and no edge arithmetic is needed. Supports legal
//! move generation, check and checkmate detection, en passant, promotion to
//! queen and exact undo through a move history.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.move_count());
//! ```

mod attacks;
mod builder;
mod display;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, FenError, SquareError};
pub use fen::STARTING_FEN;
pub use state::Board;
pub use types::{Captured, Color, LegalMoves, MoveOutcome, MoveRecord, Piece, PieceKind, Square};

pub(crate) use types::{mailbox_index, MAILBOX_CELLS, PLAYABLE};
