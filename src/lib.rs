//! Chess rules on a padded mailbox board.
//!
//! Move generation, check and checkmate detection, en passant, promotion,
//! exact undo and perft counting. There is no search or evaluation here; the
//! crate answers what is legal and what a move does.

pub mod board;
pub mod perft;

pub use board::{Board, BoardError, Color, LegalMoves, MoveOutcome, Piece, PieceKind, Square};
pub use perft::PerftStats;
