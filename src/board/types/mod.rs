//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece`, `PieceKind` and `Color` - chess pieces and sides
//! - `Square` - (rank, file) coordinates and the padded mailbox layout
//! - `MoveOutcome`, `MoveRecord` and `LegalMoves` - results of move generation and application

mod moves;
mod piece;
mod square;

pub use moves::{Captured, LegalMoves, MoveOutcome, MoveRecord};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use square::{mailbox_index, MAILBOX_CELLS, PLAYABLE};
