//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square(1, 0), Color::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::error::BoardError;
use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    en_passant_target: Option<Square>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
            en_passant_target: None,
        }
    }

    /// Place a piece; a later piece on the same square replaces an earlier one.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.push((square, Piece::new(color, kind)));
        self
    }

    /// Remove whatever was placed on `square`.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    #[must_use]
    pub fn en_passant(mut self, square: Square) -> Self {
        self.en_passant_target = Some(square);
        self
    }

    /// Build the board. Fails if any square lies off the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.place(square, piece)?;
        }
        if let Some(square) = self.en_passant_target {
            if !square.is_on_board() {
                return Err(BoardError::OutOfBounds { square });
            }
            board.en_passant_target = Some(square);
        }
        Ok(board)
    }
}
