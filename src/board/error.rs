//! Error types for board operations.

use std::fmt;

use super::{Piece, Square};

/// Contract violations raised by the board itself.
///
/// None of these are expected during normal play; each one points at a caller
/// that skipped a check it was responsible for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A square outside the 8x8 playing area was referenced
    OutOfBounds { square: Square },
    /// A piece was requested from an empty square
    EmptyCell { square: Square },
    /// The destination is not among the legal moves of the piece on the origin
    IllegalMove {
        origin: Square,
        destination: Square,
        piece: Piece,
    },
    /// Undo was requested with no applied moves
    EmptyHistory,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { square } => {
                write!(f, "Square {square} is outside the board")
            }
            BoardError::EmptyCell { square } => {
                write!(f, "No piece on {square}")
            }
            BoardError::IllegalMove {
                origin,
                destination,
                piece,
            } => {
                write!(
                    f,
                    "Illegal move: {} {} on {origin} cannot move to {destination}",
                    piece.color, piece.symbol()
                )
            }
            BoardError::EmptyHistory => write!(f, "No move to undo"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Placement field is missing
    Empty,
    /// Placement does not describe exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "FEN string is empty"),
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, PieceKind};

    #[test]
    fn test_out_of_bounds_names_square() {
        let err = BoardError::OutOfBounds {
            square: Square(9, 2),
        };
        assert!(err.to_string().contains("(9, 2)"));
    }

    #[test]
    fn test_empty_cell_names_square() {
        let err = BoardError::EmptyCell {
            square: Square(3, 4),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_illegal_move_context() {
        let err = BoardError::IllegalMove {
            origin: Square(0, 1),
            destination: Square(3, 1),
            piece: Piece::new(Color::White, PieceKind::Knight),
        };
        let text = err.to_string();
        assert!(text.contains("b1"));
        assert!(text.contains("b4"));
        assert!(text.contains('♘'));
    }

    #[test]
    fn test_empty_history() {
        assert!(BoardError::EmptyHistory.to_string().contains("undo"));
    }

    #[test]
    fn test_fen_error_rank_count() {
        let err = FenError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_invalid_side() {
        let err = FenError::InvalidSideToMove {
            found: "X".to_string(),
        };
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_square_error_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_error_clone() {
        let err = BoardError::EmptyCell {
            square: Square(0, 0),
        };
        assert_eq!(err.clone(), err);
    }
}
