//! Standard Algebraic Notation (SAN) output.
//!
//! Examples: "e4", "Nf3", "Bxc6+", "exd6", "e8=Q#". Castling does not exist
//! on this board, so "O-O" never appears.
//!
//! # Examples
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let mut board = Board::new();
//! assert_eq!(board.move_to_san(Square(0, 6), Square(2, 5)).unwrap(), "Nf3");
//! ```

use super::error::BoardError;
use super::{Board, Piece, PieceKind, Square};

impl Board {
    /// Format a legal move in SAN.
    ///
    /// The check suffix comes from playing the move and taking it back, so
    /// the board needs `&mut` but is left unchanged.
    pub fn move_to_san(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> Result<String, BoardError> {
        let piece = self.piece(origin)?;
        let outcome = self.preview_move(origin, destination)?;
        let mut san = String::new();

        if piece.kind == PieceKind::Pawn {
            if outcome.capture {
                san.push(file_char(origin));
            }
        } else {
            san.push(piece.kind.to_char().to_ascii_uppercase());
            let (needs_file, needs_rank) = self.needs_disambiguation(origin, destination, piece);
            if needs_file {
                san.push(file_char(origin));
            }
            if needs_rank {
                san.push(rank_char(origin));
            }
        }

        if outcome.capture {
            san.push('x');
        }
        san.push_str(&destination.to_string());

        if outcome.promotion {
            san.push_str("=Q");
        }

        if outcome.checkmate {
            san.push('#');
        } else if outcome.check {
            san.push('+');
        }

        Ok(san)
    }

    /// Returns (`needs_file`, `needs_rank`).
    fn needs_disambiguation(
        &mut self,
        origin: Square,
        destination: Square,
        piece: Piece,
    ) -> (bool, bool) {
        let rivals: Vec<Square> = self
            .legal_moves(piece.color)
            .moves()
            .filter(|&(from, to)| {
                to == destination
                    && from != origin
                    && self.piece_at(from).ok().flatten() == Some(piece)
            })
            .map(|(from, _)| from)
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|sq| sq.file() == origin.file());
        let same_rank = rivals.iter().any(|sq| sq.rank() == origin.rank());

        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }
}

fn file_char(square: Square) -> char {
    (b'a' + square.file() as u8) as char
}

fn rank_char(square: Square) -> char {
    (b'1' + square.rank() as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Color};

    #[test]
    fn quiet_moves() {
        let mut board = Board::new();
        assert_eq!(board.move_to_san(Square(1, 4), Square(3, 4)).unwrap(), "e4");
        assert_eq!(board.move_to_san(Square(0, 1), Square(2, 2)).unwrap(), "Nc3");
        assert!(board.history().is_empty());
    }

    #[test]
    fn pawn_capture_names_origin_file() {
        let mut board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(7, 0), Color::Black, PieceKind::King)
            .piece(Square(4, 4), Color::White, PieceKind::Pawn)
            .piece(Square(4, 3), Color::Black, PieceKind::Pawn)
            .piece(Square(5, 5), Color::Black, PieceKind::Knight)
            .en_passant(Square(5, 3))
            .build()
            .unwrap();
        assert_eq!(board.move_to_san(Square(4, 4), Square(5, 5)).unwrap(), "exf6");
        assert_eq!(board.move_to_san(Square(4, 4), Square(5, 3)).unwrap(), "exd6");
    }

    #[test]
    fn knights_disambiguate_by_file_then_rank() {
        let mut board = BoardBuilder::new()
            .piece(Square(0, 7), Color::White, PieceKind::King)
            .piece(Square(7, 7), Color::Black, PieceKind::King)
            .piece(Square(0, 1), Color::White, PieceKind::Knight)
            .piece(Square(0, 5), Color::White, PieceKind::Knight)
            .piece(Square(4, 1), Color::White, PieceKind::Knight)
            .build()
            .unwrap();
        // b1 and f1 both reach d2
        assert_eq!(board.move_to_san(Square(0, 1), Square(1, 3)).unwrap(), "Nbd2");
        // b1 and b5 both reach c3, same file
        assert_eq!(board.move_to_san(Square(0, 1), Square(2, 2)).unwrap(), "N1c3");
    }

    #[test]
    fn promotion_and_mate_suffixes() {
        let mut board = BoardBuilder::new()
            .piece(Square(5, 6), Color::White, PieceKind::King)
            .piece(Square(6, 0), Color::White, PieceKind::Pawn)
            .piece(Square(7, 7), Color::Black, PieceKind::King)
            .build()
            .unwrap();
        assert_eq!(board.move_to_san(Square(6, 0), Square(7, 0)).unwrap(), "a8=Q#");

        let mut board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, PieceKind::King)
            .piece(Square(0, 0), Color::White, PieceKind::Rook)
            .piece(Square(7, 4), Color::Black, PieceKind::King)
            .build()
            .unwrap();
        assert_eq!(board.move_to_san(Square(0, 0), Square(7, 0)).unwrap(), "Ra8+");
    }

    #[test]
    fn illegal_move_is_an_error() {
        let mut board = Board::new();
        assert!(matches!(
            board.move_to_san(Square(1, 4), Square(4, 4)),
            Err(BoardError::IllegalMove { .. })
        ));
    }
}
