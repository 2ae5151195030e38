//! FEN import and export.
//!
//! The board has no notion of whose turn it is, so the side-to-move field is
//! handed back to the caller on import and supplied by the caller on export.
//! Castling availability is written as `-` and ignored when read.

use super::error::FenError;
use super::state::Cell;
use super::{mailbox_index, Board, Color, Piece, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

impl Board {
    /// Parse a position from FEN.
    ///
    /// Only the placement field is required; the side to move defaults to
    /// White and a missing en passant field means no target.
    pub fn from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank + 1,
                            files: file + 1,
                        });
                    }
                    board.set_cell(mailbox_index(rank, file), Cell::Occupied(piece));
                    file += 1;
                }
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        let side = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let _castling = parts.next();

        board.en_passant_target = match parts.next() {
            None | Some("-") => None,
            Some(text) => {
                let square: Square = text.parse().map_err(|_| FenError::InvalidEnPassant {
                    found: text.to_string(),
                })?;
                if square.rank() != 2 && square.rank() != 5 {
                    return Err(FenError::InvalidEnPassant {
                        found: text.to_string(),
                    });
                }
                Some(square)
            }
        };

        Ok((board, side))
    }

    /// Piece placement, rank 8 first, in FEN letters.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.cells[mailbox_index(rank, file)].piece() {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Full FEN with `side` to move.
    #[must_use]
    pub fn to_fen(&self, side: Color) -> String {
        let active = match side {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        let fullmove = self.history.len() / 2 + 1;
        format!("{} {} - {} 0 {}", self.placement(), active, ep, fullmove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn starting_fen_matches_new_board() {
        let (board, side) = Board::from_fen(STARTING_FEN).unwrap();
        assert_eq!(side, Color::White);
        assert!(board.same_position(&Board::new()));
        assert_eq!(Board::new().to_fen(Color::White), STARTING_FEN);
    }

    #[test]
    fn placement_only_defaults() {
        let (board, side) = Board::from_fen("8/8/8/8/8/8/8/4K2k").unwrap();
        assert_eq!(side, Color::White);
        assert_eq!(board.en_passant_target(), None);
        assert_eq!(board.king_square(Color::White), Some(Square(0, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square(0, 7)));
    }

    #[test]
    fn reads_side_and_en_passant() {
        let (board, side) =
            Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR b KQkq d6 0 2")
                .unwrap();
        assert_eq!(side, Color::Black);
        assert_eq!(board.en_passant_target(), Some(Square(5, 3)));
        assert_eq!(
            board.piece_at(Square(4, 4)),
            Ok(Some(Piece::new(Color::White, PieceKind::Pawn)))
        );
    }

    #[test]
    fn round_trips_after_moves() {
        let mut board = Board::new();
        board.apply_move(Square(1, 4), Square(3, 4)).unwrap();
        let fen = board.to_fen(Color::Black);
        assert_eq!(
            fen,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - e3 0 1"
        );
        let (restored, side) = Board::from_fen(&fen).unwrap();
        assert_eq!(side, Color::Black);
        assert!(restored.same_position(&board));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Board::from_fen("").unwrap_err(), FenError::Empty);
        assert_eq!(
            Board::from_fen("8/8/8").unwrap_err(),
            FenError::WrongRankCount { found: 3 }
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/7X").unwrap_err(),
            FenError::InvalidPiece { char: 'X' }
        );
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8K").unwrap_err(),
            FenError::TooManyFiles { .. }
        ));
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 x").unwrap_err(),
            FenError::InvalidSideToMove { .. }
        ));
        assert!(matches!(
            Board::from_fen("8/8/8/8/8/8/8/8 w - e4").unwrap_err(),
            FenError::InvalidEnPassant { .. }
        ));
    }
}
