//! Attack detection.
//!
//! A piece attacks a square when its movement pattern reaches it, ignoring
//! whether moving there would expose its own king. Pawns attack only the two
//! squares diagonally ahead of them.

use super::error::BoardError;
use super::state::Cell;
use super::{Board, Color, Piece, PieceKind, Square, PLAYABLE};

impl Board {
    pub(crate) fn attacks_cell(&self, from: usize, piece: Piece, target: usize) -> bool {
        match piece.kind {
            PieceKind::Pawn => {
                let ahead = from.wrapping_add_signed(piece.color.pawn_push());
                target == ahead + 1 || target == ahead - 1
            }
            PieceKind::Knight | PieceKind::King => piece
                .kind
                .offsets()
                .iter()
                .any(|&offset| from.wrapping_add_signed(offset) == target),
            slider => {
                let distance = target as isize - from as isize;
                slider.offsets().iter().any(|&offset| {
                    distance % offset == 0
                        && distance / offset > 0
                        && self.ray_reaches(from, offset, target)
                })
            }
        }
    }

    fn ray_reaches(&self, from: usize, offset: isize, target: usize) -> bool {
        let mut idx = from.wrapping_add_signed(offset);
        loop {
            if idx == target {
                return true;
            }
            if self.cells[idx] != Cell::Empty {
                return false;
            }
            idx = idx.wrapping_add_signed(offset);
        }
    }

    pub(crate) fn is_square_attacked(&self, target: usize, by: Color) -> bool {
        PLAYABLE.iter().any(|&from| match self.cells[from] {
            Cell::Occupied(piece) => piece.color == by && self.attacks_cell(from, piece, target),
            _ => false,
        })
    }

    /// Whether the piece on `from` threatens `target`.
    pub fn is_attacking(&self, from: Square, target: Square) -> Result<bool, BoardError> {
        let piece = self.piece(from)?;
        let from_idx = Self::cell_index(from)?;
        let target_idx = Self::cell_index(target)?;
        Ok(self.attacks_cell(from_idx, piece, target_idx))
    }

    /// True when any opposing piece attacks `color`'s king. A board without
    /// that king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_cells[color.index()] {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// Squares of the pieces currently giving check to `color`.
    #[must_use]
    pub fn checkers(&self, color: Color) -> Vec<Square> {
        let Some(king) = self.king_cells[color.index()] else {
            return Vec::new();
        };
        let attacker = color.opponent();
        PLAYABLE
            .iter()
            .filter(|&&from| match self.cells[from] {
                Cell::Occupied(piece) => {
                    piece.color == attacker && self.attacks_cell(from, piece, king)
                }
                _ => false,
            })
            .map(|&from| Square::from_playable(from))
            .collect()
    }
}
