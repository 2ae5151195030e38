mod kings;
mod knights;
mod pawns;
mod sliders;

use super::error::BoardError;
use super::{Board, Color, LegalMoves, Piece, PieceKind, Square, PLAYABLE};

impl Board {
    /// Destinations allowed by the piece's movement pattern alone, before the
    /// self-check filter.
    pub(crate) fn generate_candidates(&self, from: usize, piece: Piece, out: &mut Vec<usize>) {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color, out),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color, out),
            PieceKind::King => self.generate_king_moves(from, piece.color, out),
            slider => self.generate_sliding_moves(from, piece.color, slider.offsets(), out),
        }
    }

    pub(crate) fn legal_destinations(&mut self, from: usize, piece: Piece) -> Vec<usize> {
        let mut candidates = Vec::new();
        self.generate_candidates(from, piece, &mut candidates);
        candidates.retain(|&to| self.is_safe_move(from, to, piece));
        candidates
    }

    /// Every legal move of `color`, grouped by origin in board scan order.
    pub fn legal_moves(&mut self, color: Color) -> LegalMoves {
        let mut moves = LegalMoves::new();
        let mut candidates = Vec::with_capacity(32);

        for from in PLAYABLE {
            let piece = match self.cells[from].piece() {
                Some(piece) if piece.color == color => piece,
                _ => continue,
            };
            candidates.clear();
            self.generate_candidates(from, piece, &mut candidates);
            let destinations: Vec<Square> = candidates
                .iter()
                .copied()
                .filter(|&to| self.is_safe_move(from, to, piece))
                .map(Square::from_playable)
                .collect();
            moves.push(Square::from_playable(from), destinations);
        }
        moves
    }

    /// Legal destinations of the piece on `square`.
    pub fn piece_moves(&mut self, square: Square) -> Result<Vec<Square>, BoardError> {
        let piece = self.piece(square)?;
        let from = Self::cell_index(square)?;
        Ok(self
            .legal_destinations(from, piece)
            .into_iter()
            .map(Square::from_playable)
            .collect())
    }

    /// Stops at the first legal move found.
    pub(crate) fn has_legal_move(&mut self, color: Color) -> bool {
        let mut candidates = Vec::with_capacity(32);
        for from in PLAYABLE {
            let piece = match self.cells[from].piece() {
                Some(piece) if piece.color == color => piece,
                _ => continue,
            };
            candidates.clear();
            self.generate_candidates(from, piece, &mut candidates);
            if candidates
                .iter()
                .any(|&to| self.is_safe_move(from, to, piece))
            {
                return true;
            }
        }
        false
    }

    /// In check with no legal move. Escapes by blocking or capturing count,
    /// not only king moves.
    pub fn is_in_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, yet no legal move.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }
}
