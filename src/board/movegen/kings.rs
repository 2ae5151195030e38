use super::super::{Board, Color, PieceKind};

impl Board {
    /// One step in any of the eight directions. Castling is not part of this
    /// engine's rules.
    pub(crate) fn generate_king_moves(&self, from: usize, color: Color, out: &mut Vec<usize>) {
        self.generate_step_moves(from, color, PieceKind::King.offsets(), out);
    }
}
