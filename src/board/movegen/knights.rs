use super::super::state::Cell;
use super::super::{Board, Color, PieceKind};

impl Board {
    /// Single-step targets: each offset is taken once if it lands on an empty
    /// square or an enemy piece.
    pub(crate) fn generate_step_moves(
        &self,
        from: usize,
        color: Color,
        offsets: &[isize],
        out: &mut Vec<usize>,
    ) {
        for &offset in offsets {
            let to = from.wrapping_add_signed(offset);
            match self.cells[to] {
                Cell::Empty => out.push(to),
                Cell::Occupied(piece) if piece.color != color => out.push(to),
                _ => {}
            }
        }
    }

    pub(crate) fn generate_knight_moves(&self, from: usize, color: Color, out: &mut Vec<usize>) {
        self.generate_step_moves(from, color, PieceKind::Knight.offsets(), out);
    }
}
