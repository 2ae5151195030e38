use super::super::state::Cell;
use super::super::{Board, Color};

impl Board {
    /// Walk each ray from `from`, collecting empty squares and the first enemy
    /// piece; a friendly piece or the board edge ends the ray.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: usize,
        color: Color,
        offsets: &[isize],
        out: &mut Vec<usize>,
    ) {
        for &offset in offsets {
            let mut to = from.wrapping_add_signed(offset);
            loop {
                match self.cells[to] {
                    Cell::Empty => out.push(to),
                    Cell::Occupied(piece) => {
                        if piece.color != color {
                            out.push(to);
                        }
                        break;
                    }
                    Cell::OffBoard => break,
                }
                to = to.wrapping_add_signed(offset);
            }
        }
    }
}
