use super::super::state::Cell;
use super::super::{Board, Color, PieceKind, Square};

impl Board {
    /// Pushes first (single, then double from the starting rank), then the
    /// two diagonal captures toward the higher and the lower file.
    pub(crate) fn generate_pawn_moves(&self, from: usize, color: Color, out: &mut Vec<usize>) {
        let push = color.pawn_push();
        let one = from.wrapping_add_signed(push);

        if self.cells[one] == Cell::Empty {
            out.push(one);
            let two = one.wrapping_add_signed(push);
            let on_start_rank = Square::from_playable(from).rank() == color.pawn_start_rank();
            if on_start_rank && self.cells[two] == Cell::Empty {
                out.push(two);
            }
        }

        for side in [1, -1] {
            let to = one.wrapping_add_signed(side);
            match self.cells[to] {
                Cell::Occupied(piece) if piece.color != color => out.push(to),
                Cell::Empty if self.en_passant_victim(from, to, color).is_some() => out.push(to),
                _ => {}
            }
        }
    }

    /// Cell of the pawn a `color` pawn on `from` would take by moving to the
    /// en passant target `to`: same rank as the capturer, same file as the
    /// target. `None` unless that cell holds an enemy pawn.
    pub(crate) fn en_passant_victim(&self, from: usize, to: usize, color: Color) -> Option<usize> {
        let target = self.en_passant_target?.mailbox()?;
        if target != to || from % 10 == to % 10 {
            return None;
        }
        let victim = from - from % 10 + to % 10;
        match self.cells[victim] {
            Cell::Occupied(piece) if piece.kind == PieceKind::Pawn && piece.color != color => {
                Some(victim)
            }
            _ => None,
        }
    }
}
