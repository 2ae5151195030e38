//! Text rendering of the board.

use std::fmt;

use super::{mailbox_index, Board};

impl fmt::Display for Board {
    /// Glyph grid with rank 8 on top, e.g. for printing between moves.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = self.cells[mailbox_index(rank, file)]
                    .piece()
                    .map_or(' ', |piece| piece.symbol());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
