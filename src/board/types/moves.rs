//! Move outcomes, undo records and the legal move table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Piece, Square};

/// What a successfully applied move did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    /// A piece was taken, including en passant
    pub capture: bool,
    pub en_passant: bool,
    pub promotion: bool,
    /// The opponent is in check after the move
    pub check: bool,
    pub checkmate: bool,
}

/// Whatever a move removed from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Captured {
    Nothing,
    /// The piece that stood on the destination square
    Piece(Piece),
    /// A pawn taken en passant, with the square it stood on
    EnPassant { pawn: Piece, square: Square },
}

impl Captured {
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        !matches!(self, Captured::Nothing)
    }
}

/// History entry holding everything needed to reverse one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub origin: Square,
    pub destination: Square,
    /// The moving piece as it was before the move (a pawn for promotions)
    pub moved: Piece,
    pub captured: Captured,
    pub en_passant_before: Option<Square>,
    pub en_passant_after: Option<Square>,
    pub was_game_over: bool,
}

/// Legal destinations grouped by origin square.
///
/// Origins appear in board scan order (a1, b1, ..., h8) and only when the
/// piece there has at least one legal move. Destinations keep the order the
/// piece's movement rules produced them in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    entries: Vec<(Square, Vec<Square>)>,
}

impl LegalMoves {
    #[must_use]
    pub fn new() -> Self {
        LegalMoves {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, origin: Square, destinations: Vec<Square>) {
        if !destinations.is_empty() {
            self.entries.push((origin, destinations));
        }
    }

    /// True when no piece has a legal move
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of origins with at least one legal move
    #[inline]
    #[must_use]
    pub fn origin_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of (origin, destination) moves
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.entries.iter().map(|(_, dests)| dests.len()).sum()
    }

    /// Legal destinations of the piece on `origin`, if it has any
    #[must_use]
    pub fn destinations(&self, origin: Square) -> Option<&[Square]> {
        self.entries
            .iter()
            .find(|(from, _)| *from == origin)
            .map(|(_, dests)| dests.as_slice())
    }

    #[must_use]
    pub fn contains(&self, origin: Square, destination: Square) -> bool {
        self.destinations(origin)
            .is_some_and(|dests| dests.contains(&destination))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Square])> + '_ {
        self.entries
            .iter()
            .map(|(from, dests)| (*from, dests.as_slice()))
    }

    /// Every move as an (origin, destination) pair, in table order
    pub fn moves(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.entries
            .iter()
            .flat_map(|(from, dests)| dests.iter().map(move |to| (*from, *to)))
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a (Square, Vec<Square>);
    type IntoIter = std::slice::Iter<'a, (Square, Vec<Square>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
