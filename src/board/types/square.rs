//! Square types and the padded mailbox layout.
//!
//! The board is stored as a 10x12 mailbox: the 8x8 playing area is surrounded
//! by two sentinel rows above and below and one sentinel column on each side.
//! Any single step or knight jump from a playable cell lands inside the array,
//! so leaving the board is detected by reading the landing cell.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of cells in the padded board.
pub(crate) const MAILBOX_CELLS: usize = 120;

/// Mailbox index of a playable (rank, file) pair.
#[inline]
pub(crate) const fn mailbox_index(rank: usize, file: usize) -> usize {
    (rank + 2) * 10 + file + 1
}

const fn build_playable() -> [usize; 64] {
    let mut table = [0; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = mailbox_index(i / 8, i % 8);
        i += 1;
    }
    table
}

/// Mailbox indices of the 64 playable cells in rank-major order (a1, b1, ..., h8).
pub(crate) const PLAYABLE: [usize; 64] = build_playable();

/// A square on the chess board, represented as (rank, file).
///
/// Rank 0 is White's first rank and file 0 is the a-file. A `Square` may be
/// built with components outside 0..8; board operations reject such squares
/// with an out-of-bounds error instead of wrapping them onto the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Index into the padded board, or `None` for an off-board square.
    #[inline]
    #[must_use]
    pub const fn mailbox(self) -> Option<usize> {
        if self.is_on_board() {
            Some(mailbox_index(self.0, self.1))
        } else {
            None
        }
    }

    /// Inverse of [`Square::mailbox`]; sentinel cells map to `None`.
    #[inline]
    #[must_use]
    pub const fn from_mailbox(idx: usize) -> Option<Self> {
        if idx >= MAILBOX_CELLS {
            return None;
        }
        let row = idx / 10;
        let col = idx % 10;
        if row < 2 || row > 9 || col == 0 || col == 9 {
            return None;
        }
        Some(Square(row - 2, col - 1))
    }

    #[inline]
    pub(crate) const fn from_playable(idx: usize) -> Self {
        Square((idx / 10) - 2, (idx % 10) - 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Rank-major, the same order the board is scanned in
        (self.0, self.1).cmp(&(other.0, other.1))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'1') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(rank, file))
    }
}
