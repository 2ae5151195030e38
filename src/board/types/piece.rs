//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

// Mailbox offsets, listed in generation order. One rank is 10 cells, one file is 1.
const ORTHOGONALS: [isize; 4] = [10, -10, 1, -1];
const DIAGONALS: [isize; 4] = [11, -11, 9, -9];
const QUEEN_RAYS: [isize; 8] = [11, -11, 9, -9, 10, -10, 1, -1];
const KNIGHT_JUMPS: [isize; 8] = [21, 19, -19, -21, 12, 8, -8, -12];
const KING_STEPS: [isize; 8] = [10, -10, 1, -1, 11, 9, -9, -11];

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Parse a piece kind from a character (p, n, b, r, q, k in either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Returns true if this piece keeps moving along its directions until blocked
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Mailbox offsets for every kind except the pawn, whose moves depend on color.
    #[inline]
    pub(crate) const fn offsets(self) -> &'static [isize] {
        match self {
            PieceKind::Pawn => &[],
            PieceKind::Knight => &KNIGHT_JUMPS,
            PieceKind::Bishop => &DIAGONALS,
            PieceKind::Rook => &ORTHOGONALS,
            PieceKind::Queen => &QUEEN_RAYS,
            PieceKind::King => &KING_STEPS,
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn forward direction in ranks (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Single pawn push as a mailbox offset
    #[inline]
    pub(crate) const fn pawn_push(self) -> isize {
        self.pawn_direction() * 10
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece as seen on a board cell: a kind plus the side it belongs to.
///
/// Pieces carry no identity of their own; two pawns of the same color are
/// indistinguishable, and everything a piece can do is derived from its kind,
/// its color and the board around it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

const WHITE_GLYPHS: [char; 6] = ['♙', '♘', '♗', '♖', '♕', '♔'];
const BLACK_GLYPHS: [char; 6] = ['♟', '♞', '♝', '♜', '♛', '♚'];

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { kind, color }
    }

    /// FEN letter: uppercase for White, lowercase for Black
    #[inline]
    #[must_use]
    pub fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Parse a FEN letter, taking the color from its case
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }

    /// Unicode chess glyph used by the text renderer
    #[must_use]
    pub const fn symbol(self) -> char {
        match self.color {
            Color::White => WHITE_GLYPHS[self.kind.index()],
            Color::Black => BLACK_GLYPHS[self.kind.index()],
        }
    }

    #[must_use]
    pub fn from_symbol(c: char) -> Option<Piece> {
        if let Some(i) = WHITE_GLYPHS.iter().position(|&g| g == c) {
            return Some(Piece::new(Color::White, PieceKind::ALL[i]));
        }
        BLACK_GLYPHS
            .iter()
            .position(|&g| g == c)
            .map(|i| Piece::new(Color::Black, PieceKind::ALL[i]))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
