use once_cell::sync::Lazy;

use super::error::BoardError;
use super::{mailbox_index, Color, MoveRecord, Piece, PieceKind, Square, MAILBOX_CELLS, PLAYABLE};

/// Contents of one mailbox cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    OffBoard,
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub(crate) const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STARTING_CELLS: Lazy<[Cell; MAILBOX_CELLS]> = Lazy::new(|| {
    let mut cells = empty_cells();
    for (file, kind) in BACK_RANK.iter().enumerate() {
        for color in Color::BOTH {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            cells[mailbox_index(back, file)] = Cell::Occupied(Piece::new(color, *kind));
            cells[mailbox_index(pawns, file)] = Cell::Occupied(Piece::new(color, PieceKind::Pawn));
        }
    }
    cells
});

fn empty_cells() -> [Cell; MAILBOX_CELLS] {
    let mut cells = [Cell::OffBoard; MAILBOX_CELLS];
    for &idx in &PLAYABLE {
        cells[idx] = Cell::Empty;
    }
    cells
}

/// Board state: piece placement, en passant target and the undo history.
///
/// The board does not track whose turn it is; callers pass the color they are
/// asking about.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [Cell; MAILBOX_CELLS],
    pub(crate) king_cells: [Option<usize>; 2],
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) game_over: bool,
}

impl Board {
    /// Standard initial arrangement, no en passant target and empty history.
    #[must_use]
    pub fn new() -> Self {
        let cells = *STARTING_CELLS;
        Board {
            cells,
            king_cells: [
                Some(mailbox_index(Color::White.back_rank(), 4)),
                Some(mailbox_index(Color::Black.back_rank(), 4)),
            ],
            en_passant_target: None,
            history: Vec::new(),
            game_over: false,
        }
    }

    pub(crate) fn empty() -> Self {
        Board {
            cells: empty_cells(),
            king_cells: [None, None],
            en_passant_target: None,
            history: Vec::new(),
            game_over: false,
        }
    }

    /// Mailbox index of an on-board square.
    #[inline]
    pub(crate) fn cell_index(square: Square) -> Result<usize, BoardError> {
        square.mailbox().ok_or(BoardError::OutOfBounds { square })
    }

    /// Write a cell, keeping the king cache in step.
    #[inline]
    pub(crate) fn set_cell(&mut self, idx: usize, cell: Cell) {
        if let Cell::Occupied(old) = self.cells[idx] {
            if old.kind == PieceKind::King && self.king_cells[old.color.index()] == Some(idx) {
                self.king_cells[old.color.index()] = None;
            }
        }
        if let Cell::Occupied(new) = cell {
            if new.kind == PieceKind::King {
                self.king_cells[new.color.index()] = Some(idx);
            }
        }
        self.cells[idx] = cell;
    }

    pub(crate) fn place(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        let idx = Self::cell_index(square)?;
        self.set_cell(idx, Cell::Occupied(piece));
        Ok(())
    }

    /// Whether `square` holds no piece.
    pub fn is_empty(&self, square: Square) -> Result<bool, BoardError> {
        let idx = Self::cell_index(square)?;
        Ok(self.cells[idx] == Cell::Empty)
    }

    /// The piece on `square`, or `None` if it is empty.
    pub fn piece_at(&self, square: Square) -> Result<Option<Piece>, BoardError> {
        let idx = Self::cell_index(square)?;
        Ok(self.cells[idx].piece())
    }

    /// The piece on `square`; an empty square is an error.
    pub fn piece(&self, square: Square) -> Result<Piece, BoardError> {
        self.piece_at(square)?
            .ok_or(BoardError::EmptyCell { square })
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_cells[color.index()].map(Square::from_playable)
    }

    /// Applied moves, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// True once a move has delivered checkmate (reset by undoing that move)
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// All pieces on the board in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        PLAYABLE.iter().filter_map(move |&idx| {
            self.cells[idx]
                .piece()
                .map(|piece| (Square::from_playable(idx), piece))
        })
    }

    /// Same placement and en passant target; history is ignored.
    #[must_use]
    pub fn same_position(&self, other: &Board) -> bool {
        self.cells == other.cells && self.en_passant_target == other.en_passant_target
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
