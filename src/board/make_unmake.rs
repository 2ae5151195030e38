use std::ops::Deref;

use super::error::BoardError;
use super::state::Cell;
use super::{mailbox_index, Board, Captured, MoveOutcome, MoveRecord, Piece, PieceKind, Square};

/// A move played directly on the live board for inspection. The board is put
/// back exactly as it was when the guard is dropped, whatever path drops it.
pub(crate) struct SimulatedMove<'a> {
    board: &'a mut Board,
    from: usize,
    to: usize,
    moved: Cell,
    displaced: Cell,
    victim: Option<(usize, Cell)>,
}

impl<'a> SimulatedMove<'a> {
    pub(crate) fn new(board: &'a mut Board, from: usize, to: usize, piece: Piece) -> Self {
        let victim = if piece.kind == PieceKind::Pawn {
            board
                .en_passant_victim(from, to, piece.color)
                .map(|idx| (idx, board.cells[idx]))
        } else {
            None
        };
        let moved = board.cells[from];
        let displaced = board.cells[to];

        board.set_cell(to, moved);
        board.set_cell(from, Cell::Empty);
        if let Some((idx, _)) = victim {
            board.set_cell(idx, Cell::Empty);
        }

        SimulatedMove {
            board,
            from,
            to,
            moved,
            displaced,
            victim,
        }
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        if let Some((idx, cell)) = self.victim {
            self.board.set_cell(idx, cell);
        }
        self.board.set_cell(self.from, self.moved);
        self.board.set_cell(self.to, self.displaced);
    }
}

impl Board {
    /// Whether moving `piece` from `from` to `to` keeps its own king out of check.
    pub(crate) fn is_safe_move(&mut self, from: usize, to: usize, piece: Piece) -> bool {
        let simulated = SimulatedMove::new(self, from, to, piece);
        !simulated.is_in_check(piece.color)
    }

    /// Play a legal move and push its record onto the history.
    ///
    /// A pawn double step sets the en passant target to the square it
    /// skipped; a pawn landing on the target removes the enemy pawn beside
    /// its origin; any other move clears the target. A pawn reaching the last
    /// rank becomes a queen. Check and checkmate in the outcome describe the
    /// opponent's position after the move.
    pub fn apply_move(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> Result<MoveOutcome, BoardError> {
        let from = Self::cell_index(origin)?;
        let to = Self::cell_index(destination)?;
        let piece = self.piece(origin)?;

        if !self.legal_destinations(from, piece).contains(&to) {
            #[cfg(feature = "logging")]
            log::warn!("rejected {} {origin}{destination}", piece.color);
            return Err(BoardError::IllegalMove {
                origin,
                destination,
                piece,
            });
        }

        Ok(self.commit_move(from, to, piece))
    }

    /// Apply a move taken from `legal_moves` without validating it again.
    pub(crate) fn apply_generated_move(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> MoveOutcome {
        let from = mailbox_index(origin.rank(), origin.file());
        let to = mailbox_index(destination.rank(), destination.file());
        match self.cells[from].piece() {
            Some(piece) => self.commit_move(from, to, piece),
            None => MoveOutcome::default(),
        }
    }

    fn commit_move(&mut self, from: usize, to: usize, piece: Piece) -> MoveOutcome {
        let origin = Square::from_playable(from);
        let destination = Square::from_playable(to);
        let en_passant_before = self.en_passant_target;
        let was_game_over = self.game_over;
        let is_pawn = piece.kind == PieceKind::Pawn;

        let victim = if is_pawn {
            self.en_passant_victim(from, to, piece.color)
                .and_then(|idx| self.cells[idx].piece().map(|pawn| (idx, pawn)))
        } else {
            None
        };
        let captured = match victim {
            Some((idx, pawn)) => {
                self.set_cell(idx, Cell::Empty);
                Captured::EnPassant {
                    pawn,
                    square: Square::from_playable(idx),
                }
            }
            None => self.cells[to].piece().map_or(Captured::Nothing, Captured::Piece),
        };

        let promotion = is_pawn && destination.rank() == piece.color.pawn_promotion_rank();
        let placed = if promotion {
            Piece::new(piece.color, PieceKind::Queen)
        } else {
            piece
        };
        self.set_cell(to, Cell::Occupied(placed));
        self.set_cell(from, Cell::Empty);

        self.en_passant_target = if is_pawn && origin.rank().abs_diff(destination.rank()) == 2 {
            Some(Square((origin.rank() + destination.rank()) / 2, origin.file()))
        } else {
            None
        };

        let opponent = piece.color.opponent();
        let check = self.is_in_check(opponent);
        let checkmate = check && !self.has_legal_move(opponent);
        self.game_over = was_game_over || checkmate;

        self.history.push(MoveRecord {
            origin,
            destination,
            moved: piece,
            captured,
            en_passant_before,
            en_passant_after: self.en_passant_target,
            was_game_over,
        });

        #[cfg(feature = "logging")]
        log::trace!(
            "applied {origin}{destination} (ply {}, check {check}, mate {checkmate})",
            self.history.len()
        );

        MoveOutcome {
            capture: captured.is_capture(),
            en_passant: matches!(captured, Captured::EnPassant { .. }),
            promotion,
            check,
            checkmate,
        }
    }

    /// Reverse the most recent move exactly, returning its record.
    pub fn undo_last_move(&mut self) -> Result<MoveRecord, BoardError> {
        let record = self.history.pop().ok_or(BoardError::EmptyHistory)?;
        self.restore(&record);
        Ok(record)
    }

    /// Undo for callers that know a move was just applied.
    pub(crate) fn take_back(&mut self) {
        if let Some(record) = self.history.pop() {
            self.restore(&record);
        }
    }

    fn restore(&mut self, record: &MoveRecord) {
        let from = mailbox_index(record.origin.rank(), record.origin.file());
        let to = mailbox_index(record.destination.rank(), record.destination.file());

        match record.captured {
            Captured::Nothing => self.set_cell(to, Cell::Empty),
            Captured::Piece(piece) => self.set_cell(to, Cell::Occupied(piece)),
            Captured::EnPassant { pawn, square } => {
                self.set_cell(to, Cell::Empty);
                self.set_cell(
                    mailbox_index(square.rank(), square.file()),
                    Cell::Occupied(pawn),
                );
            }
        }
        self.set_cell(from, Cell::Occupied(record.moved));

        self.en_passant_target = record.en_passant_before;
        self.game_over = record.was_game_over;

        #[cfg(feature = "logging")]
        log::trace!("undid {}{}", record.origin, record.destination);
    }

    /// Outcome `apply_move` would report, leaving the board unchanged.
    pub fn preview_move(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> Result<MoveOutcome, BoardError> {
        let outcome = self.apply_move(origin, destination)?;
        self.undo_last_move()?;
        Ok(outcome)
    }
}
