//! Edge case tests for special positions and contract errors.

use crate::board::{Board, BoardBuilder, BoardError, Color, Piece, PieceKind, Square};

#[test]
fn test_stalemate_position() {
    let (mut board, side) = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(side, Color::Black);
    assert!(!board.is_in_checkmate(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());
}

#[test]
fn test_back_rank_mate() {
    let (mut board, _) = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(board.is_in_check(Color::Black));
    assert!(board.is_in_checkmate(Color::Black));
    assert!(!board.is_stalemate(Color::Black));
}

#[test]
fn test_check_escaped_by_block() {
    // Only the bishop interposing on f8 saves the king
    let (mut board, _) = Board::from_fen("R5k1/5ppp/8/8/1b6/8/8/6K1 b - - 0 1").unwrap();
    assert!(board.is_in_check(Color::Black));
    assert!(!board.is_in_checkmate(Color::Black));
    let moves = board.legal_moves(Color::Black);
    assert_eq!(moves.move_count(), 1);
    assert!(moves.contains(Square(3, 1), Square(7, 5)));
}

#[test]
fn test_check_escaped_by_capture() {
    let (mut board, _) = Board::from_fen("R5k1/5ppp/8/8/8/8/r7/6K1 b - - 0 1").unwrap();
    assert!(!board.is_in_checkmate(Color::Black));
    let moves = board.legal_moves(Color::Black);
    assert_eq!(moves.move_count(), 1);
    assert!(moves.contains(Square(1, 0), Square(7, 0)));
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, PieceKind::King)
        .piece(Square(1, 4), Color::White, PieceKind::Knight)
        .piece(Square(7, 4), Color::Black, PieceKind::Rook)
        .piece(Square(7, 0), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    assert!(board.piece_moves(Square(1, 4)).unwrap().is_empty());
    assert!(matches!(
        board.apply_move(Square(1, 4), Square(3, 5)),
        Err(BoardError::IllegalMove { .. })
    ));
}

#[test]
fn test_pinned_rook_slides_along_pin() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, PieceKind::King)
        .piece(Square(2, 4), Color::White, PieceKind::Rook)
        .piece(Square(7, 4), Color::Black, PieceKind::Rook)
        .piece(Square(7, 0), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let mut moves = board.piece_moves(Square(2, 4)).unwrap();
    moves.sort();
    let expected: Vec<Square> = [1, 3, 4, 5, 6, 7].iter().map(|&r| Square(r, 4)).collect();
    assert_eq!(moves, expected);
}

#[test]
fn test_en_passant_exposing_king_on_rank_is_illegal() {
    // Capturing would clear both pawns off the fifth rank
    let (mut board, _) = Board::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1").unwrap();
    let moves = board.piece_moves(Square(4, 4)).unwrap();
    assert!(!moves.contains(&Square(5, 3)));
    assert!(moves.contains(&Square(5, 4)));
}

#[test]
fn test_kings_never_adjacent() {
    let mut board = BoardBuilder::new()
        .piece(Square(3, 3), Color::White, PieceKind::King)
        .piece(Square(3, 5), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let moves = board.piece_moves(Square(3, 3)).unwrap();
    assert_eq!(moves.len(), 5);
    for square in [Square(2, 4), Square(3, 4), Square(4, 4)] {
        assert!(!moves.contains(&square));
    }
}

#[test]
fn test_pawn_blocked_and_double_step() {
    let mut board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, PieceKind::King)
        .piece(Square(7, 4), Color::Black, PieceKind::King)
        .piece(Square(1, 0), Color::White, PieceKind::Pawn)
        .piece(Square(3, 0), Color::Black, PieceKind::Knight)
        .piece(Square(1, 1), Color::White, PieceKind::Pawn)
        .piece(Square(2, 1), Color::Black, PieceKind::Knight)
        .build()
        .unwrap();
    // the knight on a4 stops the double step; b3 is a capture
    assert_eq!(
        board.piece_moves(Square(1, 0)).unwrap(),
        vec![Square(2, 0), Square(2, 1)]
    );
    // b2 is blocked straight ahead and has nothing to capture
    assert!(board.piece_moves(Square(1, 1)).unwrap().is_empty());
}

#[test]
fn test_black_pawn_moves_down() {
    let mut board = Board::new();
    let mut moves = board.piece_moves(Square(6, 4)).unwrap();
    moves.sort();
    assert_eq!(moves, vec![Square(4, 4), Square(5, 4)]);
}

#[test]
fn test_contract_errors() {
    let mut board = Board::new();
    assert_eq!(
        board.apply_move(Square(8, 0), Square(0, 0)),
        Err(BoardError::OutOfBounds {
            square: Square(8, 0)
        })
    );
    assert_eq!(
        board.apply_move(Square(3, 3), Square(4, 3)),
        Err(BoardError::EmptyCell {
            square: Square(3, 3)
        })
    );
    assert_eq!(
        board.apply_move(Square(0, 0), Square(3, 0)),
        Err(BoardError::IllegalMove {
            origin: Square(0, 0),
            destination: Square(3, 0),
            piece: Piece::new(Color::White, PieceKind::Rook),
        })
    );
    assert!(board.history().is_empty());
    assert!(board.same_position(&Board::new()));
}

#[test]
fn test_legal_moves_grouped_by_origin() {
    let mut board = Board::new();
    let moves = board.legal_moves(Color::White);
    assert_eq!(moves.move_count(), 20);
    assert_eq!(moves.origin_count(), 10);
    assert_eq!(
        moves.destinations(Square(0, 1)),
        Some(&[Square(2, 2), Square(2, 0)][..])
    );
    assert_eq!(moves.destinations(Square(0, 0)), None);
    assert!(!moves.contains(Square(0, 4), Square(1, 4)));
}

#[test]
fn test_piece_moves_on_empty_square() {
    let mut board = Board::new();
    assert_eq!(
        board.piece_moves(Square(4, 4)),
        Err(BoardError::EmptyCell {
            square: Square(4, 4)
        })
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_outcome_and_record_serde() {
    use crate::board::{MoveOutcome, MoveRecord};

    let mut board = Board::new();
    let outcome = board.apply_move(Square(1, 4), Square(3, 4)).unwrap();
    let json = serde_json::to_string(&outcome).unwrap();
    let back: MoveOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);

    let record = board.history()[0];
    let json = serde_json::to_string(&record).unwrap();
    let back: MoveRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
