//! Test suite for the simplified chess rules and the match controller.
//!
//! # Test Organization
//!
//! - `test_board_*` - board construction and queries
//! - `test_pawn_*` - pawn movement (forward, diagonal capture, direction)
//! - `test_knight_*` - knight L-shaped movement
//! - `test_bishop_*` / `test_rook_*` / `test_queen_*` - sliding pieces,
//!   including the contractual absence of path blocking
//! - `test_king_*` - king single-square movement
//! - `test_match_*` - click/selection state machine, counters, reset
//!
//! The rules under test are the reduced mini-game ruleset, not FIDE chess:
//! several tests pin down behavior (jumping sliders, friendly captures) that
//! a full engine would reject.

use super::*;
use crate::board::{Board, Coord, Piece, PieceKind, Side};
use crate::rules::{is_legal_move, legal_destinations};

/// Shorthand coordinate constructor for in-range test positions.
fn at(row: u8, col: u8) -> Coord {
    Coord::new(row, col).expect("test coordinate in range")
}

/// Build a board holding exactly the given pieces.
///
/// Takes `(kind, side, (row, col))` tuples so tests read as position
/// diagrams rather than setup code.
fn board_with(pieces: &[(PieceKind, Side, (u8, u8))]) -> Board {
    let mut board = Board::empty();
    for &(kind, side, (row, col)) in pieces {
        board.set(at(row, col), Some(Piece::new(kind, side)));
    }
    board
}

// ============================================================================
// Board Tests
// ============================================================================

#[test]
fn test_board_initial_layout() {
    //! Verifies the fixed starting position: Black on rows 0-1, White on
    //! rows 6-7, queens on column 3, kings on column 4, 32 pieces total.
    let board = Board::initial();

    assert_eq!(board.piece_count(), 32);
    assert_eq!(
        board.piece_at(at(0, 3)),
        Some(Piece::new(PieceKind::Queen, Side::Black))
    );
    assert_eq!(
        board.piece_at(at(7, 4)),
        Some(Piece::new(PieceKind::King, Side::White))
    );
    for col in 0..8 {
        assert_eq!(
            board.piece_at(at(1, col)),
            Some(Piece::new(PieceKind::Pawn, Side::Black))
        );
        assert_eq!(
            board.piece_at(at(6, col)),
            Some(Piece::new(PieceKind::Pawn, Side::White))
        );
    }
    for row in 2..6 {
        for col in 0..8 {
            assert!(board.is_empty(at(row, col)));
        }
    }
}

#[test]
fn test_board_coord_rejects_off_board() {
    assert_eq!(
        Coord::new(8, 0),
        Err(ChessError::OffBoard { row: 8, col: 0 })
    );
    assert_eq!(
        Coord::new(3, 200),
        Err(ChessError::OffBoard { row: 3, col: 200 })
    );
    assert!(Coord::new(7, 7).is_ok());
}

#[test]
fn test_board_coord_display_is_algebraic() {
    assert_eq!(at(0, 0).to_string(), "a8");
    assert_eq!(at(7, 7).to_string(), "h1");
    assert_eq!(at(6, 4).to_string(), "e2");
}

// ============================================================================
// Pawn Tests
// ============================================================================

#[test]
fn test_pawn_moves_one_row_forward_onto_empty() {
    let board = board_with(&[(PieceKind::Pawn, Side::White, (6, 4))]);
    assert!(is_legal_move(&board, Side::White, at(6, 4), at(5, 4)));
}

#[test]
fn test_pawn_direction_depends_on_side() {
    //! White pawns advance toward row 0, Black pawns toward row 7; moving
    //! backwards is illegal for both.
    let board = board_with(&[
        (PieceKind::Pawn, Side::White, (4, 4)),
        (PieceKind::Pawn, Side::Black, (3, 0)),
    ]);

    assert!(is_legal_move(&board, Side::White, at(4, 4), at(3, 4)));
    assert!(!is_legal_move(&board, Side::White, at(4, 4), at(5, 4)));
    assert!(is_legal_move(&board, Side::Black, at(3, 0), at(4, 0)));
    assert!(!is_legal_move(&board, Side::Black, at(3, 0), at(2, 0)));
}

#[test]
fn test_pawn_has_no_double_step() {
    //! No two-square first move exists in this ruleset, even from the
    //! starting rank.
    let board = Board::initial();
    assert!(!is_legal_move(&board, Side::White, at(6, 4), at(4, 4)));
}

#[test]
fn test_pawn_never_captures_straight_ahead() {
    let board = board_with(&[
        (PieceKind::Pawn, Side::White, (4, 4)),
        (PieceKind::Pawn, Side::Black, (3, 4)),
    ]);
    assert!(!is_legal_move(&board, Side::White, at(4, 4), at(3, 4)));
}

#[test]
fn test_pawn_captures_diagonally_onto_opponent() {
    let board = board_with(&[
        (PieceKind::Pawn, Side::White, (4, 4)),
        (PieceKind::Rook, Side::Black, (3, 5)),
    ]);
    assert!(is_legal_move(&board, Side::White, at(4, 4), at(3, 5)));
}

#[test]
fn test_pawn_never_moves_diagonally_onto_empty() {
    let board = board_with(&[(PieceKind::Pawn, Side::White, (4, 4))]);
    assert!(!is_legal_move(&board, Side::White, at(4, 4), at(3, 3)));
    assert!(!is_legal_move(&board, Side::White, at(4, 4), at(3, 5)));
}

#[test]
fn test_pawn_never_captures_own_side_diagonally() {
    //! The pawn is the only piece whose rule inspects the destination's
    //! owner; a friendly piece blocks its diagonal.
    let board = board_with(&[
        (PieceKind::Pawn, Side::White, (4, 4)),
        (PieceKind::Knight, Side::White, (3, 5)),
    ]);
    assert!(!is_legal_move(&board, Side::White, at(4, 4), at(3, 5)));
}

// ============================================================================
// Knight Tests
// ============================================================================

#[test]
fn test_knight_moves_exactly_l_shaped() {
    //! Knight legality is exactly the (2,1)/(1,2) delta test, in every sign
    //! combination, and nothing else.
    let board = board_with(&[(PieceKind::Knight, Side::White, (4, 4))]);

    let destinations = legal_destinations(&board, Side::White, at(4, 4));
    let expected: Vec<Coord> = [
        (2, 3),
        (2, 5),
        (3, 2),
        (3, 6),
        (5, 2),
        (5, 6),
        (6, 3),
        (6, 5),
    ]
    .iter()
    .map(|&(r, c)| at(r, c))
    .collect();
    assert_eq!(destinations, expected);
}

#[test]
fn test_knight_ignores_intervening_occupancy() {
    //! In the initial position every cell around the knight is occupied;
    //! the jump is still legal.
    let board = Board::initial();
    assert!(is_legal_move(&board, Side::White, at(7, 1), at(5, 2)));
}

// ============================================================================
// Bishop / Rook / Queen Tests
// ============================================================================

#[test]
fn test_bishop_moves_diagonally_any_distance() {
    let board = board_with(&[(PieceKind::Bishop, Side::White, (7, 2))]);
    assert!(is_legal_move(&board, Side::White, at(7, 2), at(2, 7)));
    assert!(is_legal_move(&board, Side::White, at(7, 2), at(5, 0)));
    assert!(!is_legal_move(&board, Side::White, at(7, 2), at(5, 2)));
}

#[test]
fn test_bishop_path_blocking_is_absent() {
    //! Contractual quirk: the bishop slides through occupied cells. From the
    //! initial position c1-h6 passes straight through the d2 pawn.
    let board = Board::initial();
    assert!(is_legal_move(&board, Side::White, at(7, 2), at(2, 7)));
}

#[test]
fn test_rook_moves_along_rank_or_file() {
    let board = board_with(&[(PieceKind::Rook, Side::Black, (0, 0))]);
    assert!(is_legal_move(&board, Side::Black, at(0, 0), at(0, 7)));
    assert!(is_legal_move(&board, Side::Black, at(0, 0), at(7, 0)));
    assert!(!is_legal_move(&board, Side::Black, at(0, 0), at(1, 1)));
}

#[test]
fn test_rook_path_blocking_is_absent() {
    //! The a8 rook reaches a1 straight through the a7 pawn.
    let board = Board::initial();
    assert!(is_legal_move(&board, Side::Black, at(0, 0), at(7, 0)));
}

#[test]
fn test_rook_may_land_on_friendly_piece() {
    //! Only the pawn rule looks at the destination owner, so a rook landing
    //! on its own pawn is legal; the pawn is discarded as a capture.
    let board = Board::initial();
    assert!(is_legal_move(&board, Side::Black, at(0, 0), at(1, 0)));
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let board = board_with(&[(PieceKind::Queen, Side::White, (4, 4))]);
    assert!(is_legal_move(&board, Side::White, at(4, 4), at(4, 0)));
    assert!(is_legal_move(&board, Side::White, at(4, 4), at(0, 4)));
    assert!(is_legal_move(&board, Side::White, at(4, 4), at(1, 1)));
    assert!(!is_legal_move(&board, Side::White, at(4, 4), at(2, 5)));
}

// ============================================================================
// King Tests
// ============================================================================

#[test]
fn test_king_moves_one_cell_any_direction() {
    let board = board_with(&[(PieceKind::King, Side::White, (4, 4))]);
    for (row, col) in [(3, 3), (3, 4), (3, 5), (4, 3), (4, 5), (5, 3), (5, 4), (5, 5)] {
        assert!(is_legal_move(&board, Side::White, at(4, 4), at(row, col)));
    }
    assert!(!is_legal_move(&board, Side::White, at(4, 4), at(2, 4)));
    assert!(!is_legal_move(&board, Side::White, at(4, 4), at(4, 6)));
}

// ============================================================================
// Shared Rule Tests
// ============================================================================

#[test]
fn test_same_square_move_is_illegal_for_every_kind() {
    let kinds = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
    for kind in kinds {
        let board = board_with(&[(kind, Side::White, (4, 4))]);
        assert!(
            !is_legal_move(&board, Side::White, at(4, 4), at(4, 4)),
            "{kind} accepted a move onto its own square"
        );
    }
}

#[test]
fn test_moving_opponent_piece_is_illegal() {
    let board = Board::initial();
    assert!(!is_legal_move(&board, Side::White, at(1, 0), at(2, 0)));
}

#[test]
fn test_moving_from_empty_cell_is_illegal() {
    let board = Board::initial();
    assert!(!is_legal_move(&board, Side::White, at(4, 4), at(3, 4)));
}

// ============================================================================
// Match Controller Tests
// ============================================================================

#[test]
fn test_match_click_selects_own_piece_only() {
    //! With no selection pending, clicking an own piece selects it; clicking
    //! an empty cell or an opponent piece does nothing.
    let mut game = Match::new();

    assert_eq!(game.click(at(4, 4)), ClickOutcome::Ignored);
    assert_eq!(game.click(at(1, 0)), ClickOutcome::Ignored);
    assert_eq!(game.selection(), None);

    assert_eq!(game.click(at(6, 4)), ClickOutcome::Selected(at(6, 4)));
    assert_eq!(game.selection(), Some(at(6, 4)));
}

#[test]
fn test_match_legal_click_applies_move_and_flips_turn() {
    let mut game = Match::new();
    game.click(at(6, 4));

    let outcome = game.click(at(5, 4));
    let ClickOutcome::Moved(record) = outcome else {
        panic!("expected a move, got {outcome:?}");
    };
    assert_eq!(record.from, at(6, 4));
    assert_eq!(record.to, at(5, 4));
    assert_eq!(record.captured, None);

    assert!(game.board().is_empty(at(6, 4)));
    assert_eq!(
        game.board().piece_at(at(5, 4)),
        Some(Piece::new(PieceKind::Pawn, Side::White))
    );
    assert_eq!(game.turn(), Side::Black);
    assert_eq!(game.move_counter(), 2);
    assert_eq!(game.selection(), None);
}

#[test]
fn test_match_illegal_click_only_clears_selection() {
    //! A rejected attempt changes nothing: board, turn and counter keep
    //! their values and only the pending selection clears.
    let mut game = Match::new();
    let before = game.board().clone();
    game.click(at(6, 4));

    assert_eq!(game.click(at(3, 4)), ClickOutcome::Rejected);
    assert_eq!(game.board(), &before);
    assert_eq!(game.turn(), Side::White);
    assert_eq!(game.move_counter(), 1);
    assert_eq!(game.selection(), None);
}

#[test]
fn test_match_move_counter_counts_legal_moves_only() {
    let mut game = Match::new();
    assert_eq!(game.move_counter(), 1);

    game.click(at(6, 0));
    game.click(at(5, 0)); // legal white pawn step
    assert_eq!(game.move_counter(), 2);

    game.click(at(1, 0));
    game.click(at(4, 0)); // illegal triple step
    assert_eq!(game.move_counter(), 2);

    game.click(at(1, 0));
    game.click(at(2, 0)); // legal black pawn step
    assert_eq!(game.move_counter(), 3);
}

#[test]
fn test_match_capture_removes_exactly_one_piece() {
    //! After any legal move exactly one piece changes cell; the total count
    //! drops by one on a capture and never increases.
    let mut game = Match::new();
    assert_eq!(game.board().piece_count(), 32);

    // a8 rook slides through its own pawns onto a1 and discards the rook
    // there - legal here because neither path nor destination owner is
    // checked for non-pawns.
    game.click(at(6, 4));
    game.click(at(5, 4));
    assert_eq!(game.board().piece_count(), 32);

    let record = match game.click(at(0, 0)) {
        ClickOutcome::Selected(_) => match game.click(at(7, 0)) {
            ClickOutcome::Moved(record) => record,
            other => panic!("expected capture, got {other:?}"),
        },
        other => panic!("expected selection, got {other:?}"),
    };
    assert_eq!(record.captured, Some(Piece::new(PieceKind::Rook, Side::White)));
    assert_eq!(game.board().piece_count(), 31);
    assert!(game.board().is_empty(at(0, 0)));
}

#[test]
fn test_match_selection_clears_after_any_attempt() {
    let mut game = Match::new();
    game.click(at(6, 4));
    game.click(at(0, 0)); // far-away illegal target
    assert_eq!(game.selection(), None);

    // Re-clicking the selected square is a same-square move attempt, which
    // is illegal for every kind.
    game.click(at(6, 4));
    assert_eq!(game.click(at(6, 4)), ClickOutcome::Rejected);
    assert_eq!(game.selection(), None);
    assert_eq!(game.move_counter(), 1);
}

#[test]
fn test_match_reset_restores_initial_state() {
    let mut game = Match::new();
    game.click(at(6, 4));
    game.click(at(5, 4));
    game.click(at(1, 0));

    game.reset();
    assert_eq!(game.board(), &Board::initial());
    assert_eq!(game.turn(), Side::White);
    assert_eq!(game.move_counter(), 1);
    assert_eq!(game.selection(), None);
}
