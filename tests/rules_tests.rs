//! Rules integration tests: push scenarios, win threshold, stalemate cadence,
//! scoring and board files.

use river_stones::core::{Action, Board, BoardSize, Coord, GameState, Orientation, Piece, Side};
use river_stones::error::{ActionError, GameError, Occupancy};
use river_stones::rules::{
    check_win, compute_final_scores, flow_destinations, generate_legal_actions,
    validate_and_apply, Applied, GameResult,
};

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

fn small() -> Board {
    Board::empty(BoardSize::Small)
}

// =============================================================================
// Push Scenarios
// =============================================================================

#[test]
fn test_simple_push_accepted_then_blocked() {
    let mut board = small();
    board.place(c(2, 6), Piece::stone(Side::Circle));
    board.place(c(3, 6), Piece::stone(Side::Square));

    let push = Action::Push {
        from: c(2, 6),
        to: c(3, 6),
        pushed_to: c(4, 6),
    };

    // Occupied destination first.
    let mut blocked = board.clone();
    blocked.place(c(4, 6), Piece::stone(Side::Circle));
    let before = blocked.clone();
    assert_eq!(
        validate_and_apply(&mut blocked, &push, Side::Circle),
        Err(ActionError::OccupancyMismatch {
            at: c(4, 6),
            expected: Occupancy::Empty
        })
    );
    assert_eq!(blocked, before);

    assert_eq!(
        validate_and_apply(&mut board, &push, Side::Circle),
        Ok(Applied::Pushed { grounded: false })
    );
    assert_eq!(board.get(c(3, 6)), Some(&Piece::stone(Side::Circle)));
    assert_eq!(board.get(c(4, 6)), Some(&Piece::stone(Side::Square)));
    assert!(board.is_empty(c(2, 6)));
}

#[test]
fn test_wrong_straight_push_destination_rejected() {
    let mut board = small();
    board.place(c(2, 6), Piece::stone(Side::Circle));
    board.place(c(3, 6), Piece::stone(Side::Square));

    // Empty and in bounds, but not one step further along the push line.
    let push = Action::Push {
        from: c(2, 6),
        to: c(3, 6),
        pushed_to: c(3, 7),
    };
    assert_eq!(
        validate_and_apply(&mut board, &push, Side::Circle),
        Err(ActionError::IllegalDestination {
            from: c(3, 6),
            to: c(3, 7)
        })
    );
}

#[test]
fn test_river_mediated_push() {
    let mut board = small();
    // Circle river mover, square stone next to it along the river's axis,
    // open row beyond.
    let mover = c(2, 6);
    let target = c(3, 6);
    board.place(mover, Piece::river(Side::Circle, Orientation::Horizontal));
    board.place(target, Piece::stone(Side::Square));

    let legal = generate_legal_actions(&board, mover, Side::Circle);
    let flow = flow_destinations(&board, target, mover, Side::Square, true);
    let expected: Vec<_> = flow.iter().map(|&d| (target, d)).collect();
    assert_eq!(legal.pushes, expected);
    assert!(legal.contains_push(target, c(11, 6)));
    assert!(legal.contains_push(target, c(0, 6)));

    let push = Action::Push {
        from: mover,
        to: target,
        pushed_to: c(8, 6),
    };
    let applied = validate_and_apply(&mut board, &push, Side::Circle).unwrap();
    assert_eq!(applied.reason(), "push applied");
    assert_eq!(board.get(target), Some(&Piece::stone(Side::Circle)));
    assert_eq!(board.get(c(8, 6)), Some(&Piece::stone(Side::Square)));
}

#[test]
fn test_river_pushing_river_rejected() {
    let mut board = small();
    board.place(c(2, 6), Piece::river(Side::Circle, Orientation::Horizontal));
    board.place(c(3, 6), Piece::river(Side::Square, Orientation::Horizontal));
    let before = board.clone();

    let push = Action::Push {
        from: c(2, 6),
        to: c(3, 6),
        pushed_to: c(5, 6),
    };
    let err = validate_and_apply(&mut board, &push, Side::Circle).unwrap_err();
    assert!(matches!(err, ActionError::WrongPieceKindForAction { .. }));
    assert_eq!(board, before);
}

#[test]
fn test_push_may_move_own_piece() {
    let mut board = small();
    board.place(c(6, 6), Piece::stone(Side::Square));
    board.place(c(6, 7), Piece::stone(Side::Square));

    let push = Action::Push {
        from: c(6, 6),
        to: c(6, 7),
        pushed_to: c(6, 8),
    };
    assert!(validate_and_apply(&mut board, &push, Side::Square).is_ok());
    assert_eq!(board.get(c(6, 8)), Some(&Piece::stone(Side::Square)));
}

// =============================================================================
// Flow
// =============================================================================

#[test]
fn test_stone_rides_chain_into_score_row() {
    let mut board = small();
    let mover = c(0, 6);
    board.place(mover, Piece::stone(Side::Circle));
    board.place(c(0, 5), Piece::river(Side::Circle, Orientation::Horizontal));
    board.place(c(5, 5), Piece::river(Side::Square, Orientation::Vertical));

    let action = Action::Move {
        from: mover,
        to: c(5, 2),
    };
    assert_eq!(
        validate_and_apply(&mut board, &action, Side::Circle),
        Ok(Applied::Moved)
    );
    assert_eq!(board.get(c(5, 2)), Some(&Piece::stone(Side::Circle)));
}

#[test]
fn test_flow_terminates_on_river_ring() {
    let mut board = small();
    // A ring of rivers around an empty centre, all pointing along the ring.
    for x in 3..=7 {
        board.place(c(x, 4), Piece::river(Side::Circle, Orientation::Horizontal));
        board.place(c(x, 8), Piece::river(Side::Square, Orientation::Horizontal));
    }
    for y in 5..=7 {
        board.place(c(3, y), Piece::river(Side::Circle, Orientation::Vertical));
        board.place(c(7, y), Piece::river(Side::Square, Orientation::Vertical));
    }
    let mover = c(2, 4);
    board.place(mover, Piece::stone(Side::Circle));

    let dests = flow_destinations(&board, c(3, 4), mover, Side::Circle, false);
    assert!(dests.iter().all(|&d| board.is_empty(d)));
    assert!(dests.len() <= board.rows() * board.cols());
}

// =============================================================================
// Terminal Conditions
// =============================================================================

#[test]
fn test_win_threshold_small_board() {
    let mut board = small();
    for x in [4, 5, 6] {
        board.place(c(x, 2), Piece::stone(Side::Circle));
    }
    assert_eq!(check_win(&board), None);

    board.place(c(7, 2), Piece::stone(Side::Circle));
    assert_eq!(check_win(&board), Some(Side::Circle));
}

#[test]
fn test_win_threshold_large_board() {
    let mut board = Board::empty(BoardSize::Large);
    let row = board.score_row(Side::Square);
    let cols: Vec<_> = board.score_columns().into_iter().collect();
    assert_eq!(cols.len(), 6);

    for &x in &cols[..5] {
        board.place(c(x, row), Piece::stone(Side::Square));
    }
    assert_eq!(check_win(&board), None);

    board.place(c(cols[5], row), Piece::stone(Side::Square));
    assert_eq!(check_win(&board), Some(Side::Square));
}

/// Four rotations bring the board back to where it started.
fn rotation_round(board: &Board) -> [(Side, Action); 4] {
    let circle = board
        .pieces_of(Side::Circle)
        .find(|(_, p)| p.is_river())
        .map(|(at, _)| at)
        .unwrap();
    let square = board
        .pieces_of(Side::Square)
        .find(|(_, p)| p.is_river())
        .map(|(at, _)| at)
        .unwrap();
    [
        (Side::Circle, Action::Rotate { from: circle }),
        (Side::Square, Action::Rotate { from: square }),
        (Side::Circle, Action::Rotate { from: circle }),
        (Side::Square, Action::Rotate { from: square }),
    ]
}

#[test]
fn test_stalemate_after_twelfth_action() {
    let mut board = Board::starting(BoardSize::Small);
    board.place(c(0, 7), Piece::river(Side::Circle, Orientation::Horizontal));
    board.place(c(0, 5), Piece::river(Side::Square, Orientation::Vertical));
    let mut game = GameState::from_board(board);
    let round = rotation_round(game.board());

    let mut results = Vec::new();
    for i in 0..12 {
        let (side, action) = round[i % 4];
        results.push(game.apply_action(side, &action).unwrap());
    }

    assert!(results[..11].iter().all(Option::is_none));
    assert_eq!(results[11], Some(GameResult::Draw));

    let (side, action) = round[0];
    assert_eq!(game.apply_action(side, &action), Err(GameError::GameOver));
}

#[test]
fn test_no_stalemate_while_position_changes() {
    let mut game = GameState::new(BoardSize::Small);
    let moves = [
        (Side::Circle, c(3, 8), c(2, 8)),
        (Side::Square, c(3, 3), c(2, 3)),
        (Side::Circle, c(2, 8), c(1, 8)),
        (Side::Square, c(2, 3), c(1, 3)),
        (Side::Circle, c(1, 8), c(0, 8)),
        (Side::Square, c(1, 3), c(0, 3)),
        (Side::Circle, c(0, 8), c(0, 7)),
        (Side::Square, c(0, 3), c(0, 2)),
        (Side::Circle, c(0, 7), c(0, 6)),
        (Side::Square, c(0, 2), c(0, 1)),
        (Side::Circle, c(0, 6), c(1, 6)),
        (Side::Square, c(0, 1), c(1, 1)),
    ];
    for (side, from, to) in moves {
        assert_eq!(game.apply_action(side, &Action::Move { from, to }), Ok(None));
    }
    assert!(!game.is_over());
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_scoring_win_example() {
    let mut board = small();
    // Loser: 2 stones scoring, 1 stone one step away.
    board.place(c(4, 10), Piece::stone(Side::Square));
    board.place(c(5, 10), Piece::stone(Side::Square));
    board.place(c(6, 9), Piece::stone(Side::Square));

    let scores = compute_final_scores(&board, Some(Side::Circle), None);
    assert!((scores[Side::Square] - 20.833).abs() < 1e-3);
    assert!((scores[Side::Circle] - 79.167).abs() < 1e-3);
    assert!((scores[Side::Circle] + scores[Side::Square] - 100.0).abs() < 1e-9);
}

#[test]
fn test_scoring_draw_is_zero_sum_around_base() {
    let mut board = small();
    board.place(c(4, 2), Piece::stone(Side::Circle));
    board.place(c(9, 9), Piece::stone(Side::Square));

    let scores = compute_final_scores(&board, None, None);
    // Draw scores always sum to 2 * (30 + 39/4).
    assert!((scores[Side::Circle] + scores[Side::Square] - 79.5).abs() < 1e-9);
    assert!(scores[Side::Circle] > scores[Side::Square]);
}

// =============================================================================
// Board Files
// =============================================================================

#[test]
fn test_board_file_with_legacy_keys() {
    let json = r#"{"board": [
        [null, {"owner": "circle", "side": "river", "orientation": "vertical"}],
        [{"owner": "square", "side": "stone", "orientation": null}, null]
    ]}"#;
    let board = Board::from_json(json).unwrap();

    assert_eq!(board.rows(), 2);
    assert_eq!(
        board.get(c(1, 0)),
        Some(&Piece::river(Side::Circle, Orientation::Vertical))
    );
    assert_eq!(board.get(c(0, 1)), Some(&Piece::stone(Side::Square)));
    assert_eq!(board.to_compact(), ".Ca.");
}
