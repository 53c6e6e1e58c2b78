use quoridor_core::{Action, Orientation, PlayerId, Position, WallPlacement};
use quoridor_game::{legal_moves, rules, BoardState};

fn board_with(positions: [Position; 4]) -> BoardState {
    BoardState::from_positions(13, positions, 10).expect("valid setup")
}

fn place(board: &mut BoardState, player: PlayerId, orientation: Orientation, x: u32, y: u32) {
    let wall = WallPlacement::new(orientation, Position::new(x, y));
    let _ = rules::apply_action(board, player, Action::PlaceWall(wall)).expect("wall accepted");
}

#[test]
fn edge_start_excludes_off_board_direction() {
    let board = BoardState::new(13, 10).expect("default board");

    assert_eq!(
        legal_moves(&board, PlayerId::One),
        vec![
            Position::new(6, 1),
            Position::new(7, 0),
            Position::new(5, 0),
        ]
    );
}

#[test]
fn straight_jump_takes_precedence_over_sidesteps() {
    let board = board_with([
        Position::new(5, 5),
        Position::new(6, 5),
        Position::new(0, 0),
        Position::new(12, 12),
    ]);

    let moves = legal_moves(&board, PlayerId::One);

    assert!(moves.contains(&Position::new(7, 5)), "jump over player 2");
    assert!(!moves.contains(&Position::new(6, 4)));
    assert!(!moves.contains(&Position::new(6, 6)));
    assert!(
        !moves.contains(&Position::new(6, 5)),
        "occupied cell offered"
    );
    assert_eq!(
        moves,
        vec![
            Position::new(5, 6),
            Position::new(7, 5),
            Position::new(5, 4),
            Position::new(4, 5),
        ]
    );
}

#[test]
fn walled_jump_offers_both_sidesteps() {
    let mut board = board_with([
        Position::new(5, 5),
        Position::new(6, 5),
        Position::new(0, 0),
        Position::new(12, 12),
    ]);
    place(&mut board, PlayerId::Three, Orientation::Vertical, 6, 4);

    assert_eq!(
        legal_moves(&board, PlayerId::One),
        vec![
            Position::new(5, 6),
            Position::new(6, 6),
            Position::new(6, 4),
            Position::new(5, 4),
            Position::new(4, 5),
        ]
    );
}

#[test]
fn off_board_jump_offers_sidesteps() {
    let board = board_with([
        Position::new(11, 5),
        Position::new(12, 5),
        Position::new(0, 0),
        Position::new(0, 12),
    ]);

    let moves = legal_moves(&board, PlayerId::One);

    assert!(moves.contains(&Position::new(12, 6)));
    assert!(moves.contains(&Position::new(12, 4)));
    assert!(!moves.iter().any(|cell| cell.x() > 12));
}

#[test]
fn occupied_landing_with_one_blocked_sidestep_offers_one() {
    // Player 3 occupies the jump landing, player 4 one sidestep.
    let board = board_with([
        Position::new(5, 5),
        Position::new(6, 5),
        Position::new(7, 5),
        Position::new(6, 6),
    ]);

    let moves = legal_moves(&board, PlayerId::One);

    assert!(moves.contains(&Position::new(6, 4)));
    assert!(!moves.contains(&Position::new(6, 6)));
    assert!(!moves.contains(&Position::new(7, 5)));
}

#[test]
fn fully_boxed_opponent_offers_nothing_in_that_direction() {
    let mut board = board_with([
        Position::new(5, 5),
        Position::new(6, 5),
        Position::new(0, 0),
        Position::new(12, 12),
    ]);
    // Seal the far side and both sidesteps around player 2.
    place(&mut board, PlayerId::Three, Orientation::Vertical, 6, 4);
    place(&mut board, PlayerId::Three, Orientation::Horizontal, 6, 5);
    place(&mut board, PlayerId::Three, Orientation::Horizontal, 6, 4);

    let moves = legal_moves(&board, PlayerId::One);

    assert_eq!(
        moves,
        vec![
            Position::new(5, 6),
            Position::new(5, 4),
            Position::new(4, 5),
        ]
    );
}

#[test]
fn walls_remove_blocked_steps() {
    let mut board = BoardState::new(13, 10).expect("default board");
    place(&mut board, PlayerId::Two, Orientation::Horizontal, 5, 0);

    assert_eq!(
        legal_moves(&board, PlayerId::One),
        vec![Position::new(7, 0), Position::new(5, 0)]
    );
}

#[test]
fn duplicate_sidesteps_are_listed_once() {
    // Opponents south and west of player 1 with both jumps unavailable; the
    // two sets of sidesteps share the cell (0, 2).
    let board = BoardState::from_positions(
        5,
        [
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(0, 1),
            Position::new(1, 3),
        ],
        0,
    )
    .expect("valid setup");

    let moves = legal_moves(&board, PlayerId::One);
    let mut deduplicated = moves.clone();
    deduplicated.sort();
    deduplicated.dedup();

    assert_eq!(moves.len(), deduplicated.len());
    assert!(moves.contains(&Position::new(0, 2)));
}

#[test]
fn legal_moves_never_land_on_occupied_cells() {
    let board = board_with([
        Position::new(6, 6),
        Position::new(6, 7),
        Position::new(7, 6),
        Position::new(6, 5),
    ]);

    for player in PlayerId::ALL {
        for cell in legal_moves(&board, player) {
            assert_eq!(
                board.occupant_at(cell),
                None,
                "player {player:?} to {cell:?}"
            );
        }
    }
}
