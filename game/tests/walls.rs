use quoridor_core::{
    Action, GoalDistance, Orientation, PlayerId, Position, RejectionReason, WallPlacement,
};
use quoridor_game::{check_wall, is_wall_valid, rules, valid_wall_placements, BoardState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn wall(orientation: Orientation, x: u32, y: u32) -> WallPlacement {
    WallPlacement::new(orientation, Position::new(x, y))
}

fn small_board() -> BoardState {
    BoardState::new(5, 3).expect("5x5 board")
}

/// Leaves only the edge below `(4, 0)` open between rows 0 and 1.
fn nearly_sealed_board() -> BoardState {
    let mut board = small_board();
    for (player, anchor_x) in [(PlayerId::One, 0), (PlayerId::Two, 2)] {
        let placement = wall(Orientation::Horizontal, anchor_x, 0);
        let _ = rules::apply_action(&mut board, player, Action::PlaceWall(placement))
            .expect("wall accepted");
    }
    board
}

#[test]
fn wall_that_seals_a_goal_is_rejected() {
    let board = nearly_sealed_board();
    let sealing = wall(Orientation::Horizontal, 3, 0);

    assert_eq!(
        check_wall(&board, PlayerId::Three, sealing),
        Err(RejectionReason::WallBlocksGoal)
    );
    assert!(!is_wall_valid(&board, PlayerId::Three, sealing));
    assert_eq!(
        board.goal_distance(board.position(PlayerId::One), PlayerId::One),
        GoalDistance::Steps(6),
        "rejected wall must not leak into the board"
    );
}

#[test]
fn anchors_on_last_row_or_column_are_out_of_bounds() {
    let board = small_board();

    assert_eq!(
        check_wall(&board, PlayerId::One, wall(Orientation::Horizontal, 4, 0)),
        Err(RejectionReason::WallOutOfBounds)
    );
    assert_eq!(
        check_wall(&board, PlayerId::One, wall(Orientation::Vertical, 0, 4)),
        Err(RejectionReason::WallOutOfBounds)
    );
    assert_eq!(
        check_wall(&board, PlayerId::One, wall(Orientation::Vertical, 3, 3)),
        Ok(())
    );
}

#[test]
fn empty_budget_rejects_any_wall() {
    let board = BoardState::new(5, 0).expect("5x5 board");

    assert_eq!(
        check_wall(&board, PlayerId::Two, wall(Orientation::Vertical, 1, 1)),
        Err(RejectionReason::NoWallsRemaining)
    );
    assert!(valid_wall_placements(&board, PlayerId::Two).is_empty());
}

#[test]
fn accepted_wall_costs_exactly_one() {
    let mut board = small_board();

    let outcome = rules::apply_action(
        &mut board,
        PlayerId::Four,
        Action::PlaceWall(wall(Orientation::Vertical, 1, 1)),
    );

    assert_eq!(
        outcome,
        Ok(rules::Outcome::WallPlaced {
            wall: wall(Orientation::Vertical, 1, 1),
            walls_remaining: 2,
        })
    );
    assert_eq!(board.walls_remaining(PlayerId::Four), 2);
    assert_eq!(board.walls_remaining(PlayerId::One), 3);
}

#[test]
fn rejected_wall_costs_nothing() {
    let mut board = nearly_sealed_board();
    let before = board.clone();

    let outcome = rules::apply_action(
        &mut board,
        PlayerId::Three,
        Action::PlaceWall(wall(Orientation::Horizontal, 3, 0)),
    );

    assert_eq!(outcome, Err(RejectionReason::WallBlocksGoal));
    assert_eq!(board, before);
}

#[test]
fn every_wall_is_valid_on_an_open_board() {
    let board = small_board();

    let placements = valid_wall_placements(&board, PlayerId::One);

    assert_eq!(placements.len(), 32);
    assert_eq!(
        placements.first(),
        Some(&wall(Orientation::Horizontal, 0, 0))
    );
    assert_eq!(
        placements.get(1),
        Some(&wall(Orientation::Horizontal, 0, 1))
    );
    assert_eq!(placements.last(), Some(&wall(Orientation::Vertical, 3, 3)));
}

#[test]
fn candidate_list_skips_sealing_walls() {
    let board = nearly_sealed_board();

    let placements = valid_wall_placements(&board, PlayerId::Three);

    assert!(!placements.contains(&wall(Orientation::Horizontal, 3, 0)));
    assert!(placements.contains(&wall(Orientation::Horizontal, 0, 1)));
    for placement in &placements {
        assert!(is_wall_valid(&board, PlayerId::Three, *placement));
    }
}

#[test]
fn random_legal_play_never_disconnects_a_player() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x0bad_5eed);

    for _ in 0..8 {
        let mut board = BoardState::new(7, 6).expect("7x7 board");

        for turn in 0..120_u32 {
            let player = PlayerId::ALL[(turn % 4) as usize];
            let action = if rng.gen_bool(0.6) {
                let orientation = Orientation::ALL[rng.gen_range(0..2)];
                Action::PlaceWall(wall(orientation, rng.gen_range(0..6), rng.gen_range(0..6)))
            } else {
                let moves = quoridor_game::legal_moves(&board, player);
                if moves.is_empty() {
                    continue;
                }
                Action::Move(moves[rng.gen_range(0..moves.len())])
            };

            let before = board.clone();
            if rules::apply_action(&mut board, player, action).is_err() {
                assert_eq!(board, before, "rejected action mutated the board");
                continue;
            }

            for seat in PlayerId::ALL {
                assert!(
                    board
                        .goal_distance(board.position(seat), seat)
                        .is_reachable(),
                    "player {seat:?} lost its path after {action:?}"
                );
            }
        }
    }
}
