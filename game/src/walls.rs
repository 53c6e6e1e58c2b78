//! Wall placement legality.
//!
//! A placement is checked post hoc: both segments are overlaid on the
//! committed walls and every player's goal is searched for. Nothing is
//! maintained between calls.

use quoridor_core::{Orientation, PlayerId, Position, RejectionReason, WallPlacement};

use crate::{board::segment_between, navigation, BoardState};

/// Checks whether `player` may place `wall` on the board.
///
/// Fails when the anchor is outside `[0, N - 2]`, when the player holds no
/// walls, or when the wall would leave any player without a path to its goal.
pub fn check_wall(
    board: &BoardState,
    player: PlayerId,
    wall: WallPlacement,
) -> Result<(), RejectionReason> {
    if !wall.is_within(board.dimension()) {
        return Err(RejectionReason::WallOutOfBounds);
    }

    if board.walls_remaining(player) == 0 {
        return Err(RejectionReason::NoWallsRemaining);
    }

    if !keeps_goals_reachable(board, wall) {
        return Err(RejectionReason::WallBlocksGoal);
    }

    Ok(())
}

/// Reports whether `player` may place `wall`; see [`check_wall`].
#[must_use]
pub fn is_wall_valid(board: &BoardState, player: PlayerId, wall: WallPlacement) -> bool {
    check_wall(board, player, wall).is_ok()
}

/// Every placement `player` could legally make right now.
///
/// Candidates are enumerated horizontal first, then by anchor `x`, then by
/// anchor `y`. The result is empty when the player holds no walls.
#[must_use]
pub fn valid_wall_placements(board: &BoardState, player: PlayerId) -> Vec<WallPlacement> {
    if board.walls_remaining(player) == 0 {
        return Vec::new();
    }

    let limit = board.dimension().saturating_sub(1);
    let mut placements = Vec::new();
    for orientation in Orientation::ALL {
        for x in 0..limit {
            for y in 0..limit {
                let wall = WallPlacement::new(orientation, Position::new(x, y));
                if keeps_goals_reachable(board, wall) {
                    placements.push(wall);
                }
            }
        }
    }
    placements
}

fn keeps_goals_reachable(board: &BoardState, wall: WallPlacement) -> bool {
    let added = wall.segments();
    PlayerId::ALL.into_iter().all(|player| {
        navigation::goal_distance(
            board.dimension(),
            board.position(player),
            player.goal(),
            |from, to| {
                board.is_blocked(from, to)
                    || segment_between(from, to).map_or(false, |edge| added.contains(&edge))
            },
        )
        .is_reachable()
    })
}
