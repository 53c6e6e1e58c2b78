//! Legal pawn destinations: orthogonal steps, straight jumps, and sidesteps.

use quoridor_core::{Direction, PlayerId, Position};

use crate::BoardState;

/// Computes the legal destinations for `player`.
///
/// Directions are visited in [`Direction::SEARCH_ORDER`]. An empty adjacent
/// cell is a destination. An occupied one offers a straight jump when the
/// landing cell is open; otherwise each perpendicular sidestep from the
/// occupied cell is offered on its own merits. Destinations reachable through
/// more than one rule are listed once, at their first occurrence.
#[must_use]
pub fn legal_moves(board: &BoardState, player: PlayerId) -> Vec<Position> {
    let origin = board.position(player);
    let dimension = board.dimension();
    let mut moves = Vec::with_capacity(4);

    for direction in Direction::SEARCH_ORDER {
        let Some(adjacent) = origin.step(direction, dimension) else {
            continue;
        };

        if board.is_blocked(origin, adjacent) {
            continue;
        }

        if board.occupant_at(adjacent).is_none() {
            push_unique(&mut moves, adjacent);
            continue;
        }

        if let Some(landing) = open_step(board, adjacent, direction) {
            push_unique(&mut moves, landing);
            continue;
        }

        for side in direction.perpendiculars() {
            if let Some(sidestep) = open_step(board, adjacent, side) {
                push_unique(&mut moves, sidestep);
            }
        }
    }

    moves
}

/// Cell one step from `from` if it is on the board, unblocked, and empty.
fn open_step(board: &BoardState, from: Position, direction: Direction) -> Option<Position> {
    let to = from.step(direction, board.dimension())?;
    if board.is_blocked(from, to) || board.occupant_at(to).is_some() {
        return None;
    }
    Some(to)
}

fn push_unique(moves: &mut Vec<Position>, cell: Position) {
    if !moves.contains(&cell) {
        moves.push(cell);
    }
}
