//! Turn-agnostic rule application shared by the game and by simulation.
//!
//! These functions mutate a [`BoardState`] directly and never consult the
//! active player or the terminal flag. The search agent applies and reverts
//! them on a single scratch board; [`crate::apply`] wraps them with turn
//! bookkeeping.

use quoridor_core::{Action, PlayerId, Position, RejectionReason, WallPlacement, WallSegment};

use crate::{moves::legal_moves, walls::check_wall, BoardState};

/// Effect of an accepted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The pawn moved between two cells.
    Moved {
        /// Cell occupied before the move.
        from: Position,
        /// Cell occupied after the move.
        to: Position,
    },
    /// A wall was committed.
    WallPlaced {
        /// Location of the committed wall.
        wall: WallPlacement,
        /// Walls the player holds after placement.
        walls_remaining: u32,
    },
}

/// Applies `action` for `player`, leaving the board untouched on rejection.
///
/// Moves are re-validated against [`legal_moves`]; walls against
/// [`check_wall`]. An accepted wall charges the player exactly one wall.
pub fn apply_action(
    board: &mut BoardState,
    player: PlayerId,
    action: Action,
) -> Result<Outcome, RejectionReason> {
    match action {
        Action::Move(to) => {
            if !legal_moves(board, player).contains(&to) {
                return Err(RejectionReason::IllegalMove);
            }
            let from = board.position(player);
            board.move_pawn(player, to);
            Ok(Outcome::Moved { from, to })
        }
        Action::PlaceWall(wall) => {
            check_wall(board, player, wall)?;
            let walls_remaining = board.commit_wall(player, wall);
            Ok(Outcome::WallPlaced {
                wall,
                walls_remaining,
            })
        }
    }
}

/// Record of an accepted action that [`undo`] can reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
    player: PlayerId,
    change: Change,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Change {
    Moved { from: Position },
    // Segments that were absent before the wall; overlapping walls share the rest.
    WallPlaced { inserted: [Option<WallSegment>; 2] },
}

/// Like [`apply_action`], but returns what is needed to revert the action.
pub fn apply_reversible(
    board: &mut BoardState,
    player: PlayerId,
    action: Action,
) -> Result<Undo, RejectionReason> {
    let inserted = match action {
        Action::PlaceWall(wall) => wall
            .segments()
            .map(|segment| (!board.has_segment(segment)).then_some(segment)),
        Action::Move(_) => [None; 2],
    };

    let change = match apply_action(board, player, action)? {
        Outcome::Moved { from, .. } => Change::Moved { from },
        Outcome::WallPlaced { .. } => Change::WallPlaced { inserted },
    };

    Ok(Undo { player, change })
}

/// Reverts an action recorded by [`apply_reversible`].
///
/// Records must be undone in reverse order of application.
pub fn undo(board: &mut BoardState, record: Undo) {
    match record.change {
        Change::Moved { from } => board.move_pawn(record.player, from),
        Change::WallPlaced { inserted } => {
            for segment in inserted.into_iter().flatten() {
                board.remove_segment(segment);
            }
            board.refund_wall(record.player);
        }
    }
}

/// Reports whether `player` stands on its goal edge.
#[must_use]
pub fn has_won(board: &BoardState, player: PlayerId) -> bool {
    board.has_reached_goal(player)
}
