//! Plain-text rendering of the board and of game events.

use quoridor_core::{Event, Position};
use quoridor_game::BoardState;

/// Draws the board with row 0 at the top.
///
/// Empty cells are `.`, pawns show their player number, `|` marks a wall
/// between horizontally adjacent cells and `-` one below a cell.
pub(crate) fn board(board: &BoardState) -> String {
    let dimension = board.dimension();
    let mut out = String::new();

    for y in 0..dimension {
        let mut row = String::new();
        for x in 0..dimension {
            let cell = Position::new(x, y);
            row.push(match board.occupant_at(cell) {
                Some(player) => char::from(b'0' + player.number()),
                None => '.',
            });
            if x + 1 < dimension {
                let east = Position::new(x + 1, y);
                row.push(if board.is_blocked(cell, east) {
                    '|'
                } else {
                    ' '
                });
            }
        }
        push_line(&mut out, &row);

        if y + 1 < dimension {
            let mut walls = String::new();
            for x in 0..dimension {
                let blocked = board.is_blocked(Position::new(x, y), Position::new(x, y + 1));
                walls.push(if blocked { '-' } else { ' ' });
                walls.push(' ');
            }
            push_line(&mut out, &walls);
        }
    }

    out
}

/// One-line description of an event for the transcript.
pub(crate) fn event(event: &Event) -> String {
    match *event {
        Event::PawnMoved { player, from, to } => format!(
            "player {} moved {} -> {}",
            player.number(),
            cell(from),
            cell(to)
        ),
        Event::WallPlaced {
            player,
            wall,
            walls_remaining,
        } => format!(
            "player {} placed a {:?} wall at {} ({walls_remaining} left)",
            player.number(),
            wall.orientation(),
            cell(wall.anchor())
        ),
        Event::TurnPassed { player } => format!("player {} passed", player.number()),
        Event::ActionRejected { player, reason, .. } => {
            format!("player {}: {reason}", player.number())
        }
        Event::PassRejected { player, reason } => {
            format!("player {} cannot pass: {reason}", player.number())
        }
        Event::PlayerWon { player } => format!("player {} wins!", player.number()),
        Event::TurnAdvanced { player } => format!("player {} to act", player.number()),
    }
}

/// Formats a cell as `(x, y)`.
pub(crate) fn cell(position: Position) -> String {
    format!("({}, {})", position.x(), position.y())
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
