//! Breadth-first goal distance search used by wall validation and evaluation.

use std::collections::VecDeque;

use quoridor_core::{Direction, GoalDistance, GoalEdge, Position};

/// Shortest path length from `start` to any cell on `goal`.
///
/// Edges are orthogonal steps between in-bounds cells, pruned by the
/// `is_blocked` closure. The search stops at the first goal cell it discovers,
/// so the cost is bounded by the board area.
pub(crate) fn goal_distance<F>(
    dimension: u32,
    start: Position,
    goal: GoalEdge,
    mut is_blocked: F,
) -> GoalDistance
where
    F: FnMut(Position, Position) -> bool,
{
    if !start.is_within(dimension) {
        return GoalDistance::Unreachable;
    }

    if goal.is_reached(start, dimension) {
        return GoalDistance::Steps(0);
    }

    let width = usize::try_from(dimension).unwrap_or(0);
    let cell_count = width.checked_mul(width).unwrap_or(0);
    let mut visited = vec![false; cell_count];
    let mut queue = VecDeque::new();

    let Some(start_index) = index(width, start) else {
        return GoalDistance::Unreachable;
    };
    visited[start_index] = true;
    queue.push_back((start, 0_u32));

    while let Some((cell, distance)) = queue.pop_front() {
        let next_distance = distance.saturating_add(1);

        for direction in Direction::SEARCH_ORDER {
            let Some(neighbor) = cell.step(direction, dimension) else {
                continue;
            };

            if is_blocked(cell, neighbor) {
                continue;
            }

            let Some(slot) = index(width, neighbor).and_then(|offset| visited.get_mut(offset))
            else {
                continue;
            };

            if *slot {
                continue;
            }
            *slot = true;

            if goal.is_reached(neighbor, dimension) {
                return GoalDistance::Steps(next_distance);
            }

            queue.push_back((neighbor, next_distance));
        }
    }

    GoalDistance::Unreachable
}

fn index(width: usize, cell: Position) -> Option<usize> {
    let column = usize::try_from(cell.x()).ok()?;
    let row = usize::try_from(cell.y()).ok()?;
    row.checked_mul(width)?.checked_add(column)
}
