#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Quoridor engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative game state, and pure systems. Adapters submit [`Command`]
//! values describing desired turns, the game executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values describing what
//! happened. Systems such as the search agent query immutable snapshots and
//! respond with new commands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of the square board used when no configuration is supplied.
pub const DEFAULT_BOARD_SIZE: u32 = 13;

/// Smallest board on which the four starting cells are pairwise distinct.
pub const MIN_BOARD_SIZE: u32 = 3;

/// Wall budget handed to every player unless exactly two humans play.
pub const DEFAULT_WALL_BUDGET: u32 = 10;

/// Wall budget handed to every player when exactly two humans play.
pub const TWO_HUMAN_WALL_BUDGET: u32 = 20;

/// Plies explored by automated players unless configured otherwise.
pub const DEFAULT_SEARCH_DEPTH: u32 = 1;

/// Upper bound on sampled wall placements considered per search node.
pub const DEFAULT_WALL_SAMPLE_LIMIT: usize = 10;

/// Seed used by the wall sampler when no explicit seed is configured.
pub const DEFAULT_SEED: u64 = 0x5155_4f52_4944_4f52;

/// Number of players that always exist on the board.
pub const PLAYER_COUNT: usize = 4;

/// Location of a single board cell expressed as `x` (column) and `y` (row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    /// Creates a new board position.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Reports whether the position lies on a board with the given side length.
    #[must_use]
    pub const fn is_within(&self, dimension: u32) -> bool {
        self.x < dimension && self.y < dimension
    }

    /// Computes the Manhattan distance between two positions.
    #[must_use]
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Cell one step away in `direction`, or `None` when it falls off the board.
    #[must_use]
    pub fn step(self, direction: Direction, dimension: u32) -> Option<Self> {
        let (x, y) = match direction {
            Direction::South => (Some(self.x), self.y.checked_add(1)),
            Direction::East => (self.x.checked_add(1), Some(self.y)),
            Direction::North => (Some(self.x), self.y.checked_sub(1)),
            Direction::West => (self.x.checked_sub(1), Some(self.y)),
        };
        let candidate = Self::new(x?, y?);
        candidate.is_within(dimension).then_some(candidate)
    }
}

/// Cardinal directions a pawn may travel in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward increasing `y`.
    South,
    /// Movement toward increasing `x`.
    East,
    /// Movement toward decreasing `y`.
    North,
    /// Movement toward decreasing `x`.
    West,
}

impl Direction {
    /// Order in which move generation visits directions.
    ///
    /// Search tie-breaking depends on this order: `+y`, `+x`, `-y`, `-x`.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::South,
        Direction::East,
        Direction::North,
        Direction::West,
    ];

    /// The two directions perpendicular to `self`.
    ///
    /// The first entry is the vector rotated by `(-dy, dx)`, the second by
    /// `(dy, -dx)`, which fixes the order sidesteps are offered in.
    #[must_use]
    pub const fn perpendiculars(self) -> [Direction; 2] {
        match self {
            Direction::South => [Direction::West, Direction::East],
            Direction::East => [Direction::South, Direction::North],
            Direction::North => [Direction::East, Direction::West],
            Direction::West => [Direction::North, Direction::South],
        }
    }
}

/// Identifier of one of the four seats around the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// Starts on the `y = 0` edge and races to `y = N - 1`.
    One,
    /// Starts on the `y = N - 1` edge and races to `y = 0`.
    Two,
    /// Starts on the `x = 0` edge and races to `x = N - 1`.
    Three,
    /// Starts on the `x = N - 1` edge and races to `x = 0`.
    Four,
}

impl PlayerId {
    /// Every player in turn order.
    pub const ALL: [PlayerId; PLAYER_COUNT] = [
        PlayerId::One,
        PlayerId::Two,
        PlayerId::Three,
        PlayerId::Four,
    ];

    /// Looks up a player by its one-based number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// One-based number of the player.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Zero-based slot used for dense per-player storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// Player that acts after `self` in the fixed `1 -> 2 -> 3 -> 4 -> 1` cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::Three,
            Self::Three => Self::Four,
            Self::Four => Self::One,
        }
    }

    /// Board edge the player must reach to win.
    #[must_use]
    pub const fn goal(self) -> GoalEdge {
        match self {
            Self::One => GoalEdge::MaxRow,
            Self::Two => GoalEdge::MinRow,
            Self::Three => GoalEdge::MaxColumn,
            Self::Four => GoalEdge::MinColumn,
        }
    }

    /// Starting cell at the midpoint of the player's home edge.
    #[must_use]
    pub const fn start(self, dimension: u32) -> Position {
        let last = dimension.saturating_sub(1);
        let middle = dimension / 2;
        match self {
            Self::One => Position::new(middle, 0),
            Self::Two => Position::new(middle, last),
            Self::Three => Position::new(0, middle),
            Self::Four => Position::new(last, middle),
        }
    }
}

/// Fixed goal predicate attached to each player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalEdge {
    /// Satisfied by any cell with `y = N - 1`.
    MaxRow,
    /// Satisfied by any cell with `y = 0`.
    MinRow,
    /// Satisfied by any cell with `x = N - 1`.
    MaxColumn,
    /// Satisfied by any cell with `x = 0`.
    MinColumn,
}

impl GoalEdge {
    /// Reports whether `position` lies on this edge of an `N x N` board.
    #[must_use]
    pub const fn is_reached(self, position: Position, dimension: u32) -> bool {
        let last = dimension.saturating_sub(1);
        match self {
            Self::MaxRow => position.y() == last,
            Self::MinRow => position.y() == 0,
            Self::MaxColumn => position.x() == last,
            Self::MinColumn => position.x() == 0,
        }
    }
}

/// Orientation of a wall segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    /// Blocks movement between vertically adjacent cells.
    Horizontal,
    /// Blocks movement between horizontally adjacent cells.
    Vertical,
}

impl Orientation {
    /// Both orientations in candidate enumeration order.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// One unit-length blocking edge on the grid.
///
/// A horizontal segment anchored at `(x, y)` blocks the edge between `(x, y)`
/// and `(x, y + 1)`. A vertical segment anchored at `(x, y)` blocks the edge
/// between `(x, y)` and `(x + 1, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallSegment {
    orientation: Orientation,
    anchor: Position,
}

impl WallSegment {
    /// Creates a segment with the provided orientation and anchor cell.
    #[must_use]
    pub const fn new(orientation: Orientation, anchor: Position) -> Self {
        Self {
            orientation,
            anchor,
        }
    }

    /// Orientation of the segment.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cell that anchors the segment.
    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }
}

/// Physical wall composed of two adjacent segments of the same orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallPlacement {
    orientation: Orientation,
    anchor: Position,
}

impl WallPlacement {
    /// Creates a wall placement anchored at the provided cell.
    #[must_use]
    pub const fn new(orientation: Orientation, anchor: Position) -> Self {
        Self {
            orientation,
            anchor,
        }
    }

    /// Orientation shared by both segments.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cell anchoring the first segment.
    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }

    /// Reports whether the anchor lies within `[0, N - 2]` on both axes.
    #[must_use]
    pub const fn is_within(&self, dimension: u32) -> bool {
        let limit = dimension.saturating_sub(1);
        self.anchor.x() < limit && self.anchor.y() < limit
    }

    /// The two segments inserted when this wall is committed.
    ///
    /// Horizontal walls extend along `x`, vertical walls along `y`.
    #[must_use]
    pub const fn segments(&self) -> [WallSegment; 2] {
        let x = self.anchor.x();
        let y = self.anchor.y();
        let second = match self.orientation {
            Orientation::Horizontal => Position::new(x.saturating_add(1), y),
            Orientation::Vertical => Position::new(x, y.saturating_add(1)),
        };
        [
            WallSegment::new(self.orientation, self.anchor),
            WallSegment::new(self.orientation, second),
        ]
    }
}

/// Action a player may take on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Moves the player's pawn to the destination cell.
    Move(Position),
    /// Places a wall at the described location.
    PlaceWall(WallPlacement),
}

/// Tuning knobs for an automated player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Number of plies explored below the root.
    pub depth: u32,
    /// Maximum number of wall placements sampled per search node.
    pub wall_sample_limit: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            wall_sample_limit: DEFAULT_WALL_SAMPLE_LIMIT,
        }
    }
}

/// Who decides the actions for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    /// Actions are submitted by a person through an adapter.
    Human,
    /// Actions are chosen by the search agent using the embedded configuration.
    Automated(AgentConfig),
}

impl Controller {
    /// Reports whether a person controls the seat.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }
}

/// Immutable configuration consumed when a game is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: u32,
    /// Walls per player unless exactly two humans play.
    pub wall_budget: u32,
    /// Walls per player when exactly two humans play.
    pub two_human_wall_budget: u32,
    /// Settings applied to every automated player.
    pub agent: AgentConfig,
    /// Seed for the random source used by automated players.
    pub seed: u64,
}

impl GameConfig {
    /// Wall budget granted to every player for the given number of humans.
    #[must_use]
    pub const fn wall_budget_for(&self, human_count: usize) -> u32 {
        if human_count == 2 {
            self.two_human_wall_budget
        } else {
            self.wall_budget
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            wall_budget: DEFAULT_WALL_BUDGET,
            two_human_wall_budget: TWO_HUMAN_WALL_BUDGET,
            agent: AgentConfig::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Shortest unblocked path length from a cell to a player's goal edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalDistance {
    /// The goal is reachable in the given number of orthogonal steps.
    Steps(u32),
    /// Walls separate the cell from every goal cell.
    Unreachable,
}

impl GoalDistance {
    /// Number of steps, if the goal is reachable.
    #[must_use]
    pub const fn steps(self) -> Option<u32> {
        match self {
            Self::Steps(steps) => Some(steps),
            Self::Unreachable => None,
        }
    }

    /// Reports whether a path to the goal exists.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Steps(_))
    }
}

/// Commands that express all permissible game mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Submits an action on behalf of a player.
    TakeTurn {
        /// Player taking the turn.
        player: PlayerId,
        /// Action to perform.
        action: Action,
    },
    /// Forfeits the player's turn without changing the board.
    Pass {
        /// Player passing the turn.
        player: PlayerId,
    },
}

/// Events broadcast by the game after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that a pawn moved between two cells.
    PawnMoved {
        /// Player whose pawn moved.
        player: PlayerId,
        /// Cell occupied before the move.
        from: Position,
        /// Cell occupied after the move.
        to: Position,
    },
    /// Confirms that a wall was committed to the board.
    WallPlaced {
        /// Player that placed the wall.
        player: PlayerId,
        /// Location of the committed wall.
        wall: WallPlacement,
        /// Walls the player still holds after placement.
        walls_remaining: u32,
    },
    /// Confirms that a player passed without acting.
    TurnPassed {
        /// Player that passed.
        player: PlayerId,
    },
    /// Reports that a submitted action was refused; the state is unchanged.
    ActionRejected {
        /// Player that submitted the action.
        player: PlayerId,
        /// Action that was refused.
        action: Action,
        /// Specific reason the action failed.
        reason: RejectionReason,
    },
    /// Reports that a pass was refused; the state is unchanged.
    PassRejected {
        /// Player that attempted to pass.
        player: PlayerId,
        /// Specific reason the pass failed.
        reason: RejectionReason,
    },
    /// Announces that a player reached its goal edge. The game is over.
    PlayerWon {
        /// Winning player.
        player: PlayerId,
    },
    /// Announces the player that acts next.
    TurnAdvanced {
        /// Player that became active.
        player: PlayerId,
    },
}

/// Reasons a submitted action may be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum RejectionReason {
    /// A player already won, so no further actions are accepted.
    #[error("the game is already over")]
    GameOver,
    /// The submitting player is not the active player.
    #[error("it is not this player's turn")]
    NotYourTurn,
    /// The destination is not among the player's legal moves.
    #[error("destination is not a legal move")]
    IllegalMove,
    /// The wall anchor lies outside `[0, N - 2]`.
    #[error("wall anchor lies outside the board")]
    WallOutOfBounds,
    /// The player has no walls left to place.
    #[error("no walls remaining")]
    NoWallsRemaining,
    /// The wall would cut some player off from its goal edge.
    #[error("wall would block a player from reaching its goal")]
    WallBlocksGoal,
}
