//! Board geometry, wall segments, and pawn placement.

use std::collections::BTreeSet;

use quoridor_core::{
    GoalDistance, Orientation, PlayerId, Position, WallPlacement, WallSegment, MIN_BOARD_SIZE,
    PLAYER_COUNT,
};

use crate::{navigation, SetupError};

/// Position and remaining wall budget of a single player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    id: PlayerId,
    position: Position,
    walls_remaining: u32,
}

impl PlayerState {
    /// Identifier of the player.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Cell currently occupied by the player's pawn.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Walls the player may still place.
    #[must_use]
    pub const fn walls_remaining(&self) -> u32 {
        self.walls_remaining
    }
}

/// Pure board data: dimension, committed wall segments, and the four players.
///
/// Cloning copies both segment sets and the player table, so the cost grows
/// with the number of placed walls. Sibling search branches each own a clone
/// and never alias one another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    dimension: u32,
    horizontal: BTreeSet<Position>,
    vertical: BTreeSet<Position>,
    players: [PlayerState; PLAYER_COUNT],
}

impl BoardState {
    /// Creates a board with every player on its starting cell.
    pub fn new(dimension: u32, wall_budget: u32) -> Result<Self, SetupError> {
        Self::from_positions(
            dimension,
            PlayerId::ALL.map(|player| player.start(dimension)),
            wall_budget,
        )
    }

    /// Creates a board with explicit pawn positions, indexed by player slot.
    ///
    /// Every position must lie on the board and no two players may share a
    /// cell.
    pub fn from_positions(
        dimension: u32,
        positions: [Position; PLAYER_COUNT],
        wall_budget: u32,
    ) -> Result<Self, SetupError> {
        if dimension < MIN_BOARD_SIZE {
            return Err(SetupError::BoardTooSmall { size: dimension });
        }

        for (slot, position) in positions.iter().enumerate() {
            let player = PlayerId::ALL[slot];
            if !position.is_within(dimension) {
                return Err(SetupError::PositionOutOfBounds { player });
            }
            if positions[..slot].contains(position) {
                return Err(SetupError::SharedCell { cell: *position });
            }
        }

        let players = PlayerId::ALL.map(|id| PlayerState {
            id,
            position: positions[id.index()],
            walls_remaining: wall_budget,
        });

        Ok(Self {
            dimension,
            horizontal: BTreeSet::new(),
            vertical: BTreeSet::new(),
            players,
        })
    }

    /// Side length of the square board.
    #[must_use]
    pub const fn dimension(&self) -> u32 {
        self.dimension
    }

    /// State of the requested player.
    #[must_use]
    pub const fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player.index()]
    }

    /// Iterator over all players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter()
    }

    /// Cell occupied by the requested player.
    #[must_use]
    pub const fn position(&self, player: PlayerId) -> Position {
        self.player(player).position
    }

    /// Walls the requested player may still place.
    #[must_use]
    pub const fn walls_remaining(&self, player: PlayerId) -> u32 {
        self.player(player).walls_remaining
    }

    /// Reports whether a direct step from `from` to `to` is impossible.
    ///
    /// Cells that are not orthogonally adjacent are always blocked.
    #[must_use]
    pub fn is_blocked(&self, from: Position, to: Position) -> bool {
        segment_between(from, to).map_or(true, |segment| self.has_segment(segment))
    }

    /// Returns the player standing on `cell`, if any.
    #[must_use]
    pub fn occupant_at(&self, cell: Position) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|player| player.position == cell)
            .map(|player| player.id)
    }

    /// Reports whether the segment has been committed.
    #[must_use]
    pub fn has_segment(&self, segment: WallSegment) -> bool {
        let set = match segment.orientation() {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        };
        set.contains(&segment.anchor())
    }

    /// Iterator over committed segments, horizontal first, in anchor order.
    pub fn segments(&self) -> impl Iterator<Item = WallSegment> + '_ {
        let horizontal = self
            .horizontal
            .iter()
            .map(|anchor| WallSegment::new(Orientation::Horizontal, *anchor));
        let vertical = self
            .vertical
            .iter()
            .map(|anchor| WallSegment::new(Orientation::Vertical, *anchor));
        horizontal.chain(vertical)
    }

    /// Shortest unblocked distance from `from` to the goal edge of `player`.
    #[must_use]
    pub fn goal_distance(&self, from: Position, player: PlayerId) -> GoalDistance {
        navigation::goal_distance(self.dimension, from, player.goal(), |a, b| {
            self.is_blocked(a, b)
        })
    }

    /// Reports whether the player stands on its goal edge.
    #[must_use]
    pub fn has_reached_goal(&self, player: PlayerId) -> bool {
        player
            .goal()
            .is_reached(self.position(player), self.dimension)
    }

    pub(crate) fn move_pawn(&mut self, player: PlayerId, to: Position) {
        self.players[player.index()].position = to;
    }

    /// Inserts both segments of the wall and charges the player one wall.
    pub(crate) fn commit_wall(&mut self, player: PlayerId, wall: WallPlacement) -> u32 {
        for segment in wall.segments() {
            let set = match segment.orientation() {
                Orientation::Horizontal => &mut self.horizontal,
                Orientation::Vertical => &mut self.vertical,
            };
            let _ = set.insert(segment.anchor());
        }

        let state = &mut self.players[player.index()];
        state.walls_remaining = state.walls_remaining.saturating_sub(1);
        state.walls_remaining
    }

    pub(crate) fn remove_segment(&mut self, segment: WallSegment) {
        let set = match segment.orientation() {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        };
        let _ = set.remove(&segment.anchor());
    }

    pub(crate) fn refund_wall(&mut self, player: PlayerId) {
        self.players[player.index()].walls_remaining += 1;
    }
}

/// Segment lying on the edge between two orthogonally adjacent cells.
pub(crate) fn segment_between(from: Position, to: Position) -> Option<WallSegment> {
    if from.manhattan_distance(to) != 1 {
        return None;
    }

    if from.x() == to.x() {
        let anchor = Position::new(from.x(), from.y().min(to.y()));
        Some(WallSegment::new(Orientation::Horizontal, anchor))
    } else {
        let anchor = Position::new(from.x().min(to.x()), from.y());
        Some(WallSegment::new(Orientation::Vertical, anchor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BoardState {
        BoardState::new(13, 10).expect("default board")
    }

    #[test]
    fn new_board_places_players_on_start_cells() {
        let board = board();
        for player in PlayerId::ALL {
            assert_eq!(board.position(player), player.start(13));
            assert_eq!(board.walls_remaining(player), 10);
        }
        assert_eq!(board.segments().count(), 0);
    }

    #[test]
    fn non_adjacent_cells_are_blocked() {
        let board = board();
        let origin = Position::new(4, 4);
        assert!(board.is_blocked(origin, origin));
        assert!(board.is_blocked(origin, Position::new(5, 5)));
        assert!(board.is_blocked(origin, Position::new(4, 6)));
        assert!(!board.is_blocked(origin, Position::new(4, 5)));
        assert!(!board.is_blocked(origin, Position::new(3, 4)));
    }

    #[test]
    fn committed_wall_blocks_both_directions() {
        let mut board = board();
        let remaining = board.commit_wall(
            PlayerId::One,
            WallPlacement::new(Orientation::Horizontal, Position::new(3, 4)),
        );
        assert_eq!(remaining, 9);

        assert!(board.is_blocked(Position::new(3, 4), Position::new(3, 5)));
        assert!(board.is_blocked(Position::new(4, 5), Position::new(4, 4)));
        assert!(!board.is_blocked(Position::new(5, 4), Position::new(5, 5)));
        assert!(!board.is_blocked(Position::new(3, 4), Position::new(4, 4)));
    }

    #[test]
    fn vertical_wall_spans_two_rows() {
        let mut board = board();
        let _ = board.commit_wall(
            PlayerId::Two,
            WallPlacement::new(Orientation::Vertical, Position::new(6, 2)),
        );

        assert!(board.is_blocked(Position::new(6, 2), Position::new(7, 2)));
        assert!(board.is_blocked(Position::new(7, 3), Position::new(6, 3)));
        assert!(!board.is_blocked(Position::new(6, 4), Position::new(7, 4)));
        assert_eq!(board.segments().count(), 2);
    }

    #[test]
    fn occupant_lookup_scans_players() {
        let board = board();
        assert_eq!(board.occupant_at(Position::new(6, 0)), Some(PlayerId::One));
        assert_eq!(
            board.occupant_at(Position::new(12, 6)),
            Some(PlayerId::Four)
        );
        assert_eq!(board.occupant_at(Position::new(6, 6)), None);
    }

    #[test]
    fn setup_rejects_shared_cells_and_small_boards() {
        let cell = Position::new(1, 1);
        let shared = BoardState::from_positions(
            5,
            [cell, Position::new(0, 0), cell, Position::new(4, 4)],
            3,
        );
        assert_eq!(shared, Err(SetupError::SharedCell { cell }));

        assert_eq!(
            BoardState::new(2, 3),
            Err(SetupError::BoardTooSmall { size: 2 })
        );

        let outside = BoardState::from_positions(
            5,
            [
                Position::new(0, 0),
                Position::new(5, 0),
                Position::new(1, 1),
                Position::new(2, 2),
            ],
            3,
        );
        assert_eq!(
            outside,
            Err(SetupError::PositionOutOfBounds {
                player: PlayerId::Two
            })
        );
    }

    #[test]
    fn goal_distance_on_open_board() {
        let board = board();
        assert_eq!(
            board.goal_distance(board.position(PlayerId::One), PlayerId::One),
            GoalDistance::Steps(12)
        );
        assert_eq!(
            board.goal_distance(Position::new(6, 6), PlayerId::Four),
            GoalDistance::Steps(6)
        );
    }
}
