#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game state management for Quoridor.
//!
//! [`Game`] owns the board, the controller of every seat, the active player,
//! and the terminal flag. All mutations go through [`apply`]; read access goes
//! through the [`query`] module.

mod board;
mod moves;
mod navigation;
pub mod rules;
mod walls;

use quoridor_core::{
    Command, Controller, Event, GameConfig, PlayerId, Position, RejectionReason, PLAYER_COUNT,
};
use thiserror::Error;
use tracing::debug;

pub use board::{BoardState, PlayerState};
pub use moves::legal_moves;
pub use walls::{check_wall, is_wall_valid, valid_wall_placements};

/// Reasons a game or board could not be created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The board is too small for four distinct starting cells.
    #[error("board size {size} is below the minimum of 3")]
    BoardTooSmall {
        /// Requested side length.
        size: u32,
    },
    /// More humans were requested than there are seats.
    #[error("{count} human players requested but only 4 seats exist")]
    TooManyHumans {
        /// Requested number of humans.
        count: usize,
    },
    /// The same seat was listed twice as human.
    #[error("player {} listed more than once", .0.number())]
    DuplicateHuman(PlayerId),
    /// A pawn was placed outside the board.
    #[error("player {} starts outside the board", .player.number())]
    PositionOutOfBounds {
        /// Player whose position is invalid.
        player: PlayerId,
    },
    /// Two pawns were placed on the same cell.
    #[error("two players share cell ({}, {})", .cell.x(), .cell.y())]
    SharedCell {
        /// Cell claimed twice.
        cell: Position,
    },
    /// The agent was configured to look zero plies ahead and would never act.
    #[error("search depth must be at least 1")]
    ZeroSearchDepth,
}

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Actions are accepted from the active player.
    InProgress,
    /// A player reached its goal; no further actions are accepted.
    Won(PlayerId),
}

/// Represents the authoritative Quoridor game state.
#[derive(Clone, Debug)]
pub struct Game {
    board: BoardState,
    controllers: [Controller; PLAYER_COUNT],
    active: PlayerId,
    phase: GamePhase,
}

impl Game {
    /// Creates a game where `humans` are controlled by people and every other
    /// seat by the search agent.
    ///
    /// All four seats always exist. Every player receives the two-human wall
    /// budget when exactly two humans play and the default budget otherwise.
    pub fn new(config: &GameConfig, humans: &[PlayerId]) -> Result<Self, SetupError> {
        if config.agent.depth == 0 {
            return Err(SetupError::ZeroSearchDepth);
        }
        if humans.len() > PLAYER_COUNT {
            return Err(SetupError::TooManyHumans {
                count: humans.len(),
            });
        }

        for (index, player) in humans.iter().enumerate() {
            if humans[..index].contains(player) {
                return Err(SetupError::DuplicateHuman(*player));
            }
        }

        let board = BoardState::new(config.board_size, config.wall_budget_for(humans.len()))?;
        let controllers = PlayerId::ALL.map(|player| {
            if humans.contains(&player) {
                Controller::Human
            } else {
                Controller::Automated(config.agent)
            }
        });

        Ok(Self {
            board,
            controllers,
            active: PlayerId::One,
            phase: GamePhase::InProgress,
        })
    }

    /// Creates a game whose first `count` seats are human.
    pub fn with_human_count(config: &GameConfig, count: usize) -> Result<Self, SetupError> {
        if count > PLAYER_COUNT {
            return Err(SetupError::TooManyHumans { count });
        }
        Self::new(config, &PlayerId::ALL[..count])
    }

    /// Creates a game from a prepared board.
    ///
    /// The game starts finished if a pawn already stands on its goal edge;
    /// the first such player in seat order is the winner.
    #[must_use]
    pub fn from_board(
        board: BoardState,
        controllers: [Controller; PLAYER_COUNT],
        active: PlayerId,
    ) -> Self {
        let phase = PlayerId::ALL
            .into_iter()
            .find(|&player| rules::has_won(&board, player))
            .map_or(GamePhase::InProgress, GamePhase::Won);

        Self {
            board,
            controllers,
            active,
            phase,
        }
    }

    fn finish_turn(&mut self, player: PlayerId, out_events: &mut Vec<Event>) {
        if rules::has_won(&self.board, player) {
            debug!(player = player.number(), "player reached goal");
            self.phase = GamePhase::Won(player);
            out_events.push(Event::PlayerWon { player });
            return;
        }

        self.active = self.active.next();
        out_events.push(Event::TurnAdvanced {
            player: self.active,
        });
    }

    fn turn_guard(&self, player: PlayerId) -> Result<(), RejectionReason> {
        if self.phase != GamePhase::InProgress {
            return Err(RejectionReason::GameOver);
        }
        if player != self.active {
            return Err(RejectionReason::NotYourTurn);
        }
        Ok(())
    }
}

/// Applies the provided command to the game, mutating state deterministically.
///
/// Rejected commands leave the state untouched and emit a rejection event.
pub fn apply(game: &mut Game, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::TakeTurn { player, action } => {
            let result = game
                .turn_guard(player)
                .and_then(|()| rules::apply_action(&mut game.board, player, action));

            match result {
                Ok(rules::Outcome::Moved { from, to }) => {
                    out_events.push(Event::PawnMoved { player, from, to });
                }
                Ok(rules::Outcome::WallPlaced {
                    wall,
                    walls_remaining,
                }) => {
                    out_events.push(Event::WallPlaced {
                        player,
                        wall,
                        walls_remaining,
                    });
                }
                Err(reason) => {
                    debug!(player = player.number(), ?action, %reason, "action rejected");
                    out_events.push(Event::ActionRejected {
                        player,
                        action,
                        reason,
                    });
                    return;
                }
            }

            game.finish_turn(player, out_events);
        }
        Command::Pass { player } => {
            if let Err(reason) = game.turn_guard(player) {
                debug!(player = player.number(), %reason, "pass rejected");
                out_events.push(Event::PassRejected { player, reason });
                return;
            }

            out_events.push(Event::TurnPassed { player });
            game.finish_turn(player, out_events);
        }
    }
}

/// Query functions that provide read-only access to the game state.
pub mod query {
    use quoridor_core::{Controller, GoalDistance, PlayerId, Position, WallPlacement};

    use super::{Game, GamePhase};
    use crate::{moves, rules, walls, BoardState};

    /// Provides read-only access to the board.
    #[must_use]
    pub fn board(game: &Game) -> &BoardState {
        &game.board
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn active_player(game: &Game) -> PlayerId {
        game.active
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(game: &Game) -> GamePhase {
        game.phase
    }

    /// Reports whether a player has already won.
    #[must_use]
    pub fn is_terminal(game: &Game) -> bool {
        game.phase != GamePhase::InProgress
    }

    /// Controller assigned to the seat.
    #[must_use]
    pub fn controller(game: &Game, player: PlayerId) -> Controller {
        game.controllers[player.index()]
    }

    /// Legal destinations for the player's pawn.
    #[must_use]
    pub fn legal_moves(game: &Game, player: PlayerId) -> Vec<Position> {
        moves::legal_moves(&game.board, player)
    }

    /// Reports whether the active player may place `wall`.
    #[must_use]
    pub fn is_wall_valid(game: &Game, wall: WallPlacement) -> bool {
        walls::is_wall_valid(&game.board, game.active, wall)
    }

    /// Reports whether the player stands on its goal edge.
    #[must_use]
    pub fn check_win(game: &Game, player: PlayerId) -> bool {
        rules::has_won(&game.board, player)
    }

    /// Shortest unblocked distance from `position` to the player's goal edge.
    #[must_use]
    pub fn goal_distance(game: &Game, position: Position, player: PlayerId) -> GoalDistance {
        game.board.goal_distance(position, player)
    }

    /// Walls the player may still place.
    #[must_use]
    pub fn walls_remaining(game: &Game, player: PlayerId) -> u32 {
        game.board.walls_remaining(player)
    }
}
