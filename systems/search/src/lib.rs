#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Bounded-depth alpha-beta search that picks actions for automated players.
//!
//! The root player maximizes; every other player is folded into a single
//! minimizing role. Leaves are scored by the root's own shortest distance to
//! its goal, so the agent is a greedy racer that only values walls through
//! their effect on that distance. The search works on one scratch copy of the
//! board, applying each action before descending and reverting it afterwards,
//! so sibling branches never observe one another.

mod limits;
mod sampler;

use quoridor_core::{Action, AgentConfig, GoalDistance, PlayerId};
use quoridor_game::{legal_moves, rules, valid_wall_placements, BoardState};
use tracing::{debug, trace};

pub use limits::{CancelFlag, SearchLimits};
pub use sampler::{LeadingSampler, SeededSampler, WallSampler};

/// Score assigned when the root player has no path to its goal.
pub const UNREACHABLE_PENALTY: i32 = 999;

/// Result of a completed search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best action found at the root, or `None` when the root had no action.
    pub action: Option<Action>,
    /// Minimax value of the root.
    pub score: i32,
    /// Number of nodes visited, including the root.
    pub nodes: u64,
}

/// Search agent bound to a configuration and a wall sampling strategy.
#[derive(Clone, Debug)]
pub struct Agent<S> {
    config: AgentConfig,
    sampler: S,
    limits: SearchLimits,
}

impl Agent<SeededSampler> {
    /// Creates an agent that samples walls from a ChaCha stream seeded with `seed`.
    #[must_use]
    pub fn seeded(config: AgentConfig, seed: u64) -> Self {
        Self::new(config, SeededSampler::new(seed))
    }
}

impl<S> Agent<S>
where
    S: WallSampler,
{
    /// Creates an agent with an explicit wall sampler and unbounded limits.
    #[must_use]
    pub fn new(config: AgentConfig, sampler: S) -> Self {
        Self {
            config,
            sampler,
            limits: SearchLimits::unbounded(),
        }
    }

    /// Replaces the limits applied to subsequent searches.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Configuration the agent searches with.
    #[must_use]
    pub fn config(&self) -> AgentConfig {
        self.config
    }

    /// Picks the action `player` should take, or `None` if it has none.
    pub fn best_action(&mut self, board: &BoardState, player: PlayerId) -> Option<Action> {
        self.search(board, player).action
    }

    /// Runs a full search rooted at `player` and reports its statistics.
    pub fn search(&mut self, board: &BoardState, player: PlayerId) -> SearchOutcome {
        let mut search = Search {
            root: player,
            sampler: &mut self.sampler,
            limits: &self.limits,
            wall_sample_limit: self.config.wall_sample_limit,
            nodes: 0,
        };
        let mut scratch = board.clone();
        let (score, action) = search.alpha_beta(
            &mut scratch,
            self.config.depth,
            i32::MIN,
            i32::MAX,
            player,
            true,
        );

        debug!(
            player = player.number(),
            ?action,
            score,
            nodes = search.nodes,
            "search finished"
        );

        SearchOutcome {
            action,
            score,
            nodes: search.nodes,
        }
    }
}

struct Search<'a, S> {
    root: PlayerId,
    sampler: &'a mut S,
    limits: &'a SearchLimits,
    wall_sample_limit: usize,
    nodes: u64,
}

impl<S> Search<'_, S>
where
    S: WallSampler,
{
    fn alpha_beta(
        &mut self,
        board: &mut BoardState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        mover: PlayerId,
        is_root: bool,
    ) -> (i32, Option<Action>) {
        self.nodes += 1;

        if depth == 0 || rules::has_won(board, mover) {
            return (self.evaluate(board), None);
        }

        if !is_root && self.limits.is_exhausted() {
            return (self.evaluate(board), None);
        }

        let actions = self.actions_for(board, mover);
        trace!(
            mover = mover.number(),
            depth,
            branching = actions.len(),
            "expanding node"
        );

        let maximizing = mover == self.root;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_action = None;
        let mut explored = false;

        for action in actions {
            let Ok(record) = rules::apply_reversible(board, mover, action) else {
                continue;
            };
            explored = true;

            let (score, _) = self.alpha_beta(board, depth - 1, alpha, beta, mover.next(), false);
            rules::undo(board, record);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_action = Some(action);
                }
                alpha = alpha.max(score);
            } else {
                best_score = best_score.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        if !explored {
            return (self.evaluate(board), None);
        }

        (best_score, best_action)
    }

    /// Legal moves in direction order followed by the sampled walls.
    fn actions_for(&mut self, board: &BoardState, mover: PlayerId) -> Vec<Action> {
        let mut actions: Vec<Action> = legal_moves(board, mover)
            .into_iter()
            .map(Action::Move)
            .collect();

        if board.walls_remaining(mover) > 0 && self.wall_sample_limit > 0 {
            let candidates = valid_wall_placements(board, mover);
            if !candidates.is_empty() {
                let sampled = self.sampler.sample(candidates, self.wall_sample_limit);
                actions.extend(sampled.into_iter().map(Action::PlaceWall));
            }
        }

        actions
    }

    fn evaluate(&self, board: &BoardState) -> i32 {
        match board.goal_distance(board.position(self.root), self.root) {
            GoalDistance::Steps(steps) => -i32::try_from(steps).unwrap_or(i32::MAX),
            GoalDistance::Unreachable => -UNREACHABLE_PENALTY,
        }
    }
}
