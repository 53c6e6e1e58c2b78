//! Turn driver that alternates between typed commands and the search agent.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use quoridor_core::{AgentConfig, Command, Controller, Event, PlayerId};
use quoridor_game::{self as game, query, Game, GamePhase};
use quoridor_system_search::{Agent, SeededSampler};
use tracing::{debug, info};

use crate::{
    input::{self, HumanCommand},
    render,
};

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SessionEnd {
    /// A player reached its goal edge.
    Won(PlayerId),
    /// The configured number of completed turns elapsed.
    TurnLimit,
    /// Standard input closed while a human was to act.
    InputClosed,
}

/// Drives a [`Game`] to completion over a line-oriented text interface.
pub(crate) struct Session<R, W> {
    game: Game,
    sampler: SeededSampler,
    input: R,
    output: W,
    max_turns: Option<u32>,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a session; automated players share one sampler seeded with `seed`.
    pub(crate) fn new(game: Game, seed: u64, input: R, output: W, max_turns: Option<u32>) -> Self {
        Self {
            game,
            sampler: SeededSampler::new(seed),
            input,
            output,
            max_turns,
        }
    }

    /// Plays turns until someone wins, the turn limit is hit or input ends.
    pub(crate) fn run(&mut self) -> Result<SessionEnd> {
        write!(self.output, "{}", render::board(query::board(&self.game)))?;
        let mut turns = 0_u32;

        loop {
            if let GamePhase::Won(player) = query::phase(&self.game) {
                info!(player = player.number(), turns, "game won");
                return Ok(SessionEnd::Won(player));
            }
            if self.max_turns.is_some_and(|limit| turns >= limit) {
                info!(turns, "turn limit reached");
                return Ok(SessionEnd::TurnLimit);
            }

            let player = query::active_player(&self.game);
            let controller = query::controller(&self.game, player);
            let command = match controller {
                Controller::Human => match self.prompt(player)? {
                    Some(command) => command,
                    None => return Ok(SessionEnd::InputClosed),
                },
                Controller::Automated(config) => self.decide(player, config),
            };

            let mut events = Vec::new();
            game::apply(&mut self.game, command, &mut events);
            for event in &events {
                writeln!(self.output, "{}", render::event(event))?;
            }

            if events.iter().any(ends_turn) {
                turns += 1;
                write!(self.output, "{}", render::board(query::board(&self.game)))?;
            } else if !controller.is_human() {
                bail!(
                    "automated player {} submitted a rejected command",
                    player.number()
                );
            }
        }
    }

    /// Reads lines until one yields a command; `None` once input is exhausted.
    fn prompt(&mut self, player: PlayerId) -> Result<Option<Command>> {
        loop {
            write!(self.output, "player {}> ", player.number())?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read player input")?;
            if read == 0 {
                return Ok(None);
            }

            match input::parse(&line) {
                Ok(HumanCommand::Act(action)) => {
                    return Ok(Some(Command::TakeTurn { player, action }));
                }
                Ok(HumanCommand::Pass) => return Ok(Some(Command::Pass { player })),
                Ok(HumanCommand::ListMoves) => {
                    let moves = query::legal_moves(&self.game, player)
                        .into_iter()
                        .map(render::cell)
                        .collect::<Vec<_>>();
                    writeln!(self.output, "legal moves: {}", moves.join(" "))?;
                }
                Err(error) => writeln!(self.output, "{error}")?,
            }
        }
    }

    fn decide(&mut self, player: PlayerId, config: AgentConfig) -> Command {
        let mut agent = Agent::new(config, &mut self.sampler);
        let outcome = agent.search(query::board(&self.game), player);
        debug!(
            player = player.number(),
            score = outcome.score,
            nodes = outcome.nodes,
            "automated decision"
        );

        match outcome.action {
            Some(action) => Command::TakeTurn { player, action },
            None => Command::Pass { player },
        }
    }
}

fn ends_turn(event: &Event) -> bool {
    matches!(event, Event::TurnAdvanced { .. } | Event::PlayerWon { .. })
}
