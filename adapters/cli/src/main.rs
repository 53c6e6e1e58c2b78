#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays four-player Quoridor in the terminal.

mod config;
mod input;
mod render;
mod session;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use quoridor_core::GameConfig;
use quoridor_game::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::session::{Session, SessionEnd};

/// Four-player Quoridor against alpha-beta opponents.
#[derive(Debug, Parser)]
#[command(name = "quoridor", version)]
struct Cli {
    /// Number of human players, seated as players 1..=N.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=4))]
    humans: u8,

    /// TOML file providing the game configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the board.
    #[arg(long)]
    board_size: Option<u32>,

    /// Search depth of automated players; at least 1.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    depth: Option<u32>,

    /// Seed for the automated players' wall sampling.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many completed turns.
    #[arg(long)]
    max_turns: Option<u32>,
}

impl Cli {
    /// Loads the configuration file, if any, then applies flag overrides.
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => config::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(depth) = self.depth {
            config.agent.depth = depth;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    info!(?config, humans = cli.humans, "starting game");

    let game = Game::with_human_count(&config, usize::from(cli.humans))
        .context("failed to set up the game")?;

    let end = Session::new(
        game,
        config.seed,
        io::stdin().lock(),
        io::stdout().lock(),
        cli.max_turns,
    )
    .run()?;

    match end {
        SessionEnd::Won(player) => println!("player {} reached its goal", player.number()),
        SessionEnd::TurnLimit => println!("turn limit reached without a winner"),
        SessionEnd::InputClosed => println!("input closed, game abandoned"),
    }

    Ok(())
}
