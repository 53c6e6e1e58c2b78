//! Parsing of the line-oriented commands typed by human players.

use quoridor_core::{Action, Orientation, Position, WallPlacement};
use thiserror::Error;

/// A request typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HumanCommand {
    /// Submit an action for the active player.
    Act(Action),
    /// Give up the current turn.
    Pass,
    /// Print the legal destinations without acting.
    ListMoves,
}

/// Reasons a typed line could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub(crate) enum InputError {
    /// Nothing but whitespace was entered.
    #[error("enter `move X Y`, `wall h|v X Y`, `pass` or `moves`")]
    Empty,
    /// The first word is not a known command.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    /// A required argument is absent.
    #[error("missing {0}")]
    MissingArgument(&'static str),
    /// A coordinate is not a non-negative integer.
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoordinate(String),
    /// The wall orientation is neither `h` nor `v`.
    #[error("`{0}` is not an orientation, use `h` or `v`")]
    InvalidOrientation(String),
    /// Extra words follow a complete command.
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

/// Parses one line of player input.
pub(crate) fn parse(line: &str) -> Result<HumanCommand, InputError> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or(InputError::Empty)?;

    let command = match verb.to_ascii_lowercase().as_str() {
        "move" | "m" => HumanCommand::Act(Action::Move(position(&mut words)?)),
        "wall" | "w" => {
            let orientation = orientation(words.next())?;
            let anchor = position(&mut words)?;
            HumanCommand::Act(Action::PlaceWall(WallPlacement::new(orientation, anchor)))
        }
        "pass" => HumanCommand::Pass,
        "moves" => HumanCommand::ListMoves,
        _ => return Err(InputError::UnknownCommand(verb.to_owned())),
    };

    match words.next() {
        Some(extra) => Err(InputError::TrailingInput(extra.to_owned())),
        None => Ok(command),
    }
}

fn position<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Position, InputError> {
    let x = coordinate(words.next(), "x coordinate")?;
    let y = coordinate(words.next(), "y coordinate")?;
    Ok(Position::new(x, y))
}

fn coordinate(word: Option<&str>, name: &'static str) -> Result<u32, InputError> {
    let word = word.ok_or(InputError::MissingArgument(name))?;
    word.parse()
        .map_err(|_| InputError::InvalidCoordinate(word.to_owned()))
}

fn orientation(word: Option<&str>) -> Result<Orientation, InputError> {
    let word = word.ok_or(InputError::MissingArgument("orientation"))?;
    match word.to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        "v" | "vertical" => Ok(Orientation::Vertical),
        _ => Err(InputError::InvalidOrientation(word.to_owned())),
    }
}
