//! Text commands for the terminal player.

use std::{num::ParseIntError, str::FromStr};

use miniword_core::Position;
use miniword_game::NavigationKey;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CommandError {
    #[display("empty command")]
    Empty,
    #[display("unknown command `{name}`; type `help` for a list")]
    UnknownCommand { name: String },
    #[display("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[display("invalid number: {_0}")]
    #[from]
    InvalidNumber(ParseIntError),
    #[display("({row}, {col}) is outside the grid")]
    OutOfGrid { row: usize, col: usize },
    #[display("unknown key `{key}`")]
    UnknownKey { key: String },
}

/// Parses a key name as sent by a browser `KeyboardEvent.key` or typed by hand.
///
/// # Errors
///
/// Returns [`CommandError::UnknownKey`] for anything but the four arrows and
/// Backspace.
pub fn parse_key(key: &str) -> Result<NavigationKey, CommandError> {
    let name = key.strip_prefix("Arrow").unwrap_or(key);
    match name.to_ascii_lowercase().as_str() {
        "left" => Ok(NavigationKey::Left),
        "right" => Ok(NavigationKey::Right),
        "up" => Ok(NavigationKey::Up),
        "down" => Ok(NavigationKey::Down),
        "backspace" | "bs" => Ok(NavigationKey::Backspace),
        _ => Err(CommandError::UnknownKey {
            key: key.to_owned(),
        }),
    }
}

/// Converts a zero-based row and column into a grid position.
///
/// # Errors
///
/// Returns [`CommandError::OutOfGrid`] if either coordinate is 5 or more.
pub fn parse_position(row: usize, col: usize) -> Result<Position, CommandError> {
    Position::try_new(row, col).ok_or(CommandError::OutOfGrid { row, col })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(Position),
    Type(Position, String),
    Key(Position, NavigationKey),
    Hint,
    Verify,
    Load(usize),
    Next,
    Show,
    Help,
    Quit,
}

impl Command {
    pub const HELP: &str = "\
commands:
  click <row> <col>          focus a cell (click twice to switch orientation)
  type <row> <col> [letter]  enter a letter; omit it to clear the cell
  key <row> <col> <key>      left, right, up, down or backspace
  hint                       reveal the hint of the active clue
  verify                     mark every cell right or wrong
  load <index>               start puzzle <index>
  next                       start the next puzzle
  show                       redraw the grid
  help                       show this message
  quit                       leave";
}

fn position_args<'a, I>(command: &'static str, args: &mut I) -> Result<Position, CommandError>
where
    I: Iterator<Item = &'a str>,
{
    let missing = CommandError::MissingArgument {
        command,
        expected: "<row> <col>",
    };
    let row: usize = args.next().ok_or_else(|| missing.clone())?.parse()?;
    let col: usize = args.next().ok_or(missing)?.parse()?;
    parse_position(row, col)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut args = line.split_whitespace();
        let name = args.next().ok_or(CommandError::Empty)?;
        let command = match name.to_ascii_lowercase().as_str() {
            "click" | "c" => Self::Click(position_args("click", &mut args)?),
            "type" | "t" => {
                let pos = position_args("type", &mut args)?;
                Self::Type(pos, args.next().unwrap_or_default().to_owned())
            }
            "key" | "k" => {
                let pos = position_args("key", &mut args)?;
                let key = args.next().ok_or(CommandError::MissingArgument {
                    command: "key",
                    expected: "<row> <col> <key>",
                })?;
                Self::Key(pos, parse_key(key)?)
            }
            "hint" | "h" => Self::Hint,
            "verify" | "v" => Self::Verify,
            "load" | "l" => {
                let index = args.next().ok_or(CommandError::MissingArgument {
                    command: "load",
                    expected: "<index>",
                })?;
                Self::Load(index.parse::<usize>()?)
            }
            "next" | "n" => Self::Next,
            "show" | "s" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => {
                return Err(CommandError::UnknownCommand {
                    name: name.to_owned(),
                });
            }
        };
        Ok(command)
    }
}
