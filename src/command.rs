//! Text command grammar.
//!
//! One command per line, keyword case-insensitive:
//!
//! ```text
//! PLACE <x>,<y>,<FACING>
//! MOVE | LEFT | RIGHT | REPORT | HELP | EXIT
//! ```

use crate::tabletop::{PlaceTarget, PoseParseError, Turn};
use std::str::FromStr;
use thiserror::Error;

/// A single parsed operator command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the robot on the table, replacing any previous pose.
    Place(PlaceTarget),
    /// Step one unit along the current facing.
    Move,
    /// Quarter turn in place.
    Turn(Turn),
    /// Print the current pose.
    Report,
    /// Show the command reference.
    Help,
    /// Leave the session.
    Exit,
}

/// Reasons a line could not be turned into a [`Command`].
///
/// The display strings are what the operator sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format")]
    InvalidFormat,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("PLACE command requires arguments")]
    MissingArguments,

    #[error("Invalid PLACE arguments given")]
    InvalidArguments(#[source] PoseParseError),
}

impl Command {
    /// Parses one line of operator input.
    ///
    /// The line is upper-cased and split on single spaces into a keyword and at
    /// most one argument token. Arguments after MOVE, LEFT, RIGHT, REPORT, HELP
    /// and EXIT are ignored. Coordinates are not range-checked here.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.to_uppercase();
        let mut tokens = line.split(' ');
        let keyword = tokens.next().unwrap_or_default();
        let argument = tokens.next();
        if keyword.is_empty() || tokens.next().is_some() {
            return Err(ParseError::InvalidFormat);
        }

        match keyword {
            "PLACE" => {
                let argument = argument
                    .filter(|a| !a.is_empty())
                    .ok_or(ParseError::MissingArguments)?;
                argument
                    .parse::<PlaceTarget>()
                    .map(Command::Place)
                    .map_err(ParseError::InvalidArguments)
            }
            "MOVE" => Ok(Command::Move),
            "LEFT" => Ok(Command::Turn(Turn::Left)),
            "RIGHT" => Ok(Command::Turn(Turn::Right)),
            "REPORT" => Ok(Command::Report),
            "HELP" => Ok(Command::Help),
            "EXIT" => Ok(Command::Exit),
            other => Err(ParseError::UnknownCommand(other.to_owned())),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabletop::{Direction, Pose};

    #[test]
    fn keywords() {
        assert_eq!(Command::parse("MOVE"), Ok(Command::Move));
        assert_eq!(Command::parse("LEFT"), Ok(Command::Turn(Turn::Left)));
        assert_eq!(Command::parse("RIGHT"), Ok(Command::Turn(Turn::Right)));
        assert_eq!(Command::parse("REPORT"), Ok(Command::Report));
        assert_eq!(Command::parse("HELP"), Ok(Command::Help));
        assert_eq!(Command::parse("exit"), Ok(Command::Exit));
    }

    #[test]
    fn place_is_case_insensitive() {
        let expected = Command::Place(Pose::new(0, 0, Direction::North).into());
        assert_eq!(Command::parse("pLaCe 0,0,north"), Ok(expected));
        assert_eq!("PLACE 0,0,NORTH".parse::<Command>(), Ok(expected));
    }

    #[test]
    fn place_does_not_check_bounds() {
        assert_eq!(
            Command::parse("PLACE -3,99,SOUTH"),
            Ok(Command::Place(Pose::new(-3, 99, Direction::South).into()))
        );
    }

    #[test]
    fn place_accepts_coordinates_of_any_size() {
        let Ok(Command::Place(target)) = Command::parse("PLACE 99999999999,0,NORTH") else {
            panic!("oversized coordinate should still parse");
        };
        assert_eq!(target.x, 99_999_999_999);
        assert_eq!(target.to_pose(), None);
        assert!(matches!(
            Command::parse("PLACE 0,-99999999999999999999999,WEST"),
            Ok(Command::Place(PlaceTarget { y: i64::MIN, .. }))
        ));
    }

    #[test]
    fn trailing_argument_is_ignored() {
        assert_eq!(Command::parse("MOVE FORWARD"), Ok(Command::Move));
        assert_eq!(Command::parse("REPORT now"), Ok(Command::Report));
        assert_eq!(Command::parse("MOVE "), Ok(Command::Move));
    }

    #[test]
    fn too_many_tokens_is_a_format_error() {
        assert_eq!(
            Command::parse("0,0,NORTH PLACE now"),
            Err(ParseError::InvalidFormat)
        );
        assert_eq!(
            Command::parse("PLACE  0,0,NORTH"),
            Err(ParseError::InvalidFormat)
        );
        assert_eq!(Command::parse(""), Err(ParseError::InvalidFormat));
    }

    #[test]
    fn unknown_keyword_is_named() {
        let err = Command::parse("jump 1").unwrap_err();
        assert_eq!(err, ParseError::UnknownCommand("JUMP".into()));
        assert_eq!(err.to_string(), "Unknown command: JUMP");
        assert_eq!(
            Command::parse("0,0,NORTH PLACE"),
            Err(ParseError::UnknownCommand("0,0,NORTH".into()))
        );
    }

    #[test]
    fn place_argument_failures() {
        assert_eq!(Command::parse("PLACE"), Err(ParseError::MissingArguments));
        assert_eq!(Command::parse("PLACE "), Err(ParseError::MissingArguments));

        for bad in ["PLACE 1,2", "PLACE x,2,NORTH", "PLACE 1,2,UP", "PLACE 1,2,3,NORTH"] {
            let err = Command::parse(bad).unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidArguments(_)),
                "{bad}: {err:?}"
            );
            assert_eq!(err.to_string(), "Invalid PLACE arguments given");
        }
    }
}
