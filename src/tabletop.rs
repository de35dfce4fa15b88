//! Tabletop geometry: grid bounds, facings and the robot pose.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;
use thiserror::Error;

/// Largest edge length (in cells) a tabletop may have.
///
/// Keeps `max + 1` representable in `i32` so a step off the edge never overflows.
pub const MAX_EDGE: u32 = i32::MAX as u32;

/// Errors raised when building a [`GridBounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    #[error("tabletop must be at least one unit wide and high (got {width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("tabletop edge of {0} units exceeds the supported maximum")]
    TooLarge(u32),
}

/// Immutable rectangular bounds of the tabletop.
///
/// Both axes use an inclusive range starting at zero, so a 5×5 table accepts
/// coordinates `0..=4` on each axis. Only [`GridBounds::with_size`] and
/// [`Default`] construct it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    min: IVec2,
    max: IVec2,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            min: IVec2::ZERO,
            max: IVec2::new(4, 4),
        }
    }
}

impl GridBounds {
    /// Builds bounds for a table `width` cells across and `height` cells deep.
    pub fn with_size(width: u32, height: u32) -> Result<Self, BoundsError> {
        if width == 0 || height == 0 {
            return Err(BoundsError::Empty { width, height });
        }
        if let Some(edge) = [width, height].into_iter().find(|&e| e > MAX_EDGE) {
            return Err(BoundsError::TooLarge(edge));
        }
        Ok(Self {
            min: IVec2::ZERO,
            max: IVec2::new(width as i32 - 1, height as i32 - 1),
        })
    }

    /// Lowest valid cell (always the origin).
    pub fn min(&self) -> IVec2 {
        self.min
    }

    /// Highest valid cell, inclusive.
    pub fn max(&self) -> IVec2 {
        self.max
    }

    /// Returns `true` when `cell` lies on the table.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(self.min).all() && cell.cmple(self.max).all()
    }
}

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// One of the four facings, declared in clockwise ring order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The rotation ring. Turning right walks forwards, turning left walks backwards.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Returns the facing after a quarter turn.
    pub fn turned(self, turn: Turn) -> Self {
        let offset = match turn {
            Turn::Left => Self::ALL.len() - 1,
            Turn::Right => 1,
        };
        Self::ALL[(self.index() + offset) % Self::ALL.len()]
    }

    /// Unit step taken when moving forward with this facing.
    pub fn step(self) -> IVec2 {
        match self {
            Direction::North => IVec2::Y,
            Direction::East => IVec2::X,
            Direction::South => IVec2::NEG_Y,
            Direction::West => IVec2::NEG_X,
        }
    }

    /// Upper-case name, as used in commands and reports.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }

    /// Title-case name for prose messages.
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = PoseParseError;

    /// Matches the upper-case name exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| PoseParseError::UnknownFacing(s.to_owned()))
    }
}

/// Errors decoding the `x,y,FACING` text form of a [`Pose`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoseParseError {
    #[error("expected 3 comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("invalid coordinate {value:?}: {source}")]
    Coordinate {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown facing {0:?}")]
    UnknownFacing(String),
}

/// Position and facing of a placed robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Cell the robot occupies.
    pub position: IVec2,

    /// Direction the robot is facing.
    pub facing: Direction,
}

impl Pose {
    /// Pose at `(x, y)` facing `facing`.
    pub fn new(x: i32, y: i32, facing: Direction) -> Self {
        Self {
            position: IVec2::new(x, y),
            facing,
        }
    }

    /// Column, counted east from zero.
    pub fn x(&self) -> i32 {
        self.position.x
    }

    /// Row, counted north from zero.
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Cell one unit ahead along the current facing.
    pub fn ahead(&self) -> IVec2 {
        self.position + self.facing.step()
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x(), self.y(), self.facing)
    }
}

/// Splits `x,y,FACING` into its three typed fields, reading coordinates with `parse`.
fn decode_fields<T, F>(s: &str, parse: F) -> Result<(T, T, Direction), PoseParseError>
where
    F: Fn(&str) -> Result<T, ParseIntError>,
{
    let fields: Vec<&str> = s.split(',').collect();
    let [x, y, facing] = fields[..] else {
        return Err(PoseParseError::FieldCount(fields.len()));
    };
    let coord = |value: &str| {
        parse(value).map_err(|source| PoseParseError::Coordinate {
            value: value.to_owned(),
            source,
        })
    };
    Ok((coord(x)?, coord(y)?, facing.parse()?))
}

impl FromStr for Pose {
    type Err = PoseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y, facing) = decode_fields(s, str::parse::<i32>)?;
        Ok(Pose::new(x, y, facing))
    }
}

/// Reads an integer of any magnitude, clamping to the `i64` range.
fn parse_saturating(value: &str) -> Result<i64, ParseIntError> {
    value.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(e),
    })
}

/// Requested position and facing for a PLACE.
///
/// Coordinates are wider than a [`Pose`] and saturate when parsed, so any
/// integer an operator types reaches the bounds check instead of failing to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceTarget {
    /// Requested column.
    pub x: i64,

    /// Requested row.
    pub y: i64,

    /// Requested facing.
    pub facing: Direction,
}

impl PlaceTarget {
    /// The pose this target names, or `None` if a coordinate does not fit any cell.
    pub fn to_pose(self) -> Option<Pose> {
        let x = i32::try_from(self.x).ok()?;
        let y = i32::try_from(self.y).ok()?;
        Some(Pose::new(x, y, self.facing))
    }
}

impl From<Pose> for PlaceTarget {
    fn from(pose: Pose) -> Self {
        Self {
            x: pose.x().into(),
            y: pose.y().into(),
            facing: pose.facing,
        }
    }
}

impl fmt::Display for PlaceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.facing)
    }
}

impl FromStr for PlaceTarget {
    type Err = PoseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y, facing) = decode_fields(s, parse_saturating)?;
        Ok(Self { x, y, facing })
    }
}
