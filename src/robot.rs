//! Robot state machine.

use crate::tabletop::{Direction, GridBounds, PlaceTarget, Pose, Turn};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Operation refused because no PLACE has succeeded yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move,
    Turn,
    Report,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Move => "move",
            Action::Turn => "turn",
            Action::Report => "report",
        })
    }
}

/// Rejections from the state machine. None of them change the robot's state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RobotError {
    #[error("Robot cannot be placed off the tabletop")]
    PlacementOutOfBounds,

    #[error("Robot cannot move off the tabletop")]
    MoveOutOfBounds,

    #[error("Robot not yet placed. Cannot execute {0} command")]
    NotPlaced(Action),
}

/// Lifecycle of the robot on the table.
///
/// There is no way back to `Unplaced` once a PLACE succeeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// No PLACE has succeeded yet.
    #[default]
    Unplaced,
    /// On the table at this pose.
    Placed(Pose),
}

/// The robot together with the table it stands on.
///
/// A placed pose always lies within `bounds`: [`Robot::place`] and
/// [`Robot::move_forward`] are the only ways to change it.
#[derive(Clone, Debug, Default)]
pub struct Robot {
    bounds: GridBounds,
    placement: Placement,
}

impl Robot {
    /// Creates an unplaced robot on a table with the given bounds.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            placement: Placement::Unplaced,
        }
    }

    /// The table this robot was created on.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Current lifecycle state.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Current pose, if the robot has been placed.
    pub fn pose(&self) -> Option<Pose> {
        match self.placement {
            Placement::Placed(pose) => Some(pose),
            Placement::Unplaced => None,
        }
    }

    fn placed_mut(&mut self, action: Action) -> Result<&mut Pose, RobotError> {
        match &mut self.placement {
            Placement::Placed(pose) => Ok(pose),
            Placement::Unplaced => Err(RobotError::NotPlaced(action)),
        }
    }

    /// Puts the robot at `target`, replacing any previous pose.
    ///
    /// Coordinates too large for any cell are rejected like any other
    /// off-table placement.
    pub fn place(&mut self, target: impl Into<PlaceTarget>) -> Result<Pose, RobotError> {
        let target = target.into();
        let Some(pose) = target
            .to_pose()
            .filter(|pose| self.bounds.contains(pose.position))
        else {
            debug!(%target, "placement rejected");
            return Err(RobotError::PlacementOutOfBounds);
        };
        self.placement = Placement::Placed(pose);
        debug!(%pose, "placed");
        Ok(pose)
    }

    /// Steps one unit forward. Moves that would leave the table are refused,
    /// never clamped. Returns the direction travelled.
    pub fn move_forward(&mut self) -> Result<Direction, RobotError> {
        let bounds = self.bounds;
        let pose = self.placed_mut(Action::Move)?;
        let target = pose.ahead();
        if !bounds.contains(target) {
            debug!(%pose, "move rejected at edge");
            return Err(RobotError::MoveOutOfBounds);
        }
        pose.position = target;
        debug!(%pose, "moved");
        Ok(pose.facing)
    }

    /// Rotates a quarter turn in place. Returns the new facing.
    pub fn turn(&mut self, turn: Turn) -> Result<Direction, RobotError> {
        let pose = self.placed_mut(Action::Turn)?;
        pose.facing = pose.facing.turned(turn);
        debug!(%pose, ?turn, "turned");
        Ok(pose.facing)
    }

    /// Quarter turn anticlockwise.
    pub fn turn_left(&mut self) -> Result<Direction, RobotError> {
        self.turn(Turn::Left)
    }

    /// Quarter turn clockwise.
    pub fn turn_right(&mut self) -> Result<Direction, RobotError> {
        self.turn(Turn::Right)
    }

    /// Canonical `x,y,FACING` text of the current pose.
    pub fn report_pose(&self) -> Result<String, RobotError> {
        self.pose()
            .map(|pose| pose.to_string())
            .ok_or(RobotError::NotPlaced(Action::Report))
    }
}
