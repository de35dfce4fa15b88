//! Line-oriented shell that feeds operator input to the robot.

use crate::interpreter::{OutcomeSink, Shell, dispatch_line};
use crate::robot::Robot;
use crate::tabletop::GridBounds;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Greeting emitted when a session starts.
pub const WELCOME: &str = "Welcome to RoboRover! Type HELP for available commands.";
/// Emitted on EXIT.
pub const FAREWELL: &str = "Exiting RoboRover...";
/// Written before each line when prompting is on.
pub const PROMPT: &str = "Enter a command: ";

/// Command reference shown by HELP.
pub const HELP: &str = "\
Available commands:

PLACE X,Y,DIRECTION - place the robot on the tabletop. X and Y
    must be within the limits of the tabletop, and the direction
    must be one of NORTH, EAST, SOUTH, or WEST.
    e.g. 'PLACE 1,3,NORTH'

MOVE - move the robot one unit in the direction it is facing.

LEFT - turn the robot 90 degrees to the left.

RIGHT - turn the robot 90 degrees to the right.

REPORT - report the current position and direction of the robot.

HELP - show this help message.

EXIT - exit the program.";

/// I/O failures that end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read command: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write prompt: {0}")]
    Prompt(#[source] io::Error),
}

/// Why [`Session::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The operator typed EXIT.
    Exit,
    /// The input stream closed.
    EndOfInput,
}

/// Shell half of a session: owns the exit flag and answers HELP.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console {
    exit: bool,
}

impl Shell for Console {
    fn help(&mut self, sink: &mut dyn OutcomeSink) {
        sink.info(HELP);
    }

    fn request_exit(&mut self, sink: &mut dyn OutcomeSink) {
        sink.info(FAREWELL);
        self.exit = true;
    }

    fn should_exit(&self) -> bool {
        self.exit
    }
}

/// One interactive run: the robot plus the console driving it.
#[derive(Debug, Default)]
pub struct Session {
    robot: Robot,
    console: Console,
    prompt: bool,
}

impl Session {
    /// Fresh session with an unplaced robot on a table of `bounds`.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            robot: Robot::new(bounds),
            console: Console::default(),
            prompt: false,
        }
    }

    /// Write [`PROMPT`] before every line (builder pattern).
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// The robot driven by this session.
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Handles a single line of input.
    pub fn execute(&mut self, line: &str, sink: &mut dyn OutcomeSink) {
        let result = dispatch_line(line, &mut self.robot, &mut self.console, sink);
        debug!(line, ?result, "dispatched");
    }

    /// Whether EXIT has been seen.
    pub fn should_exit(&self) -> bool {
        self.console.should_exit()
    }

    /// Reads and executes lines until EXIT or end of input.
    pub fn run<R, W>(
        &mut self,
        mut input: R,
        mut prompt_out: W,
        sink: &mut dyn OutcomeSink,
    ) -> Result<StopReason, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        sink.info(WELCOME);
        let mut line = String::new();
        while !self.should_exit() {
            if self.prompt {
                prompt_out
                    .write_all(PROMPT.as_bytes())
                    .and_then(|()| prompt_out.flush())
                    .map_err(SessionError::Prompt)?;
            }
            line.clear();
            if input.read_line(&mut line).map_err(SessionError::Read)? == 0 {
                debug!("end of input");
                return Ok(StopReason::EndOfInput);
            }
            self.execute(line.trim_end_matches(['\r', '\n']), sink);
        }
        Ok(StopReason::Exit)
    }
}
