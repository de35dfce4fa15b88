//! Dispatcher that binds parsed [`Command`]s to their receivers.
//!
//! Robot commands go to the [`Robot`]; HELP and EXIT go to the surrounding
//! [`Shell`]. Every dispatch reports exactly one outcome to an [`OutcomeSink`],
//! except HELP and EXIT, whose messages are the shell's to emit.

use crate::command::{Command, ParseError};
use crate::robot::Robot;
use tracing::{error, info};

/// Severity of an outcome message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Command carried out.
    Info,
    /// Command refused or not understood.
    Error,
}

/// Destination for user-visible outcome messages.
pub trait OutcomeSink {
    /// Report a successful outcome.
    fn info(&mut self, message: &str);

    /// Report a rejected or unparseable command.
    fn error(&mut self, message: &str);
}

/// The interactive loop around the robot.
pub trait Shell {
    /// Emit the command reference.
    fn help(&mut self, sink: &mut dyn OutcomeSink);

    /// Ask the loop to stop before reading another line.
    fn request_exit(&mut self, sink: &mut dyn OutcomeSink);

    /// Whether EXIT has been requested.
    fn should_exit(&self) -> bool;
}

/// Forwards outcomes to `tracing` at info/error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl OutcomeSink for TracingSink {
    fn info(&mut self, message: &str) {
        info!("{message}");
    }

    fn error(&mut self, message: &str) {
        error!("{message}");
    }
}

/// Records outcomes in memory, in order.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<(Level, String)>,
}

impl Transcript {
    /// Empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every outcome with its level, oldest first.
    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Just the message texts.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, m)| m.as_str()).collect()
    }

    /// Most recent outcome.
    pub fn last(&self) -> Option<&(Level, String)> {
        self.entries.last()
    }
}

impl OutcomeSink for Transcript {
    fn info(&mut self, message: &str) {
        self.entries.push((Level::Info, message.to_owned()));
    }

    fn error(&mut self, message: &str) {
        self.entries.push((Level::Error, message.to_owned()));
    }
}

/// Executes one command against its receiver.
pub fn dispatch(
    command: Command,
    robot: &mut Robot,
    shell: &mut dyn Shell,
    sink: &mut dyn OutcomeSink,
) {
    match command {
        Command::Place(target) => match robot.place(target) {
            Ok(pose) => sink.info(&format!("Placed the robot at {pose}")),
            Err(e) => sink.error(&e.to_string()),
        },
        Command::Move => match robot.move_forward() {
            Ok(facing) => sink.info(&format!("Moving {}...", facing.label())),
            Err(e) => sink.error(&e.to_string()),
        },
        Command::Turn(turn) => match robot.turn(turn) {
            Ok(facing) => sink.info(&format!("Turning to face {facing}")),
            Err(e) => sink.error(&e.to_string()),
        },
        Command::Report => match robot.report_pose() {
            Ok(text) => sink.info(&format!("Robot position is {text}")),
            Err(e) => sink.error(&e.to_string()),
        },
        Command::Help => shell.help(sink),
        Command::Exit => shell.request_exit(sink),
    }
}

/// Parses `line` and dispatches it. Parse failures are reported to `sink`
/// and nothing is executed.
pub fn dispatch_line(
    line: &str,
    robot: &mut Robot,
    shell: &mut dyn Shell,
    sink: &mut dyn OutcomeSink,
) -> Result<Command, ParseError> {
    match Command::parse(line) {
        Ok(command) => {
            dispatch(command, robot, shell, sink);
            Ok(command)
        }
        Err(e) => {
            sink.error(&e.to_string());
            Err(e)
        }
    }
}
