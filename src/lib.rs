//! # roborover
//!
//! A toy robot on a bounded tabletop, driven by line-oriented text commands.
//!
//! Input flows through three layers: [`Command::parse`] turns a line into a typed
//! [`Command`], [`dispatch`] routes it to the [`Robot`] state machine or the
//! [`Shell`], and every outcome is reported to an [`OutcomeSink`]. [`Session`]
//! wires these together into a read-eval loop.

pub mod command;
pub mod config;
pub mod interpreter;
pub mod robot;
pub mod session;
pub mod tabletop;

pub use command::*;
pub use config::*;
pub use interpreter::*;
pub use robot::*;
pub use session::*;
pub use tabletop::*;
