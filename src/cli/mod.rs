//! Command-line interface module
//!
//! Provides argument parsing, command execution and report rendering for the
//! probe binary.

pub mod args;
pub mod commands;
pub mod report;

pub use args::{Args, Command, Declarations, parse_args};
pub use commands::execute_command;
pub use report::{CallbackEvent, ParseReport};
