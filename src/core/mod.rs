//! Core parsing functionality
//!
//! Contains the option registry, the token classification state machine and
//! the help renderer.

mod checkarg;
mod help;
pub mod option;
mod parser;
mod state;

pub use checkarg::CheckArg;
pub use option::{Callback, CallbackResult, Flow, OptionSpec, ValueType};
