//! # checkarg
//!
//! A small command line argument parser. Options are registered up front with
//! a long name, an optional short alias, help text and an optional callback;
//! `parse` then walks the argument vector once, left to right.
//!
//! ## Features
//!
//! - Long options: `--name`, `--name=value`, `--name value`
//! - Grouped short options: `-abc`, with `-ovalue` for value options
//! - Positional arguments, with `--` ending option processing
//! - Callbacks fired as soon as an option's value is known
//! - Auto-generated help screen behind `-h`/`--help`
//!
//! ## Example
//!
//! ```no_run
//! use checkarg::{CheckArg, Flow, ValueType};
//!
//! let mut ca = CheckArg::new("frob");
//! ca.add('i', "input", "file to read from", ValueType::Required, None);
//! ca.add_autohelp();
//!
//! match ca.parse_env()? {
//!     Flow::Exit(code) => std::process::exit(code),
//!     Flow::Continue => {}
//! }
//! println!("input: {:?}, rest: {:?}", ca.value("input"), ca.pos_args());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use crate::core::{Callback, CallbackResult, CheckArg, Flow, OptionSpec, ValueType};
pub use crate::error::{CallbackFailure, ParseError, Status};

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
