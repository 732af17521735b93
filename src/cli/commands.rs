//! Command implementations for the CLI

use crate::{
    cli::{
        Command,
        report::{CallbackEvent, ParseReport},
    },
    config::Config,
    core::{CheckArg, Flow},
};
use anyhow::Context;
use std::{cell::RefCell, process::ExitCode};
use tracing::{debug, info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip_all)]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Parse { argv, .. } => execute_parse_command(config, argv),
        Command::Render { .. } => execute_render_command(config),
    }
}

/// Build a parser from the declared options; every callback records itself in `events`
pub fn build_parser<'a>(config: &Config, events: &'a RefCell<Vec<CallbackEvent>>) -> CheckArg<'a> {
    let mut ca = CheckArg::new(&config.program.name);
    config.program.apply(&mut ca);

    for decl in &config.options {
        let fail = config.should_fail(&decl.long);
        ca.register(decl.to_spec().callback(move |_, long, value| {
            events.borrow_mut().push(CallbackEvent {
                option: long.to_string(),
                value: value.to_string(),
            });
            if fail {
                return Err(format!("callback of --{long} failed as requested").into());
            }
            Ok(())
        }));
    }

    if config.program.auto_help {
        ca.add_autohelp();
    }
    ca
}

/// Execute the parse command
#[instrument(skip(config))]
fn execute_parse_command(config: &Config, argv: &[String]) -> anyhow::Result<ExitCode> {
    info!(
        "Parsing {} argument(s) against {} declared option(s)",
        argv.len(),
        config.options.len()
    );

    let events = RefCell::new(Vec::new());
    let mut ca = build_parser(config, &events);
    let result = ca.parse(argv);

    if let Ok(Flow::Exit(code)) = result {
        debug!("Parser requested exit with code {}", code);
        return Ok(ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX)));
    }

    let report = ParseReport::new(&ca, &result, events.take());
    if config.json {
        let json = report.to_json().context("Failed to serialize parse report")?;
        println!("{json}");
    } else {
        println!("{}", report.to_text());
    }

    info!("Parse finished with status {:?}", report.status);
    Ok(report.status.into())
}

/// Execute the render command
#[instrument(skip(config))]
fn execute_render_command(config: &Config) -> anyhow::Result<ExitCode> {
    let events = RefCell::new(Vec::new());
    let ca = build_parser(config, &events);
    print!("{}", ca.autohelp());
    Ok(ExitCode::SUCCESS)
}
