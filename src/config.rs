//! Configuration management for the probe binary
//!
//! Turns the probe's command line into a validated set of option declarations
//! and help settings that can be loaded into a `CheckArg`.

use crate::{
    cli::{Args, Command, Declarations},
    core::{CheckArg, OptionSpec, ValueType},
    error::ConfigError,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Help screen settings
    pub program: ProgramConfig,
    /// Declared options, in registration order
    pub options: Vec<OptionDecl>,
    /// Print the parse report as JSON
    pub json: bool,
    /// Long names whose callbacks fail on purpose
    pub fail_on: Vec<String>,
}

/// Help screen settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramConfig {
    /// Program name used in the default usage line
    pub name: String,
    /// Register the built-in `-h`/`--help`
    pub auto_help: bool,
    /// Replacement for `<name> [options]`
    pub usage_line: Option<String>,
    /// Text between usage line and options
    pub description: Option<String>,
    /// Usage fragment for positional arguments
    pub posarg_usage: Option<String>,
    /// Help block for positional arguments
    pub posarg_help: Option<String>,
    /// Text after everything else
    pub appendix: Option<String>,
}

/// One option declaration, `[s,]long[=[VALUE_NAME]][:help]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionDecl {
    pub short: Option<char>,
    pub long: String,
    pub value_type: ValueType,
    pub value_name: Option<String>,
    pub help: String,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            name: "app".to_string(),
            auto_help: false,
            usage_line: None,
            description: None,
            posarg_usage: None,
            posarg_help: None,
            appendix: None,
        }
    }
}

impl ProgramConfig {
    fn from_declarations(decl: &Declarations) -> Self {
        Self {
            name: decl.name.clone(),
            auto_help: decl.auto_help,
            usage_line: decl.usage_line.clone(),
            description: decl.description.clone(),
            posarg_usage: decl.posarg_usage.clone(),
            posarg_help: decl.posarg_help.clone(),
            appendix: decl.appendix.clone(),
        }
    }

    /// Apply the help settings to a parser
    pub fn apply(&self, ca: &mut CheckArg<'_>) {
        if let Some(usage) = &self.usage_line {
            ca.set_usage_line(usage);
        }
        if let Some(description) = &self.description {
            ca.set_description(description);
        }
        if self.posarg_usage.is_some() || self.posarg_help.is_some() {
            ca.set_posarg_help(
                self.posarg_usage.clone().unwrap_or_default(),
                self.posarg_help.clone().unwrap_or_default(),
            );
        }
        if let Some(appendix) = &self.appendix {
            ca.set_appendix(appendix);
        }
    }
}

impl OptionDecl {
    /// Option spec for this declaration, without a callback
    pub fn to_spec<'a>(&self) -> OptionSpec<'a> {
        let mut spec = OptionSpec::new(&self.long)
            .help(&self.help)
            .value_type(self.value_type);
        if let Some(short) = self.short {
            spec = spec.short(short);
        }
        if let Some(name) = &self.value_name {
            spec = spec.value_name(name);
        }
        spec
    }
}

/// Parser for option declarations
pub struct DeclarationParser {
    re_declaration: Regex,
}

impl DeclarationParser {
    /// Create a new declaration parser
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            re_declaration: Regex::new(
                r"^(?:(?P<short>[^,=:]),)?(?P<long>[^,=:\s]+)(?P<value>=(?P<value_name>[^:]*))?(?::(?P<help>.*))?$",
            )
            .map_err(|e| ConfigError::invalid(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Parse a single declaration such as `i,input=FILE:file to read`
    pub fn parse(&self, declaration: &str) -> Result<OptionDecl, ConfigError> {
        let caps = self
            .re_declaration
            .captures(declaration)
            .ok_or_else(|| ConfigError::declaration(declaration))?;

        let long = caps["long"].to_string();
        if long.starts_with('-') {
            return Err(ConfigError::invalid(format!(
                "declare `{long}` without leading dashes"
            )));
        }

        let value_type = if caps.name("value").is_some() {
            ValueType::Required
        } else {
            ValueType::None
        };
        let value_name = caps
            .name("value_name")
            .map(|m| m.as_str())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let decl = OptionDecl {
            short: caps.name("short").and_then(|m| m.as_str().chars().next()),
            long,
            value_type,
            value_name,
            help: caps
                .name("help")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        };
        debug!("Parsed declaration {:?}: {:?}", declaration, decl);
        Ok(decl)
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::default()
        };

        let declarations = match &args.command {
            Command::Parse {
                declarations,
                json,
                fail_on,
                ..
            } => {
                config.json = *json;
                config.fail_on = fail_on.clone();
                declarations
            }
            Command::Render { declarations } => declarations,
        };

        config.program = ProgramConfig::from_declarations(declarations);
        let parser = DeclarationParser::new()?;
        config.options = declarations
            .options
            .iter()
            .map(|d| parser.parse(d))
            .collect::<Result<_, _>>()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.program.name.trim().is_empty() {
            return Err(ConfigError::invalid("program name must not be empty"));
        }

        let mut longs = HashSet::new();
        let mut shorts = HashSet::new();
        for decl in &self.options {
            if !longs.insert(decl.long.as_str()) {
                warn!("--{} declared more than once, the last declaration wins", decl.long);
            }
            if let Some(short) = decl.short {
                if !shorts.insert(short) {
                    warn!("-{} declared more than once, the last declaration wins", short);
                }
            }
        }

        for long in &self.fail_on {
            if !longs.contains(long.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "--fail-on {long} does not name a declared option"
                )));
            }
        }

        Ok(())
    }

    /// Whether the callback of `long` should fail
    pub fn should_fail(&self, long: &str) -> bool {
        self.fail_on.iter().any(|f| f == long)
    }
}
