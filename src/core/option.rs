//! Option declarations
//!
//! An `OptionSpec` describes one recognized option: its long name, optional
//! short alias, help text, whether it takes a value and what happens when it
//! is seen.

use crate::{core::CheckArg, error::CallbackFailure};
use serde::{Deserialize, Serialize};

/// Result of an option callback
pub type CallbackResult = Result<(), CallbackFailure>;

/// Callback invoked once an option's value is known.
///
/// Receives the parser (for looking at other options), the long name of the
/// option and its value (empty for options without a value).
pub type Callback<'a> = Box<dyn FnMut(&CheckArg<'a>, &str, &str) -> CallbackResult + 'a>;

/// Whether an option takes a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueType {
    /// Plain flag
    #[default]
    None,
    /// The option needs a value, attached or as the next argument
    Required,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Required => f.write_str("required"),
        }
    }
}

/// How the parser should continue after an option fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going; at the end of `parse` this means the program should run
    Continue,
    /// Stop parsing, the program should exit with this code
    Exit(i32),
}

/// What happens when an option is seen
#[derive(Default)]
pub(crate) enum Action<'a> {
    #[default]
    Nothing,
    /// Print the help screen and request exit code 0
    Help,
    Callback(Callback<'a>),
}

impl std::fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nothing => f.write_str("Nothing"),
            Self::Help => f.write_str("Help"),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Declaration of a single option
#[derive(Debug)]
pub struct OptionSpec<'a> {
    pub(crate) short: Option<char>,
    pub(crate) long: String,
    pub(crate) help: String,
    pub(crate) value_type: ValueType,
    pub(crate) value_name: Option<String>,
    pub(crate) action: Action<'a>,
}

impl<'a> OptionSpec<'a> {
    /// Start a declaration for `--long`
    pub fn new(long: impl Into<String>) -> Self {
        Self {
            short: None,
            long: long.into(),
            help: String::new(),
            value_type: ValueType::None,
            value_name: None,
            action: Action::Nothing,
        }
    }

    /// Short alias, e.g. `'v'` for `-v`
    #[must_use]
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Help text shown in the options list
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Whether the option takes a value
    #[must_use]
    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Shorthand for `value_type(ValueType::Required)`
    #[must_use]
    pub fn takes_value(self) -> Self {
        self.value_type(ValueType::Required)
    }

    /// Placeholder shown in help as `--long=NAME`; empty hides it
    #[must_use]
    pub fn value_name(mut self, name: impl Into<String>) -> Self {
        self.value_name = Some(name.into());
        self
    }

    /// Callback fired when the option's value is known
    #[must_use]
    pub fn callback(
        mut self,
        cb: impl FnMut(&CheckArg<'a>, &str, &str) -> CallbackResult + 'a,
    ) -> Self {
        self.action = Action::Callback(Box::new(cb));
        self
    }

    pub(crate) fn auto_help() -> Self {
        Self {
            action: Action::Help,
            ..Self::new("help")
                .short('h')
                .help("show this help message and exit")
        }
    }

    /// Long name, without the leading dashes
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Short alias, if any
    pub const fn short_alias(&self) -> Option<char> {
        self.short
    }

    /// Help text
    pub fn help_text(&self) -> &str {
        &self.help
    }

    /// Whether this option consumes a value
    pub const fn has_value(&self) -> bool {
        matches!(self.value_type, ValueType::Required)
    }

    /// Whether a callback or built-in action is attached
    pub const fn has_callback(&self) -> bool {
        !matches!(self.action, Action::Nothing)
    }

    /// Value name used in help output.
    ///
    /// Value options default to the upper-cased long name, plain flags have none.
    pub fn display_value_name(&self) -> Option<String> {
        if !self.has_value() {
            return None;
        }
        match &self.value_name {
            Some(name) if name.is_empty() => None,
            Some(name) => Some(name.clone()),
            None => Some(self.long.to_uppercase()),
        }
    }

    /// `long` or `long=NAME` as shown in the options list
    pub(crate) fn label(&self) -> String {
        match self.display_value_name() {
            Some(name) => format!("{}={name}", self.long),
            None => self.long.clone(),
        }
    }
}
