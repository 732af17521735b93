//! The `CheckArg` parser: option registry, help settings and parse results

use crate::{
    core::{
        option::{CallbackResult, OptionSpec, ValueType},
        state::ParseState,
    },
    error::Status,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Argument parser holding the registered options and the results of the last parse.
///
/// The lifetime `'a` bounds the callbacks, which may borrow from the caller.
#[derive(Debug)]
pub struct CheckArg<'a> {
    pub(crate) appname: String,
    pub(crate) usage_line: String,
    pub(crate) description: Option<String>,
    pub(crate) appendix: Option<String>,
    pub(crate) posarg_usage: Option<String>,
    pub(crate) posarg_help: Option<String>,
    pub(crate) autohelp: bool,

    pub(crate) options: BTreeMap<String, OptionSpec<'a>>,
    pub(crate) short_to_long: BTreeMap<char, String>,

    pub(crate) state: ParseState,
}

impl<'a> CheckArg<'a> {
    /// Create a parser for the program `appname`
    pub fn new(appname: impl Into<String>) -> Self {
        let appname = appname.into();
        Self {
            usage_line: format!("{appname} [options]"),
            appname,
            description: None,
            appendix: None,
            posarg_usage: None,
            posarg_help: None,
            autohelp: false,
            options: BTreeMap::new(),
            short_to_long: BTreeMap::new(),
            state: ParseState::default(),
        }
    }

    /// Register an option.
    ///
    /// A spec with an already registered long name replaces the old one, and a
    /// short alias that is already taken is remapped to the new option.
    pub fn register(&mut self, spec: OptionSpec<'a>) -> Status {
        debug!(
            long = %spec.long,
            short = ?spec.short,
            value = %spec.value_type,
            "registering option"
        );
        if let Some(short) = spec.short {
            self.short_to_long.insert(short, spec.long.clone());
        }
        self.options.insert(spec.long.clone(), spec);
        Status::AllOk
    }

    /// Register an option with a short alias
    pub fn add(
        &mut self,
        short: char,
        long: &str,
        help: &str,
        value_type: ValueType,
        value_name: Option<&str>,
    ) -> Status {
        self.register(Self::spec(Some(short), long, help, value_type, value_name))
    }

    /// Register an option that only has a long name
    pub fn add_long(
        &mut self,
        long: &str,
        help: &str,
        value_type: ValueType,
        value_name: Option<&str>,
    ) -> Status {
        self.register(Self::spec(None, long, help, value_type, value_name))
    }

    /// Register an option with a short alias and a callback
    pub fn add_cb(
        &mut self,
        short: char,
        long: &str,
        help: &str,
        cb: impl FnMut(&CheckArg<'a>, &str, &str) -> CallbackResult + 'a,
        value_type: ValueType,
        value_name: Option<&str>,
    ) -> Status {
        self.register(Self::spec(Some(short), long, help, value_type, value_name).callback(cb))
    }

    /// Register a long-only option with a callback
    pub fn add_long_cb(
        &mut self,
        long: &str,
        help: &str,
        cb: impl FnMut(&CheckArg<'a>, &str, &str) -> CallbackResult + 'a,
        value_type: ValueType,
        value_name: Option<&str>,
    ) -> Status {
        self.register(Self::spec(None, long, help, value_type, value_name).callback(cb))
    }

    /// Register `-h`/`--help`, which prints the help screen and requests exit code 0
    pub fn add_autohelp(&mut self) -> Status {
        self.autohelp = true;
        self.register(OptionSpec::auto_help())
    }

    fn spec(
        short: Option<char>,
        long: &str,
        help: &str,
        value_type: ValueType,
        value_name: Option<&str>,
    ) -> OptionSpec<'a> {
        let mut spec = OptionSpec::new(long).help(help).value_type(value_type);
        if let Some(short) = short {
            spec = spec.short(short);
        }
        if let Some(name) = value_name {
            spec = spec.value_name(name);
        }
        spec
    }

    /// Text printed after the options list
    pub fn set_appendix(&mut self, appendix: impl Into<String>) {
        self.appendix = Some(appendix.into());
    }

    /// Text printed between the usage line and the options list
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Usage fragment and help block for positional arguments
    pub fn set_posarg_help(&mut self, usage: impl Into<String>, description: impl Into<String>) {
        self.posarg_usage = Some(usage.into());
        self.posarg_help = Some(description.into());
    }

    /// Replace the default `<appname> [options]` usage line
    pub fn set_usage_line(&mut self, usage: impl Into<String>) {
        self.usage_line = usage.into();
    }

    /// Program name given to `new`
    pub fn appname(&self) -> &str {
        &self.appname
    }

    /// `argv[0]` of the last `parse_argv`, empty otherwise
    pub fn callname(&self) -> &str {
        &self.state.callname
    }

    /// Arguments of the last parse, without the program name
    pub fn argv(&self) -> &[String] {
        &self.state.args
    }

    /// Positional arguments of the last parse, in order
    pub fn pos_args(&self) -> &[String] {
        &self.state.positional
    }

    /// Whether the option `long` was seen
    pub fn isset(&self, long: &str) -> bool {
        self.state.values.contains_key(long)
    }

    /// Value of the option `long`, `None` if unseen or a plain flag
    pub fn value(&self, long: &str) -> Option<&str> {
        self.state.values.get(long).and_then(|v| v.as_deref())
    }

    /// All seen options with their values, sorted by long name
    pub fn values(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.state
            .values
            .iter()
            .map(|(long, value)| (long.as_str(), value.as_deref()))
    }

    /// Registered option by long name
    pub fn option(&self, long: &str) -> Option<&OptionSpec<'a>> {
        self.options.get(long)
    }

    /// Long name a short alias resolves to
    pub fn resolve_short(&self, short: char) -> Option<&str> {
        self.short_to_long.get(&short).map(String::as_str)
    }

    /// Whether `add_autohelp` was called
    pub const fn has_autohelp(&self) -> bool {
        self.autohelp
    }

    /// Forget the results of the previous parse
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
