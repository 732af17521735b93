//! Token classification and callback dispatch
//!
//! Arguments are consumed left to right. A token is either the value of a
//! previously seen option, a long option (`--name`, `--name=value`), a group
//! of short options (`-abc`) or a positional argument. The first error ends
//! the parse.

use crate::{
    core::{
        CheckArg,
        option::{Action, Flow, ValueType},
    },
    error::{ParseError, Result},
};
use tracing::{debug, instrument, trace};

impl CheckArg<'_> {
    /// Parse `args`, which must not contain the program name.
    ///
    /// Returns `Flow::Exit` when an option (the auto-help) asked the program
    /// to terminate; the caller is expected to exit with that code. Errors are
    /// also reported on stderr as `Error: <message>: <context>!`.
    pub fn parse<I, S>(&mut self, args: I) -> Result<Flow>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_with(String::new(), args)
    }

    /// Parse a full argument vector; `argv[0]` becomes the call name
    pub fn parse_argv<I, S>(&mut self, argv: I) -> Result<Flow>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut argv = argv.into_iter();
        let callname = argv
            .next()
            .map(|a| a.as_ref().to_owned())
            .unwrap_or_default();
        self.parse_with(callname, argv)
    }

    #[instrument(skip(self, args))]
    fn parse_with<I, S>(&mut self, callname: String, args: I) -> Result<Flow>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state.reset();
        self.state.callname = callname;
        self.state.args = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
        debug!(count = self.state.args.len(), "parsing arguments");

        self.run().inspect_err(|err| {
            debug!(status = ?err.status(), "parse failed");
            eprintln!("Error: {err}!");
        })
    }

    /// Parse the arguments of the current process
    pub fn parse_env(&mut self) -> Result<Flow> {
        self.parse_argv(std::env::args())
    }

    /// Parse `args` and terminate the process if an option asked for it
    pub fn parse_or_exit<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.parse(args)? {
            Flow::Continue => Ok(()),
            Flow::Exit(code) => std::process::exit(code),
        }
    }

    fn run(&mut self) -> Result<Flow> {
        let args = self.state.args.clone();
        for arg in &args {
            if let Flow::Exit(code) = self.consume(arg)? {
                debug!(code, "option requested exit");
                return Ok(Flow::Exit(code));
            }
        }

        if let Some(pending) = self.state.pending.take() {
            debug!(option = %pending, "argument vector ended before option value");
            let last = args.last().map(String::as_str).unwrap_or_default();
            return Err(ParseError::missing_value(last));
        }
        Ok(Flow::Continue)
    }

    fn consume(&mut self, arg: &str) -> Result<Flow> {
        if let Some(long) = self.state.pending.take() {
            trace!(option = %long, value = arg, "consumed as option value");
            self.state.store_value(&long, arg);
            return self.dispatch(&long);
        }

        if !self.state.positional_only {
            if arg == "--" {
                trace!("positional separator");
                self.state.positional_only = true;
                return Ok(Flow::Continue);
            }
            if let Some(rest) = arg.strip_prefix("--") {
                return self.long_option(rest);
            }
            if let Some(group) = arg.strip_prefix('-').filter(|g| !g.is_empty()) {
                return self.short_group(group);
            }
        }

        trace!(arg, "positional argument");
        self.state.positional.push(arg.to_owned());
        Ok(Flow::Continue)
    }

    fn long_option(&mut self, rest: &str) -> Result<Flow> {
        let (long, value) = rest.split_once('=').unwrap_or((rest, ""));
        let value_type = self
            .options
            .get(long)
            .map(|spec| spec.value_type)
            .ok_or_else(|| ParseError::invalid_argument(format!("--{long}")))?;

        match value_type {
            ValueType::Required if value.is_empty() => {
                trace!(option = long, "value expected in next argument");
                self.state.pending = Some(long.to_owned());
                Ok(Flow::Continue)
            }
            ValueType::Required => {
                trace!(option = long, value, "long option with attached value");
                self.state.store_value(long, value);
                self.dispatch(long)
            }
            ValueType::None if !value.is_empty() => {
                Err(ParseError::invalid_value_given(format!("--{long}")))
            }
            ValueType::None => {
                trace!(option = long, "long flag");
                self.state.mark_seen(long);
                self.dispatch(long)
            }
        }
    }

    fn short_group(&mut self, group: &str) -> Result<Flow> {
        for (i, c) in group.char_indices() {
            let long = self
                .short_to_long
                .get(&c)
                .filter(|long| self.options.contains_key(*long))
                .cloned()
                .ok_or_else(|| ParseError::invalid_argument(format!("-{c}")))?;

            if self.options[&long].value_type == ValueType::None {
                trace!(short = %c, option = %long, "short flag");
                self.state.mark_seen(&long);
                if let Flow::Exit(code) = self.dispatch(&long)? {
                    return Ok(Flow::Exit(code));
                }
                continue;
            }

            // a value option ends the group: the rest is its value
            let rest = &group[i + c.len_utf8()..];
            if rest.is_empty() {
                trace!(short = %c, option = %long, "value expected in next argument");
                self.state.pending = Some(long);
                return Ok(Flow::Continue);
            }
            trace!(short = %c, option = %long, value = rest, "short option with attached value");
            self.state.store_value(&long, rest);
            return self.dispatch(&long);
        }
        Ok(Flow::Continue)
    }

    /// Run the action of `long` now that its value is known
    fn dispatch(&mut self, long: &str) -> Result<Flow> {
        let Some(spec) = self.options.get_mut(long) else {
            return Ok(Flow::Continue);
        };
        let mut action = std::mem::take(&mut spec.action);
        let value = self.state.callback_value(long);

        let flow = match &mut action {
            Action::Nothing => Ok(Flow::Continue),
            Action::Help => {
                debug!("auto-help requested");
                self.show_help();
                Ok(Flow::Exit(0))
            }
            Action::Callback(cb) => {
                debug!(option = long, value = %value, "invoking callback");
                cb(self, long, &value)
                    .map(|()| Flow::Continue)
                    .map_err(|source| ParseError::callback(long, source))
            }
        };

        if let Some(spec) = self.options.get_mut(long) {
            spec.action = action;
        }
        flow
    }
}
