//! Mutable state of a single parse run

use std::collections::BTreeMap;

/// Everything a parse accumulates, reset at the start of each run
#[derive(Debug, Default, Clone)]
pub(crate) struct ParseState {
    /// Seen options by long name; `None` marks an option seen without a value
    pub(crate) values: BTreeMap<String, Option<String>>,
    /// Positional arguments in encounter order
    pub(crate) positional: Vec<String>,
    /// Long name of an option whose value is the next token
    pub(crate) pending: Option<String>,
    /// Arguments of the current run, without the program name
    pub(crate) args: Vec<String>,
    /// `argv[0]` when parsing a full argument vector
    pub(crate) callname: String,
    /// Set once a bare `--` was seen
    pub(crate) positional_only: bool,
}

impl ParseState {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn mark_seen(&mut self, long: &str) {
        self.values.insert(long.to_owned(), None);
    }

    pub(crate) fn store_value(&mut self, long: &str, value: &str) {
        self.values.insert(long.to_owned(), Some(value.to_owned()));
    }

    /// Value handed to callbacks: the stored value, or empty for flags
    pub(crate) fn callback_value(&self, long: &str) -> String {
        self.values
            .get(long)
            .and_then(Clone::clone)
            .unwrap_or_default()
    }
}
