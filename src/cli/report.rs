//! Parse report printed by the probe

use crate::{
    core::{CheckArg, Flow},
    error::{ParseError, Status},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A callback invocation observed during the parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackEvent {
    pub option: String,
    pub value: String,
}

/// Outcome of one parse run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    pub status: Status,
    pub code: u8,
    /// Error message, if the parse failed
    pub error: Option<String>,
    /// Seen options; `null` for options without a value
    pub options: BTreeMap<String, Option<String>>,
    pub positional: Vec<String>,
    pub callbacks: Vec<CallbackEvent>,
}

impl ParseReport {
    /// Build a report from a parser after `parse` returned `result`.
    ///
    /// A parse that asked to exit is not reported; the probe exits first.
    pub fn new(
        ca: &CheckArg<'_>,
        result: &Result<Flow, ParseError>,
        callbacks: Vec<CallbackEvent>,
    ) -> Self {
        let status = Status::of(result);
        Self {
            status,
            code: status.code(),
            error: result.as_ref().err().map(ToString::to_string),
            options: ca
                .values()
                .map(|(long, value)| (long.to_string(), value.map(str::to_string)))
                .collect(),
            positional: ca.pos_args().to_vec(),
            callbacks,
        }
    }

    /// Human readable rendering
    pub fn to_text(&self) -> String {
        let mut lines = vec![format!("status: {:?} ({})", self.status, self.code)];
        if let Some(error) = &self.error {
            lines.push(format!("error: {error}"));
        }
        for (long, value) in &self.options {
            match value {
                Some(value) => lines.push(format!("option: --{long} = {value:?}")),
                None => lines.push(format!("option: --{long}")),
            }
        }
        for arg in &self.positional {
            lines.push(format!("positional: {arg:?}"));
        }
        for event in &self.callbacks {
            lines.push(format!("callback: --{} = {:?}", event.option, event.value));
        }
        lines.join("\n")
    }

    /// JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
