//! Usage line and help screen rendering

use crate::core::CheckArg;

/// Gap between the widest option label and the help column
const HELP_COLUMN_GAP: usize = 2;

impl CheckArg<'_> {
    /// `Usage: ...` line, including the positional usage fragment if set
    pub fn usage(&self) -> String {
        match &self.posarg_usage {
            Some(posargs) => format!("Usage: {} {posargs}", self.usage_line),
            None => format!("Usage: {}", self.usage_line),
        }
    }

    /// Full help screen
    pub fn autohelp(&self) -> String {
        let width = self
            .options
            .values()
            .map(|spec| spec.label().chars().count())
            .max()
            .unwrap_or(0)
            + HELP_COLUMN_GAP;

        let mut out = format!("{}\n", self.usage());
        if let Some(description) = &self.description {
            out.push_str(&format!("\n{description}\n"));
        }

        out.push_str("\nOptions:\n");
        for (long, spec) in &self.options {
            // only show aliases that still resolve to this option
            let short = spec
                .short
                .filter(|c| self.short_to_long.get(c) == Some(long));
            match short {
                Some(c) => out.push_str(&format!("   -{c},")),
                None => out.push_str("      "),
            }
            out.push_str(&format!(" --{:<width$}{}\n", spec.label(), spec.help));
        }

        if let Some(posarg_help) = &self.posarg_help {
            out.push_str(&format!("\nPositional Arguments:\n{posarg_help}\n"));
        }
        if let Some(appendix) = &self.appendix {
            out.push_str(&format!("\n{appendix}\n"));
        }
        out
    }

    /// Print the help screen to stdout
    pub fn show_help(&self) {
        println!("{}", self.autohelp());
    }

    /// Print the usage line to stdout
    pub fn show_usage(&self) {
        println!("{}", self.usage());
    }
}
