//! Command-line argument parsing for the probe binary

use clap::{Parser, Subcommand};

/// checkarg probe - run the checkarg parser over an argument vector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "checkarg-probe")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Options and help settings to load into the parser
#[derive(clap::Args, Debug, Clone)]
pub struct Declarations {
    /// Program name used in the usage line
    #[arg(long, default_value = "app")]
    pub name: String,

    /// Option declaration: [s,]long[=[VALUE_NAME]][:help]
    #[arg(short = 'o', long = "option", value_name = "DECL")]
    pub options: Vec<String>,

    /// Register the built-in -h/--help option
    #[arg(long)]
    pub auto_help: bool,

    /// Custom usage line replacing "<name> [options]"
    #[arg(long = "usage", value_name = "LINE")]
    pub usage_line: Option<String>,

    /// Description shown below the usage line
    #[arg(long)]
    pub description: Option<String>,

    /// Usage fragment for positional arguments
    #[arg(long, value_name = "USAGE")]
    pub posarg_usage: Option<String>,

    /// Help block for positional arguments
    #[arg(long, value_name = "TEXT")]
    pub posarg_help: Option<String>,

    /// Text shown after the options list
    #[arg(long, value_name = "TEXT")]
    pub appendix: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse an argument vector against the declared options
    Parse {
        #[command(flatten)]
        declarations: Declarations,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Make the callback of this option fail
        #[arg(long = "fail-on", value_name = "LONG")]
        fail_on: Vec<String>,

        /// Arguments to parse, given after `--`
        #[arg(last = true, value_name = "ARGS")]
        argv: Vec<String>,
    },

    /// Print the help screen generated for the declared options
    Render {
        #[command(flatten)]
        declarations: Declarations,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let args = Args::try_parse_from(["checkarg-probe", "render"]).unwrap();
        assert!(!args.debug);
        match args.command {
            Command::Render { declarations } => {
                assert_eq!(declarations.name, "app");
                assert!(declarations.options.is_empty());
                assert!(!declarations.auto_help);
            }
            Command::Parse { .. } => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = Args::try_parse_from(["checkarg-probe", "render", "--debug"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_parse_with_trailing_argv() {
        let args = Args::try_parse_from([
            "checkarg-probe",
            "parse",
            "-o",
            "a,alpha",
            "--option",
            "i,input=FILE:file to read",
            "--fail-on",
            "alpha",
            "--json",
            "--",
            "-ai",
            "--",
            "x",
        ])
        .unwrap();
        match args.command {
            Command::Parse {
                declarations,
                json,
                fail_on,
                argv,
            } => {
                assert_eq!(declarations.options, ["a,alpha", "i,input=FILE:file to read"]);
                assert!(json);
                assert_eq!(fail_on, ["alpha"]);
                assert_eq!(argv, ["-ai", "--", "x"]);
            }
            Command::Render { .. } => panic!("Expected Parse command"),
        }
    }
}
