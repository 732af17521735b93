//! Error types for the argument parser
//!
//! `Status` is the flat status-code table returned to callers and used as the
//! process exit code. `ParseError` carries the context of the first failure a
//! parse runs into. `ConfigError` covers the probe binary's own configuration.

use serde::{Deserialize, Serialize};
use std::process::ExitCode;
use thiserror::Error;

/// Boxed error returned by option callbacks
pub type CallbackFailure = Box<dyn std::error::Error + Send + Sync>;

/// Status codes of a parse, in their fixed ordinal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Status {
    AllOk = 0,
    /// Reserved, the parser itself never produces it
    GenericError = 1,
    InvalidArgument = 2,
    InvalidValueGiven = 3,
    MissingValue = 4,
    CallbackError = 5,
}

impl Status {
    /// Human readable message for this status
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AllOk => "Everything is fine",
            Self::GenericError => "An error occurred",
            Self::InvalidArgument => "Unknown command line option",
            Self::InvalidValueGiven => "Value given to non-value option",
            Self::MissingValue => "Missing value of option",
            Self::CallbackError => "Callback returned with error code",
        }
    }

    /// Numeric code of this status
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether this status signals success
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::AllOk)
    }

    /// Status of a finished parse
    pub fn of<T>(result: &std::result::Result<T, ParseError>) -> Self {
        result.as_ref().map_or_else(ParseError::status, |_| Self::AllOk)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        Self::from(status.code())
    }
}

/// First error encountered while parsing an argument vector
#[derive(Error, Debug)]
pub enum ParseError {
    /// Unknown long option or unmapped short alias
    #[error("{}: {option}", Status::InvalidArgument.message())]
    InvalidArgument { option: String },

    /// A value was attached to an option that takes none
    #[error("{}: {option}", Status::InvalidValueGiven.message())]
    InvalidValueGiven { option: String },

    /// The argument vector ended while an option still waited for its value
    #[error("{}: {token}", Status::MissingValue.message())]
    MissingValue { token: String },

    /// A registered callback failed
    #[error("{}: --{option}: {source}", Status::CallbackError.message())]
    Callback {
        option: String,
        #[source]
        source: CallbackFailure,
    },
}

impl ParseError {
    /// Create an unknown option error, `option` as it appeared on the command line
    pub fn invalid_argument(option: impl Into<String>) -> Self {
        Self::InvalidArgument {
            option: option.into(),
        }
    }

    /// Create an unexpected value error
    pub fn invalid_value_given(option: impl Into<String>) -> Self {
        Self::InvalidValueGiven {
            option: option.into(),
        }
    }

    /// Create a missing value error citing the last token
    pub fn missing_value(token: impl Into<String>) -> Self {
        Self::MissingValue {
            token: token.into(),
        }
    }

    /// Wrap a failed callback of the option `option`
    pub fn callback(option: impl Into<String>, source: CallbackFailure) -> Self {
        Self::Callback {
            option: option.into(),
            source,
        }
    }

    /// Status code of this error
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::InvalidArgument { .. } => Status::InvalidArgument,
            Self::InvalidValueGiven { .. } => Status::InvalidValueGiven,
            Self::MissingValue { .. } => Status::MissingValue,
            Self::Callback { .. } => Status::CallbackError,
        }
    }
}

/// Errors in the probe configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option declaration did not match `[s,]long[=[NAME]][:help]`
    #[error("Malformed option declaration: {declaration}")]
    Declaration { declaration: String },

    /// Any other invalid setting
    #[error("Configuration error: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    /// Create a malformed declaration error
    pub fn declaration(declaration: impl Into<String>) -> Self {
        Self::Declaration {
            declaration: declaration.into(),
        }
    }

    /// Create a generic configuration error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Result type alias for parse operations
pub type Result<T> = std::result::Result<T, ParseError>;
