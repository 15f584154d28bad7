//! Error types for the affirmations preview CLI.

use thiserror::Error;

use crate::error::WordBankError;

/// Errors surfaced by the CLI parsing and preview flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The child's name was not supplied or is blank.
    #[error("missing required flag: --name")]
    MissingName,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// Settings could not be loaded from the environment or config files.
    #[error("configuration error: {message}")]
    Config {
        /// Error message describing the failure.
        message: String,
    },
    /// The word bank file could not be loaded.
    #[error("word bank error: {source}")]
    WordBank {
        /// Underlying word bank error.
        #[from]
        #[source]
        source: WordBankError,
    },
}
