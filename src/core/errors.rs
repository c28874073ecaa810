// src/core/errors.rs

//! Usage errors.

use thiserror::Error;

/// Every reason an invocation is rejected before its command runs.
///
/// The display text is the user-facing message, without the program-name
/// prefix and the trailing period added by the reporter.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    // Usage errors
    #[error("No command given")]
    NoCommand,
    #[error("Unrecognized command {0}")]
    UnrecognizedCommand(String),
    #[error("Missing namespace option")]
    MissingNamespaceOption,
    #[error("Missing namespace name")]
    MissingNamespaceName,
    #[error("Unrecognized option {0}")]
    UnrecognizedOption(String),
    #[error("Unrecognized namespace entry {0}")]
    UnrecognizedNamespaceEntry(String),
    #[error("Invalid format {0}")]
    InvalidFormat(String),

    // Cardinality errors
    #[error("Missing required option {0}")]
    MissingRequiredOption(String),
    #[error("Option supplied too many times {0}")]
    TooManyOccurrences(String),

    // Arity errors
    #[error("Invalid number of arguments for {0}")]
    InvalidArgumentCount(String),

    // Callback errors
    #[error("Error during options handling")]
    OptionHandling,

    // Privilege errors
    #[error("Must be run as root")]
    RootRequired,
}
