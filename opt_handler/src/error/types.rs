//! Error enums for each stage of option handling.

use thiserror::Error;

use super::helpers::first_line;

/// Failures raised by [`crate::OptionBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// No long name was configured.
    #[error("option name not provided (call with_long_name first)")]
    MissingLongName,

    /// A long or short name cannot be used on a command line.
    #[error("invalid option name '{name}': {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },
}

/// Failures raised by [`crate::OptionHandler::parse`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// `--help` was supplied, so required options were not checked.
    #[error("--help was provided")]
    HelpRequested,

    /// One or more required options were absent.
    #[error("Missing required option{}: {}", plural(.options), .options.join(", "))]
    MissingRequired {
        /// Long names of every absent required option, in registration order.
        options: Vec<String>,
    },

    /// The argument list could not be tokenised.
    #[error("{}", first_line(.0))]
    Malformed(#[source] Box<clap::Error>),
}

impl ParseError {
    /// Returns `true` when parsing stopped because help was requested.
    #[must_use]
    pub const fn is_help_request(&self) -> bool {
        matches!(self, Self::HelpRequested)
    }

    /// Returns `true` for missing required options, including the help
    /// short-circuit which skips that check entirely.
    #[must_use]
    pub const fn is_missing_option(&self) -> bool {
        matches!(self, Self::HelpRequested | Self::MissingRequired { .. })
    }
}

impl From<clap::Error> for ParseError {
    fn from(err: clap::Error) -> Self {
        Self::Malformed(Box::new(err))
    }
}

/// Queries issued against a handler in the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StateError {
    /// No successful parse has been stored yet.
    #[error("parse command line first")]
    NotParsed,
}

/// Umbrella error for callers that drive the whole flow with `?`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OptionsError {
    /// An option could not be built.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The command line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A query was issued before parsing.
    #[error(transparent)]
    State(#[from] StateError),

    /// The usage layout could not be loaded.
    #[error("failed to load usage layout: {0}")]
    Layout(#[from] Box<figment::Error>),

    /// Writing usage or error text failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for OptionsError {
    fn from(err: figment::Error) -> Self {
        Self::Layout(Box::new(err))
    }
}

/// Result alias defaulting to [`OptionsError`].
pub type Result<T, E = OptionsError> = std::result::Result<T, E>;

fn plural(items: &[String]) -> &'static str {
    if items.len() == 1 { "" } else { "s" }
}
