//! Help-aware command-line handler.
//!
//! [`OptionHandler`] owns an [`OptionRegistry`] seeded with a reserved
//! `--help` flag, delegates tokenisation to `clap`, and then applies its own
//! required-option check. When `--help` is present the check is skipped and
//! [`ParseError::HelpRequested`] is returned instead, so a caller's failure
//! path can print usage rather than an error.

mod command;
mod parsed;
mod render;

pub use command::NonOptionPolicy;
pub use parsed::ParsedOptions;
pub use render::ERROR_HEADER;

use std::ffi::OsString;

use tracing::debug;

use crate::builder::OptionBuilder;
use crate::error::{BuildError, ParseError, StateError};
use crate::layout::UsageLayout;
use crate::registry::OptionRegistry;
use crate::spec::{Arity, OptionSpec};

/// Long name of the reserved help flag.
pub const HELP_OPTION: &str = "help";

const HELP_DESCRIPTION: &str = "print this help message";

/// Registers options, parses argument lists, and renders usage text.
///
/// # Examples
///
/// ```
/// use opt_handler::{OptionHandler, with_name};
///
/// let mut handler = OptionHandler::new();
/// handler
///     .register_builder(with_name("region").require_arg().required())?
///     .register_builder(with_name("domain").require_arg())?;
///
/// handler.parse(["--region", "eu-west-1"])?;
/// assert_eq!(handler.option_value("region")?, Some("eu-west-1"));
/// assert!(!handler.has_option("domain")?);
/// # Ok::<(), opt_handler::OptionsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OptionHandler {
    registry: OptionRegistry,
    layout: UsageLayout,
    parsed: Option<ParsedOptions>,
    help_requested: bool,
}

impl Default for OptionHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionHandler {
    /// Creates a handler with default layout and the reserved help flag.
    #[must_use]
    pub fn new() -> Self {
        Self::with_layout(UsageLayout::default())
    }

    /// Creates a handler rendering usage with `layout`.
    #[must_use]
    pub fn with_layout(layout: UsageLayout) -> Self {
        let mut registry = OptionRegistry::new();
        registry.insert(help_spec());
        Self {
            registry,
            layout,
            parsed: None,
            help_requested: false,
        }
    }

    /// Adds an option. Names already taken, including `help`, are ignored.
    pub fn register(&mut self, spec: OptionSpec) -> &mut Self {
        self.registry.insert(spec);
        self
    }

    /// Builds `builder` and adds the resulting option.
    ///
    /// # Errors
    ///
    /// Returns the [`BuildError`] raised by [`OptionBuilder::build`].
    pub fn register_builder(&mut self, builder: OptionBuilder) -> Result<&mut Self, BuildError> {
        let spec = builder.build()?;
        Ok(self.register(spec))
    }

    /// The registered options, including `help`.
    #[must_use]
    pub const fn options(&self) -> &OptionRegistry {
        &self.registry
    }

    /// The layout used by the rendering operations.
    #[must_use]
    pub const fn layout(&self) -> &UsageLayout {
        &self.layout
    }

    /// Parses `args`, gathering non-option tokens as plain arguments.
    ///
    /// # Errors
    ///
    /// See [`OptionHandler::parse_with`].
    pub fn parse<I, T>(&mut self, args: I) -> Result<&ParsedOptions, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.parse_with(args, NonOptionPolicy::Collect)
    }

    /// Parses an argument list that may be absent, treating `None` as empty.
    ///
    /// # Errors
    ///
    /// See [`OptionHandler::parse_with`].
    pub fn parse_or_empty<I, T>(&mut self, args: Option<I>) -> Result<&ParsedOptions, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.parse_with(args.into_iter().flatten(), NonOptionPolicy::Collect)
    }

    /// Parses `args` and stores the result for later queries.
    ///
    /// Each call resets the help flag. When `--help` is present the result is
    /// stored, the flag is set, and [`ParseError::HelpRequested`] is returned
    /// without checking required options. Any other failure clears the stored
    /// result.
    ///
    /// # Errors
    ///
    /// - [`ParseError::HelpRequested`] when `--help` was supplied.
    /// - [`ParseError::MissingRequired`] naming every absent required option.
    /// - [`ParseError::Malformed`] when `clap` rejects the argument list.
    pub fn parse_with<I, T>(
        &mut self,
        args: I,
        policy: NonOptionPolicy,
    ) -> Result<&ParsedOptions, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.help_requested = false;
        self.parsed = None;

        let matches = command::parse_command(&self.registry, policy).try_get_matches_from(args)?;
        let parsed = ParsedOptions::from_matches(&self.registry, &matches);

        if parsed.has_option(HELP_OPTION) {
            debug!("help requested; skipping required option check");
            self.help_requested = true;
            self.parsed = Some(parsed);
            return Err(ParseError::HelpRequested);
        }

        let missing: Vec<String> = self
            .registry
            .iter()
            .filter(|spec| spec.is_required() && !parsed.has_option(spec.long_name()))
            .map(|spec| spec.long_name().to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(ParseError::MissingRequired { options: missing });
        }

        debug!(
            supplied = parsed.supplied().count(),
            args = parsed.args().len(),
            "parsed command line"
        );
        Ok(&*self.parsed.insert(parsed))
    }

    /// The stored result of the last parse.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotParsed`] if nothing has been parsed yet or
    /// the last parse failed for a reason other than help.
    pub fn command_line(&self) -> Result<&ParsedOptions, StateError> {
        self.parsed.as_ref().ok_or(StateError::NotParsed)
    }

    /// First value bound to the option named `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotParsed`] before a successful parse.
    pub fn option_value(&self, identity: &str) -> Result<Option<&str>, StateError> {
        Ok(self.command_line()?.option_value(identity))
    }

    /// Every value bound to the option named `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotParsed`] before a successful parse.
    pub fn option_values(&self, identity: &str) -> Result<&[String], StateError> {
        Ok(self.command_line()?.option_values(identity))
    }

    /// Whether the option named `identity` was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotParsed`] before a successful parse.
    pub fn has_option(&self, identity: &str) -> Result<bool, StateError> {
        Ok(self.command_line()?.has_option(identity))
    }

    /// Whether the last parse saw `--help`.
    #[must_use]
    pub const fn is_help_requested(&self) -> bool {
        self.help_requested
    }
}

fn help_spec() -> OptionSpec {
    OptionSpec {
        long_name: HELP_OPTION.to_owned(),
        short_name: None,
        description: Some(HELP_DESCRIPTION.to_owned()),
        arg_name: HELP_OPTION.to_uppercase(),
        required: false,
        arity: Arity::None,
        optional_arg: false,
        value_separator: None,
        type_tag: None,
    }
}

#[cfg(test)]
mod tests;
