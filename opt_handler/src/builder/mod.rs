//! Chainable builder producing [`OptionSpec`] values.
//!
//! Setters never validate; every check happens in [`OptionBuilder::build`],
//! so a misconfigured option surfaces as a [`BuildError`] at construction
//! time rather than while parsing user input.

use crate::error::BuildError;
use crate::spec::{Arity, OptionSpec, TypeTag};

/// Starts a builder with the given long name.
///
/// This is the usual entry point when declaring options inline:
///
/// ```
/// use opt_handler::{Arity, with_name};
///
/// let spec = with_name("region").require_arg().required().build()?;
/// assert_eq!(spec.arity(), Arity::One);
/// assert_eq!(spec.arg_name(), "REGION");
/// # Ok::<(), opt_handler::BuildError>(())
/// ```
#[must_use]
pub fn with_name(name: impl Into<String>) -> OptionBuilder {
    OptionBuilder::default().with_long_name(name)
}

/// Accumulates the configuration of a single option.
///
/// Each setter consumes and returns the builder so calls can be chained.
/// [`OptionBuilder::build`] borrows the builder, which means the same
/// configuration can be frozen more than once without affecting specs
/// produced earlier.
#[derive(Debug, Clone, Default)]
pub struct OptionBuilder {
    long_name: Option<String>,
    short_name: Option<String>,
    description: Option<String>,
    arg_name: Option<String>,
    required: bool,
    arity: Arity,
    optional_arg: bool,
    value_separator: Option<char>,
    type_tag: Option<TypeTag>,
}

impl OptionBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the long name (`--name`), which also identifies the option.
    #[must_use]
    pub fn with_long_name(mut self, name: impl Into<String>) -> Self {
        self.long_name = Some(name.into());
        self
    }

    /// Sets the short name.
    #[must_use]
    pub fn with_short_name(mut self, name: impl Into<String>) -> Self {
        self.short_name = Some(name.into());
        self
    }

    /// Sets the value placeholder shown in usage output.
    #[must_use]
    pub fn with_arg_name(mut self, name: impl Into<String>) -> Self {
        self.arg_name = Some(name.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Records an advisory value type.
    #[must_use]
    pub const fn with_type(mut self, tag: TypeTag) -> Self {
        self.type_tag = Some(tag);
        self
    }

    /// Splits each supplied value on `separator`.
    #[must_use]
    pub const fn with_value_separator(mut self, separator: char) -> Self {
        self.value_separator = Some(separator);
        self
    }

    /// The option takes exactly one value.
    #[must_use]
    pub const fn require_arg(self) -> Self {
        self.require_arg_if(true)
    }

    /// The option takes exactly one value when `takes_arg` holds, otherwise
    /// none.
    #[must_use]
    pub const fn require_arg_if(mut self, takes_arg: bool) -> Self {
        self.arity = if takes_arg { Arity::One } else { Arity::None };
        self
    }

    /// The option must be supplied.
    #[must_use]
    pub const fn required(self) -> Self {
        self.required_if(true)
    }

    /// Sets whether the option must be supplied.
    #[must_use]
    pub const fn required_if(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// The option accepts any number of values.
    #[must_use]
    pub const fn allow_multiple_args(mut self) -> Self {
        self.arity = Arity::Unlimited;
        self
    }

    /// The option accepts up to `count` values.
    #[must_use]
    pub const fn allow_multiple_args_up_to(mut self, count: usize) -> Self {
        self.arity = Arity::from_count(count);
        self
    }

    /// The option accepts one value that may be omitted.
    #[must_use]
    pub const fn allow_optional_arg(self) -> Self {
        self.allow_optional_args_up_to(1)
    }

    /// The option accepts any number of values, all of which may be omitted.
    #[must_use]
    pub const fn allow_optional_args(mut self) -> Self {
        self.arity = Arity::Unlimited;
        self.optional_arg = true;
        self
    }

    /// The option accepts up to `count` values, all of which may be omitted.
    #[must_use]
    pub const fn allow_optional_args_up_to(mut self, count: usize) -> Self {
        self.arity = Arity::from_count(count);
        self.optional_arg = true;
        self
    }

    /// Validates the accumulated state and freezes it into an [`OptionSpec`].
    ///
    /// The argument name defaults to the upper-cased long name.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingLongName`] if no long name was set and
    /// [`BuildError::InvalidName`] if either name could not be used on a
    /// command line.
    pub fn build(&self) -> Result<OptionSpec, BuildError> {
        let long_name = self
            .long_name
            .as_deref()
            .ok_or(BuildError::MissingLongName)?;
        check_name(long_name)?;
        if let Some(short) = self.short_name.as_deref() {
            check_name(short)?;
        }

        Ok(OptionSpec {
            long_name: long_name.to_owned(),
            short_name: self.short_name.clone(),
            description: self.description.clone(),
            arg_name: self
                .arg_name
                .clone()
                .unwrap_or_else(|| long_name.to_uppercase()),
            required: self.required,
            arity: self.arity,
            optional_arg: self.optional_arg,
            value_separator: self.value_separator,
            type_tag: self.type_tag,
        })
    }
}

impl TryFrom<OptionBuilder> for OptionSpec {
    type Error = BuildError;

    fn try_from(builder: OptionBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

fn check_name(name: &str) -> Result<(), BuildError> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name.starts_with('-') {
        "must not start with '-'"
    } else if name.chars().any(|ch| ch.is_whitespace() || ch == '=') {
        "must not contain whitespace or '='"
    } else {
        return Ok(());
    };
    Err(BuildError::InvalidName {
        name: name.to_owned(),
        reason,
    })
}

#[cfg(test)]
mod tests;
