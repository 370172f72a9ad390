//! Immutable option descriptors produced by [`crate::OptionBuilder`].

use std::any::TypeId;
use std::fmt;

use crate::builder::OptionBuilder;

/// How many argument values an option accepts.
///
/// Whether the values may be omitted altogether is tracked separately by
/// [`OptionSpec::has_optional_arg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    /// The option is a flag and takes no value.
    #[default]
    None,
    /// Exactly one value.
    One,
    /// Up to the given number of values (always at least two).
    Fixed(usize),
    /// Any number of values.
    Unlimited,
}

impl Arity {
    /// Maps a requested value count onto an arity.
    ///
    /// Zero collapses to [`Arity::None`] and one to [`Arity::One`].
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::One,
            n => Self::Fixed(n),
        }
    }

    /// Returns `true` when the option accepts at least one value.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the maximum number of values, or `None` when unbounded.
    #[must_use]
    pub const fn max_values(self) -> Option<usize> {
        match self {
            Self::None => Some(0),
            Self::One => Some(1),
            Self::Fixed(n) => Some(n),
            Self::Unlimited => None,
        }
    }
}

/// Advisory marker describing the expected type of an option's value.
///
/// The tag is carried through to the descriptor for callers that want to
/// convert values themselves; parsing never enforces it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Builds a tag for `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use opt_handler::TypeTag;
    ///
    /// let tag = TypeTag::of::<u16>();
    /// assert!(tag.is::<u16>());
    /// assert_eq!(tag.name(), "u16");
    /// ```
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns `true` if the tag was created for `T`.
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// The Rust type name captured when the tag was created.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeTag").field(&self.name).finish()
    }
}

/// A validated, immutable command-line option definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub(crate) long_name: String,
    pub(crate) short_name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) arg_name: String,
    pub(crate) required: bool,
    pub(crate) arity: Arity,
    pub(crate) optional_arg: bool,
    pub(crate) value_separator: Option<char>,
    pub(crate) type_tag: Option<TypeTag>,
}

impl OptionSpec {
    /// Starts a new, empty [`OptionBuilder`].
    #[must_use]
    pub fn builder() -> OptionBuilder {
        OptionBuilder::default()
    }

    /// The long name, used as the option's identity (`--name`).
    #[must_use]
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// The optional short name.
    #[must_use]
    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    /// Help text shown next to the option in usage output.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Placeholder shown for the option's value in usage output.
    #[must_use]
    pub fn arg_name(&self) -> &str {
        &self.arg_name
    }

    /// Whether the option must appear on the command line.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// The number of values the option accepts.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Whether the option may appear without any of its values.
    #[must_use]
    pub const fn has_optional_arg(&self) -> bool {
        self.optional_arg
    }

    /// Character used to split a single supplied value into several.
    #[must_use]
    pub const fn value_separator(&self) -> Option<char> {
        self.value_separator
    }

    /// Advisory value type.
    #[must_use]
    pub const fn type_tag(&self) -> Option<TypeTag> {
        self.type_tag
    }

    /// Whether the option accepts at least one value.
    #[must_use]
    pub const fn takes_value(&self) -> bool {
        self.arity.takes_value()
    }

    /// Whether the option accepts more than one value.
    #[must_use]
    pub const fn has_multiple_args(&self) -> bool {
        matches!(self.arity, Arity::Fixed(_) | Arity::Unlimited)
    }

    /// Returns `true` when `identity` names this option by its long or
    /// short name.
    #[must_use]
    pub fn matches(&self, identity: &str) -> bool {
        self.long_name == identity || self.short_name.as_deref() == Some(identity)
    }

    /// Every name this option answers to.
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.long_name.as_str()).chain(self.short_name.as_deref())
    }
}
