//! Presentation settings for usage and error text.
//!
//! Defaults can be overridden through environment variables prefixed with
//! [`ENV_PREFIX`], for example `OPT_HANDLER_WIDTH=60`.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment variables read by [`UsageLayout::load`].
pub const ENV_PREFIX: &str = "OPT_HANDLER_";

/// Controls how [`crate::OptionHandler::usage`] lays out its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageLayout {
    /// Column at which help text wraps.
    pub width: usize,
    /// Text printed before the caller's command syntax.
    pub usage_prefix: String,
    /// Heading placed above the option list; a colon is appended.
    pub options_heading: String,
}

impl Default for UsageLayout {
    fn default() -> Self {
        Self {
            width: 80,
            usage_prefix: String::from("usage: "),
            options_heading: String::from("Options"),
        }
    }
}

impl UsageLayout {
    /// Loads the layout, layering environment overrides over the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] when an override cannot be deserialized,
    /// such as a non-numeric width.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// The provider stack used by [`UsageLayout::load`]: the built-in defaults,
    /// overridden by any `OPT_HANDLER_*` environment variables.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }
}
