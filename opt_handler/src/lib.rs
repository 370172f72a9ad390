//! Fluent option declarations and a help-aware command-line handler.
//!
//! Options are declared with [`OptionBuilder`] (usually via [`with_name`])
//! and registered on an [`OptionHandler`]. The handler always recognises a
//! reserved `--help` flag; when it is supplied, required-option validation is
//! skipped and [`ParseError::HelpRequested`] is returned so the caller can
//! print usage instead of an error. Tokenisation and help layout are
//! delegated to `clap`.
//!
//! ```
//! use opt_handler::{OptionHandler, with_name};
//!
//! let mut handler = OptionHandler::new();
//! handler.register_builder(with_name("region").require_arg().required())?;
//!
//! let err = handler.parse(["--help"]).unwrap_err();
//! assert!(err.is_help_request());
//!
//! let mut out = Vec::new();
//! handler.error_or_help(&mut out, "app --region REGION", Some(&err.to_string()))?;
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("usage: app --region REGION"));
//! # Ok::<(), opt_handler::OptionsError>(())
//! ```

mod builder;
mod error;
mod handler;
mod layout;
mod registry;
mod spec;

pub use builder::{OptionBuilder, with_name};
pub use error::{BuildError, OptionsError, ParseError, Result, StateError};
pub use handler::{ERROR_HEADER, HELP_OPTION, NonOptionPolicy, OptionHandler, ParsedOptions};
pub use layout::{ENV_PREFIX, UsageLayout};
pub use registry::OptionRegistry;
pub use spec::{Arity, OptionSpec, TypeTag};
