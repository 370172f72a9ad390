//! Error types produced while building options, parsing, and rendering.

mod helpers;
mod types;

pub use types::{BuildError, OptionsError, ParseError, Result, StateError};
