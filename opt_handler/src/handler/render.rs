//! Usage and error text rendering.

use std::io::{self, Write};

use super::OptionHandler;
use super::command::usage_command;

/// First line of every error block.
pub const ERROR_HEADER: &str = "Failed to parse command line.";

impl OptionHandler {
    /// Writes the usage block for `syntax` followed by one line per option.
    ///
    /// # Errors
    ///
    /// Propagates any failure writing to or flushing `out`.
    pub fn usage<W: Write + ?Sized>(&self, out: &mut W, syntax: &str) -> io::Result<()> {
        let mut command = usage_command(self.options(), self.layout(), syntax);
        let help = command.render_help().to_string();
        writeln!(out, "{}", help.trim_end())?;
        out.flush()
    }

    /// Writes the error header, the optional `message`, then the usage block.
    ///
    /// # Errors
    ///
    /// Propagates any failure writing to or flushing `out`.
    pub fn error<W: Write + ?Sized>(
        &self,
        out: &mut W,
        syntax: &str,
        message: Option<&str>,
    ) -> io::Result<()> {
        writeln!(out, "{ERROR_HEADER}")?;
        if let Some(text) = message {
            writeln!(out)?;
            writeln!(out, "{text}")?;
        }
        writeln!(out)?;
        self.usage(out, syntax)
    }

    /// Writes usage alone when help was requested, otherwise the full error
    /// block.
    ///
    /// This is the intended single call for a caller's parse-failure path.
    ///
    /// # Errors
    ///
    /// Propagates any failure writing to or flushing `out`.
    pub fn error_or_help<W: Write + ?Sized>(
        &self,
        out: &mut W,
        syntax: &str,
        message: Option<&str>,
    ) -> io::Result<()> {
        if self.is_help_requested() {
            self.usage(out, syntax)
        } else {
            self.error(out, syntax, message)
        }
    }
}
