//! Formatting helpers for externally sourced diagnostics.

/// Reduces a rendered `clap` error to its leading diagnostic line.
///
/// `clap` appends a usage tail and a `--help` hint to every error; callers
/// of this crate print their own usage block, so only the headline is kept.
pub(crate) fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_owned()
}
