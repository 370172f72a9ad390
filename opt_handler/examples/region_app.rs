//! Example CLI with a required `--region` and an optional `--domain`.
//!
//! Prints the selected region on success. Any parse failure prints either
//! usage alone (for `--help`) or the full error block, then exits with status
//! 2 unless help was requested.

use std::io::{self, Write};
use std::process::ExitCode;

use opt_handler::{OptionHandler, OptionsError, UsageLayout, with_name};

const SYNTAX: &str = "region_app --region REGION [--domain DOMAIN]";

fn build_handler() -> Result<OptionHandler, OptionsError> {
    let mut handler = OptionHandler::with_layout(UsageLayout::load()?);
    handler
        .register_builder(
            with_name("region")
                .require_arg()
                .required()
                .with_description("region to operate in"),
        )?
        .register_builder(
            with_name("domain")
                .require_arg()
                .with_description("optional domain override"),
        )?;
    Ok(handler)
}

/// Exit status for a parse failure other than `--help`.
const USAGE_ERROR: u8 = 2;

fn run<W: Write>(
    handler: &mut OptionHandler,
    args: Vec<String>,
    out: &mut W,
) -> Result<u8, OptionsError> {
    if let Err(err) = handler.parse(args).map(|_| ()) {
        handler.error_or_help(out, SYNTAX, Some(&err.to_string()))?;
        return Ok(if handler.is_help_requested() { 0 } else { USAGE_ERROR });
    }

    let region = handler.option_value("region")?.unwrap_or_default();
    writeln!(out, "region = {region}")?;
    if let Some(domain) = handler.option_value("domain")? {
        writeln!(out, "domain value: {domain}")?;
    }
    Ok(0)
}

fn main() -> ExitCode {
    let outcome = build_handler().and_then(|mut handler| {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        run(&mut handler, std::env::args().skip(1).collect(), &mut lock)
    });
    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            writeln!(io::stderr(), "region_app: {err}").ok();
            ExitCode::FAILURE
        }
    }
}
