//! Translation of registered options into a `clap` command.
//!
//! `clap` only tokenises. Required options are never marked as required here
//! because the handler checks for `--help` first. Value separators are applied
//! after parsing so a split never exceeds the option's arity.

use clap::{Arg, ArgAction, ColorChoice, Command, builder::ValueRange, value_parser};

use crate::layout::UsageLayout;
use crate::registry::OptionRegistry;
use crate::spec::{Arity, OptionSpec};

/// Id of the hidden positional that gathers non-option arguments.
pub(crate) const TRAILING_ARGS: &str = "\u{0}trailing-args";

const COMMAND_NAME: &str = "command";

/// How tokens that are not options are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonOptionPolicy {
    /// Gather non-option tokens and keep parsing options after them.
    #[default]
    Collect,
    /// Treat the first non-option token and everything after it as plain
    /// arguments.
    Stop,
}

/// Builds the command used to tokenise an argument list.
pub(crate) fn parse_command(registry: &OptionRegistry, policy: NonOptionPolicy) -> Command {
    let trailing = Arg::new(TRAILING_ARGS)
        .action(ArgAction::Append)
        .num_args(1..)
        .value_parser(value_parser!(String))
        .hide(true);
    let trailing = match policy {
        NonOptionPolicy::Collect => trailing,
        NonOptionPolicy::Stop => trailing.trailing_var_arg(true).allow_hyphen_values(true),
    };
    base_command(registry).arg(trailing)
}

/// Builds the command used to render help text for `syntax`.
pub(crate) fn usage_command(
    registry: &OptionRegistry,
    layout: &UsageLayout,
    syntax: &str,
) -> Command {
    Command::new(COMMAND_NAME)
        .override_usage(syntax.to_owned())
        .help_template(format!("{}{{usage}}\n\n{{all-args}}", layout.usage_prefix))
        .term_width(layout.width)
        .next_help_heading(layout.options_heading.clone())
        .args(registry.iter().map(option_arg))
        .color(ColorChoice::Never)
        .disable_help_flag(true)
        .disable_version_flag(true)
}

fn base_command(registry: &OptionRegistry) -> Command {
    Command::new(COMMAND_NAME)
        .no_binary_name(true)
        .color(ColorChoice::Never)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .args(registry.iter().map(option_arg))
}

fn option_arg(spec: &OptionSpec) -> Arg {
    let mut arg = Arg::new(spec.long_name().to_owned()).long(spec.long_name().to_owned());
    if let Some(short) = spec.short_name() {
        arg = short_or_alias(arg, short);
    }
    if let Some(text) = spec.description() {
        arg = arg.help(text.to_owned());
    }
    if !spec.takes_value() {
        return arg.action(ArgAction::SetTrue);
    }
    arg.action(ArgAction::Append)
        .num_args(value_range(spec.arity(), spec.has_optional_arg()))
        .value_name(spec.arg_name().to_owned())
        .value_parser(value_parser!(String))
}

fn short_or_alias(arg: Arg, short: &str) -> Arg {
    let mut chars = short.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => arg.short(ch),
        _ => arg.visible_alias(short.to_owned()),
    }
}

fn value_range(arity: Arity, optional: bool) -> ValueRange {
    let min = usize::from(!optional);
    match arity.max_values() {
        Some(max) => ValueRange::new(min..=max),
        None => ValueRange::new(min..),
    }
}
