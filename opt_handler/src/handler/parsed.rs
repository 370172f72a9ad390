//! Values extracted from one successful parse.

use clap::{ArgMatches, parser::ValueSource};

use super::command::TRAILING_ARGS;
use crate::registry::OptionRegistry;
use crate::spec::OptionSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
struct BoundOption {
    long_name: String,
    short_name: Option<String>,
    values: Vec<String>,
}

/// Options and values seen on the command line.
///
/// Only options actually supplied are recorded; defaults never count as
/// presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    bound: Vec<BoundOption>,
    args: Vec<String>,
}

impl ParsedOptions {
    pub(crate) fn from_matches(registry: &OptionRegistry, matches: &ArgMatches) -> Self {
        let bound = registry
            .iter()
            .filter(|spec| {
                matches.value_source(spec.long_name()) == Some(ValueSource::CommandLine)
            })
            .map(|spec| BoundOption {
                long_name: spec.long_name().to_owned(),
                short_name: spec.short_name().map(str::to_owned),
                values: collect_values(spec, matches),
            })
            .collect();
        let args = matches
            .get_many::<String>(TRAILING_ARGS)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        Self { bound, args }
    }

    fn find(&self, identity: &str) -> Option<&BoundOption> {
        self.bound.iter().find(|option| {
            option.long_name == identity || option.short_name.as_deref() == Some(identity)
        })
    }

    /// Whether the option named by `identity` was supplied.
    #[must_use]
    pub fn has_option(&self, identity: &str) -> bool {
        self.find(identity).is_some()
    }

    /// First value bound to the option, if any.
    #[must_use]
    pub fn option_value(&self, identity: &str) -> Option<&str> {
        self.option_values(identity).first().map(String::as_str)
    }

    /// Every value bound to the option, in command-line order.
    #[must_use]
    pub fn option_values(&self, identity: &str) -> &[String] {
        self.find(identity)
            .map_or(&[], |option| option.values.as_slice())
    }

    /// Arguments that were not consumed by any option.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Long names of the supplied options, in registration order.
    pub fn supplied(&self) -> impl Iterator<Item = &str> {
        self.bound.iter().map(|option| option.long_name.as_str())
    }
}

fn collect_values(spec: &OptionSpec, matches: &ArgMatches) -> Vec<String> {
    if !spec.takes_value() {
        return Vec::new();
    }
    let Some(occurrences) = matches.get_occurrences::<String>(spec.long_name()) else {
        return Vec::new();
    };
    match spec.value_separator() {
        None => occurrences.flatten().cloned().collect(),
        Some(separator) => occurrences
            .flat_map(|occurrence| {
                let raw: Vec<&String> = occurrence.collect();
                split_occurrence(&raw, separator, spec.arity().max_values())
            })
            .collect(),
    }
}

/// Splits the raw values of one occurrence on `separator`.
///
/// With a `limit`, splitting stops early so the occurrence yields at most
/// `limit` values; each later raw value keeps one slot.
fn split_occurrence(raw: &[&String], separator: char, limit: Option<usize>) -> Vec<String> {
    let mut values = Vec::new();
    for (index, value) in raw.iter().enumerate() {
        match limit {
            None => values.extend(value.split(separator).map(str::to_owned)),
            Some(max) => {
                let later = raw.len() - index - 1;
                let room = max.saturating_sub(values.len() + later).max(1);
                values.extend(value.splitn(room, separator).map(str::to_owned));
            }
        }
    }
    values
}
