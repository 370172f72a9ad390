//! Insertion-ordered collection of option descriptors.

use tracing::{debug, warn};

use crate::spec::OptionSpec;

/// The set of options recognised by one handler.
///
/// Registration is first-wins: a spec sharing any long or short name with an
/// option already present is ignored and a warning is logged. Entries are
/// never removed.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    specs: Vec<OptionSpec>,
}

impl OptionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Appends `spec` unless one of its names is already taken.
    ///
    /// Returns `true` when the spec was added.
    pub fn insert(&mut self, spec: OptionSpec) -> bool {
        if let Some(clash) = spec.names().find(|name| self.contains(name)) {
            warn!(
                option = spec.long_name(),
                name = clash,
                "ignoring option whose name is already registered"
            );
            return false;
        }
        debug!(option = spec.long_name(), "registered option");
        self.specs.push(spec);
        true
    }

    /// Looks an option up by long or short name.
    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&OptionSpec> {
        self.specs.iter().find(|spec| spec.matches(identity))
    }

    /// Returns `true` when `identity` names a registered option.
    #[must_use]
    pub fn contains(&self, identity: &str) -> bool {
        self.get(identity).is_some()
    }

    /// Iterates over the options in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.specs.iter()
    }

    /// Number of registered options.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a OptionRegistry {
    type Item = &'a OptionSpec;
    type IntoIter = std::slice::Iter<'a, OptionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::OptionRegistry;
    use crate::builder::with_name;

    #[test]
    fn keeps_registration_order() {
        let mut registry = OptionRegistry::new();
        for name in ["region", "domain", "command"] {
            assert!(registry.insert(with_name(name).build().expect("build spec")));
        }
        let names: Vec<_> = registry.iter().map(|spec| spec.long_name()).collect();
        assert_eq!(names, ["region", "domain", "command"]);
    }

    #[test]
    fn first_registration_wins() {
        let mut registry = OptionRegistry::new();
        let first = with_name("domain")
            .with_description("first")
            .build()
            .expect("build spec");
        let second = with_name("domain")
            .with_description("second")
            .build()
            .expect("build spec");
        assert!(registry.insert(first));
        assert!(!registry.insert(second));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("domain").and_then(|spec| spec.description()),
            Some("first")
        );
    }

    #[test]
    fn short_name_clash_is_rejected() {
        let mut registry = OptionRegistry::new();
        let spec = |long: &str, short: Option<&str>| {
            let mut builder = with_name(long);
            if let Some(name) = short {
                builder = builder.with_short_name(name);
            }
            builder.build().expect("build spec")
        };
        assert!(registry.insert(spec("domain", Some("d"))));
        assert!(!registry.insert(spec("debug", Some("d"))));
        assert!(!registry.insert(spec("d", None)));
        assert!(registry.contains("d"));
        assert!(!registry.contains("debug"));
    }
}
