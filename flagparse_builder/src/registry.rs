use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::api::{FlagValue, Handle, ValueCell};
use crate::model::{Kind, Value};
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

pub(crate) struct OptionEntry {
    kind: Kind,
    value: ValueCell,
    usage: String,
}

impl OptionEntry {
    pub(crate) fn kind(&self) -> Kind {
        self.kind
    }

    pub(crate) fn usage(&self) -> &str {
        &self.usage
    }

    pub(crate) fn store(&self, value: Value) {
        assert_eq!(
            value.kind(),
            self.kind,
            "internal error - option kind is fixed at declaration"
        );
        *self.value.borrow_mut() = value;
    }
}

/// All the options declared for one program invocation.
///
/// Short and long names share a single namespace.
#[derive(Default)]
pub(crate) struct Registry {
    entries: HashMap<String, OptionEntry>,
    duplicates: Vec<String>,
}

impl Registry {
    pub(crate) fn declare<T: FlagValue>(
        &mut self,
        name: impl Into<String>,
        default: T,
        usage: impl Into<String>,
    ) -> Handle<T> {
        let name = name.into();
        let handle = Handle::bind(default);

        match self.entries.entry(name) {
            Entry::Occupied(occupied) => {
                // The first declaration stays live; the build step reports the clash.
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option '{}' declared more than once.", occupied.key());
                }

                self.duplicates.push(occupied.key().clone());
            }
            Entry::Vacant(vacant) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Declared option '{}' as {}.", vacant.key(), T::KIND);
                }

                vacant.insert(OptionEntry {
                    kind: T::KIND,
                    value: handle.cell(),
                    usage: usage.into(),
                });
            }
        }

        handle
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<&OptionEntry> {
        self.entries.get(name)
    }

    /// Iterate `(name, kind, usage)` for every declared option, in no particular order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, Kind, &str)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.kind(), entry.usage()))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match self.duplicates.first() {
            Some(name) => Err(ConfigError::DuplicateOption(name.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn declare_lookup() {
        // Setup
        let mut registry = Registry::default();

        // Execute
        let verbose = registry.declare("v", false, "Be loud.");
        let limit = registry.declare("limit", 5i64, "How many.");
        let name = registry.declare("name", "x".to_string(), "Who.");

        // Verify
        assert!(!verbose.get());
        assert_eq!(limit.get(), 5);
        assert_eq!(name.get(), "x");

        let entry = registry.lookup("v").unwrap();
        assert_eq!(entry.kind(), Kind::Bool);
        assert_eq!(entry.usage(), "Be loud.");
        assert_eq!(registry.lookup("limit").unwrap().kind(), Kind::Int);
        assert_eq!(registry.lookup("name").unwrap().kind(), Kind::String);
        assert!(registry.lookup("missing").is_none());
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn store_visible_through_handle() {
        // Setup
        let mut registry = Registry::default();
        let limit = registry.declare("p", -1i64, "limit");

        // Execute
        registry.lookup("p").unwrap().store(Value::Int(10));

        // Verify
        assert_eq!(limit.get(), 10);
    }

    #[test]
    #[should_panic]
    fn store_wrong_kind() {
        let mut registry = Registry::default();
        registry.declare("p", -1i64, "limit");
        registry.lookup("p").unwrap().store(Value::Bool(true));
    }

    #[test]
    fn entries() {
        // Setup
        let mut registry = Registry::default();
        registry.declare("h", false, "help");
        registry.declare("help", false, "help");
        registry.declare("p", 0i64, "limit");

        // Execute
        let entries: HashSet<(String, Kind, String)> = registry
            .entries()
            .map(|(n, k, u)| (n.to_string(), k, u.to_string()))
            .collect();

        // Verify
        assert_eq!(
            entries,
            HashSet::from([
                ("h".to_string(), Kind::Bool, "help".to_string()),
                ("help".to_string(), Kind::Bool, "help".to_string()),
                ("p".to_string(), Kind::Int, "limit".to_string()),
            ])
        );
    }

    #[test]
    fn duplicate() {
        // Setup
        let mut registry = Registry::default();
        let first = registry.declare("p", 1i64, "first");
        let second = registry.declare("p", true, "second");

        // Execute
        let result = registry.validate();

        // Verify
        assert_matches!(result, Err(ConfigError::DuplicateOption(name)) if name == "p");
        let entry = registry.lookup("p").unwrap();
        assert_eq!(entry.kind(), Kind::Int);
        assert_eq!(entry.usage(), "first");
        entry.store(Value::Int(3));
        assert_eq!(first.get(), 3);
        assert!(second.get());
    }
}
