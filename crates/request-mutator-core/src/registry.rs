//! Custom per-attribute mutators
//!
//! A custom mutator replaces rule-based coercion for one attribute. Bindings
//! are keyed by the StudlyCase form of the attribute name, so `foo_bar`,
//! `foo-bar` and `foo bar` all resolve to the same mutator.
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use crate::value::AttributeValue;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A host-supplied transform for one attribute.
///
/// Receives the raw value (null when the attribute is absent and no default
/// applied) and returns the final value.
pub type AttributeMutator = Box<dyn Fn(&Value) -> anyhow::Result<AttributeValue>>;

/// Convert `foo_bar-baz qux` into `FooBarBazQux`
pub fn studly_case(key: &str) -> String {
    key.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// The conventional name of the mutator for `key`, e.g. `mutateFooBarAttribute`
pub fn mutator_name(key: &str) -> String {
    format!("mutate{}Attribute", studly_case(key))
}

/// Registered custom mutators
#[derive(Default)]
pub struct MutatorRegistry {
    mutators: HashMap<String, AttributeMutator>,
}

impl MutatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mutator for `key`, replacing any previous binding
    pub fn register<F>(&mut self, key: &str, mutator: F)
    where
        F: Fn(&Value) -> anyhow::Result<AttributeValue> + 'static,
    {
        self.mutators.insert(studly_case(key), Box::new(mutator));
    }

    /// Look up the mutator bound to `key`
    pub fn get(&self, key: &str) -> Option<&AttributeMutator> {
        self.mutators.get(&studly_case(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.mutators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutators.is_empty()
    }
}

impl fmt::Debug for MutatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self
            .mutators
            .keys()
            .map(|k| format!("mutate{}Attribute", k))
            .collect();
        names.sort();
        f.debug_struct("MutatorRegistry").field("mutators", &names).finish()
    }
}
