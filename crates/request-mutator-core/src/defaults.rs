//! Default values for absent attributes
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use indexmap::IndexMap;
use serde_json::Value;

/// Default values keyed by attribute name
pub type Defaults = IndexMap<String, Value>;

/// Supplies the defaults used when an attribute is absent from the input.
///
/// A single provider is authoritative: whatever it returns is the complete
/// set of defaults. Static defaults are just a [`Defaults`] map; computed
/// defaults can be any `Fn() -> Defaults`.
pub trait DefaultsProvider {
    fn defaults(&self) -> Defaults;
}

impl DefaultsProvider for Defaults {
    fn defaults(&self) -> Defaults {
        self.clone()
    }
}

impl<F> DefaultsProvider for F
where
    F: Fn() -> Defaults,
{
    fn defaults(&self) -> Defaults {
        self()
    }
}
