//! Raw input sources
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Provider of the raw key/value pairs to be coerced
pub trait InputSource {
    /// The raw value for `key`, or `None` when the key is absent
    fn get(&self, key: &str) -> Option<Value>;

    /// Every raw pair, in input order
    fn all(&self) -> IndexMap<String, Value>;
}

impl InputSource for IndexMap<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        IndexMap::get(self, key).cloned()
    }

    fn all(&self) -> IndexMap<String, Value> {
        self.clone()
    }
}

impl InputSource for Map<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        Map::get(self, key).cloned()
    }

    fn all(&self) -> IndexMap<String, Value> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// A JSON object is a source of its members; any other value is empty
impl InputSource for Value {
    fn get(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|map| Map::get(map, key)).cloned()
    }

    fn all(&self) -> IndexMap<String, Value> {
        self.as_object().map(InputSource::all).unwrap_or_default()
    }
}
