//! Declarative mutation schemas
//!
//! A [`MutationSchema`] carries everything the engine needs besides the
//! input itself: the rule declarations, the defaults and the date
//! configuration. It acts as both the rule source and the defaults provider.
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use request_mutator_core::{
    Defaults, DefaultsProvider, InputSource, Mutator, MutatorBuilder, MutatorConfig, RuleMap,
    RuleSource,
};
use serde::{Deserialize, Serialize};

/// Rule and default declarations for the attributes of one request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationSchema {
    /// Rules keyed by attribute name, delimited or list form
    pub rules: RuleMap,
    /// Values used when an attribute is absent
    pub defaults: Defaults,
    /// Date handling configuration
    pub config: MutatorConfig,
}

impl MutationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a mutator builder over `input` wired with this schema.
    ///
    /// Custom mutators can still be bound on the returned builder.
    pub fn into_builder(self, input: impl InputSource + 'static) -> MutatorBuilder {
        let MutationSchema { rules, defaults, config } = self;
        Mutator::builder(input).rules(rules).defaults(defaults).config(config)
    }

    /// Build a mutator over `input` wired with this schema
    pub fn into_mutator(
        self,
        input: impl InputSource + 'static,
    ) -> request_mutator_core::Result<Mutator> {
        self.into_builder(input).build()
    }
}

impl RuleSource for MutationSchema {
    fn rules(&self) -> &RuleMap {
        &self.rules
    }
}

impl DefaultsProvider for MutationSchema {
    fn defaults(&self) -> Defaults {
        self.defaults.clone()
    }
}
