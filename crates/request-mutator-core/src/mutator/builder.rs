//! Builder for creating mutators
//!
//! This module provides a fluent builder API for wiring an input source to
//! its optional rule source, defaults provider and custom mutators.
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use super::engine::Mutator;
use crate::config::MutatorConfig;
use crate::defaults::DefaultsProvider;
use crate::error::Result;
use crate::input::InputSource;
use crate::registry::MutatorRegistry;
use crate::rules::RuleSource;
use crate::value::AttributeValue;
use once_cell::unsync::OnceCell;
use serde_json::Value;

/// Builder for creating a [`Mutator`]
pub struct MutatorBuilder {
    input: Box<dyn InputSource>,
    rules: Option<Box<dyn RuleSource>>,
    defaults: Option<Box<dyn DefaultsProvider>>,
    mutators: MutatorRegistry,
    config: MutatorConfig,
}

impl MutatorBuilder {
    /// Create a new builder over `input`
    pub fn new(input: impl InputSource + 'static) -> Self {
        Self {
            input: Box::new(input),
            rules: None,
            defaults: None,
            mutators: MutatorRegistry::new(),
            config: MutatorConfig::default(),
        }
    }

    /// Set the rule source
    pub fn rules(mut self, rules: impl RuleSource + 'static) -> Self {
        self.rules = Some(Box::new(rules));
        self
    }

    /// Set the defaults provider
    pub fn defaults(mut self, defaults: impl DefaultsProvider + 'static) -> Self {
        self.defaults = Some(Box::new(defaults));
        self
    }

    /// Bind a custom mutator to `key`
    pub fn mutator<F>(mut self, key: &str, mutator: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<AttributeValue> + 'static,
    {
        self.mutators.register(key, mutator);
        self
    }

    /// Replace the custom mutators with a prepared registry
    pub fn registry(mut self, registry: MutatorRegistry) -> Self {
        self.mutators = registry;
        self
    }

    /// Set the configuration
    pub fn config(mut self, config: MutatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the mutator
    pub fn build(self) -> Result<Mutator> {
        self.config.offset()?;

        Ok(Mutator {
            input: self.input,
            rules: self.rules,
            defaults: self.defaults,
            mutators: self.mutators,
            config: self.config,
            mutated: OnceCell::new(),
        })
    }
}
