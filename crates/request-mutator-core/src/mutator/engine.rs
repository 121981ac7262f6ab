//! The coercion engine
//!
//! This module contains the attribute resolution logic: explicit default,
//! declared default, custom mutator, rule-inferred conversion, pass-through,
//! in that order of precedence.
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use super::builder::MutatorBuilder;
use crate::coerce::{as_boolean, as_integer, as_numeric};
use crate::config::MutatorConfig;
use crate::datetime::{parse_free_form, parse_with_format};
use crate::defaults::{Defaults, DefaultsProvider};
use crate::error::{MutatorError, Result};
use crate::input::InputSource;
use crate::registry::{mutator_name, MutatorRegistry};
use crate::rules::{RuleSet, RuleSource};
use crate::value::{is_truthy, AttributeValue};
use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use serde_json::Value;
use std::fmt;

/// Every input attribute with its coerced value, in input order
pub type MutatedMapping = IndexMap<String, AttributeValue>;

/// Coerces raw request input into typed attribute values.
///
/// The full mapping produced by [`Mutator::mutate_all`] is computed at most
/// once per instance and is never recomputed, even if the input source
/// changes. Single-key lookups are computed on every call and neither read
/// nor fill that cache.
pub struct Mutator {
    pub(super) input: Box<dyn InputSource>,
    pub(super) rules: Option<Box<dyn RuleSource>>,
    pub(super) defaults: Option<Box<dyn DefaultsProvider>>,
    pub(super) mutators: MutatorRegistry,
    pub(super) config: MutatorConfig,
    pub(super) mutated: OnceCell<MutatedMapping>,
}

impl Mutator {
    /// Start building a mutator over `input`
    pub fn builder(input: impl InputSource + 'static) -> MutatorBuilder {
        MutatorBuilder::new(input)
    }

    /// Coerce every input attribute.
    ///
    /// The first call fetches the whole input once and caches the result;
    /// later calls return the cached mapping. If any attribute fails to
    /// coerce the error is returned and nothing is cached.
    pub fn mutate_all(&self) -> Result<&MutatedMapping> {
        self.mutated.get_or_try_init(|| {
            let raw = self.input.all();
            log::debug!("Mutating {} input attributes", raw.len());

            let mut mutated = MutatedMapping::with_capacity(raw.len());
            for (key, value) in raw {
                let coerced = self.mutate_attribute(&key, Some(value), None)?;
                mutated.insert(key, coerced);
            }
            Ok(mutated)
        })
    }

    /// Coerce a single attribute
    pub fn mutate(&self, key: &str) -> Result<AttributeValue> {
        self.mutate_attribute(key, self.input.get(key), None)
    }

    /// Coerce a single attribute, returning `default` when it is absent
    pub fn mutate_with_default(
        &self,
        key: &str,
        default: impl Into<Value>,
    ) -> Result<AttributeValue> {
        self.mutate_attribute(key, self.input.get(key), Some(default.into()))
    }

    /// Resolve the final value of `key` from its raw value.
    ///
    /// `None` and JSON null both mean the attribute is absent. An explicit
    /// default of null counts as no explicit default.
    pub fn mutate_attribute(
        &self,
        key: &str,
        raw: Option<Value>,
        default: Option<Value>,
    ) -> Result<AttributeValue> {
        let raw = match raw.filter(|v| !v.is_null()) {
            Some(value) => value,
            None => {
                if let Some(default) = default.filter(|d| !d.is_null()) {
                    return Ok(AttributeValue::Value(default));
                }
                if let Some(default) = self.default(key) {
                    return Ok(AttributeValue::Value(default));
                }
                Value::Null
            }
        };

        if let Some(mutator) = self.mutators.get(key) {
            log::debug!("Applying {} to '{}'", mutator_name(key), key);
            return mutator(&raw).map_err(|source| MutatorError::Custom {
                key: key.to_string(),
                source,
            });
        }

        if raw.is_null() {
            return Ok(AttributeValue::null());
        }

        self.coerce(key, raw, &self.rule(key))
    }

    /// Apply the first rule-driven conversion that matches
    fn coerce(&self, key: &str, raw: Value, rules: &RuleSet) -> Result<AttributeValue> {
        let type_rules = rules.type_rule_count();
        if type_rules > 1 {
            log::warn!(
                "Attribute '{}' declares {} type rules; checking boolean, integer, numeric, \
                 date, date_format in that order",
                key,
                type_rules
            );
        }

        if rules.has_boolean() {
            log::trace!("Coercing '{}' as boolean", key);
            return Ok(AttributeValue::Boolean(as_boolean(&raw)));
        }

        if rules.has_integer() {
            log::trace!("Coercing '{}' as integer", key);
            return Ok(AttributeValue::Integer(as_integer(&raw)));
        }

        if rules.has_numeric() {
            log::trace!("Coercing '{}' as numeric", key);
            return Ok(AttributeValue::Float(as_numeric(&raw)));
        }

        if rules.has_date() && is_truthy(&raw) {
            log::trace!("Coercing '{}' as date", key);
            let text = date_text(key, &raw)?;
            return parse_free_form(&text, &self.config)
                .map(AttributeValue::DateTime)
                .map_err(|e| e.with_key(key));
        }

        if let Some(format) = rules.date_time_format() {
            if is_truthy(&raw) {
                log::trace!("Coercing '{}' with date format '{}'", key, format);
                let text = date_text(key, &raw)?;
                return parse_with_format(&text, format, &self.config)
                    .map(AttributeValue::DateTime)
                    .map_err(|e| e.with_key(key));
            }
        }

        Ok(AttributeValue::Value(raw))
    }

    /// Whether the full mapping has been computed
    pub fn is_cached(&self) -> bool {
        self.mutated.get().is_some()
    }

    pub fn config(&self) -> &MutatorConfig {
        &self.config
    }

    /// The authoritative defaults, or an empty map without a provider
    pub fn defaults(&self) -> Defaults {
        self.defaults
            .as_ref()
            .map(|provider| provider.defaults())
            .unwrap_or_default()
    }

    pub fn has_default(&self, key: &str) -> bool {
        self.defaults().contains_key(key)
    }

    /// The declared default for `key`; `Some(Value::Null)` when declared as null
    pub fn default(&self, key: &str) -> Option<Value> {
        self.defaults().swap_remove(key)
    }

    /// Whether a rule is declared for `key`, however empty
    pub fn has_rule(&self, key: &str) -> bool {
        self.rules
            .as_ref()
            .map_or(false, |source| source.rule(key).is_some())
    }

    /// The normalized rule tokens for `key`, empty when none are declared
    pub fn rule(&self, key: &str) -> RuleSet {
        self.rules
            .as_ref()
            .and_then(|source| source.rule(key))
            .map(|declaration| declaration.normalize())
            .unwrap_or_default()
    }

    pub fn has_boolean_rule(&self, key: &str) -> bool {
        self.rule(key).has_boolean()
    }

    pub fn has_integer_rule(&self, key: &str) -> bool {
        self.rule(key).has_integer()
    }

    pub fn has_numeric_rule(&self, key: &str) -> bool {
        self.rule(key).has_numeric()
    }

    pub fn has_date_rule(&self, key: &str) -> bool {
        self.rule(key).has_date()
    }

    pub fn has_date_format_rule(&self, key: &str) -> bool {
        self.rule(key).has_date_format()
    }

    pub fn has_date_rules(&self, key: &str) -> bool {
        self.rule(key).has_date_rules()
    }

    /// The format of the first `date_format:` rule for `key`
    pub fn date_time_format(&self, key: &str) -> Option<String> {
        self.rule(key).date_time_format().map(str::to_string)
    }

    /// Whether a custom mutator is bound to `key`
    pub fn has_mutator(&self, key: &str) -> bool {
        self.mutators.contains(key)
    }
}

impl fmt::Debug for Mutator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutator")
            .field("has_rules", &self.rules.is_some())
            .field("has_defaults", &self.defaults.is_some())
            .field("mutators", &self.mutators)
            .field("config", &self.config)
            .field("cached", &self.is_cached())
            .finish()
    }
}

/// Text handed to the date parsers
fn date_text(key: &str, raw: &Value) -> Result<String> {
    match raw {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(MutatorError::date_parse(key, other.to_string(), "expected a string")),
    }
}
