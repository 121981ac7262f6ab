//! Request Mutator Core - rule-driven coercion of raw request input
//!
//! This crate turns a bag of raw, usually string-typed, input values into
//! typed values. The intended type of each attribute is inferred from its
//! validation rules (`boolean`, `integer`, `numeric`, `date`,
//! `date_format:<fmt>`), with declared defaults for absent attributes and
//! per-attribute custom mutators as an escape hatch.
//!
//! # Main Components
//!
//! - **Mutator**: the coercion engine, see [`Mutator`]
//! - **Collaborators**: [`InputSource`], [`RuleSource`] and [`DefaultsProvider`]
//! - **Custom Mutators**: per-attribute overrides held in a [`MutatorRegistry`]
//! - **Error Handling**: [`MutatorError`] built with `thiserror`
//!
//! # Resolution Order
//!
//! For one attribute:
//!
//! 1. absent input returns the explicit default, else the declared default
//! 2. a custom mutator, when bound, decides the value
//! 3. the first matching rule converts the value
//! 4. otherwise the raw value passes through
//!
//! # Example
//!
//! ```
//! use request_mutator_core::{AttributeValue, Defaults, Mutator, RuleDeclaration, RuleMap};
//! use serde_json::json;
//!
//! let mut rules = RuleMap::new();
//! rules.insert("active".to_string(), RuleDeclaration::from("boolean"));
//! rules.insert("limit".to_string(), RuleDeclaration::from(["integer"]));
//!
//! let mut defaults = Defaults::new();
//! defaults.insert("limit".to_string(), json!(20));
//!
//! let mutator = Mutator::builder(json!({"active": "false"}))
//!     .rules(rules)
//!     .defaults(defaults)
//!     .build()?;
//!
//! let mutated = mutator.mutate_all()?;
//! assert_eq!(mutated["active"], AttributeValue::Boolean(false));
//! assert_eq!(mutator.mutate("limit")?, AttributeValue::Value(json!(20)));
//! # Ok::<(), request_mutator_core::MutatorError>(())
//! ```

pub mod coerce;
pub mod config;
pub mod datetime;
pub mod defaults;
pub mod error;
pub mod input;
pub mod mutator;
pub mod registry;
pub mod rules;
pub mod value;

// Re-export main types for convenience
pub use config::MutatorConfig;
pub use defaults::{Defaults, DefaultsProvider};
pub use error::{MutatorError, Result};
pub use input::InputSource;
pub use mutator::{MutatedMapping, Mutator, MutatorBuilder};
pub use registry::{mutator_name, studly_case, AttributeMutator, MutatorRegistry};
pub use rules::{date_format_param, RuleDeclaration, RuleMap, RuleSet, RuleSource};
pub use value::{is_truthy, AttributeValue};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_creation() {
        let err = MutatorError::Configuration {
            message: "Test error".to_string(),
        };
        assert!(err.to_string().contains("Test error"));
    }
}
