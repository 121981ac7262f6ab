//! Attribute mutation engine
//!
//! # Module Organization
//!
//! - [`engine`] - The [`Mutator`] and its resolution logic
//! - [`builder`] - Fluent builder API for wiring collaborators
//!
//! # Example
//!
//! ```
//! use request_mutator_core::{AttributeValue, Mutator, RuleDeclaration, RuleMap};
//! use serde_json::json;
//!
//! let mut rules = RuleMap::new();
//! rules.insert("age".to_string(), RuleDeclaration::from("required|integer"));
//!
//! let mutator = Mutator::builder(json!({"age": "42", "name": "ada"}))
//!     .rules(rules)
//!     .mutator("name", |v| Ok(v.as_str().unwrap_or_default().to_uppercase().into()))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(mutator.mutate("age").unwrap(), AttributeValue::Integer(42));
//! assert_eq!(mutator.mutate("name").unwrap(), AttributeValue::from("ADA"));
//! ```
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

pub mod builder;
pub mod engine;


pub use builder::MutatorBuilder;
pub use engine::{MutatedMapping, Mutator};
