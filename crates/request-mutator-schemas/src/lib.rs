//! Request Mutator Schemas - declarative rule and default documents
//!
//! This crate loads the rules, defaults and date configuration of a request
//! from YAML or JSON documents and wires them into a
//! [`request_mutator_core::Mutator`].
//!
//! ## Quick Start
//!
//! ```rust
//! use request_mutator_core::AttributeValue;
//! use request_mutator_schemas::{Format, SchemaLoader};
//! use serde_json::json;
//!
//! let schema = SchemaLoader::new().load_str(
//!     r#"
//! rules:
//!   active: boolean
//!   limit: required|integer
//! defaults:
//!   limit: 20
//! "#,
//!     Format::Yaml,
//! )?;
//!
//! let mutator = schema.into_mutator(json!({"active": "false"}))?;
//! assert_eq!(mutator.mutate("active")?, AttributeValue::Boolean(false));
//! assert_eq!(mutator.mutate("limit")?, AttributeValue::from(json!(20)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod loader;
pub mod schema;

pub use loader::{Format, LoaderError, LoaderResult, SchemaLoader, SchemaParser};
pub use schema::MutationSchema;
