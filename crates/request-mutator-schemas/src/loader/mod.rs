//! Mutation schema loading
//!
//! Schema documents are YAML or JSON objects with up to three sections:
//! `rules`, `defaults` and `config`.
//!
//! # Example Usage
//!
//! ```rust
//! use request_mutator_schemas::loader::{Format, SchemaLoader};
//!
//! let schema = SchemaLoader::new().load_str("rules:\n  active: boolean\n", Format::Yaml)?;
//! assert!(schema.rules.contains_key("active"));
//! # Ok::<(), request_mutator_schemas::LoaderError>(())
//! ```
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

pub mod error;
pub mod parser;
pub mod schema_loader;

pub use error::{LoaderError, LoaderResult};
pub use parser::{Format, SchemaParser};
pub use schema_loader::SchemaLoader;
