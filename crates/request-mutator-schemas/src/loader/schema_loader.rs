//! Mutation schema loader
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use crate::loader::{
    error::{LoaderError, LoaderResult},
    parser::{Format, SchemaParser},
};
use crate::schema::MutationSchema;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Top-level sections a schema document may carry
const SECTIONS: [&str; 3] = ["rules", "defaults", "config"];

/// Path reported for documents loaded from a string
const INLINE_PATH: &str = "<inline>";

/// Loads [`MutationSchema`] documents from YAML or JSON
#[derive(Debug, Default)]
pub struct SchemaLoader {
    parser: SchemaParser,
}

impl SchemaLoader {
    /// Create a new schema loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a schema from file, detecting format from extension
    pub fn load(&self, path: &Path) -> LoaderResult<MutationSchema> {
        let document = self.parser.parse_file(path)?;
        self.from_document(document, path)
    }

    /// Load a schema from document content
    pub fn load_str(&self, content: &str, format: Format) -> LoaderResult<MutationSchema> {
        let path = Path::new(INLINE_PATH);
        let document = self.parser.parse_content(content, format, path)?;
        self.from_document(document, path)
    }

    /// Validate a parsed document and deserialize it
    pub fn from_document(&self, mut document: Value, path: &Path) -> LoaderResult<MutationSchema> {
        let root = document.as_object_mut().ok_or_else(|| {
            LoaderError::validation_error(path.to_path_buf(), "Schema must be an object")
        })?;

        // an empty YAML section parses as null
        root.retain(|_, section| !section.is_null());

        for key in root.keys().filter(|key| !SECTIONS.contains(&key.as_str())) {
            log::warn!("Ignoring unknown section '{}' in '{}'", key, path.display());
        }

        if let Some(rules) = root.get("rules") {
            self.validate_rules(rules, path)?;
        }
        for section in ["defaults", "config"] {
            if let Some(value) = root.get(section) {
                if !value.is_object() {
                    return Err(LoaderError::validation_error(
                        path.to_path_buf(),
                        format!("'{}' must be a mapping", section),
                    ));
                }
            }
        }

        let schema: MutationSchema = serde_json::from_value(document)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))?;

        log::debug!(
            "Loaded schema '{}' with {} rules and {} defaults",
            path.display(),
            schema.rules.len(),
            schema.defaults.len()
        );
        Ok(schema)
    }

    /// Rules must map attribute names to a string or a list of strings
    fn validate_rules(&self, rules: &Value, path: &Path) -> LoaderResult<()> {
        let rules: &Map<String, Value> = match rules {
            Value::Object(rules) => rules,
            _ => {
                return Err(LoaderError::validation_error(
                    path.to_path_buf(),
                    "'rules' must be a mapping",
                ))
            }
        };

        for (key, rule) in rules {
            let valid = match rule {
                Value::String(_) => true,
                Value::Array(tokens) => tokens.iter().all(Value::is_string),
                _ => false,
            };
            if !valid {
                return Err(LoaderError::validation_error(
                    rule_path(path, key),
                    format!("rule for '{}' must be a string or a list of strings", key),
                ));
            }
        }
        Ok(())
    }
}

fn rule_path(path: &Path, key: &str) -> PathBuf {
    PathBuf::from(format!("{}#/rules/{}", path.display(), key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use request_mutator_core::{RuleDeclaration, RuleSource};
    use serde_json::json;

    #[test]
    fn test_load_yaml_str() {
        let schema = SchemaLoader::new()
            .load_str(
                "rules:\n  active: boolean\n  tags: [required, array]\n\
                 defaults:\n  limit: 20\n\
                 config:\n  utc_offset_seconds: 3600\n",
                Format::Yaml,
            )
            .unwrap();

        assert_eq!(schema.rule("active"), Some(&RuleDeclaration::from("boolean")));
        assert_eq!(schema.rule("tags"), Some(&RuleDeclaration::from(["required", "array"])));
        assert_eq!(schema.defaults["limit"], json!(20));
        assert_eq!(schema.config.utc_offset_seconds, 3600);
    }

    #[test]
    fn test_sections_keep_document_order() {
        let schema = SchemaLoader::new()
            .load_str(
                "rules:\n  zeta: boolean\n  alpha: integer\ndefaults:\n  zeta: true\n  alpha: 1\n",
                Format::Yaml,
            )
            .unwrap();

        let rule_keys: Vec<&str> = schema.rules.keys().map(String::as_str).collect();
        let default_keys: Vec<&str> = schema.defaults.keys().map(String::as_str).collect();
        assert_eq!(rule_keys, ["zeta", "alpha"]);
        assert_eq!(default_keys, ["zeta", "alpha"]);
    }

    #[test]
    fn test_missing_sections_default() {
        let schema = SchemaLoader::new().load_str("{}", Format::Json).unwrap();
        assert_eq!(schema, MutationSchema::default());

        let schema = SchemaLoader::new().load_str("rules:\ndefaults:\n", Format::Yaml).unwrap();
        assert_eq!(schema, MutationSchema::default());
    }

    #[test]
    fn test_rejects_non_string_rules() {
        let err = SchemaLoader::new()
            .load_str(r#"{"rules": {"limit": 5}}"#, Format::Json)
            .unwrap_err();

        assert!(matches!(err, LoaderError::ValidationError { .. }));
        assert_eq!(err.path(), &PathBuf::from("<inline>#/rules/limit"));

        let err = SchemaLoader::new()
            .load_str(r#"{"rules": {"tags": ["required", 1]}}"#, Format::Json)
            .unwrap_err();
        assert!(err.to_string().contains("rule for 'tags'"));
    }

    #[test]
    fn test_rejects_malformed_sections() {
        let loader = SchemaLoader::new();
        assert!(loader.load_str(r#"{"rules": ["boolean"]}"#, Format::Json).is_err());
        assert!(loader.load_str(r#"{"defaults": 1}"#, Format::Json).is_err());
        assert!(matches!(
            loader.load_str(r#"{"config": {"utc_offset_seconds": "east"}}"#, Format::Json),
            Err(LoaderError::JsonParseError { .. })
        ));
    }
}
