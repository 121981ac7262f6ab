//! Error types for the request mutator
//!
//! This module defines the error handling for attribute coercion, using
//! thiserror for the error definitions and anyhow for errors raised by
//! host-supplied custom mutators.

use thiserror::Error;

/// Main error type for mutation operations
#[derive(Error, Debug)]
pub enum MutatorError {
    /// A `date` rule could not make sense of the raw value
    #[error("Date parse failed for '{key}': cannot parse {value:?} ({reason})")]
    DateParse {
        key: String,
        value: String,
        reason: String,
    },

    /// A `date_format:` rule did not match the raw value
    #[error("Date format mismatch for '{key}': {value:?} does not match '{format}': {source}")]
    DateFormat {
        key: String,
        value: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The date format carries a specifier that cannot be translated
    #[error("Unsupported date format specifier '{specifier}' in '{format}'")]
    UnsupportedFormat { format: String, specifier: char },

    /// A custom mutator returned an error
    #[error("Custom mutator for '{key}' failed: {source}")]
    Custom {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, MutatorError>;

impl MutatorError {
    /// Create a free-form date parse error
    pub fn date_parse(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::DateParse {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a strict format mismatch error
    pub fn date_format(
        key: impl Into<String>,
        value: impl Into<String>,
        format: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        Self::DateFormat {
            key: key.into(),
            value: value.into(),
            format: format.into(),
            source,
        }
    }

    /// Attach the attribute key to errors raised below the engine
    pub(crate) fn with_key(self, key: &str) -> Self {
        match self {
            Self::DateParse { value, reason, .. } => Self::DateParse {
                key: key.to_string(),
                value,
                reason,
            },
            Self::DateFormat { value, format, source, .. } => Self::DateFormat {
                key: key.to_string(),
                value,
                format,
                source,
            },
            other => other,
        }
    }

    /// Whether this error came from date parsing
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::DateParse { .. } | Self::DateFormat { .. } | Self::UnsupportedFormat { .. }
        )
    }

    /// The attribute key the error relates to, if known
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::DateParse { key, .. }
            | Self::DateFormat { key, .. }
            | Self::Custom { key, .. } => {
                if key.is_empty() {
                    None
                } else {
                    Some(key)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_key_fills_in_missing_key() {
        let err = MutatorError::date_parse("", "yesterdayish", "unrecognised date")
            .with_key("published_at");
        assert_eq!(err.key(), Some("published_at"));
        assert!(err.to_string().contains("published_at"));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_custom_error_is_not_a_parse_error() {
        let err = MutatorError::Custom {
            key: "foo".to_string(),
            source: anyhow::anyhow!("boom"),
        };
        assert!(!err.is_parse_error());
        assert!(err.to_string().contains("boom"));
        assert_eq!(err.key(), Some("foo"));
    }
}
