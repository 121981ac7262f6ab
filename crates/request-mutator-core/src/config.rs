//! Engine configuration
//!
//! Copyright (c) 2025 Request Mutator Team
//! Licensed under either of MIT or Apache-2.0, at your option

use crate::error::{MutatorError, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Configuration for date handling during coercion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutatorConfig {
    /// Offset from UTC, in seconds, given to dates that carry no offset
    pub utc_offset_seconds: i32,
    /// Extra chrono formats tried first by the free-form date parser
    pub date_formats: Vec<String>,
}

impl Default for MutatorConfig {
    fn default() -> Self {
        Self {
            utc_offset_seconds: 0,
            date_formats: Vec::new(),
        }
    }
}

impl MutatorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset used for naive dates
    pub fn with_utc_offset_seconds(mut self, seconds: i32) -> Self {
        self.utc_offset_seconds = seconds;
        self
    }

    /// Add a format tried by the free-form parser
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_formats.push(format.into());
        self
    }

    /// The offset used for naive dates
    pub fn offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_seconds).ok_or_else(|| MutatorError::Configuration {
            message: format!(
                "utc_offset_seconds must be within one day, got {}",
                self.utc_offset_seconds
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_offset_is_utc() {
        let config = MutatorConfig::default();
        assert_eq!(config.offset().unwrap().local_minus_utc(), 0);
        assert!(config.date_formats.is_empty());
    }

    #[test]
    fn test_out_of_range_offset_is_rejected() {
        let config = MutatorConfig::new().with_utc_offset_seconds(90_000);
        assert!(matches!(config.offset(), Err(MutatorError::Configuration { .. })));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: MutatorConfig =
            serde_json::from_str(r#"{"utc_offset_seconds": 32400}"#).unwrap();
        assert_eq!(config.utc_offset_seconds, 32400);
        assert!(config.date_formats.is_empty());
    }
}
