//! Engine configuration
//!
//! Loaded from a JSON file or built in code. Every field has a default, so
//! `{}` is a valid configuration.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{TallyError, TallyResult};
use crate::observability::{Logger, Severity};
use crate::store::Field;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Fields carrying an inverted index (default: product, category, vendor)
    #[serde(default = "default_indexed_fields")]
    pub indexed_fields: Vec<Field>,

    /// Whether the engine logs at all (default: true)
    #[serde(default = "default_logging")]
    pub logging: bool,

    /// Minimum severity logged (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: Severity,
}

fn default_indexed_fields() -> Vec<Field> {
    vec![Field::Product, Field::Category, Field::Vendor]
}
fn default_logging() -> bool {
    true
}
fn default_log_level() -> Severity {
    Severity::Info
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            indexed_fields: default_indexed_fields(),
            logging: default_logging(),
            log_level: default_log_level(),
        }
    }
}

impl EngineConfig {
    /// Configuration with logging switched off
    pub fn quiet() -> Self {
        Self {
            logging: false,
            ..Self::default()
        }
    }

    /// Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> TallyResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TallyError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> TallyResult<Self> {
        let config: EngineConfig = serde_json::from_str(content)
            .map_err(|e| TallyError::InvalidConfig(format!("Invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Only product, category and vendor may be indexed, each at most once.
    pub fn validate(&self) -> TallyResult<()> {
        let mut seen = HashSet::new();
        for field in &self.indexed_fields {
            if !field.is_indexable() {
                return Err(TallyError::InvalidConfig(format!(
                    "Field '{}' cannot be indexed. Indexable fields: product, category, vendor.",
                    field
                )));
            }
            if !seen.insert(*field) {
                return Err(TallyError::InvalidConfig(format!(
                    "Field '{}' listed more than once in indexed_fields",
                    field
                )));
            }
        }
        Ok(())
    }

    /// Logger honoring `logging` and `log_level`
    pub fn logger(&self) -> Logger {
        if self.logging {
            Logger::new(self.log_level)
        } else {
            Logger::silent()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_is_default() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(
            config.indexed_fields,
            vec![Field::Product, Field::Category, Field::Vendor]
        );
    }

    #[test]
    fn test_subset_of_fields() {
        let config = EngineConfig::from_json(r#"{"indexed_fields": ["vendor"], "log_level": "warn"}"#).unwrap();
        assert_eq!(config.indexed_fields, vec![Field::Vendor]);
        assert_eq!(config.log_level, Severity::Warn);
    }

    #[test]
    fn test_date_cannot_be_indexed() {
        let err = EngineConfig::from_json(r#"{"indexed_fields": ["date"]}"#).unwrap_err();
        assert_eq!(err.code(), "TALLY_INVALID_CONFIG");
        assert!(err.to_string().contains("date"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = EngineConfig::from_json(r#"{"indexed_fields": ["vendor", "vendor"]}"#).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(EngineConfig::from_json(r#"{"index": ["vendor"]}"#).is_err());
        assert!(EngineConfig::from_json(r#"{"indexed_fields": ["color"]}"#).is_err());
    }

    #[test]
    fn test_quiet_logger_is_silent() {
        assert!(!EngineConfig::quiet().logger().enabled(Severity::Fatal));
        assert!(EngineConfig::default().logger().enabled(Severity::Info));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"indexed_fields": ["category"], "logging": false}}"#).unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.indexed_fields, vec![Field::Category]);
        assert!(!config.logging);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/tally.json")).unwrap_err();
        assert_eq!(err.code(), "TALLY_INVALID_CONFIG");
    }
}
