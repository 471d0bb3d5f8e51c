//! Dataset file ingestion
//!
//! A dataset is a JSON array of raw records. Reading it is the caller's
//! concern; the store itself never touches the filesystem.

use std::fs;
use std::path::Path;

use crate::errors::{TallyError, TallyResult};

use super::record::RawRecord;

/// Parse raw records from a JSON array string
pub fn parse_dataset(json: &str) -> TallyResult<Vec<RawRecord>> {
    serde_json::from_str(json).map_err(|e| TallyError::Dataset(format!("Invalid dataset JSON: {}", e)))
}

/// Read raw records from a JSON file
pub fn load_dataset(path: &Path) -> TallyResult<Vec<RawRecord>> {
    let content = fs::read_to_string(path).map_err(|e| {
        TallyError::Dataset(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_dataset(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordId;
    use std::io::Write;

    #[test]
    fn test_parse_dataset() {
        let raw = parse_dataset(
            r#"[{"id": 1, "product": "Laptop", "category": "Electrónica",
                 "price": 1200, "date": "2023-01-15", "vendor": "Ana"}]"#,
        )
        .unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].id, RecordId(1));
        assert_eq!(raw[0].price, serde_json::json!(1200));
    }

    #[test]
    fn test_non_numeric_price_survives_parsing() {
        // Rejected later by validation, with the record id attached
        let raw = parse_dataset(
            r#"[{"id": 4, "product": "Mouse", "category": "Accesorios",
                 "price": "25", "date": "2023-02-10", "vendor": "Pedro"}]"#,
        )
        .unwrap();
        assert!(raw[0].clone().validate().is_err());
    }

    #[test]
    fn test_missing_field_is_dataset_error() {
        let err = parse_dataset(r#"[{"id": 1, "product": "Laptop"}]"#).unwrap_err();
        assert_eq!(err.code(), "TALLY_DATASET");
    }

    #[test]
    fn test_load_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 2, "product": "Monitor", "category": "Electrónica", "price": 200, "date": "2023-01-20", "vendor": "Juan"}}]"#
        )
        .unwrap();

        let raw = load_dataset(file.path()).unwrap();
        assert_eq!(raw[0].vendor, "Juan");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dataset(Path::new("/nonexistent/tally.json")).unwrap_err();
        assert_eq!(err.code(), "TALLY_DATASET");
    }
}
