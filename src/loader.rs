//! Reads the JSON dataset file into an in-memory [`Dataset`].

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::logger::DailyLog;
use crate::{CardexError, Dataset, Scalar};

/// Loads and validates the dataset. Failures are written to the diagnostic
/// sink first and then returned to the caller with a short user-facing
/// message; the underlying cause stays attached as the error source.
pub struct DatasetLoader<'a> {
    log: &'a DailyLog,
}

impl<'a> DatasetLoader<'a> {
    pub fn new(log: &'a DailyLog) -> Self {
        DatasetLoader { log }
    }

    pub fn load(&self, path: &Path) -> Result<Dataset, CardexError> {
        let text = fs::read_to_string(path).map_err(|e| {
            self.log
                .error(&format!("could not read {}: {e}", path.display()));
            CardexError::Io(e)
        })?;

        match parse_records(&text) {
            Ok(dataset) => {
                self.log.info(&format!(
                    "loaded {} records with {} columns from {}",
                    dataset.len(),
                    dataset.columns().len(),
                    path.display()
                ));
                Ok(dataset)
            }
            Err(e) => {
                self.log
                    .error(&format!("invalid dataset at {}: {e:?}", path.display()));
                Err(e)
            }
        }
    }
}

/// Parse a JSON document shaped as a non-empty array of flat objects with a
/// shared key set. Key order of the first record fixes the column order.
pub(crate) fn parse_records(text: &str) -> Result<Dataset, CardexError> {
    let doc: Value =
        serde_json::from_str(text).map_err(|e| CardexError::Malformed(Some(e)))?;

    let records = match doc {
        Value::Array(records) => records,
        other => {
            return Err(CardexError::UnexpectedType(format!(
                "expected an array of records, found {}",
                json_kind(&other)
            )));
        }
    };
    if records.is_empty() {
        return Err(CardexError::Malformed(None));
    }

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());
    for (idx, record) in records.into_iter().enumerate() {
        let Value::Object(fields) = record else {
            return Err(CardexError::UnexpectedType(format!(
                "record {idx} is not an object"
            )));
        };
        if idx == 0 {
            columns = fields.keys().cloned().collect();
        } else if fields.len() != columns.len() {
            return Err(CardexError::UnexpectedType(format!(
                "record {idx} does not match the column set"
            )));
        }

        let mut row = Vec::with_capacity(columns.len());
        for name in &columns {
            let value = fields.get(name).ok_or_else(|| {
                CardexError::UnexpectedType(format!(
                    "record {idx} is missing column '{name}'"
                ))
            })?;
            row.push(scalar_from_json(value).ok_or_else(|| {
                CardexError::UnexpectedType(format!(
                    "column '{name}' in record {idx} holds a nested value"
                ))
            })?);
        }
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

fn scalar_from_json(value: &Value) -> Option<Scalar> {
    match value {
        Value::Null => Some(Scalar::Null),
        Value::Bool(v) => Some(Scalar::Bool(*v)),
        Value::Number(n) => n
            .as_i64()
            .map(Scalar::Int)
            .or_else(|| n.as_f64().map(Scalar::Float)),
        Value::String(v) => Some(Scalar::Text(v.clone())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_log(tag: &str) -> (DailyLog, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!("cardex_loader_{tag}_{}", std::process::id()));
        let log = DailyLog::open("cardex_test", &dir).unwrap();
        (log, dir)
    }

    #[test]
    fn test_parse_well_formed_records() {
        let dataset = parse_records(
            r#"[
                {"Brand": "Ford", "Horsepower": 120, "MPG": 35.5, "Used": true},
                {"Brand": "Toyota", "Horsepower": 132, "MPG": null, "Used": false}
            ]"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns(), ["Brand", "Horsepower", "MPG", "Used"]);
        assert_eq!(dataset.rows()[0][0], Scalar::Text("Ford".to_string()));
        assert_eq!(dataset.rows()[0][2], Scalar::Float(35.5));
        assert_eq!(dataset.rows()[1][2], Scalar::Null);
        assert_eq!(dataset.rows()[1][3], Scalar::Bool(false));
    }

    #[test]
    fn test_parse_empty_array_is_malformed() {
        assert!(matches!(
            parse_records("[]"),
            Err(CardexError::Malformed(None))
        ));
    }

    #[test]
    fn test_parse_invalid_json_is_malformed() {
        assert!(matches!(
            parse_records("{ not json"),
            Err(CardexError::Malformed(Some(_)))
        ));
    }

    #[test]
    fn test_parse_scalar_document_is_unexpected_type() {
        assert!(matches!(
            parse_records("42"),
            Err(CardexError::UnexpectedType(_))
        ));
    }

    #[test]
    fn test_parse_array_of_scalars_is_unexpected_type() {
        assert!(matches!(
            parse_records("[1, 2, 3]"),
            Err(CardexError::UnexpectedType(_))
        ));
    }

    #[test]
    fn test_parse_ragged_records_are_unexpected_type() {
        let result = parse_records(
            r#"[{"Brand": "Ford", "Horsepower": 120}, {"Brand": "Toyota"}]"#,
        );
        assert!(matches!(result, Err(CardexError::UnexpectedType(_))));
    }

    #[test]
    fn test_parse_renamed_key_is_unexpected_type() {
        let result = parse_records(
            r#"[{"Brand": "Ford", "Horsepower": 120}, {"Brand": "Toyota", "Hp": 132}]"#,
        );
        assert!(matches!(result, Err(CardexError::UnexpectedType(_))));
    }

    #[test]
    fn test_parse_nested_value_is_unexpected_type() {
        let result = parse_records(r#"[{"Brand": "Ford", "Extras": ["ac", "radio"]}]"#);
        assert!(matches!(result, Err(CardexError::UnexpectedType(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_failure() {
        let (log, dir) = test_log("missing");
        let loader = DatasetLoader::new(&log);
        let result = loader.load(Path::new("/nonexistent/cardex/dataset.json"));
        assert!(matches!(result, Err(CardexError::Io(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_reads_file_from_disk() {
        let (log, dir) = test_log("disk");
        let path = dir.join("dataset.json");
        fs::write(
            &path,
            r#"[{"Brand": "Ford", "Horsepower": 120}, {"Brand": "Toyota", "Horsepower": 132}]"#,
        )
        .unwrap();

        let loader = DatasetLoader::new(&log);
        let dataset = loader.load(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns(), ["Brand", "Horsepower"]);
        let _ = fs::remove_dir_all(&dir);
    }
}
