mod config;
mod loader;
mod logger;
mod render;
mod session;
mod stats;
mod types;

use std::fmt;

use thiserror::Error;

pub use config::{LOG_SOURCE, default_dataset_path, default_logs_dir};
pub use loader::DatasetLoader;
pub use logger::DailyLog;
pub use render::Printer;
pub use session::{AnalysisSession, MenuChoice};
pub use stats::{ColumnSummary, summarize_numeric};
pub use types::{ColumnKind, infer_kind};

#[derive(Debug, Error)]
pub enum CardexError {
    #[error("Error reading the content of the dataset file.")]
    Io(#[source] std::io::Error),
    #[error("Expected object or value.")]
    Malformed(#[source] Option<serde_json::Error>),
    #[error("JSON contains unexpected types: {0}.")]
    UnexpectedType(String),
    #[error("Could not write to the terminal.")]
    Presentation(#[source] std::io::Error),
    #[error("Could not set up the logger properly.")]
    LogSetup(#[source] std::io::Error),
}

/// One cell of the dataset. JSON values outside this set are rejected at load
/// time.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "NA"),
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Text(v) => write!(f, "{v}"),
        }
    }
}

/// The loaded table: ordered column names plus rows aligned to them. Built
/// once by the loader and read-only afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Scalar>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Scalar>>) -> Self {
        Dataset { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn head(&self, n: usize) -> &[Vec<Scalar>] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn tail(&self, n: usize) -> &[Vec<Scalar>] {
        &self.rows[self.rows.len().saturating_sub(n)..]
    }

    /// Iterate the cells of one column, top to bottom.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &Scalar> {
        self.rows.iter().map(move |row| &row[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rows() -> Dataset {
        Dataset::new(
            vec!["Brand".to_string(), "Horsepower".to_string()],
            vec![
                vec![Scalar::Text("Ford".to_string()), Scalar::Int(120)],
                vec![Scalar::Text("Toyota".to_string()), Scalar::Int(132)],
                vec![Scalar::Text("Honda".to_string()), Scalar::Null],
            ],
        )
    }

    #[test]
    fn test_head_tail_clamp_to_len() {
        let dataset = three_rows();
        assert_eq!(dataset.head(5).len(), 3);
        assert_eq!(dataset.tail(5).len(), 3);
        assert_eq!(dataset.head(2)[0][1], Scalar::Int(120));
        assert_eq!(dataset.tail(1)[0][0], Scalar::Text("Honda".to_string()));
    }

    #[test]
    fn test_column_iteration_order() {
        let dataset = three_rows();
        let brands: Vec<String> = dataset.column(0).map(|v| v.to_string()).collect();
        assert_eq!(brands, vec!["Ford", "Toyota", "Honda"]);
    }

    #[test]
    fn test_scalar_display_and_numeric() {
        assert_eq!(Scalar::Null.to_string(), "NA");
        assert_eq!(Scalar::Float(35.5).to_string(), "35.5");
        assert_eq!(Scalar::Int(120).as_f64(), Some(120.0));
        assert_eq!(Scalar::Text("Ford".to_string()).as_f64(), None);
        assert!(Scalar::Null.is_null());
    }
}
