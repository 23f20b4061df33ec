//! Paths shared among modules.

use std::path::PathBuf;

/// Source name stamped into every log entry.
pub const LOG_SOURCE: &str = "cardex";

pub fn default_dataset_path() -> PathBuf {
    PathBuf::from("data").join("raw").join("dataset.json")
}

pub fn default_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}
