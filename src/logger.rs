//! Process-wide diagnostic sink: one append-only log file per calendar day.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;

use crate::CardexError;

/// Opened once at process start and passed by reference into everything that
/// needs to report a diagnostic. Entries are `timestamp - source - LEVEL -
/// message`; writes are best-effort and never fail the caller.
#[derive(Debug)]
pub struct DailyLog {
    source: String,
    file: Mutex<File>,
}

impl DailyLog {
    /// Open (or create) today's log file under `dir`.
    pub fn open(source: &str, dir: &Path) -> Result<Self, CardexError> {
        fs::create_dir_all(dir).map_err(CardexError::LogSetup)?;
        let file_name = format!("{source}_{}.log", Local::now().format("%Y_%m_%d"));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(file_name))
            .map_err(CardexError::LogSetup)?;
        Ok(DailyLog {
            source: source.to_string(),
            file: Mutex::new(file),
        })
    }

    pub fn info(&self, message: &str) {
        self.write("INFO", message);
    }

    pub fn error(&self, message: &str) {
        self.write("ERROR", message);
    }

    pub fn debug(&self, message: &str) {
        self.write("DEBUG", message);
    }

    fn write(&self, level: &str, message: &str) {
        if let Ok(mut file) = self.file.lock() {
            let stamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "{stamp} - {} - {level} - {message}", self.source);
        }
    }
}
