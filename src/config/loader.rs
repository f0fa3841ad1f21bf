// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::model::ConfigRecord;
use crate::config::validate::validate_records;
use crate::errors::Result;

/// Parse config file contents into records.
///
/// This is the tolerant half of loading:
/// - blank lines and `#` comment lines are skipped,
/// - records with fewer than 3 fields are skipped with a diagnostic and
///   processing continues.
///
/// It does **not** compile patterns or check option tokens; use
/// [`load_and_validate`] for that.
pub fn parse_records(contents: &str) -> Vec<ConfigRecord> {
    let mut records = Vec::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = raw.split(',').collect();
        if fields.len() < 3 {
            warn!(line, record = raw, "config record has fewer than 3 fields; skipping");
            continue;
        }

        records.push(ConfigRecord {
            line,
            file: PathBuf::from(fields[0]),
            pattern: fields[1].to_string(),
            action: fields[2].to_string(),
            options: fields[3..].iter().map(|s| s.to_string()).collect(),
        });
    }

    debug!(records = records.len(), "parsed config records");
    records
}

/// Load a configuration file from a given path and return the raw records.
///
/// This only reads and parses; it does **not** perform semantic validation
/// (pattern compilation, option tokens). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<ConfigRecord>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    Ok(parse_records(&contents))
}

/// Load a configuration file from path and run semantic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads and parses the record lines.
/// - Checks for:
///   - at least one record,
///   - valid option tokens on every record,
///   - every pattern compiling as a regex.
///
/// Higher-level modules then transform the records into the watch registry
/// and the action catalog.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Vec<ConfigRecord>> {
    let records = load_from_path(&path)?;
    validate_records(&records)?;
    Ok(records)
}
