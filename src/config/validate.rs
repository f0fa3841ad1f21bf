// src/config/validate.rs

use regex::Regex;

use crate::config::model::{BindingOptions, ConfigRecord};
use crate::errors::{LogfxError, Result};

/// Run semantic validation against parsed config records.
///
/// This checks:
/// - there is at least one record
/// - every option token is one of `noecho` / `delay`
/// - every pattern compiles as a regex
///
/// It does **not**:
/// - check that watched files exist (done when the tailers open them)
/// - check that sound resources load (done when the catalog is built)
pub fn validate_records(records: &[ConfigRecord]) -> Result<()> {
    ensure_has_records(records)?;
    validate_options(records)?;
    validate_patterns(records)?;
    Ok(())
}

fn ensure_has_records(records: &[ConfigRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(LogfxError::Config(
            "config must contain at least one `<file>,<pattern>,<sound>` record".to_string(),
        ));
    }
    Ok(())
}

fn validate_options(records: &[ConfigRecord]) -> Result<()> {
    for record in records {
        BindingOptions::from_tokens(&record.options)
            .map_err(|e| LogfxError::Config(format!("record at line {}: {e}", record.line)))?;
    }
    Ok(())
}

fn validate_patterns(records: &[ConfigRecord]) -> Result<()> {
    // Compile each pattern and discard the result; the registry compiles its
    // own copies when it is built.
    for record in records {
        Regex::new(&record.pattern).map_err(|e| {
            LogfxError::Config(format!(
                "invalid pattern '{}' in record at line {}: {e}",
                record.pattern, record.line
            ))
        })?;
    }
    Ok(())
}
