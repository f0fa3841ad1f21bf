// src/watch/registry.rs

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::audio::ActionId;
use crate::config::model::{BindingOptions, ConfigRecord};
use crate::errors::{LogfxError, Result};

/// An association between a line pattern and an action, plus option flags,
/// scoped to one watched file. Immutable after creation.
#[derive(Debug, Clone)]
pub struct Binding {
    pub pattern: Regex,
    pub action: ActionId,
    pub options: BindingOptions,
}

/// One watched file and its bindings, in record order.
#[derive(Debug, Clone)]
pub struct WatchedFile {
    pub path: PathBuf,
    pub bindings: Vec<Binding>,
}

/// The watch table: watched files in registration order.
///
/// Built once from validated config records and immutable afterwards; the
/// read cursors live in the tailers, not here.
#[derive(Debug, Clone, Default)]
pub struct WatchRegistry {
    files: Vec<WatchedFile>,
}

impl WatchRegistry {
    /// Build the registry from parsed records.
    ///
    /// Each record get-or-creates the [`WatchedFile`] for its path and
    /// appends a compiled binding to it, so a file referenced by several
    /// records keeps its bindings in record order.
    pub fn from_records(records: &[ConfigRecord]) -> Result<Self> {
        let mut files: Vec<WatchedFile> = Vec::new();

        for record in records {
            let pattern = Regex::new(&record.pattern).map_err(|e| {
                LogfxError::Config(format!(
                    "invalid pattern '{}' in record at line {}: {e}",
                    record.pattern, record.line
                ))
            })?;
            let options = BindingOptions::from_tokens(&record.options)
                .map_err(|e| LogfxError::Config(format!("record at line {}: {e}", record.line)))?;

            let binding = Binding {
                pattern,
                action: record.action.clone(),
                options,
            };

            match files.iter().position(|f| f.path == record.file) {
                Some(idx) => files[idx].bindings.push(binding),
                None => {
                    debug!(file = ?record.file, "registering watched file");
                    files.push(WatchedFile {
                        path: record.file.clone(),
                        bindings: vec![binding],
                    });
                }
            }
        }

        Ok(Self { files })
    }

    /// Watched files in registration order.
    pub fn files(&self) -> &[WatchedFile] {
        &self.files
    }

    /// Bindings registered for the given path, if it is watched.
    pub fn bindings_for(&self, path: &Path) -> Option<&[Binding]> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.bindings.as_slice())
    }

    /// Action ids of every binding, in registration order (with repeats).
    pub fn action_ids(&self) -> impl Iterator<Item = &ActionId> {
        self.files.iter().flat_map(|f| f.bindings.iter()).map(|b| &b.action)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}
