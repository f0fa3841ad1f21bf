// src/watch/tailer.rs

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{LogfxError, Result};

/// Forward-only reader for one watched file.
///
/// The byte-offset cursor starts at the current end of file, so only lines
/// appended after the tailer was opened are ever observed. The cursor never
/// moves backwards: a truncated or rotated file reads as empty until it
/// grows past the stored offset again.
#[derive(Debug)]
pub struct LogTailer {
    path: PathBuf,
    file: File,
    offset: u64,

    /// Bytes of a trailing line whose newline has not arrived yet.
    partial: Vec<u8>,
}

impl LogTailer {
    /// Open `path` and position the cursor at the current end of file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut file = File::open(&path).map_err(|source| LogfxError::Watch {
            path: path.clone(),
            source,
        })?;
        let offset = file.seek(SeekFrom::End(0)).map_err(|source| LogfxError::Watch {
            path: path.clone(),
            source,
        })?;

        debug!(file = ?path, offset, "watching file from current end");

        Ok(Self {
            path,
            file,
            offset,
            partial: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current byte offset of the read cursor.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Read everything appended since the cursor and return the complete
    /// lines, advancing the cursor to end-of-input.
    ///
    /// A trailing partial line is buffered and returned on a later call,
    /// once its newline has been written.
    pub fn read_new_lines(&mut self) -> Result<Vec<String>> {
        let mut chunk = Vec::new();
        let read = self.file.read_to_end(&mut chunk)?;
        if read == 0 {
            return Ok(Vec::new());
        }

        self.offset += read as u64;
        self.partial.extend_from_slice(&chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.partial.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.partial.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }

        Ok(lines)
    }
}
