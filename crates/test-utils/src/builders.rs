#![allow(dead_code)]

use std::path::PathBuf;

use logfx::config::ConfigRecord;

/// Builder for config file contents in the
/// `<file>,<pattern>,<sound>[,<option>...]` record format.
pub struct ConfigTextBuilder {
    lines: Vec<String>,
}

impl ConfigTextBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn record(mut self, file: &str, pattern: &str, action: &str, options: &[&str]) -> Self {
        let mut line = format!("{file},{pattern},{action}");
        for option in options {
            line.push(',');
            line.push_str(option);
        }
        self.lines.push(line);
        self
    }

    /// Append a raw line verbatim (e.g. a malformed record or a comment).
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

impl Default for ConfigTextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ConfigRecord`.
pub struct RecordBuilder {
    record: ConfigRecord,
}

impl RecordBuilder {
    pub fn new(file: &str, pattern: &str, action: &str) -> Self {
        Self {
            record: ConfigRecord {
                line: 1,
                file: PathBuf::from(file),
                pattern: pattern.to_string(),
                action: action.to_string(),
                options: Vec::new(),
            },
        }
    }

    pub fn line(mut self, line: usize) -> Self {
        self.record.line = line;
        self
    }

    pub fn option(mut self, token: &str) -> Self {
        self.record.options.push(token.to_string());
        self
    }

    pub fn build(self) -> ConfigRecord {
        self.record
    }
}
