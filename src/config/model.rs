// src/config/model.rs

use std::path::PathBuf;

/// A single parsed configuration record.
///
/// Fields map positionally onto one line of the config file; `line` is the
/// 1-based line number, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRecord {
    pub line: usize,

    /// File to watch.
    pub file: PathBuf,

    /// Pattern text, compiled into a regex when the registry is built.
    pub pattern: String,

    /// Identifier of the sound resource to play on a match.
    pub action: String,

    /// Trailing option tokens, unvalidated. See [`BindingOptions`].
    pub options: Vec<String>,
}

/// Per-binding option flags.
///
/// The original trailing token list maps onto an explicit option set:
/// - `noecho` → `suppress_echo`: don't print the matched line.
/// - `delay` → `delayed`: defer execution by the number of seconds captured
///   in the pattern's first group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindingOptions {
    pub suppress_echo: bool,
    pub delayed: bool,
}

impl BindingOptions {
    /// Parse the trailing option tokens of a record.
    ///
    /// Unknown tokens are rejected so that typos surface at load time.
    pub fn from_tokens(tokens: &[String]) -> Result<Self, String> {
        let mut options = BindingOptions::default();
        for token in tokens {
            match token.trim().to_lowercase().as_str() {
                "noecho" => options.suppress_echo = true,
                "delay" => options.delayed = true,
                other => {
                    return Err(format!(
                        "unknown option '{other}' (expected \"noecho\" or \"delay\")"
                    ));
                }
            }
        }
        Ok(options)
    }
}
