// src/watch/mod.rs

//! File watching layer.
//!
//! - [`registry`] holds the compiled watch table: one [`WatchedFile`] per
//!   distinct path, each with its ordered pattern bindings.
//! - [`tailer`] owns the forward-only read cursor per watched file and
//!   returns newly appended lines.
//! - [`matcher`] tests appended lines against a file's bindings and decides
//!   what should happen (echo, play now, defer).

pub mod matcher;
pub mod registry;
pub mod tailer;

pub use matcher::{match_line, MatchEffect};
pub use registry::{Binding, WatchRegistry, WatchedFile};
pub use tailer::LogTailer;
