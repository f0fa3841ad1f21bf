// src/config/mod.rs

//! Configuration layer: the record format, tolerant parsing, and semantic
//! validation.
//!
//! A config file holds one record per line:
//!
//! ```text
//! <file-to-watch>,<pattern>,<sound-to-play>[,<option>[,<option>...]]
//! ```
//!
//! e.g.:
//!
//! ```text
//! /var/log/messages,device no longer idle,sounds/ping.wav
//! /var/log/messages,Found new beacon,sounds/ping.wav,noecho
//! /var/log/messages,Wait for ([0-9]+) sec,sounds/ping.wav,delay
//! ```

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_records};
pub use model::{BindingOptions, ConfigRecord};
pub use validate::validate_records;
