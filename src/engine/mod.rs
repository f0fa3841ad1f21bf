// src/engine/mod.rs

//! Poll engine for logfx.
//!
//! This module ties together:
//! - the delay queue (deferred sound triggers)
//! - the pure poll core that turns appended lines and tick times into
//!   commands
//! - the async IO shell that owns the fixed-interval loop and reacts to:
//!   - newly appended lines
//!   - due delayed actions
//!   - shutdown signals

pub mod core;
pub mod queue;
pub mod runtime;

pub use self::core::{CoreCommand, PollCore};
pub use queue::{DelayQueue, PendingAction};
pub use runtime::{PollRuntime, RuntimeOptions};
