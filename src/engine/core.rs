// src/engine/core.rs

//! Pure poll core.
//!
//! This module contains a synchronous, deterministic core that consumes
//! appended lines and tick times and produces a list of commands describing
//! what the IO shell should do next (echo a line, play a sound).
//!
//! The async/IO-heavy shell (`engine::runtime::PollRuntime`) is responsible
//! for:
//! - reading appended bytes from the watched files
//! - printing echoes and driving the audio player
//! - the fixed-interval tick and Ctrl+C handling
//!
//! The core is intended to be extensively unit tested without any Tokio,
//! filesystem, or audio device.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::warn;

use crate::audio::ActionId;
use crate::engine::queue::DelayQueue;
use crate::watch::matcher::{match_line, MatchEffect};
use crate::watch::registry::WatchRegistry;

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreCommand {
    /// Print the matched line to the console, prefixed with the file path.
    EchoLine { file: PathBuf, line: String },
    /// Execute the named action.
    PlayAction { action: ActionId },
}

/// Pure poll core state.
///
/// This owns:
/// - the watch registry (which file has which bindings)
/// - the delay queue of deferred actions
///
/// It has no channels, no Tokio types, and does not perform any IO.
#[derive(Debug)]
pub struct PollCore {
    registry: WatchRegistry,
    queue: DelayQueue,
}

impl PollCore {
    pub fn new(registry: WatchRegistry) -> Self {
        Self {
            registry,
            queue: DelayQueue::new(),
        }
    }

    pub fn registry(&self) -> &WatchRegistry {
        &self.registry
    }

    /// Number of deferred actions still waiting (for tests).
    pub fn pending_actions(&self) -> usize {
        self.queue.len()
    }

    /// Match lines appended to `file` against its bindings.
    ///
    /// Immediate matches become commands; delayed matches are recorded in
    /// the delay queue with trigger time `now + captured delay` and surface
    /// from a later [`PollCore::handle_tick`].
    pub fn handle_lines(&mut self, file: &Path, lines: &[String], now: Instant) -> Vec<CoreCommand> {
        let Some(bindings) = self.registry.bindings_for(file) else {
            return Vec::new();
        };

        let mut commands = Vec::new();
        for line in lines {
            for effect in match_line(bindings, line) {
                match effect {
                    MatchEffect::Echo { line } => commands.push(CoreCommand::EchoLine {
                        file: file.to_path_buf(),
                        line,
                    }),
                    MatchEffect::PlayNow { action } => {
                        commands.push(CoreCommand::PlayAction { action })
                    }
                    MatchEffect::Deferred { action, delay } => match now.checked_add(delay) {
                        Some(due_at) => self.queue.schedule(due_at, action),
                        None => {
                            warn!(action = %action, ?delay, "delay overflows the clock; dropping");
                        }
                    },
                }
            }
        }

        commands
    }

    /// Fire every deferred action whose trigger time has passed.
    pub fn handle_tick(&mut self, now: Instant) -> Vec<CoreCommand> {
        self.queue
            .drain_due(now)
            .into_iter()
            .map(|action| CoreCommand::PlayAction { action })
            .collect()
    }
}
