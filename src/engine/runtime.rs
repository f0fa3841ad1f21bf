// src/engine/runtime.rs

use std::time::{Duration, Instant};

use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::audio::Player;
use crate::engine::core::{CoreCommand, PollCore};
use crate::errors::Result;
use crate::watch::tailer::LogTailer;

/// Options that influence how the runtime behaves.
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    /// Fixed interval between poll ticks.
    pub interval: Duration,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
        }
    }
}

/// The async IO shell around [`PollCore`].
///
/// Responsibilities:
/// - re-enter the poll tick on a fixed interval
/// - read appended lines from every watched file, in registration order
/// - execute the core's commands (stdout echo, sound playback)
/// - stop cleanly on Ctrl+C without executing further actions
pub struct PollRuntime {
    core: PollCore,
    tailers: Vec<LogTailer>,
    player: Player,
}

impl PollRuntime {
    pub fn new(core: PollCore, tailers: Vec<LogTailer>, player: Player) -> Self {
        Self {
            core,
            tailers,
            player,
        }
    }

    /// Expose the core (for tests).
    pub fn core(&self) -> &PollCore {
        &self.core
    }

    /// Main poll loop.
    ///
    /// This should be called from `lib.rs` after:
    /// - config is loaded & validated
    /// - the registry, tailers and player have been constructed
    pub async fn run(mut self, options: RuntimeOptions) -> Result<()> {
        info!(interval = ?options.interval, "logfx runtime started");

        let mut ticker = tokio::time::interval(options.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.poll_once(Instant::now());
                }
                res = &mut ctrl_c => {
                    if let Err(e) = res {
                        warn!(error = %e, "failed to listen for Ctrl+C; stopping anyway");
                    }
                    info!("shutdown requested, stopping runtime");
                    break;
                }
            }
        }

        info!("logfx runtime exiting");
        Ok(())
    }

    /// One poll tick: read appended lines from every watched file in
    /// registration order, then drain the delay queue.
    ///
    /// Read errors are diagnostics; steady-state polling never aborts.
    pub fn poll_once(&mut self, now: Instant) {
        let mut commands = Vec::new();

        for tailer in &mut self.tailers {
            match tailer.read_new_lines() {
                Ok(lines) => {
                    if lines.is_empty() {
                        continue;
                    }
                    debug!(file = ?tailer.path(), lines = lines.len(), "new lines");
                    commands.extend(self.core.handle_lines(tailer.path(), &lines, now));
                }
                Err(err) => {
                    warn!(file = ?tailer.path(), error = %err, "failed to read appended lines");
                }
            }
        }

        commands.extend(self.core.handle_tick(now));
        self.execute(commands);
    }

    fn execute(&mut self, commands: Vec<CoreCommand>) {
        for command in commands {
            match command {
                CoreCommand::EchoLine { file, line } => {
                    println!("{}:{}", file.display(), line);
                }
                CoreCommand::PlayAction { action } => {
                    self.player.play(&action);
                }
            }
        }
    }
}
