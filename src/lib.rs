// src/lib.rs

pub mod audio;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod watch;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::audio::{Player, SystemPlayerBackend};
use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigRecord;
use crate::engine::{PollCore, PollRuntime, RuntimeOptions};
use crate::watch::registry::WatchRegistry;
use crate::watch::tailer::LogTailer;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the watch registry and per-file tailers
/// - the audio backend, catalog and player
/// - the poll runtime and Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let records = load_and_validate(&config_path)?;

    if args.dry_run {
        print_dry_run(&records);
        return Ok(());
    }

    let registry = WatchRegistry::from_records(&records)?;

    // Audio backend: first command-line player on PATH, else terminal bell.
    let player = match SystemPlayerBackend::detect() {
        Some(backend) => {
            info!(player = %backend.program().display(), "using audio player");
            Player::with_backend(Box::new(backend), registry.action_ids())
        }
        None => {
            info!("no audio player found; falling back to terminal bell");
            Player::bell_only()
        }
    };

    // One tailer per watched file, cursor at current end of file.
    let tailers = registry
        .files()
        .iter()
        .map(|file| LogTailer::open(&file.path))
        .collect::<errors::Result<Vec<_>>>()?;

    info!(files = tailers.len(), "watching files");

    let options = RuntimeOptions {
        interval: args.interval,
    };

    let core = PollCore::new(registry);
    let runtime = PollRuntime::new(core, tailers, player);
    runtime.run(options).await?;
    Ok(())
}

/// Simple dry-run output: print the watch table.
fn print_dry_run(records: &[ConfigRecord]) {
    println!("logfx dry-run");
    println!();

    println!("records ({}):", records.len());
    for record in records {
        println!("  - {}", record.file.display());
        println!("      pattern: {}", record.pattern);
        println!("      sound: {}", record.action);
        if !record.options.is_empty() {
            println!("      options: {:?}", record.options);
        }
    }
}
