// src/audio/system.rs

//! Audio playback via an external command-line player.
//!
//! Rather than linking an audio stack into the binary, playback is delegated
//! to whichever command-line player is installed. When none is found the
//! caller falls back to the terminal bell.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};
use which::which;

use crate::audio::{AudioBackend, SoundHandle};
use crate::errors::{LogfxError, Result};

/// Candidate players, tried in order. Extra args come before the file path.
const CANDIDATES: &[(&str, &[&str])] = &[
    ("paplay", &[]),
    ("aplay", &["-q"]),
    ("afplay", &[]),
    ("play", &["-q"]),
];

/// Audio backend that shells out to a command-line player.
///
/// Playback is fire-and-forget: the player process is spawned with its stdio
/// nulled and reaped in the background, so a long sound never blocks a poll
/// tick.
#[derive(Debug)]
pub struct SystemPlayerBackend {
    program: PathBuf,
    args: Vec<String>,
    resources: Vec<PathBuf>,
}

impl SystemPlayerBackend {
    /// Find the first available command-line player on PATH.
    pub fn detect() -> Option<Self> {
        for (name, args) in CANDIDATES {
            if let Ok(program) = which(name) {
                debug!(player = %program.display(), "detected audio player");
                return Some(Self {
                    program,
                    args: args.iter().map(|s| s.to_string()).collect(),
                    resources: Vec::new(),
                });
            }
        }
        None
    }

    /// The player binary this backend spawns.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl AudioBackend for SystemPlayerBackend {
    fn load(&mut self, resource: &Path) -> Result<SoundHandle> {
        let meta = std::fs::metadata(resource)
            .map_err(|e| LogfxError::Playback(format!("sound resource {:?}: {e}", resource)))?;
        if !meta.is_file() {
            return Err(LogfxError::Playback(format!(
                "sound resource {:?} is not a file",
                resource
            )));
        }

        let handle = SoundHandle::new(self.resources.len() as u64);
        self.resources.push(resource.to_path_buf());
        Ok(handle)
    }

    fn play(&mut self, handle: SoundHandle) -> Result<()> {
        let resource = self.resources.get(handle.index()).ok_or_else(|| {
            LogfxError::Playback(format!("unknown sound handle {handle:?}"))
        })?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(resource)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                LogfxError::Playback(format!("spawning {:?}: {e}", self.program))
            })?;

        // Reap the player in the background.
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    warn!(exit_code = ?status.code(), "audio player exited with failure");
                }
                Ok(_) => {}
                Err(err) => warn!(error = %err, "failed waiting for audio player"),
            }
        });

        Ok(())
    }
}
