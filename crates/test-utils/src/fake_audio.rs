use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use logfx::audio::{AudioBackend, SoundHandle};
use logfx::errors::{LogfxError, Result};

/// A fake audio backend that:
/// - records which resources were loaded and played
/// - never touches a sound device.
pub struct FakeAudioBackend {
    resources: Vec<PathBuf>,
    played: Arc<Mutex<Vec<String>>>,
    fail_loads: bool,
}

impl FakeAudioBackend {
    pub fn new(played: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            resources: Vec::new(),
            played,
            fail_loads: false,
        }
    }

    /// A backend whose every `load` fails, for exercising the bell fallback.
    pub fn failing_loads(played: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            resources: Vec::new(),
            played,
            fail_loads: true,
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.resources.len()
    }
}

impl AudioBackend for FakeAudioBackend {
    fn load(&mut self, resource: &Path) -> Result<SoundHandle> {
        if self.fail_loads {
            return Err(LogfxError::Playback(format!(
                "fake load failure for {:?}",
                resource
            )));
        }

        let handle = SoundHandle::new(self.resources.len() as u64);
        self.resources.push(resource.to_path_buf());
        Ok(handle)
    }

    fn play(&mut self, handle: SoundHandle) -> Result<()> {
        let resource = self.resources.get(handle.index()).ok_or_else(|| {
            LogfxError::Playback(format!("unknown fake sound handle {handle:?}"))
        })?;

        self.played
            .lock()
            .unwrap()
            .push(resource.display().to_string());
        Ok(())
    }
}
