// src/audio/catalog.rs

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::audio::{ActionId, AudioBackend, SoundHandle};

/// Maps an action identifier to its loaded sound handle.
///
/// Each distinct resource is loaded exactly once, at setup; the catalog is
/// immutable afterwards. Actions whose resource failed to load have no entry
/// and fall back to the terminal bell at play time.
#[derive(Debug, Default)]
pub struct ActionCatalog {
    handles: HashMap<ActionId, SoundHandle>,
}

impl ActionCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every referenced action resource through the backend.
    ///
    /// Repeated references to the same action are loaded once. Load failures
    /// are diagnostics, not errors: the poll loop must be able to start even
    /// if a sound file is missing.
    pub fn load<'a>(
        backend: &mut dyn AudioBackend,
        actions: impl Iterator<Item = &'a ActionId>,
    ) -> Self {
        let mut handles = HashMap::new();

        for action in actions {
            if handles.contains_key(action) {
                continue;
            }
            match backend.load(Path::new(action)) {
                Ok(handle) => {
                    debug!(action = %action, "loaded sound resource");
                    handles.insert(action.clone(), handle);
                }
                Err(err) => {
                    warn!(
                        action = %action,
                        error = %err,
                        "failed to load sound resource; will fall back to terminal bell"
                    );
                }
            }
        }

        Self { handles }
    }

    pub fn get(&self, action: &str) -> Option<SoundHandle> {
        self.handles.get(action).copied()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
