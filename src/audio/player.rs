// src/audio/player.rs

use tracing::warn;

use crate::audio::{ActionCatalog, ActionId, AudioBackend, TerminalBell};

/// Executes actions: plays the catalogued sound for an action id, or rings
/// the terminal bell.
///
/// Side effect only. Playback failure is logged and falls back to the bell;
/// it never halts the poll loop.
pub struct Player {
    backend: Option<Box<dyn AudioBackend>>,
    catalog: ActionCatalog,
    bell: TerminalBell,
}

impl Player {
    /// Player with a real backend: loads the catalog up front, one load per
    /// distinct action.
    pub fn with_backend<'a>(
        mut backend: Box<dyn AudioBackend>,
        actions: impl Iterator<Item = &'a ActionId>,
    ) -> Self {
        let catalog = ActionCatalog::load(backend.as_mut(), actions);
        Self {
            backend: Some(backend),
            catalog,
            bell: TerminalBell,
        }
    }

    /// Player without an audio backend: every action rings the bell.
    pub fn bell_only() -> Self {
        Self {
            backend: None,
            catalog: ActionCatalog::empty(),
            bell: TerminalBell,
        }
    }

    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    /// Execute one action.
    pub fn play(&mut self, action: &str) {
        let Some(backend) = self.backend.as_mut() else {
            self.bell.beep();
            return;
        };

        match self.catalog.get(action) {
            Some(handle) => {
                if let Err(err) = backend.play(handle) {
                    warn!(
                        action = %action,
                        error = %err,
                        "playback failed; falling back to terminal bell"
                    );
                    self.bell.beep();
                }
            }
            None => {
                warn!(action = %action, "no loaded sound for action; falling back to terminal bell");
                self.bell.beep();
            }
        }
    }
}
