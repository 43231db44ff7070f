//! Imager store path resolution

use crate::settings::Settings;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Handle over the Imager data tree.
///
/// Holds the resolved [`Settings`] and derives paths from them; it never
/// creates or validates the data directory itself.
pub struct ImagerStore {
    settings: Settings,
}

impl ImagerStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Root of the Imager data tree.
    pub fn root(&self) -> &Path {
        &self.settings.datadir
    }

    /// Whether the data tree sits on the ERDA remote mount.
    pub fn is_remote(&self) -> bool {
        self.settings.erda
    }

    /// Directory holding the frames of one shot.
    pub fn shot_dir(&self, shot: u32) -> PathBuf {
        self.settings.datadir.join(shot.to_string())
    }

    /// Path of a single frame file within a shot.
    pub fn frame_path(&self, shot: u32, frame: &str) -> PathBuf {
        self.shot_dir(shot).join(frame)
    }

    /// Enumerate the shot numbers present under the data root.
    ///
    /// Only directories with purely numeric names count as shots; everything
    /// else is skipped. Returned in ascending order.
    pub fn list_shots(&self) -> Result<Vec<u32>> {
        let entries = std::fs::read_dir(&self.settings.datadir)
            .with_context(|| format!("failed listing {}", self.settings.datadir.display()))?;

        let mut shots = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(shot) = entry.file_name().to_str().and_then(|n| n.parse::<u32>().ok()) {
                shots.push(shot);
            }
        }
        shots.sort_unstable();
        Ok(shots)
    }
}
