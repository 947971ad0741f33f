// src/recent.rs - Most-recently-used file list

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence;

pub const MAX_RECENT_FILES: usize = 5;

/// Up to [`MAX_RECENT_FILES`] distinct paths, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentFiles {
    #[serde(default)]
    files: Vec<PathBuf>,
}

impl RecentFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `path` to the front, dropping the oldest entry past the limit.
    pub fn add(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.files.retain(|p| *p != path);
        self.files.insert(0, path);
        self.files.truncate(MAX_RECENT_FILES);
    }

    pub fn list(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.files.get(index).map(PathBuf::as_path)
    }

    /// Forget an entry that no longer exists on disk. Returns whether it was listed.
    pub fn remove_stale(&mut self, path: &Path) -> bool {
        let before = self.files.len();
        self.files.retain(|p| p != path);
        self.files.len() != before
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Read the list from `path`. Missing or malformed files give an empty list.
    pub fn load(path: &Path) -> Self {
        let text = match persistence::load(path) {
            Ok(text) => text,
            Err(e) => {
                if path.exists() {
                    warn!("ignoring unreadable recent files list: {e}");
                }
                return Self::new();
            }
        };

        match toml::from_str::<RecentFiles>(&text) {
            Ok(loaded) => {
                // Re-add oldest first so hand-edited files are deduplicated and bounded.
                let mut recent = Self::new();
                for file in loaded.files.into_iter().rev() {
                    recent.add(file);
                }
                recent
            }
            Err(e) => {
                warn!("ignoring malformed recent files list {}: {e}", path.display());
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string(self)?;
        persistence::save(path, &text)
    }
}
